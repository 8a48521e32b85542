use interaction_lab_catalog::{builtin, parse_menu_json, MenuIndex};

#[test]
fn flatten_keeps_menu_order_with_group_context() {
    let root = builtin();
    let demo = root.interaction_lab.section("demo").expect("demo section");
    let flat = demo.flatten();

    assert_eq!(flat[0].id, "fade");
    assert_eq!(flat[0].group_id, "basics");
    assert_eq!(flat[0].group_title, "Basics");

    // groups stay contiguous and ordered
    let group_ids: Vec<&str> = flat.iter().map(|f| f.group_id.as_str()).collect();
    let mut deduped = group_ids.clone();
    deduped.dedup();
    assert_eq!(
        deduped,
        vec!["basics", "scroll", "ui", "textAnimation", "svg", "physics"]
    );
}

#[test]
fn breadcrumbs_walk_section_group_item() {
    let root = builtin();
    let trail = root
        .interaction_lab
        .breadcrumb("patterns", "typewriter")
        .expect("known item");
    let ids: Vec<&str> = trail.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["patterns", "textAnimation", "typewriter"]);

    assert!(root.interaction_lab.breadcrumb("patterns", "nope").is_none());
    assert!(root.interaction_lab.breadcrumb("nope", "fade").is_none());
}

#[test]
fn index_resolves_every_leaf() {
    let root = builtin();
    let index = MenuIndex::build(&root.interaction_lab);
    assert!(!index.is_empty());

    let trail = index.resolve("demo", "scrollReveal").expect("indexed");
    assert_eq!(trail.last().map(|c| c.id.as_str()), Some("scrollReveal"));
    assert!(index.resolve("demo", "smoothScroll").is_none());
}

#[test]
fn menu_round_trips_through_json() {
    let root = builtin();
    let raw = serde_json::to_string(&root).expect("serialize");
    assert!(raw.contains("\"interactionLab\""));
    let parsed = parse_menu_json(&raw).expect("parse");
    assert_eq!(parsed, root);
}

/// nested items keep resolving one level down
#[test]
fn nested_items_resolve_in_breadcrumbs() {
    let raw = r#"{
      "interactionLab": {
        "title": "Interaction Lab",
        "depth2": [{
          "id": "patterns",
          "title": "Patterns",
          "groups": [{
            "id": "scroll",
            "title": "Scroll",
            "items": [{
              "id": "scrollReveal",
              "title": "Scroll Reveal",
              "items": [{ "id": "staggered", "title": "Staggered" }]
            }]
          }]
        }]
      }
    }"#;
    let root = parse_menu_json(raw).expect("parse");
    let trail = root
        .interaction_lab
        .breadcrumb("patterns", "staggered")
        .expect("nested item");
    let ids: Vec<&str> = trail.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["patterns", "scroll", "scrollReveal", "staggered"]
    );

    // flatten only reports leaves
    let flat = root.interaction_lab.depth2[0].flatten();
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].id, "staggered");
}
