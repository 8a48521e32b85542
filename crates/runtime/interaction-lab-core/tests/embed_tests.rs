use interaction_lab_core::{
    config::{PlayCount, PresetConfig},
    entry::{parse_embed_json, to_embed_json, InteractionEntry},
    preset::PresetKind,
    trigger::TriggerType,
};
use interaction_lab_fixtures as fixtures;
use serde_json::json;

#[test]
fn wrapped_embed_parses() {
    let raw = fixtures::embeds::json("wrapped").expect("fixture");
    let entries = parse_embed_json(&raw).expect("parse");
    assert_eq!(entries.len(), 1);
    let n = entries[0].normalized().expect("normalize");
    assert_eq!(n.preset, PresetKind::Scale);
    assert_eq!(n.trigger.trigger_type, TriggerType::Scroll);
    assert!(n.trigger.once);
    match &n.config {
        PresetConfig::Scale(c) => {
            assert_eq!(c.duration, 900.0);
            assert_eq!(c.from_scale, 0.9);
            assert_eq!(c.easing, "ease-out");
        }
        other => panic!("expected scale config, got {other:?}"),
    }
}

#[test]
fn bare_and_single_embeds_parse_to_the_same_entry() {
    let bare = parse_embed_json(&fixtures::embeds::json("bare").expect("fixture")).expect("parse");
    let single =
        parse_embed_json(&fixtures::embeds::json("single").expect("fixture")).expect("parse");
    assert_eq!(bare.len(), 2);
    assert_eq!(single.len(), 1);
    assert_eq!(bare[0], single[0]);

    let rotate = bare[1].normalized().expect("normalize");
    assert_eq!(rotate.preset, PresetKind::Rotate);
    assert_eq!(rotate.target, ".badge");
    assert_eq!(rotate.config.play_count(), PlayCount::Count(2));
}

/// entry → embed JSON → parsed back → same normalized entry
#[test]
fn embed_round_trip_preserves_normalization() {
    let entry = InteractionEntry {
        id: "lab-fade".to_string(),
        preset: "fade".to_string(),
        target: String::new(), // defaults to .is-fade
        trigger: json!({ "type": "scroll", "once": false, "scrollDirection": "up" }),
        vars: json!({ "duration": 9000, "distance": 16, "playCount": "infinite" }),
    };
    let before = entry.normalized().expect("normalize");
    assert_eq!(before.target, ".is-fade");

    let embedded = to_embed_json(&[entry]).expect("serialize");
    let parsed = parse_embed_json(&embedded).expect("parse");
    assert_eq!(parsed.len(), 1);
    let after = parsed[0].normalized().expect("normalize");
    assert_eq!(after, before);
}

/// the demo page folds the trigger into a flat config; entry construction
/// splits it back out
#[test]
fn demo_config_fixture_builds_an_entry() {
    let raw: serde_json::Value = fixtures::configs::load("rotate-default").expect("fixture");
    let entry = InteractionEntry::from_demo_config(PresetKind::Rotate, &raw).expect("build");
    assert_eq!(entry.id, "lab-rotate");
    assert_eq!(entry.target, ".is-rotate");

    let n = entry.normalized().expect("normalize");
    assert_eq!(n.trigger.trigger_type, TriggerType::Immediate);
    match &n.config {
        PresetConfig::Rotate(c) => assert_eq!(c.from_deg, -24.0),
        other => panic!("expected rotate config, got {other:?}"),
    }
    // the folded trigger does not leak into vars
    assert!(entry.vars.get("trigger").is_none());
}
