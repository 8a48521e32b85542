//! The catalog menu tree: sections → groups → items, optionally nested.
//!
//! The viewer reads this structure to render the side navigation and
//! breadcrumbs; the runtime only ever resolves a preset id out of it.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use interaction_lab_core::PresetKind;

/// Demo items that ship with a working preview.
pub const IMPLEMENTED_DEMO_IDS: &[&str] = &["fade", "scale", "rotate"];

pub fn is_implemented(item_id: &str) -> bool {
    IMPLEMENTED_DEMO_IDS.contains(&item_id)
}

/// Resolve the preset a catalog item maps to, if any.
pub fn preset_for(item_id: &str) -> Option<PresetKind> {
    PresetKind::from_id(item_id)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRoot {
    pub interaction_lab: MenuTree,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuTree {
    pub title: String,
    pub depth2: Vec<MenuSection>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub groups: Vec<MenuGroup>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    /// Items may nest one more level.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItem>,
}

/// One entry of a flattened section, carrying its group context.
#[derive(Clone, Debug, PartialEq)]
pub struct FlatItem {
    pub group_id: String,
    pub group_title: String,
    pub id: String,
    pub title: String,
}

/// One step of a breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Crumb {
    pub id: String,
    pub title: String,
}

impl MenuTree {
    pub fn section(&self, id: &str) -> Option<&MenuSection> {
        self.depth2.iter().find(|s| s.id == id)
    }

    /// Breadcrumb trail section → group → item (→ nested item), or None when
    /// the id is unknown within the section.
    pub fn breadcrumb(&self, section_id: &str, item_id: &str) -> Option<Vec<Crumb>> {
        let section = self.section(section_id)?;
        for group in &section.groups {
            let mut trail = vec![
                Crumb {
                    id: section.id.clone(),
                    title: section.title.clone(),
                },
                Crumb {
                    id: group.id.clone(),
                    title: group.title.clone(),
                },
            ];
            if find_trail(&group.items, item_id, &mut trail) {
                return Some(trail);
            }
        }
        None
    }
}

fn find_trail(items: &[MenuItem], id: &str, trail: &mut Vec<Crumb>) -> bool {
    for item in items {
        trail.push(Crumb {
            id: item.id.clone(),
            title: item.title.clone(),
        });
        if item.id == id || find_trail(&item.items, id, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

impl MenuSection {
    /// All leaf items with their group context, in menu order.
    pub fn flatten(&self) -> Vec<FlatItem> {
        let mut list = Vec::new();
        for group in &self.groups {
            flatten_items(&group.items, group, &mut list);
        }
        list
    }
}

fn flatten_items(items: &[MenuItem], group: &MenuGroup, list: &mut Vec<FlatItem>) {
    for item in items {
        if item.items.is_empty() {
            list.push(FlatItem {
                group_id: group.id.clone(),
                group_title: group.title.clone(),
                id: item.id.clone(),
                title: item.title.clone(),
            });
        } else {
            flatten_items(&item.items, group, list);
        }
    }
}

/// Lookup index over a tree, keyed by (section id, item id).
#[derive(Debug, Default)]
pub struct MenuIndex {
    paths: HashMap<(String, String), Vec<Crumb>>,
}

impl MenuIndex {
    pub fn build(tree: &MenuTree) -> Self {
        let mut paths = HashMap::new();
        for section in &tree.depth2 {
            for flat in section.flatten() {
                if let Some(trail) = tree.breadcrumb(&section.id, &flat.id) {
                    paths.insert((section.id.clone(), flat.id.clone()), trail);
                }
            }
        }
        Self { paths }
    }

    pub fn resolve(&self, section_id: &str, item_id: &str) -> Option<&[Crumb]> {
        self.paths
            .get(&(section_id.to_string(), item_id.to_string()))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Parse a menu document in its wrapped JSON shape.
pub fn parse_menu_json(s: &str) -> Result<MenuRoot, serde_json::Error> {
    serde_json::from_str(s)
}

fn item(id: &str, title: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        title: title.to_string(),
        items: Vec::new(),
    }
}

fn group(id: &str, title: &str, items: Vec<MenuItem>) -> MenuGroup {
    MenuGroup {
        id: id.to_string(),
        title: title.to_string(),
        items,
    }
}

fn basics_group() -> MenuGroup {
    group(
        "basics",
        "Basics",
        vec![
            item("fade", "Fade"),
            item("scale", "Scale"),
            item("rotate", "Rotate"),
        ],
    )
}

fn scroll_group(with_smooth_scroll: bool) -> MenuGroup {
    let mut items = vec![
        item("scrollReveal", "Scroll Reveal"),
        item("scrollProgress", "Scroll Progress"),
        item("pinSticky", "Pin / Sticky"),
        item("scrollTo", "Scroll To"),
    ];
    if with_smooth_scroll {
        items.push(item("smoothScroll", "Smooth Scroll (Concept)"));
    }
    group("scroll", "Scroll", items)
}

fn ui_group() -> MenuGroup {
    group(
        "ui",
        "UI",
        vec![
            item("flip", "FLIP"),
            item("draggable", "Draggable"),
            item("observer", "Observer"),
        ],
    )
}

fn text_animation_group() -> MenuGroup {
    group(
        "textAnimation",
        "Text Animation",
        vec![
            item("splitText", "Split Text (Char / Word / Line)"),
            item("typewriter", "Typewriter"),
            item("scrambleText", "Scramble Text"),
            item("maskReveal", "Mask Reveal"),
        ],
    )
}

fn svg_group() -> MenuGroup {
    group(
        "svg",
        "SVG",
        vec![
            item("drawSvg", "Draw SVG"),
            item("morphSvg", "Morph SVG"),
            item("motionPath", "Motion Path"),
        ],
    )
}

fn physics_group() -> MenuGroup {
    group(
        "physics",
        "Physics (Concept Demo)",
        vec![
            item("gravity", "Gravity"),
            item("spring", "Spring"),
            item("bounce", "Bounce"),
        ],
    )
}

/// The built-in catalog the viewer ships with.
pub fn builtin() -> MenuRoot {
    MenuRoot {
        interaction_lab: MenuTree {
            title: "Interaction Lab".to_string(),
            depth2: vec![
                MenuSection {
                    id: "patterns".to_string(),
                    title: "Patterns".to_string(),
                    description: "Docs + export, combined".to_string(),
                    groups: vec![
                        basics_group(),
                        scroll_group(true),
                        ui_group(),
                        text_animation_group(),
                        svg_group(),
                        physics_group(),
                    ],
                },
                MenuSection {
                    id: "demo".to_string(),
                    title: "Demo".to_string(),
                    description: "Lab / iframe preview".to_string(),
                    groups: vec![
                        basics_group(),
                        scroll_group(false),
                        ui_group(),
                        text_animation_group(),
                        svg_group(),
                        physics_group(),
                    ],
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_both_sections() {
        let root = builtin();
        assert!(root.interaction_lab.section("patterns").is_some());
        assert!(root.interaction_lab.section("demo").is_some());
        // smoothScroll exists only on the patterns side
        assert!(root.interaction_lab.breadcrumb("patterns", "smoothScroll").is_some());
        assert!(root.interaction_lab.breadcrumb("demo", "smoothScroll").is_none());
    }

    #[test]
    fn implemented_demos_resolve_to_presets() {
        for id in IMPLEMENTED_DEMO_IDS {
            assert!(is_implemented(id));
            assert!(preset_for(id).is_some());
        }
        assert!(preset_for("scrollReveal").is_none());
    }
}
