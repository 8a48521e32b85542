//! Content catalog for the Interaction Lab viewer.
//!
//! Holds the sections → groups → items menu tree behind the navigation and
//! breadcrumb UI, plus the export-snippet rendering for configured entries.
//! The runtime core only ever resolves preset identifier strings out of this
//! data.

pub mod export;
pub mod menu;

pub use export::{render_config_js, render_embed_html, render_script_tags};
pub use menu::{
    builtin, is_implemented, parse_menu_json, preset_for, Crumb, FlatItem, MenuGroup, MenuIndex,
    MenuItem, MenuRoot, MenuSection, MenuTree, IMPLEMENTED_DEMO_IDS,
};
