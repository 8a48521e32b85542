//! Export snippets: render configured entries into the embeddable formats
//! the docs pages offer for copying.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use interaction_lab_core::InteractionEntry;

pub const RUNTIME_SRC: &str = "/assets/js/interaction-lab.runtime.js";
pub const CONFIG_SRC: &str = "/assets/js/interaction.js";
pub const COMMON_SRC: &str = "/assets/js/common.js";

fn pretty_json(entries: &[InteractionEntry], indent: &str) -> String {
    let mut buf = Vec::new();
    let fmt = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    if entries.serialize(&mut ser).is_err() {
        return "[]".to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| "[]".to_string())
}

/// Neutralize `</script>` inside embedded JSON so an HTML parser cannot
/// close the surrounding tag early. `<\/script>` stays valid JSON.
fn escape_script_close(json: &str) -> String {
    let bytes = json.as_bytes();
    let needle = b"</script>";
    let mut out = String::with_capacity(json.len());
    let mut i = 0;
    while i < bytes.len() {
        if i + needle.len() <= bytes.len() && bytes[i..i + needle.len()].eq_ignore_ascii_case(needle)
        {
            out.push_str("<\\/");
            out.push_str(std::str::from_utf8(&bytes[i + 2..i + needle.len()]).unwrap_or("script>"));
            i += needle.len();
        } else {
            // json is valid UTF-8; walk one full character
            let ch_len = json[i..].chars().next().map(char::len_utf8).unwrap_or(1);
            out.push_str(&json[i..i + ch_len]);
            i += ch_len;
        }
    }
    out
}

/// The recommended embed: runtime script tag plus a JSON block that
/// auto-runs.
pub fn render_embed_html(entries: &[InteractionEntry]) -> String {
    let safe = escape_script_close(&pretty_json(entries, "  "));
    format!(
        "<!-- 1) runtime (required) -->\n\
         <script src=\"{RUNTIME_SRC}\" defer></script>\n\
         \n\
         <!-- 2) JSON config (required): a JSON block alone auto-runs -->\n\
         <script type=\"application/json\" data-interaction-lab>\n\
         {safe}\n\
         </script>\n"
    )
}

/// A standalone config file: settings live here, the runtime executes them.
pub fn render_config_js(entries: &[InteractionEntry]) -> String {
    let json = pretty_json(entries, "    ");
    format!(
        "// assets/js/interaction.js\n\
         // - Manage interaction settings in this file.\n\
         // - The execution engine is interaction-lab.runtime.js.\n\
         \n\
         (() => {{\n\
        \x20 const interactions = {json};\n\
         \n\
        \x20 if (!window.InteractionLab || typeof window.InteractionLab.init !== \"function\") {{\n\
        \x20   console.warn(\"[interaction.js] InteractionLab runtime not found. Check that interaction-lab.runtime.js is loaded.\");\n\
        \x20   return;\n\
        \x20 }}\n\
         \n\
        \x20 window.InteractionLab.init(interactions);\n\
         }})();\n"
    )
}

/// Script-tag loading order for the classic two-file setup.
pub fn render_script_tags() -> String {
    format!(
        "<!-- example: add to the common.js / main.js flow -->\n\
         <script src=\"{COMMON_SRC}\" defer></script>\n\
         <script src=\"{RUNTIME_SRC}\" defer></script>\n\
         <script src=\"{CONFIG_SRC}\" defer></script>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry_with_vars(vars: serde_json::Value) -> InteractionEntry {
        InteractionEntry {
            id: "lab-fade".to_string(),
            preset: "fade".to_string(),
            target: ".is-fade".to_string(),
            trigger: json!({ "type": "immediate" }),
            vars,
        }
    }

    #[test]
    fn embed_html_contains_runtime_and_json_block() {
        let html = render_embed_html(&[entry_with_vars(json!({ "duration": 600 }))]);
        assert!(html.contains(RUNTIME_SRC));
        assert!(html.contains("data-interaction-lab"));
        assert!(html.contains("\"duration\": 600"));
    }

    #[test]
    fn embed_html_neutralizes_script_close() {
        let html = render_embed_html(&[entry_with_vars(json!({
            "easing": "</SCRIPT><b>pwned</b>"
        }))]);
        assert!(!html.to_ascii_lowercase().contains("</script><b>"));
        assert!(html.contains("<\\/SCRIPT>") || html.contains("<\\/script>"));
    }

    #[test]
    fn config_js_wraps_entries() {
        let js = render_config_js(&[entry_with_vars(json!({ "duration": 600 }))]);
        assert!(js.starts_with("// assets/js/interaction.js"));
        assert!(js.contains("window.InteractionLab.init(interactions);"));
    }
}
