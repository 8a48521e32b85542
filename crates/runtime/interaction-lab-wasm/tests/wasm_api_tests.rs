#![cfg(target_arch = "wasm32")]
use interaction_lab_wasm::{InteractionLab, LabPreview};
use js_sys::Function;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use serde_json::json;
use serde_wasm_bindgen as swb;

wasm_bindgen_test_configure!(run_in_browser);

fn resolver_returning_zero() -> Function {
    // every selector resolves to element handle 0
    Function::new_with_args("selector", "return [0];")
}

fn resolver_returning_nothing() -> Function {
    Function::new_with_args("selector", "return null;")
}

#[wasm_bindgen_test]
fn construct_with_defaults() {
    let lab = InteractionLab::new(JsValue::UNDEFINED);
    assert!(lab.is_ok());
}

#[wasm_bindgen_test]
fn version_is_semver_like() {
    assert!(InteractionLab::version().contains('.'));
}

#[wasm_bindgen_test]
fn init_plays_immediate_entries() {
    let mut lab = InteractionLab::new(JsValue::NULL).unwrap();
    let entries = swb::to_value(&json!({
        "interactions": [{
            "id": "t",
            "preset": "fade",
            "target": ".is-fade",
            "trigger": { "type": "immediate" },
            "vars": { "duration": 600 }
        }]
    }))
    .unwrap();

    let out = lab.init(entries, resolver_returning_zero()).unwrap();
    let out: serde_json::Value = swb::from_value(out).unwrap();
    let ops = out.get("ops").and_then(|v| v.as_array()).unwrap();
    assert!(!ops.is_empty());
}

#[wasm_bindgen_test]
fn init_reports_missing_targets() {
    let mut lab = InteractionLab::new(JsValue::NULL).unwrap();
    let entries = swb::to_value(&json!([{ "preset": "fade" }])).unwrap();
    let out = lab.init(entries, resolver_returning_nothing()).unwrap();
    let out: serde_json::Value = swb::from_value(out).unwrap();
    let events = out.get("events").and_then(|v| v.as_array()).unwrap();
    assert!(!events.is_empty());
}

#[wasm_bindgen_test]
fn preview_startup_announces_ready() {
    let mut preview = LabPreview::new("rotate", JsValue::UNDEFINED).unwrap();
    let turn = preview.startup(resolver_returning_zero()).unwrap();
    let turn: serde_json::Value = swb::from_value(turn).unwrap();
    let outbound = turn.get("outbound").and_then(|v| v.as_array()).unwrap();
    assert!(outbound
        .iter()
        .any(|m| m.get("type").and_then(|t| t.as_str()) == Some("ready")));
}

#[wasm_bindgen_test]
fn preview_rejects_unknown_presets() {
    assert!(LabPreview::new("sparkle", JsValue::UNDEFINED).is_err());
}
