use js_sys::{Function, JSON};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use interaction_lab_core::{
    parse_embed_json, FrameEndpoint, HostEvent, PresetKind, Runtime, RuntimeConfig, TargetId,
    TargetResolver,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

struct JsResolver {
    f: Function,
}

impl TargetResolver for JsResolver {
    fn resolve(&mut self, selector: &str) -> Vec<TargetId> {
        // Call JS resolver(selector) - expect a number handle, an array of
        // number handles, or null/undefined for no match.
        let arg = JsValue::from_str(selector);
        match self.f.call1(&JsValue::UNDEFINED, &arg) {
            Ok(val) => {
                if val.is_undefined() || val.is_null() {
                    return Vec::new();
                }
                if let Some(n) = val.as_f64() {
                    return vec![TargetId(n as u32)];
                }
                if js_sys::Array::is_array(&val) {
                    return js_sys::Array::from(&val)
                        .iter()
                        .filter_map(|v| v.as_f64())
                        .map(|n| TargetId(n as u32))
                        .collect();
                }
                Vec::new()
            }
            Err(_) => Vec::new(),
        }
    }
}

fn parse_runtime_config(config: JsValue) -> Result<RuntimeConfig, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        Ok(RuntimeConfig::default())
    } else {
        swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

/// The host-page runtime: interprets embedded interaction entries and drives
/// the document through resolver callbacks and host ops.
#[wasm_bindgen]
pub struct InteractionLab {
    core: Runtime,
}

#[wasm_bindgen]
impl InteractionLab {
    /// Create a new runtime. Pass a JSON config object or undefined/null for
    /// defaults. Example:
    ///   new InteractionLab({ capabilities: { intersection_observer: false } })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<InteractionLab, JsError> {
        console_error_panic_hook::set_once();
        Ok(InteractionLab {
            core: Runtime::new(parse_runtime_config(config)?),
        })
    }

    /// Runtime version string.
    pub fn version() -> String {
        Runtime::version().to_string()
    }

    /// Set up entries from an embed document (wrapped object, bare array, or
    /// single entry). The resolver is called as
    /// `resolver(selector: string) -> number | number[] | null/undefined`.
    /// Returns Outputs JSON.
    pub fn init(&mut self, entries: JsValue, resolver: Function) -> Result<JsValue, JsError> {
        if jsvalue_is_undefined_or_null(&entries) {
            return Err(JsError::new("init: entries is null/undefined"));
        }
        // Stringify the JS value so we can reuse the core embed parser
        let s = JSON::stringify(&entries)
            .map_err(|e| JsError::new(&format!("init stringify error: {e:?}")))?
            .as_string()
            .ok_or_else(|| JsError::new("init: stringify produced non-string"))?;
        let parsed = parse_embed_json(&s)
            .map_err(|e| JsError::new(&format!("init parse error: {e}")))?;

        let mut js_resolver = JsResolver { f: resolver };
        let out = self.core.init(&parsed, &mut js_resolver);
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Feed one host event (intersection, click, scroll, animation end).
    /// Returns Outputs JSON.
    pub fn handle_event(&mut self, event: JsValue) -> Result<JsValue, JsError> {
        let ev: HostEvent =
            swb::from_value(event).map_err(|e| JsError::new(&format!("event error: {e}")))?;
        let out = self.core.handle_event(ev);
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    /// Tear everything down. Returns the cleanup Outputs JSON.
    pub fn detach_all(&mut self) -> Result<JsValue, JsError> {
        let out = self.core.detach_all();
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }
}

/// The preview-frame endpoint for a single demo: applies config updates from
/// the hosting page and reports readiness/errors back.
#[wasm_bindgen]
pub struct LabPreview {
    core: FrameEndpoint,
}

#[wasm_bindgen]
impl LabPreview {
    /// `demo_id` must be a known preset id (fade, scale, rotate).
    #[wasm_bindgen(constructor)]
    pub fn new(demo_id: &str, config: JsValue) -> Result<LabPreview, JsError> {
        console_error_panic_hook::set_once();
        let preset = PresetKind::from_id(demo_id)
            .ok_or_else(|| JsError::new(&format!("unsupported preset: {demo_id}")))?;
        Ok(LabPreview {
            core: FrameEndpoint::new(preset, parse_runtime_config(config)?),
        })
    }

    /// Apply the default config and announce readiness. Returns a FrameTurn
    /// JSON: `{ outputs, outbound }` where outbound holds messages to post
    /// to the parent.
    pub fn startup(&mut self, resolver: Function) -> Result<JsValue, JsError> {
        let mut js_resolver = JsResolver { f: resolver };
        let turn = self.core.startup(&mut js_resolver);
        swb::to_value(&turn).map_err(|e| JsError::new(&format!("turn error: {e}")))
    }

    /// Process a message received from the parent window. Unknown messages
    /// produce an empty turn.
    pub fn on_message(&mut self, message: JsValue, resolver: Function) -> Result<JsValue, JsError> {
        let s = JSON::stringify(&message)
            .map_err(|e| JsError::new(&format!("on_message stringify error: {e:?}")))?
            .as_string()
            .unwrap_or_default();
        let mut js_resolver = JsResolver { f: resolver };
        let turn = self.core.on_message(&s, &mut js_resolver);
        swb::to_value(&turn).map_err(|e| JsError::new(&format!("turn error: {e}")))
    }

    /// The replay button: re-apply the last config and play once.
    pub fn replay(&mut self) -> Result<JsValue, JsError> {
        let out = self.core.replay();
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }

    pub fn handle_event(&mut self, event: JsValue) -> Result<JsValue, JsError> {
        let ev: HostEvent =
            swb::from_value(event).map_err(|e| JsError::new(&format!("event error: {e}")))?;
        let out = self.core.handle_event(ev);
        swb::to_value(&out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }
}
