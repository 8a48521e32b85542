#![allow(dead_code)]
//! Trigger descriptors: when an interaction starts playing.
//!
//! A trigger is normalized from loose JSON the same way preset configs are:
//! unknown `type` values fall back to `immediate`, missing fields take their
//! defaults, and the result is stable under re-normalization.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -10% 0px";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    #[default]
    Immediate,
    Scroll,
    Click,
}

/// Scroll direction filter for scroll triggers. `Both` accepts any direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    #[default]
    Both,
    Down,
    Up,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSpec {
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    pub once: bool,
    pub threshold: f64,
    pub root_margin: String,
    pub scroll_direction: ScrollDirection,
    /// Click triggers: listen on this element instead of the animation target.
    pub selector: String,
}

impl TriggerSpec {
    pub fn from_raw(raw: &Json) -> Self {
        let trigger_type = match raw.get("type").and_then(Json::as_str) {
            Some("scroll") => TriggerType::Scroll,
            Some("click") => TriggerType::Click,
            _ => TriggerType::Immediate,
        };
        let scroll_direction = match raw.get("scrollDirection").and_then(Json::as_str) {
            Some("down") => ScrollDirection::Down,
            Some("up") => ScrollDirection::Up,
            _ => ScrollDirection::Both,
        };
        Self {
            trigger_type,
            // once unless explicitly false
            once: raw.get("once").and_then(Json::as_bool) != Some(false),
            threshold: raw
                .get("threshold")
                .and_then(Json::as_f64)
                .filter(|v| v.is_finite())
                .unwrap_or(DEFAULT_THRESHOLD),
            root_margin: raw
                .get("rootMargin")
                .and_then(Json::as_str)
                .unwrap_or(DEFAULT_ROOT_MARGIN)
                .to_string(),
            scroll_direction,
            selector: raw
                .get("selector")
                .and_then(Json::as_str)
                .unwrap_or("")
                .to_string(),
        }
    }
}

impl Default for TriggerSpec {
    fn default() -> Self {
        Self::from_raw(&Json::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_type_falls_back_to_immediate() {
        let spec = TriggerSpec::from_raw(&json!({ "type": "hover" }));
        assert_eq!(spec.trigger_type, TriggerType::Immediate);
    }

    #[test]
    fn once_defaults_true_unless_explicit_false() {
        assert!(TriggerSpec::from_raw(&json!({})).once);
        assert!(TriggerSpec::from_raw(&json!({ "once": 0 })).once);
        assert!(!TriggerSpec::from_raw(&json!({ "once": false })).once);
    }

    #[test]
    fn renormalization_is_identity() {
        let spec = TriggerSpec::from_raw(&json!({
            "type": "scroll",
            "once": false,
            "threshold": 0.5,
            "rootMargin": "0px",
            "scrollDirection": "down"
        }));
        let raw = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(TriggerSpec::from_raw(&raw), spec);
    }
}
