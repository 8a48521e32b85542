#![allow(dead_code)]
//! Per-preset configuration records and their normalization.
//!
//! Normalization is total: any JSON input produces a fully-populated config,
//! with defaults for missing/invalid fields and numeric fields clamped to
//! their valid range. Unknown fields are ignored. Normalizing an already
//! normalized config yields the same config.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::easing::DEFAULT_EASING;
use crate::preset::PresetKind;

pub const DURATION_MAX_MS: f64 = 8000.0;
pub const DISTANCE_MAX_PX: f64 = 400.0;
pub const FROM_SCALE_MIN: f64 = 0.05;
pub const FROM_SCALE_MAX: f64 = 3.0;
pub const FROM_DEG_MAX: f64 = 720.0;
pub const PLAY_COUNT_MAX: u32 = 99;

/// Numeric coercion with JS `Number()` semantics: numbers pass through,
/// numeric strings parse, everything else is rejected.
fn as_num(v: &Json) -> Option<f64> {
    match v {
        Json::Number(n) => n.as_f64(),
        Json::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn num_field(raw: &Json, key: &str, default: f64, min: f64, max: f64) -> f64 {
    let v = raw
        .get(key)
        .and_then(as_num)
        .filter(|v| v.is_finite())
        .unwrap_or(default);
    v.clamp(min, max)
}

fn easing_field(raw: &Json) -> String {
    match raw.get("easing").and_then(Json::as_str) {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => DEFAULT_EASING.to_string(),
    }
}

/// How many times the sequencer replays an animation: a bounded count or the
/// `"infinite"` sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayCount {
    Count(u32),
    Infinite,
}

impl PlayCount {
    pub fn from_json(v: Option<&Json>) -> Self {
        let Some(v) = v else {
            return PlayCount::Count(1);
        };
        if let Json::String(s) = v {
            if s.trim().eq_ignore_ascii_case("infinite") {
                return PlayCount::Infinite;
            }
        }
        match as_num(v).map(f64::floor) {
            Some(n) if n.is_finite() && n >= 1.0 && n <= PLAY_COUNT_MAX as f64 => {
                PlayCount::Count(n as u32)
            }
            _ => PlayCount::Count(1),
        }
    }

    /// Reads `playCount`, falling back to the legacy `iterations` field.
    pub fn from_vars(raw: &Json) -> Self {
        let v = raw
            .get("playCount")
            .filter(|v| !v.is_null())
            .or_else(|| raw.get("iterations"));
        Self::from_json(v)
    }

    /// Value written to `--lab-play-count`.
    pub fn css_value(&self) -> String {
        match self {
            PlayCount::Count(n) => n.to_string(),
            PlayCount::Infinite => "infinite".to_string(),
        }
    }
}

impl Default for PlayCount {
    fn default() -> Self {
        PlayCount::Count(1)
    }
}

impl Serialize for PlayCount {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            PlayCount::Count(n) => s.serialize_u32(*n),
            PlayCount::Infinite => s.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for PlayCount {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let v = Json::deserialize(d)?;
        Ok(PlayCount::from_json(Some(&v)))
    }
}

/// Travel direction for the fade preset's entrance offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FadeDirection {
    Left,
    Right,
    Top,
    #[default]
    Bottom,
}

impl FadeDirection {
    fn from_json(v: Option<&Json>) -> Self {
        match v.and_then(Json::as_str) {
            Some("left") => FadeDirection::Left,
            Some("right") => FadeDirection::Right,
            Some("top") => FadeDirection::Top,
            _ => FadeDirection::Bottom,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FadeConfig {
    pub direction: FadeDirection,
    pub duration: f64,
    pub delay: f64,
    pub play_count: PlayCount,
    pub easing: String,
    pub distance: f64,
    pub opacity: f64,
}

impl FadeConfig {
    pub fn from_raw(raw: &Json) -> Self {
        Self {
            direction: FadeDirection::from_json(raw.get("direction")),
            duration: num_field(raw, "duration", 0.0, 0.0, DURATION_MAX_MS),
            delay: num_field(raw, "delay", 0.0, 0.0, DURATION_MAX_MS),
            play_count: PlayCount::from_vars(raw),
            easing: easing_field(raw),
            distance: num_field(raw, "distance", 0.0, 0.0, DISTANCE_MAX_PX).abs(),
            opacity: num_field(raw, "opacity", 0.0, 0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleConfig {
    pub duration: f64,
    pub delay: f64,
    pub play_count: PlayCount,
    pub easing: String,
    pub from_scale: f64,
    pub opacity: f64,
}

impl ScaleConfig {
    pub fn from_raw(raw: &Json) -> Self {
        Self {
            duration: num_field(raw, "duration", 0.0, 0.0, DURATION_MAX_MS),
            delay: num_field(raw, "delay", 0.0, 0.0, DURATION_MAX_MS),
            play_count: PlayCount::from_vars(raw),
            easing: easing_field(raw),
            from_scale: num_field(raw, "fromScale", 0.9, FROM_SCALE_MIN, FROM_SCALE_MAX),
            opacity: num_field(raw, "opacity", 0.0, 0.0, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotateConfig {
    pub duration: f64,
    pub delay: f64,
    pub play_count: PlayCount,
    pub easing: String,
    pub from_deg: f64,
    pub opacity: f64,
}

impl RotateConfig {
    pub fn from_raw(raw: &Json) -> Self {
        Self {
            duration: num_field(raw, "duration", 0.0, 0.0, DURATION_MAX_MS),
            delay: num_field(raw, "delay", 0.0, 0.0, DURATION_MAX_MS),
            play_count: PlayCount::from_vars(raw),
            easing: easing_field(raw),
            from_deg: num_field(raw, "fromDeg", 0.0, -FROM_DEG_MAX, FROM_DEG_MAX),
            opacity: num_field(raw, "opacity", 0.0, 0.0, 1.0),
        }
    }
}

/// Normalized configuration for one preset.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PresetConfig {
    Fade(FadeConfig),
    Scale(ScaleConfig),
    Rotate(RotateConfig),
}

impl PresetConfig {
    pub fn from_raw(kind: PresetKind, raw: &Json) -> Self {
        match kind {
            PresetKind::Fade => PresetConfig::Fade(FadeConfig::from_raw(raw)),
            PresetKind::Scale => PresetConfig::Scale(ScaleConfig::from_raw(raw)),
            PresetKind::Rotate => PresetConfig::Rotate(RotateConfig::from_raw(raw)),
        }
    }

    pub fn kind(&self) -> PresetKind {
        match self {
            PresetConfig::Fade(_) => PresetKind::Fade,
            PresetConfig::Scale(_) => PresetKind::Scale,
            PresetConfig::Rotate(_) => PresetKind::Rotate,
        }
    }

    pub fn play_count(&self) -> PlayCount {
        match self {
            PresetConfig::Fade(c) => c.play_count,
            PresetConfig::Scale(c) => c.play_count,
            PresetConfig::Rotate(c) => c.play_count,
        }
    }

    pub fn easing(&self) -> &str {
        match self {
            PresetConfig::Fade(c) => &c.easing,
            PresetConfig::Scale(c) => &c.easing,
            PresetConfig::Rotate(c) => &c.easing,
        }
    }

    /// Canonical JSON form; feeding this back through `from_raw` is the
    /// identity (the idempotence contract).
    pub fn to_raw(&self) -> Json {
        serde_json::to_value(self).unwrap_or(Json::Null)
    }
}

/// Configuration for runtime sizing and host capabilities.
/// Keep this minimal in v1; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Maximum events to retain per update before backpressure policy applies.
    #[serde(default = "default_max_events")]
    pub max_events_per_update: usize,
    /// What the host environment supports; drives trigger degradation.
    #[serde(default)]
    pub capabilities: Capabilities,
}

fn default_max_events() -> usize {
    1024
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Capabilities {
    /// Host supports viewport-intersection observation.
    #[serde(default = "default_true")]
    pub intersection_observer: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            intersection_observer: true,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_events_per_update: default_max_events(),
            capabilities: Capabilities::default(),
        }
    }
}
