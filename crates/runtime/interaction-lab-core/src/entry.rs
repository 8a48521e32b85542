//! Interaction entries and the declarative embed format.
//!
//! An embed document is accepted in three shapes: `{ "interactions": [...] }`,
//! a bare array, or a single entry object. Entries keep their raw `trigger`
//! and `vars` JSON; normalization happens when the runtime attaches them.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::config::PresetConfig;
use crate::error::LabError;
use crate::preset::PresetKind;
use crate::trigger::TriggerSpec;

/// One configured instance of a preset bound to a target and trigger.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub preset: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub trigger: Json,
    #[serde(default)]
    pub vars: Json,
}

/// Fully-normalized view of an entry, ready for the runtime.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NormalizedEntry {
    pub id: String,
    pub preset: PresetKind,
    pub target: String,
    pub trigger: TriggerSpec,
    pub config: PresetConfig,
}

impl InteractionEntry {
    /// Normalize trigger and vars; fails only on an unknown preset id.
    pub fn normalized(&self) -> Result<NormalizedEntry, LabError> {
        let preset = PresetKind::from_id(&self.preset)
            .ok_or_else(|| LabError::UnsupportedPreset(self.preset.trim().to_string()))?;
        let target = if self.target.trim().is_empty() {
            preset.default_target_selector()
        } else {
            self.target.trim().to_string()
        };
        Ok(NormalizedEntry {
            id: self.id.clone(),
            preset,
            target,
            trigger: TriggerSpec::from_raw(&self.trigger),
            config: PresetConfig::from_raw(preset, &self.vars),
        })
    }

    /// Build the entry a demo page exports: `trigger` is split out of the
    /// flat config object, everything else becomes `vars`.
    pub fn from_demo_config(preset: PresetKind, raw: &Json) -> Result<Self, LabError> {
        let mut vars = match raw {
            Json::Object(map) => Json::Object(map.clone()),
            Json::Null => Json::Object(serde_json::Map::new()),
            other => {
                return Err(LabError::MalformedPayload(format!(
                    "config must be an object, got {other}"
                )))
            }
        };
        let trigger = vars
            .as_object_mut()
            .and_then(|map| map.remove("trigger"))
            .unwrap_or(Json::Null);
        Ok(Self {
            id: format!("lab-{}", preset.id()),
            preset: preset.id().to_string(),
            target: preset.default_target_selector(),
            trigger,
            vars,
        })
    }
}

// ----- embed document (serde) -----

// Put more specific shapes BEFORE less specific to avoid untagged matching
// pitfalls: a bare entry object would also match `One`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmbedDocument {
    Wrapped { interactions: Vec<InteractionEntry> },
    Many(Vec<InteractionEntry>),
    One(InteractionEntry),
}

/// Parse an embed document into its entries.
pub fn parse_embed_json(s: &str) -> Result<Vec<InteractionEntry>, LabError> {
    let doc: EmbedDocument = serde_json::from_str(s)?;
    Ok(match doc {
        EmbedDocument::Wrapped { interactions } => interactions,
        EmbedDocument::Many(entries) => entries,
        EmbedDocument::One(entry) => vec![entry],
    })
}

/// Serialize entries back to the wrapped embed shape.
pub fn to_embed_json(entries: &[InteractionEntry]) -> Result<String, LabError> {
    let doc = serde_json::json!({ "interactions": entries });
    Ok(serde_json::to_string_pretty(&doc)?)
}
