//! Cross-frame channel: the message protocol between the hosting page and
//! the isolated preview frame, plus both endpoints.
//!
//! Delivery is fire-and-forget. The host queues the latest configuration
//! while the frame is not yet ready and flushes exactly one queued update on
//! readiness. Unknown or malformed messages are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::config::RuntimeConfig;
use crate::entry::InteractionEntry;
use crate::error::LabError;
use crate::inputs::HostEvent;
use crate::outputs::Outputs;
use crate::preset::PresetKind;
use crate::runtime::{Runtime, TargetResolver};

/// Wire messages, two kinds each direction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum LabMessage {
    /// Host→frame: raw configuration to apply.
    ConfigUpdate(Json),
    /// Frame→host: sent once after initial setup.
    Ready(ReadyPayload),
    /// Frame→host: a caught failure while applying configuration.
    Error(ErrorPayload),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyPayload {
    pub demo_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(default)]
    pub stack: String,
}

/// Parse a wire message; anything unrecognized is None.
pub fn parse_message(raw: &str) -> Option<LabMessage> {
    serde_json::from_str(raw).ok()
}

/// Host side of the channel: tracks frame readiness and queues the latest
/// configuration until the frame announces itself.
#[derive(Debug, Default)]
pub struct HostChannel {
    ready: bool,
    pending: Option<Json>,
    last_error: Option<ErrorPayload>,
}

impl HostChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send or queue a configuration. Returns the outgoing message when the
    /// frame is ready; otherwise the config is queued (latest wins).
    pub fn push_config(&mut self, config: Json) -> Option<LabMessage> {
        if self.ready {
            Some(LabMessage::ConfigUpdate(config))
        } else {
            self.pending = Some(config);
            None
        }
    }

    /// Process a frame→host message. A `ready` flushes at most one queued
    /// update, returned as the outgoing message.
    pub fn on_message(&mut self, message: LabMessage) -> Option<LabMessage> {
        match message {
            LabMessage::Ready(_) => {
                self.ready = true;
                self.last_error = None;
                self.pending.take().map(LabMessage::ConfigUpdate)
            }
            LabMessage::Error(e) => {
                self.last_error = Some(e);
                None
            }
            // the frame never sends configs back
            LabMessage::ConfigUpdate(_) => None,
        }
    }

    /// Frame remount: readiness is lost; a queued config survives for the
    /// next `ready`.
    pub fn reset(&mut self) {
        self.ready = false;
        self.last_error = None;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn last_error(&self) -> Option<&ErrorPayload> {
        self.last_error.as_ref()
    }
}

/// One turn of frame-side processing: host ops to apply plus outbound
/// messages for the parent.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FrameTurn {
    pub outputs: Outputs,
    pub outbound: Vec<LabMessage>,
}

/// Frame side of the channel: owns the preview runtime for a single demo,
/// re-applies configuration on every update, and reports caught failures.
#[derive(Debug)]
pub struct FrameEndpoint {
    preset: PresetKind,
    runtime: Runtime,
    last_config: Option<Json>,
    announced: bool,
}

impl FrameEndpoint {
    pub fn new(preset: PresetKind, cfg: RuntimeConfig) -> Self {
        Self {
            preset,
            runtime: Runtime::new(cfg),
            last_config: None,
            announced: false,
        }
    }

    /// Apply the default configuration and announce readiness (once).
    pub fn startup(&mut self, resolver: &mut dyn TargetResolver) -> FrameTurn {
        let mut turn = FrameTurn::default();
        match self.apply(&Json::Object(serde_json::Map::new()), resolver) {
            Ok(outputs) => turn.outputs = outputs,
            Err(e) => turn.outbound.push(error_message(&e)),
        }
        if !self.announced {
            self.announced = true;
            turn.outbound.push(LabMessage::Ready(ReadyPayload {
                demo_id: self.preset.id().to_string(),
            }));
        }
        turn
    }

    /// Process a raw wire message from the host.
    pub fn on_message(&mut self, raw: &str, resolver: &mut dyn TargetResolver) -> FrameTurn {
        match parse_message(raw) {
            Some(message) => self.on_parsed(message, resolver),
            None => FrameTurn::default(),
        }
    }

    pub fn on_parsed(
        &mut self,
        message: LabMessage,
        resolver: &mut dyn TargetResolver,
    ) -> FrameTurn {
        let mut turn = FrameTurn::default();
        if let LabMessage::ConfigUpdate(payload) = message {
            match self.apply(&payload, resolver) {
                Ok(outputs) => turn.outputs = outputs,
                Err(e) => turn.outbound.push(error_message(&e)),
            }
        }
        turn
    }

    /// The replay button: re-apply the last config and play once.
    pub fn replay(&mut self) -> Outputs {
        self.runtime.replay()
    }

    pub fn handle_event(&mut self, event: HostEvent) -> Outputs {
        self.runtime.handle_event(event)
    }

    pub fn last_config(&self) -> Option<&Json> {
        self.last_config.as_ref()
    }

    /// Tear down the previous attachment in full, then set up the new one.
    fn apply(
        &mut self,
        payload: &Json,
        resolver: &mut dyn TargetResolver,
    ) -> Result<Outputs, LabError> {
        let entry = InteractionEntry::from_demo_config(self.preset, payload)?;
        self.last_config = Some(payload.clone());
        let mut outputs = self.runtime.detach_all();
        outputs.absorb(self.runtime.init(&[entry], resolver));
        Ok(outputs)
    }
}

fn error_message(e: &LabError) -> LabMessage {
    LabMessage::Error(ErrorPayload {
        message: e.to_string(),
        stack: String::new(),
    })
}
