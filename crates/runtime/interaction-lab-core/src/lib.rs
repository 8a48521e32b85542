//! Interaction Lab preview runtime (host-agnostic).
//!
//! This crate interprets a small declarative configuration format — preset
//! name, target selector, trigger descriptor, variable values — and drives
//! CSS custom properties and class toggles to perform an animation. It never
//! touches a document tree: hosts resolve selectors to opaque handles, apply
//! the emitted `HostOp`s, and feed platform occurrences back as `HostEvent`s.

pub mod channel;
pub mod config;
pub mod dispatcher;
pub mod easing;
pub mod entry;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod outputs;
pub mod preset;
pub mod runtime;
pub mod sequencer;
pub mod trigger;

// Re-exports for consumers (adapters)
pub use channel::{ErrorPayload, FrameEndpoint, FrameTurn, HostChannel, LabMessage, ReadyPayload};
pub use config::{Capabilities, PlayCount, PresetConfig, RuntimeConfig};
pub use dispatcher::{ScrollTracker, TriggerAttachment, TriggerState};
pub use entry::{parse_embed_json, to_embed_json, InteractionEntry, NormalizedEntry};
pub use error::LabError;
pub use ids::{IdAllocator, TargetId, WatchId};
pub use inputs::HostEvent;
pub use outputs::{HostOp, Outputs, RuntimeEvent};
pub use preset::{var_writes, PresetKind, VarWrite};
pub use runtime::{Runtime, TargetResolver};
pub use sequencer::{SeqDecision, Sequencer};
pub use trigger::{ScrollDirection, TriggerSpec, TriggerType};
