//! Output contracts from the runtime.
//!
//! Outputs carry the host operations for this turn (style writes, class
//! toggles, listener installs/removals) and a separate list of semantic
//! events. Hosts apply ops in order and transport events.

use serde::{Deserialize, Serialize};

use crate::ids::{TargetId, WatchId};

/// One operation for the host to apply, in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HostOp {
    SetVar {
        target: TargetId,
        name: String,
        value: String,
    },
    AddClass {
        target: TargetId,
        class: String,
    },
    RemoveClass {
        target: TargetId,
        class: String,
    },
    /// Read a layout property so the next class add restarts the animation.
    ForceReflow {
        target: TargetId,
    },
    /// Install a viewport-intersection observer on `target`.
    Observe {
        watch: WatchId,
        target: TargetId,
        threshold: f64,
        root_margin: String,
    },
    Unobserve {
        watch: WatchId,
    },
    /// Install a click listener on `target`.
    ListenClick {
        watch: WatchId,
        target: TargetId,
    },
    UnlistenClick {
        watch: WatchId,
    },
    /// Install a passive scroll listener reporting vertical offsets.
    WatchScroll {
        watch: WatchId,
    },
    UnwatchScroll {
        watch: WatchId,
    },
}

/// Discrete semantic signals emitted while processing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RuntimeEvent {
    /// An entry could not be set up; the rest proceed.
    EntrySkipped { entry: String, reason: String },
    /// A selector resolved to no elements.
    TargetMissing { selector: String },
    /// Non-fatal setup oddity (e.g. a click selector matching nothing).
    Warning { message: String },
    /// One play was started on a target.
    Played { target: TargetId },
    /// A bounded play sequence ran out of replays.
    SequenceEnded { target: TargetId },
    Error { message: String },
}

/// Outputs returned by the runtime entry points.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub ops: Vec<HostOp>,
    #[serde(default)]
    pub events: Vec<RuntimeEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.ops.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_op(&mut self, op: HostOp) {
        self.ops.push(op);
    }

    #[inline]
    pub fn push_event(&mut self, event: RuntimeEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.events.is_empty()
    }

    /// Append another turn's outputs, preserving order.
    pub fn absorb(&mut self, other: Outputs) {
        self.ops.extend(other.ops);
        self.events.extend(other.events);
    }
}
