//! Input contract for the runtime.
//!
//! Hosts translate platform occurrences (observer callbacks, clicks, scroll
//! offsets, animation completions) into `HostEvent`s and feed them to
//! `Runtime::handle_event`. Delivery order is the host's event order; the
//! runtime applies them one at a time.

use serde::{Deserialize, Serialize};

use crate::ids::{TargetId, WatchId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum HostEvent {
    /// An observed element crossed the visibility threshold (either way).
    Intersection {
        watch: WatchId,
        is_intersecting: bool,
    },
    /// A click listener fired.
    Click { watch: WatchId },
    /// The viewport's vertical offset changed.
    Scroll { y: f64 },
    /// A CSS animation on `target` ran to completion.
    AnimationEnd { target: TargetId },
}
