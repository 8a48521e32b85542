//! Trigger dispatch: arms a trigger against a target and decides when the
//! run callback fires.
//!
//! Lifecycle: detached → armed → fired (→ re-armed unless `once`). Immediate
//! triggers fire at attach time; click triggers re-fire on every click;
//! scroll triggers fire on qualifying viewport entry, filtered by scroll
//! direction, with an in-view latch so a target firing while it stays
//! visible does not retrigger. Hosts without intersection observation
//! degrade to immediate invocation.

use serde::{Deserialize, Serialize};

use crate::config::Capabilities;
use crate::ids::{IdAllocator, TargetId, WatchId};
use crate::outputs::{HostOp, Outputs};
use crate::runtime::TargetResolver;
use crate::trigger::{ScrollDirection, TriggerSpec, TriggerType};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerState {
    Detached,
    Armed,
    Fired,
}

/// Tracks scroll direction from successive vertical offsets. Starts out
/// direction-neutral so a `both` filter passes before any scroll arrives.
#[derive(Debug)]
pub struct ScrollTracker {
    last_y: f64,
    dir: ScrollDirection,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            last_y: 0.0,
            dir: ScrollDirection::Both,
        }
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, y: f64) {
        if y > self.last_y {
            self.dir = ScrollDirection::Down;
        } else if y < self.last_y {
            self.dir = ScrollDirection::Up;
        }
        self.last_y = y;
    }

    pub fn direction(&self) -> ScrollDirection {
        self.dir
    }
}

/// One armed trigger. Owns the watch ids the host installed for it.
#[derive(Debug)]
pub struct TriggerAttachment {
    spec: TriggerSpec,
    state: TriggerState,
    intersection: Option<WatchId>,
    click: Option<WatchId>,
    scroll: Option<WatchId>,
    in_view: bool,
}

/// Result of arming a trigger.
pub struct AttachResult {
    pub attachment: TriggerAttachment,
    /// The trigger fired synchronously at attach time.
    pub fire_now: bool,
    pub warning: Option<String>,
}

impl TriggerAttachment {
    pub fn attach(
        spec: TriggerSpec,
        target: TargetId,
        resolver: &mut dyn TargetResolver,
        ids: &mut IdAllocator,
        caps: &Capabilities,
        out: &mut Outputs,
    ) -> AttachResult {
        let mut attachment = Self {
            spec,
            state: TriggerState::Armed,
            intersection: None,
            click: None,
            scroll: None,
            in_view: false,
        };
        let mut fire_now = false;
        let mut warning = None;

        match attachment.spec.trigger_type {
            TriggerType::Immediate => {
                attachment.state = TriggerState::Fired;
                fire_now = true;
            }
            TriggerType::Click => {
                let listen_on = if attachment.spec.selector.is_empty() {
                    Some(target)
                } else {
                    resolver
                        .resolve(&attachment.spec.selector)
                        .into_iter()
                        .next()
                };
                match listen_on {
                    Some(el) => {
                        let watch = ids.alloc_watch();
                        out.push_op(HostOp::ListenClick { watch, target: el });
                        attachment.click = Some(watch);
                    }
                    None => {
                        // no listener element: fall back to firing immediately
                        warning = Some(format!(
                            "click selector matched nothing: {}",
                            attachment.spec.selector
                        ));
                        attachment.state = TriggerState::Fired;
                        fire_now = true;
                    }
                }
            }
            TriggerType::Scroll => {
                if caps.intersection_observer {
                    let watch = ids.alloc_watch();
                    out.push_op(HostOp::Observe {
                        watch,
                        target,
                        threshold: attachment.spec.threshold,
                        root_margin: attachment.spec.root_margin.clone(),
                    });
                    attachment.intersection = Some(watch);

                    let scroll = ids.alloc_watch();
                    out.push_op(HostOp::WatchScroll { watch: scroll });
                    attachment.scroll = Some(scroll);
                } else {
                    // degrade: no observation capability means play right away
                    attachment.state = TriggerState::Fired;
                    fire_now = true;
                }
            }
        }

        AttachResult {
            attachment,
            fire_now,
            warning,
        }
    }

    pub fn owns_watch(&self, watch: WatchId) -> bool {
        self.intersection == Some(watch) || self.click == Some(watch) || self.scroll == Some(watch)
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    /// Intersection callback. Returns true when the run callback should fire.
    pub fn on_intersection(
        &mut self,
        is_intersecting: bool,
        tracker: &ScrollTracker,
        out: &mut Outputs,
    ) -> bool {
        if self.state == TriggerState::Detached {
            return false;
        }
        if !is_intersecting {
            self.in_view = false;
            return false;
        }
        if self.in_view {
            return false;
        }
        let wanted = self.spec.scroll_direction;
        if wanted != ScrollDirection::Both && tracker.direction() != wanted {
            return false;
        }
        self.in_view = true;
        if self.spec.once {
            self.state = TriggerState::Fired;
            if let Some(watch) = self.intersection.take() {
                out.push_op(HostOp::Unobserve { watch });
            }
        } else {
            // re-armed; the in-view latch gates the next fire
            self.state = TriggerState::Armed;
        }
        true
    }

    /// Click callback. Clicks always re-fire.
    pub fn on_click(&mut self) -> bool {
        if self.state == TriggerState::Detached {
            return false;
        }
        self.state = TriggerState::Armed;
        true
    }

    pub fn detach(&mut self, out: &mut Outputs) {
        if let Some(watch) = self.intersection.take() {
            out.push_op(HostOp::Unobserve { watch });
        }
        if let Some(watch) = self.click.take() {
            out.push_op(HostOp::UnlistenClick { watch });
        }
        if let Some(watch) = self.scroll.take() {
            out.push_op(HostOp::UnwatchScroll { watch });
        }
        self.in_view = false;
        self.state = TriggerState::Detached;
    }
}
