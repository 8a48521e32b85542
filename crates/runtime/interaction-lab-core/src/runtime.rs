//! Runtime: data ownership and the public API.
//!
//! `init` resolves entries against the host, applies initial state, and arms
//! triggers; `handle_event` consumes host events and decides what plays;
//! `detach_all` tears everything down. Failures are contained per entry:
//! a bad entry is skipped with a warning and the rest proceed.

use log::{debug, warn};

use crate::config::{PresetConfig, RuntimeConfig};
use crate::dispatcher::{ScrollTracker, TriggerAttachment};
use crate::entry::InteractionEntry;
use crate::ids::{IdAllocator, TargetId};
use crate::inputs::HostEvent;
use crate::outputs::{HostOp, Outputs, RuntimeEvent};
use crate::preset::{var_writes, PresetKind};
use crate::sequencer::{SeqDecision, Sequencer};

/// Resolves a selector to zero or more element handles owned by the host.
pub trait TargetResolver {
    fn resolve(&mut self, selector: &str) -> Vec<TargetId>;
}

/// One attached (entry, target) pair with its private trigger and sequencer
/// state. Torn down in full before a replacement is created.
#[derive(Debug)]
struct LiveEntry {
    entry_id: String,
    preset: PresetKind,
    config: PresetConfig,
    target: TargetId,
    trigger: TriggerAttachment,
    sequencer: Sequencer,
}

#[derive(Debug)]
pub struct Runtime {
    cfg: RuntimeConfig,
    ids: IdAllocator,
    scroll: ScrollTracker,
    live: Vec<LiveEntry>,
    outputs: Outputs,
}

impl Runtime {
    pub fn new(cfg: RuntimeConfig) -> Self {
        Self {
            cfg,
            ids: IdAllocator::new(),
            scroll: ScrollTracker::new(),
            live: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Set up a batch of entries: apply initial state and arm triggers.
    pub fn init(
        &mut self,
        entries: &[InteractionEntry],
        resolver: &mut dyn TargetResolver,
    ) -> Outputs {
        for entry in entries {
            let normalized = match entry.normalized() {
                Ok(n) => n,
                Err(e) => {
                    warn!("[interaction-lab] skipping entry {:?}: {e}", entry.id);
                    self.push_event(RuntimeEvent::EntrySkipped {
                        entry: entry.id.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let targets = resolver.resolve(&normalized.target);
            if targets.is_empty() {
                warn!(
                    "[interaction-lab] no targets for selector: {}",
                    normalized.target
                );
                self.push_event(RuntimeEvent::TargetMissing {
                    selector: normalized.target.clone(),
                });
                continue;
            }

            for target in targets {
                // initial state: vars applied, held at ready
                self.apply_config(target, &normalized.config);
                self.reset_classes(target, normalized.preset);

                let attach = TriggerAttachment::attach(
                    normalized.trigger.clone(),
                    target,
                    resolver,
                    &mut self.ids,
                    &self.cfg.capabilities,
                    &mut self.outputs,
                );
                if let Some(message) = attach.warning {
                    warn!("[interaction-lab] {message}");
                    self.push_event(RuntimeEvent::Warning { message });
                }

                self.live.push(LiveEntry {
                    entry_id: normalized.id.clone(),
                    preset: normalized.preset,
                    config: normalized.config.clone(),
                    target,
                    trigger: attach.attachment,
                    sequencer: Sequencer::new(),
                });
                if attach.fire_now {
                    self.run_entry(self.live.len() - 1);
                }
            }
        }
        std::mem::take(&mut self.outputs)
    }

    /// Process one host event.
    pub fn handle_event(&mut self, event: HostEvent) -> Outputs {
        match event {
            HostEvent::Scroll { y } => self.scroll.on_scroll(y),
            HostEvent::Intersection {
                watch,
                is_intersecting,
            } => {
                let mut fired = None;
                {
                    let Self {
                        live,
                        scroll,
                        outputs,
                        ..
                    } = self;
                    if let Some(i) = live.iter().position(|l| l.trigger.owns_watch(watch)) {
                        if live[i].trigger.on_intersection(is_intersecting, scroll, outputs) {
                            fired = Some(i);
                        }
                    }
                }
                if let Some(i) = fired {
                    self.run_entry(i);
                }
            }
            HostEvent::Click { watch } => {
                let mut fired = None;
                if let Some(i) = self.live.iter().position(|l| l.trigger.owns_watch(watch)) {
                    if self.live[i].trigger.on_click() {
                        fired = Some(i);
                    }
                }
                if let Some(i) = fired {
                    self.run_entry(i);
                }
            }
            HostEvent::AnimationEnd { target } => {
                for i in 0..self.live.len() {
                    if self.live[i].target != target {
                        continue;
                    }
                    match self.live[i].sequencer.on_animation_end() {
                        SeqDecision::Replay => self.play_entry(i),
                        SeqDecision::Done => {
                            self.push_event(RuntimeEvent::SequenceEnded { target });
                        }
                        SeqDecision::Stale => {}
                    }
                }
            }
        }
        std::mem::take(&mut self.outputs)
    }

    /// Re-apply the current config and play once, without restarting the
    /// sequencers (the preview's replay button).
    pub fn replay(&mut self) -> Outputs {
        for i in 0..self.live.len() {
            let config = self.live[i].config.clone();
            self.apply_config(self.live[i].target, &config);
            self.play_entry(i);
        }
        std::mem::take(&mut self.outputs)
    }

    /// Tear down every attachment and cancel in-flight sequences.
    pub fn detach_all(&mut self) -> Outputs {
        for live in &mut self.live {
            live.trigger.detach(&mut self.outputs);
            live.sequencer.cancel();
        }
        self.live.clear();
        std::mem::take(&mut self.outputs)
    }

    /// The trigger's run callback: apply vars, start a fresh sequence, play.
    fn run_entry(&mut self, i: usize) {
        debug!(
            "[interaction-lab] run {} on {:?}",
            self.live[i].entry_id, self.live[i].target
        );
        let config = self.live[i].config.clone();
        self.apply_config(self.live[i].target, &config);
        let count = config.play_count();
        self.live[i].sequencer.begin(count);
        self.play_entry(i);
    }

    fn apply_config(&mut self, target: TargetId, config: &PresetConfig) {
        for write in var_writes(config) {
            self.outputs.push_op(HostOp::SetVar {
                target,
                name: write.name.to_string(),
                value: write.value,
            });
        }
    }

    fn reset_classes(&mut self, target: TargetId, preset: PresetKind) {
        self.outputs.push_op(HostOp::RemoveClass {
            target,
            class: preset.anim_class().to_string(),
        });
        self.outputs.push_op(HostOp::AddClass {
            target,
            class: preset.ready_class().to_string(),
        });
    }

    /// Reset, force a reflow, then add the animating class; the reflow
    /// guarantees the CSS animation restarts even if the class was present.
    fn play_entry(&mut self, i: usize) {
        let target = self.live[i].target;
        let preset = self.live[i].preset;
        self.reset_classes(target, preset);
        self.outputs.push_op(HostOp::ForceReflow { target });
        self.outputs.push_op(HostOp::AddClass {
            target,
            class: preset.anim_class().to_string(),
        });
        self.push_event(RuntimeEvent::Played { target });
    }

    fn push_event(&mut self, event: RuntimeEvent) {
        // backpressure: drop past the cap
        if self.outputs.events.len() < self.cfg.max_events_per_update {
            self.outputs.push_event(event);
        }
    }
}
