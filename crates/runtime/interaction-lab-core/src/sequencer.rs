//! Play sequencer: replays an animation up to `playCount` times.
//!
//! A monotonically increasing sequence id invalidates completions that
//! belong to an earlier configuration; a stale chain can never continue
//! firing after `begin` or `cancel` has been called again.

use crate::config::PlayCount;

/// Decision for one animation-completion event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeqDecision {
    /// Re-trigger the animation.
    Replay,
    /// The sequence just finished its last play.
    Done,
    /// Completion from a cancelled or finished sequence; ignore.
    Stale,
}

#[derive(Debug, Default)]
pub struct Sequencer {
    seq: u64,
    /// Plays left after the current one. None while idle.
    remaining: Option<PlayCount>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sequence. The caller issues the first play itself; the
    /// returned id identifies the chain for diagnostics.
    pub fn begin(&mut self, count: PlayCount) -> u64 {
        self.seq = self.seq.wrapping_add(1);
        self.remaining = Some(count);
        self.seq
    }

    /// Invalidate the running chain without starting a new one.
    pub fn cancel(&mut self) {
        self.seq = self.seq.wrapping_add(1);
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn on_animation_end(&mut self) -> SeqDecision {
        match self.remaining {
            None => SeqDecision::Stale,
            Some(PlayCount::Infinite) => SeqDecision::Replay,
            Some(PlayCount::Count(n)) => {
                // n counts the play that just completed
                if n > 1 {
                    self.remaining = Some(PlayCount::Count(n - 1));
                    SeqDecision::Replay
                } else {
                    self.remaining = None;
                    SeqDecision::Done
                }
            }
        }
    }
}
