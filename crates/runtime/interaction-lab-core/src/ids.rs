//! Identifiers for host-resolved entities.
//!
//! The core never touches a document tree; the host resolves selectors to
//! opaque element handles (`TargetId`) and installs listeners/observers under
//! `WatchId`s the core hands out.

use serde::{Deserialize, Serialize};

/// Opaque handle for one resolved element, owned by the host.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

/// Handle for one installed trigger hook (observer, click or scroll listener).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WatchId(pub u32);

/// Monotonic allocator for TargetId and WatchId.
/// Dense indices improve cache locality; IDs are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_target: u32,
    next_watch: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_target(&mut self) -> TargetId {
        let id = TargetId(self.next_target);
        self.next_target = self.next_target.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_watch(&mut self) -> WatchId {
        let id = WatchId(self.next_watch);
        self.next_watch = self.next_watch.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_target(), TargetId(0));
        assert_eq!(alloc.alloc_target(), TargetId(1));
        assert_eq!(alloc.alloc_watch(), WatchId(0));
        assert_eq!(alloc.alloc_watch(), WatchId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_target(), TargetId(0));
    }
}
