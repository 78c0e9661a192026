//! Latest-snapshot publication: single writer, many readers.
//!
//! DESIGN
//! ======
//! Observers pull the current snapshot rather than subscribing to a push
//! channel; the contract is only ever "the most recent `CanvasState`". Each
//! publication swaps a whole `Arc<CanvasState>` under a short write lock, so
//! a reader sees either the previous snapshot or the next one, never a
//! half-applied transition. The revision number lets a render loop cheaply
//! skip frames where nothing changed.

#[cfg(test)]
#[path = "stream_test.rs"]
mod stream_test;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::CanvasState;

struct Slot {
    revision: u64,
    state: Arc<CanvasState>,
}

/// Cloneable handle to the latest published [`CanvasState`].
///
/// All clones share one slot. Publication is crate-internal; the session is
/// the single writer.
#[derive(Clone)]
pub struct StateStream {
    slot: Arc<RwLock<Slot>>,
}

impl StateStream {
    pub(crate) fn new(initial: CanvasState) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot { revision: 0, state: Arc::new(initial) })),
        }
    }

    /// Replace the published snapshot and advance the revision.
    pub(crate) fn publish(&self, next: CanvasState) {
        let mut slot = self.slot.write();
        slot.revision += 1;
        slot.state = Arc::new(next);
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn current(&self) -> Arc<CanvasState> {
        self.slot.read().state.clone()
    }

    /// Monotonic publication counter; starts at 0 for the initial snapshot.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.slot.read().revision
    }
}

impl std::fmt::Debug for StateStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.slot.read();
        f.debug_struct("StateStream")
            .field("revision", &slot.revision)
            .finish_non_exhaustive()
    }
}
