//! The canvas session: the single logical writer for a canvas lifetime.
//!
//! ARCHITECTURE
//! ============
//! `CanvasSession` wires the three pieces together: it consults the
//! [`GalleryProvider`] once at construction for the initial gallery, feeds
//! each dispatched event through the [`Reducer`], and publishes every
//! replacement snapshot on the [`StateStream`]. Events are applied strictly
//! sequentially in arrival order; nothing here blocks or suspends, so the
//! host can drive it from whatever loop owns the gestures.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use tracing::trace;

use crate::event::CanvasEvent;
use crate::gallery::GalleryProvider;
use crate::model::CanvasState;
use crate::reducer::Reducer;
use crate::stream::StateStream;

/// Owns the provider, the reducer, and the write side of the state stream.
pub struct CanvasSession {
    provider: Box<dyn GalleryProvider>,
    reducer: Reducer,
    stream: StateStream,
}

impl CanvasSession {
    /// Start a session with the given provider. The provider's gallery is
    /// read once, here; afterwards it is only asked for placed-image ids.
    #[must_use]
    pub fn new(provider: Box<dyn GalleryProvider>) -> Self {
        let initial = CanvasState::new(provider.initial_gallery());
        Self {
            provider,
            reducer: Reducer::new(),
            stream: StateStream::new(initial),
        }
    }

    /// Apply one event and publish the resulting snapshot.
    pub fn dispatch(&mut self, event: CanvasEvent) {
        trace!(?event, "canvas event");
        let current = self.stream.current();
        let next = self.reducer.apply(&current, event, self.provider.as_mut());
        self.stream.publish(next);
    }

    /// The most recently published snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<CanvasState> {
        self.stream.current()
    }

    /// A reader handle observers can hold onto across dispatches.
    #[must_use]
    pub fn stream(&self) -> StateStream {
        self.stream.clone()
    }
}

impl std::fmt::Debug for CanvasSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasSession")
            .field("stream", &self.stream)
            .finish_non_exhaustive()
    }
}
