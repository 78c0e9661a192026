//! Interaction core for the photo-collage canvas.
//!
//! A user drags images from a source gallery onto a bounded canvas, then
//! repositions, rescales, and re-stacks them. This crate owns the pure state
//! transition behind that workflow: translating semantic user-intent events
//! into immutable [`model::CanvasState`] snapshots, with z-order bookkeeping,
//! bounds clamping, and drag/drop validation. The host UI layer is
//! responsible only for gesture recognition, rendering, and asset lookup —
//! it feeds [`event::CanvasEvent`]s in and re-renders from the snapshots
//! published on the [`stream::StateStream`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Single-writer [`session::CanvasSession`] wiring provider → reducer → stream |
//! | [`reducer`] | The transition function and its z-order bookkeeping |
//! | [`model`] | Immutable state snapshot and the types it contains |
//! | [`event`] | The closed union of user-intent events |
//! | [`gallery`] | Source-gallery provider contract and default implementation |
//! | [`stream`] | Latest-snapshot publication, single writer / many readers |
//! | [`geom`] | Point and rectangle value types |
//! | [`consts`] | Shared numeric constants (scale limits, initial z, etc.) |

pub mod consts;
pub mod event;
pub mod gallery;
pub mod geom;
pub mod model;
pub mod reducer;
pub mod session;
pub mod stream;
