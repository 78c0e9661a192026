//! User-intent events consumed by the reducer.
//!
//! The host gesture layer translates raw pointer input into one of these
//! nine semantic events. The union is closed: every reducer match is
//! exhaustively checked, so adding an event kind is a compile-time-visible
//! change everywhere it is handled.

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};
use crate::model::ImageHandle;

/// A semantic user-intent event.
///
/// Positions on drag events are in root coordinates; the reducer converts to
/// canvas-local coordinates only at the moment of a successful drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// The layout pass reported where the canvas sits in root coordinates.
    SetCanvasBounds {
        /// New canvas bounds.
        bounds: Rect,
    },
    /// A drag lifted a gallery item. An already-active drag is silently
    /// replaced (last writer wins).
    StartDrag {
        /// Id of the gallery item being dragged.
        source_id: String,
        /// Pointer position at lift, in root coordinates.
        start_position: Point,
        /// Index of the item within the gallery strip.
        source_index: usize,
        /// Asset handle carried into the preview.
        image: ImageHandle,
    },
    /// The pointer moved while dragging. Ignored when no drag is active.
    UpdateDrag {
        /// New pointer position in root coordinates.
        position: Point,
    },
    /// The drag was abandoned. Idempotent.
    CancelDrag,
    /// The pointer was released. Places the preview if it is inside known
    /// canvas bounds, otherwise behaves like `CancelDrag`.
    Drop,
    /// A placed image was tapped. Brings it to the front and selects it.
    SelectPlaced {
        /// Id of the tapped image. Unknown ids are still recorded as the
        /// selection but have no other effect.
        id: String,
    },
    /// A manipulation gesture (pan/pinch) started on a placed image.
    /// Brings it to the front at most once per manipulation session.
    BeginManipulation {
        /// Id of the image being picked up.
        id: String,
    },
    /// One frame of a manipulation gesture: translate and rescale.
    TransformPlaced {
        /// Id of the image being manipulated. Unknown ids are a no-op.
        id: String,
        /// Canvas-local translation to add to the center.
        translation: Point,
        /// Multiplicative change to apply to the scale.
        scale_change: f64,
    },
    /// The user acknowledged the one-time onboarding overlay. Idempotent.
    DismissOnboarding,
}
