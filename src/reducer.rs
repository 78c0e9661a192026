//! The canvas state transition function.
//!
//! DESIGN
//! ======
//! `Reducer::apply` is a pure, total function from `(snapshot, event)` to a
//! replacement snapshot. The only state the reducer itself owns is the
//! sequencing bookkeeping a drag-and-drop workflow needs: the monotonic
//! z-order counter and the id of the most recently bumped image. Both stay
//! private to the reducer; observers only ever see `CanvasState`.
//!
//! The z-order counter hands out strictly increasing values, advancing on
//! every assignment and only on assignment, so two images can never share a
//! z-order. The last-bumped id implements bump-once-per-manipulation: a
//! continuous pinch/pan gesture fires `TransformPlaced` every frame, and
//! reserving one z-order slot per discrete pick-up (rather than per frame)
//! keeps the counter from racing ahead.
//!
//! ERROR HANDLING
//! ==============
//! There is no fatal-error class. Stray or out-of-order events (an
//! `UpdateDrag` after a cancel, a transform on a deleted id, a drop with no
//! active drag) are absorbed as no-ops, and an out-of-bounds drop is a
//! silent policy rejection identical to a cancel. Interactive input should
//! never crash or surface an error.

#[cfg(test)]
#[path = "reducer_test.rs"]
mod reducer_test;

use tracing::debug;

use crate::consts::{DROP_SCALE, INITIAL_Z, MAX_SCALE, MIN_SCALE};
use crate::event::CanvasEvent;
use crate::gallery::GalleryProvider;
use crate::geom::{Point, Rect};
use crate::model::{CanvasState, DragPreview, ImageHandle, PlacedImage};

/// The transition function plus its private sequencing state.
#[derive(Debug, Clone)]
pub struct Reducer {
    /// Next z-order value to hand out. Advances on every assignment.
    next_z: f64,
    /// Id of the image whose manipulation session last bumped the z-order.
    last_bumped: Option<String>,
}

impl Reducer {
    #[must_use]
    pub fn new() -> Self {
        Self { next_z: INITIAL_Z, last_bumped: None }
    }

    /// Apply one event to a snapshot, producing the replacement snapshot.
    ///
    /// `ids` is consulted only on a successful `Drop`, for a fresh placed-image
    /// id. Total over the event union: no input sequence panics or errors.
    pub fn apply(
        &mut self,
        state: &CanvasState,
        event: CanvasEvent,
        ids: &mut dyn GalleryProvider,
    ) -> CanvasState {
        match event {
            CanvasEvent::SetCanvasBounds { bounds } => Self::set_canvas_bounds(state, bounds),
            CanvasEvent::StartDrag { source_id, start_position, source_index, image } => {
                Self::start_drag(state, source_id, start_position, source_index, image)
            }
            CanvasEvent::UpdateDrag { position } => Self::update_drag(state, position),
            CanvasEvent::CancelDrag => Self::cancel_drag(state),
            CanvasEvent::Drop => self.drop_preview(state, ids),
            CanvasEvent::SelectPlaced { id } => self.select_placed(state, id),
            CanvasEvent::BeginManipulation { id } => self.begin_manipulation(state, id),
            CanvasEvent::TransformPlaced { id, translation, scale_change } => {
                self.transform_placed(state, &id, translation, scale_change)
            }
            CanvasEvent::DismissOnboarding => Self::dismiss_onboarding(state),
        }
    }

    // --- Bounds ---

    /// Replace the canvas bounds. Existing placed images are not re-clamped;
    /// clamping applies to future transforms only.
    fn set_canvas_bounds(state: &CanvasState, bounds: Rect) -> CanvasState {
        CanvasState { canvas_bounds: Some(bounds), ..state.clone() }
    }

    // --- Drag lifecycle ---

    /// Begin a drag. A drag that is somehow already active is overwritten:
    /// with a single pointer the old gesture is unfinishable anyway.
    fn start_drag(
        state: &CanvasState,
        source_id: String,
        start_position: Point,
        source_index: usize,
        image: ImageHandle,
    ) -> CanvasState {
        CanvasState {
            drag_preview: Some(DragPreview {
                source_id,
                position: start_position,
                source_index,
                image,
            }),
            ..state.clone()
        }
    }

    /// Move the preview. Stray updates after a cancel or drop are ignored.
    fn update_drag(state: &CanvasState, position: Point) -> CanvasState {
        match &state.drag_preview {
            Some(preview) => CanvasState {
                drag_preview: Some(DragPreview { position, ..preview.clone() }),
                ..state.clone()
            },
            None => state.clone(),
        }
    }

    /// Clear the preview. Idempotent.
    fn cancel_drag(state: &CanvasState) -> CanvasState {
        CanvasState { drag_preview: None, ..state.clone() }
    }

    /// Release the drag: place the preview if it landed inside known canvas
    /// bounds, otherwise reject silently (same outcome as a cancel).
    fn drop_preview(&mut self, state: &CanvasState, ids: &mut dyn GalleryProvider) -> CanvasState {
        let Some(preview) = &state.drag_preview else {
            return state.clone();
        };
        let Some(bounds) = state.canvas_bounds else {
            debug!(source_id = %preview.source_id, "drop before bounds known, rejected");
            return Self::cancel_drag(state);
        };
        if !bounds.contains(preview.position) {
            debug!(source_id = %preview.source_id, "drop outside canvas, rejected");
            return Self::cancel_drag(state);
        }

        let placed = PlacedImage {
            id: ids.next_placed_id(),
            source_id: preview.source_id.clone(),
            center: preview.position - bounds.top_left(),
            scale: DROP_SCALE,
            z_order: self.take_z(),
            image: preview.image,
        };
        debug!(id = %placed.id, source_id = %placed.source_id, "placed image");

        let mut next = state.clone();
        next.gallery.retain(|item| item.id != preview.source_id);
        next.selected_id = Some(placed.id.clone());
        next.placed.push(placed);
        next.drag_preview = None;
        next
    }

    // --- Selection and stacking ---

    /// Bring a placed image to the front and select it. Selecting an id that
    /// doesn't exist still records the selection, but burns no z-order slot.
    fn select_placed(&mut self, state: &CanvasState, id: String) -> CanvasState {
        let mut next = state.clone();
        if let Some(img) = next.placed.iter_mut().find(|p| p.id == id) {
            img.z_order = self.take_z();
        }
        next.selected_id = Some(id);
        next
    }

    /// Start of a manipulation session: like `SelectPlaced`, but remembered,
    /// so an item already on top isn't re-bumped on every gesture frame.
    fn begin_manipulation(&mut self, state: &CanvasState, id: String) -> CanvasState {
        if self.last_bumped.as_deref() == Some(id.as_str()) {
            return state.clone();
        }
        let next = self.select_placed(state, id.clone());
        self.last_bumped = Some(id);
        next
    }

    /// One manipulation frame: multiply scale, translate the center, clamp
    /// both, and bump the z-order once at the start of the session.
    fn transform_placed(
        &mut self,
        state: &CanvasState,
        id: &str,
        translation: Point,
        scale_change: f64,
    ) -> CanvasState {
        if state.find_placed(id).is_none() {
            return state.clone();
        }
        let bounds = state.canvas_bounds;
        let mut next = state.clone();
        if let Some(img) = next.placed.iter_mut().find(|p| p.id == id) {
            img.scale = clamp_scale(img.scale * scale_change);
            img.center = clamp_center(img.center + translation, bounds);
            if self.last_bumped.as_deref() != Some(id) {
                img.z_order = self.take_z();
                self.last_bumped = Some(id.to_owned());
            }
        }
        next.selected_id = Some(id.to_owned());
        next
    }

    // --- Onboarding ---

    /// Hide the onboarding overlay. Idempotent.
    fn dismiss_onboarding(state: &CanvasState) -> CanvasState {
        CanvasState { show_onboarding: false, ..state.clone() }
    }

    /// Hand out the current z-order value and advance the counter.
    fn take_z(&mut self) -> f64 {
        let z = self.next_z;
        self.next_z += 1.0;
        z
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a scale into the allowed range.
fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Clamp a canvas-local center into the canvas, axis by axis. Degenerate
/// bounds collapse to zero extent rather than inverting the clamp range;
/// unknown bounds leave the center as computed.
fn clamp_center(center: Point, bounds: Option<Rect>) -> Point {
    match bounds {
        Some(b) => Point {
            x: center.x.clamp(0.0, b.width().max(0.0)),
            y: center.y.clamp(0.0, b.height().max(0.0)),
        },
        None => center,
    }
}
