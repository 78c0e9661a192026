//! Canvas state model: gallery items, placed images, and the snapshot.
//!
//! This module defines what is on screen at any instant. `CanvasState` is the
//! single externally observable value: every event produces a full
//! replacement snapshot, never an in-place edit. The renderer reads placed
//! images via [`CanvasState::sorted_placed`] to determine draw order.
//!
//! All types are serde-serializable so a host layer can move snapshots
//! across a process or wasm boundary.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Rect};

/// Opaque handle to an image asset owned by the host (a resource or texture
/// id). The core never dereferences it, only carries it through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(pub u32);

/// Item selectable in the source gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Unique identifier within the gallery.
    pub id: String,
    /// Handle to the image asset this item shows.
    pub image: ImageHandle,
}

/// Image placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedImage {
    /// Identifier generated fresh at placement, distinct from `source_id`.
    pub id: String,
    /// The gallery item this image was spawned from.
    pub source_id: String,
    /// Center point in canvas-local coordinates.
    pub center: Point,
    /// Uniform scale factor, kept within `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
    /// Stacking order; higher values draw on top. Only relative order matters.
    pub z_order: f64,
    /// Handle to the image asset.
    pub image: ImageHandle,
}

/// Active drag shown as a floating preview while dragging from the gallery.
///
/// At most one exists at a time; it lives from `StartDrag` until `Drop` or
/// `CancelDrag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPreview {
    /// The gallery item being dragged.
    pub source_id: String,
    /// Current pointer position in root coordinates.
    pub position: Point,
    /// Index of the item within the gallery strip at drag start.
    pub source_index: usize,
    /// Handle to the image asset.
    pub image: ImageHandle,
}

/// Immutable snapshot of the canvas feature's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    /// Items still available to drag onto the canvas.
    pub gallery: Vec<GalleryItem>,
    /// Images placed on the canvas, in placement order.
    pub placed: Vec<PlacedImage>,
    /// Id of the selected placed image, if any. May reference an id that no
    /// longer (or never did) exist; stale selection has no visible effect.
    pub selected_id: Option<String>,
    /// The in-flight drag, if one is active.
    pub drag_preview: Option<DragPreview>,
    /// Canvas bounds in root coordinates, once reported by the layout pass.
    pub canvas_bounds: Option<Rect>,
    /// Whether the one-time onboarding overlay is still showing.
    pub show_onboarding: bool,
}

impl CanvasState {
    /// Initial snapshot for a session: the given gallery, nothing placed,
    /// onboarding showing.
    #[must_use]
    pub fn new(gallery: Vec<GalleryItem>) -> Self {
        Self {
            gallery,
            placed: Vec::new(),
            selected_id: None,
            drag_preview: None,
            canvas_bounds: None,
            show_onboarding: true,
        }
    }

    /// Look up a placed image by id.
    #[must_use]
    pub fn find_placed(&self, id: &str) -> Option<&PlacedImage> {
        self.placed.iter().find(|p| p.id == id)
    }

    /// Whether a drag gesture is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag_preview.is_some()
    }

    /// Placed images sorted by `(z_order, id)` for back-to-front drawing.
    #[must_use]
    pub fn sorted_placed(&self) -> Vec<&PlacedImage> {
        let mut imgs: Vec<&PlacedImage> = self.placed.iter().collect();
        imgs.sort_by(|a, b| a.z_order.total_cmp(&b.z_order).then_with(|| a.id.cmp(&b.id)));
        imgs
    }
}

impl Default for CanvasState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
