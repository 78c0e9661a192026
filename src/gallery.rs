//! Source-gallery provider: initial items and fresh placed-image ids.
//!
//! DESIGN
//! ======
//! The provider is the core's only inbound collaborator. It is consulted
//! exactly twice per workflow: once at session start for the gallery, and
//! once per successful drop for a fresh id. Injecting it as a trait lets
//! tests substitute a deterministic counter for the uuid scheme.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use uuid::Uuid;

use crate::consts::SAMPLE_GALLERY_LEN;
use crate::model::{GalleryItem, ImageHandle};

/// Supplies gallery data and generates ids for newly placed images.
pub trait GalleryProvider {
    /// The items available at session start. Called once.
    fn initial_gallery(&self) -> Vec<GalleryItem>;

    /// A fresh id for a placed image. Uniqueness across the session is the
    /// only contract; the scheme is the provider's business.
    fn next_placed_id(&mut self) -> String;
}

/// Default in-memory provider backed by the built-in sample assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleGallery;

impl SampleGallery {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GalleryProvider for SampleGallery {
    /// Eight sample items `g0..g7`, handles starting at 1.
    fn initial_gallery(&self) -> Vec<GalleryItem> {
        (0..SAMPLE_GALLERY_LEN)
            .map(|idx| GalleryItem { id: format!("g{idx}"), image: ImageHandle(idx + 1) })
            .collect()
    }

    fn next_placed_id(&mut self) -> String {
        format!("plc-{}", Uuid::new_v4())
    }
}
