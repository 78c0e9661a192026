//! Shared numeric constants for the collage crate.

// ── Scale ───────────────────────────────────────────────────────

/// Smallest scale a placed image can be pinched down to.
pub const MIN_SCALE: f64 = 0.4;

/// Largest scale a placed image can be stretched up to.
pub const MAX_SCALE: f64 = 4.0;

/// Scale assigned to an image at the moment it is dropped.
pub const DROP_SCALE: f64 = 1.0;

// ── Stacking ────────────────────────────────────────────────────

/// First z-order value handed out by a fresh reducer.
pub const INITIAL_Z: f64 = 1.0;

// ── Gallery ─────────────────────────────────────────────────────

/// Number of items in the built-in sample gallery.
pub const SAMPLE_GALLERY_LEN: u32 = 8;
