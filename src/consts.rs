//! Shared numeric constants for the editing core.
//!
//! These are the defaults behind [`crate::config::EditorConfig`].

// ── Size policy ─────────────────────────────────────────────────

/// Minimum width and height of a pill created by the draw gesture.
pub const MIN_PILL: f64 = 40.0;

/// Minimum width and height of any piece a split may produce.
pub const MIN_PART: f64 = 20.0;

// ── Corners ─────────────────────────────────────────────────────

/// Radius of a rounded pill corner, in pixels.
pub const CORNER_RADIUS: f64 = 20.0;

// ── Shift fallback ──────────────────────────────────────────────

/// How far a pill whose center is before the split line is pushed back.
pub const SHIFT_BACK_PX: f64 = 10.0;

/// Gap left between the split line and a pill pushed past it.
pub const SHIFT_CLEARANCE_PX: f64 = 2.0;
