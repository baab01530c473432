//! Split engine: what one click does to one pill.
//!
//! [`split`] is a pure function of a pill's bounds, the crosshair lines, and
//! the size policy. It never sees other pills, so pills can be processed in
//! any order with the same result. Ids and colors are not its concern; the
//! store assigns those when it applies a [`SplitOutcome`].
//!
//! Decision order when a line crosses the pill:
//!
//! 1. both lines cross and all four quadrants fit: quad split
//! 2. left and right parts fit: vertical split (the horizontal line is ignored)
//! 3. top and bottom parts fit: horizontal split
//! 4. nothing fits: shift the pill sideways instead
//!
//! A part "fits" when it is at least `min_part` long, so no outcome ever
//! leaves a pill smaller than `min_part` on either axis.

#[cfg(test)]
#[path = "split_test.rs"]
mod split_test;

use crate::config::EditorConfig;
use crate::doc::CornerRadii;
use crate::geom::{Bounds, Point, intersects_horizontal, intersects_vertical};

/// Geometry and rounding of one piece produced by a split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub bounds: Bounds,
    pub corner_radii: CornerRadii,
}

/// Result of running the split engine against one pill.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitOutcome {
    /// Neither line crosses the pill's interior; keep it as is.
    Untouched,
    /// Retire the pill and replace it with these pieces, in emission order.
    Pieces(Vec<Piece>),
    /// No legal split exists; move the pill's top-left corner here instead.
    /// Size, id, color and rounding are kept.
    Shift { to: Point },
}

impl SplitOutcome {
    /// Number of pills that replace the parent (0 when it is kept or shifted).
    #[must_use]
    pub fn piece_count(&self) -> usize {
        match self {
            Self::Pieces(pieces) => pieces.len(),
            Self::Untouched | Self::Shift { .. } => 0,
        }
    }
}

/// Axis along which the shift fallback moves a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Candidate part lengths on each side of the lines.
struct Parts {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Parts {
    fn measure(bounds: &Bounds, lines: Point) -> Self {
        Self {
            left: lines.x - bounds.x,
            right: bounds.right() - lines.x,
            top: lines.y - bounds.y,
            bottom: bounds.bottom() - lines.y,
        }
    }

    fn fits_columns(&self, min_part: f64) -> bool {
        self.left >= min_part && self.right >= min_part
    }

    fn fits_rows(&self, min_part: f64) -> bool {
        self.top >= min_part && self.bottom >= min_part
    }
}

/// Decide how the crosshair at `lines` splits a pill occupying `bounds`.
#[must_use]
pub fn split(bounds: &Bounds, lines: Point, cfg: &EditorConfig) -> SplitOutcome {
    let crosses_v = intersects_vertical(bounds, lines.x);
    let crosses_h = intersects_horizontal(bounds, lines.y);
    let parts = Parts::measure(bounds, lines);
    let columns = parts.fits_columns(cfg.min_part);
    let rows = parts.fits_rows(cfg.min_part);
    let r = cfg.corner_radius;

    match (crosses_v, crosses_h) {
        (false, false) => SplitOutcome::Untouched,
        (true, true) if columns && rows => SplitOutcome::Pieces(quad(bounds, lines, &parts, r)),
        (true, _) if columns => SplitOutcome::Pieces(columns_split(bounds, lines, &parts, r)),
        (_, true) if rows => SplitOutcome::Pieces(rows_split(bounds, lines, &parts, r)),
        // When both lines cross but neither axis fits, the pill moves along x.
        (true, _) => shift(bounds, lines, Axis::X, cfg),
        (false, true) => shift(bounds, lines, Axis::Y, cfg),
    }
}

/// Four pieces in order top-left, top-right, bottom-left, bottom-right.
///
/// Each piece rounds only the corner it shares with the parent, except the
/// bottom-right piece which comes out fully square.
fn quad(bounds: &Bounds, lines: Point, parts: &Parts, r: f64) -> Vec<Piece> {
    vec![
        Piece {
            bounds: Bounds::new(bounds.x, bounds.y, parts.left, parts.top),
            corner_radii: CornerRadii::new(r, 0.0, 0.0, 0.0),
        },
        Piece {
            bounds: Bounds::new(lines.x, bounds.y, parts.right, parts.top),
            corner_radii: CornerRadii::new(0.0, r, 0.0, 0.0),
        },
        Piece {
            bounds: Bounds::new(bounds.x, lines.y, parts.left, parts.bottom),
            corner_radii: CornerRadii::new(0.0, 0.0, 0.0, r),
        },
        // TODO: square bottom-right corner is kept pending a product decision on rounding it.
        Piece {
            bounds: Bounds::new(lines.x, lines.y, parts.right, parts.bottom),
            corner_radii: CornerRadii::SQUARE,
        },
    ]
}

/// Left and right pieces, each the full height of the parent.
fn columns_split(bounds: &Bounds, lines: Point, parts: &Parts, r: f64) -> Vec<Piece> {
    vec![
        Piece {
            bounds: Bounds::new(bounds.x, bounds.y, parts.left, bounds.height),
            corner_radii: CornerRadii::new(r, 0.0, 0.0, r),
        },
        Piece {
            bounds: Bounds::new(lines.x, bounds.y, parts.right, bounds.height),
            corner_radii: CornerRadii::new(0.0, r, r, 0.0),
        },
    ]
}

/// Top and bottom pieces, each the full width of the parent.
fn rows_split(bounds: &Bounds, lines: Point, parts: &Parts, r: f64) -> Vec<Piece> {
    vec![
        Piece {
            bounds: Bounds::new(bounds.x, bounds.y, bounds.width, parts.top),
            corner_radii: CornerRadii::new(r, r, 0.0, 0.0),
        },
        Piece {
            bounds: Bounds::new(bounds.x, lines.y, bounds.width, parts.bottom),
            corner_radii: CornerRadii::new(0.0, 0.0, r, r),
        },
    ]
}

/// Push the pill off the line along `axis`: back by `shift_back` (never past
/// zero) if its center is before the line, otherwise to just after the line.
/// Results snap to whole pixels.
fn shift(bounds: &Bounds, lines: Point, axis: Axis, cfg: &EditorConfig) -> SplitOutcome {
    let (start, center, line) = match axis {
        Axis::X => (bounds.x, bounds.center_x(), lines.x),
        Axis::Y => (bounds.y, bounds.center_y(), lines.y),
    };
    let moved = if center < line {
        (start - cfg.shift_back).round().max(0.0)
    } else {
        (line + cfg.shift_clearance).round()
    };
    let to = match axis {
        Axis::X => Point::new(moved, bounds.y),
        Axis::Y => Point::new(bounds.x, moved),
    };
    SplitOutcome::Shift { to }
}
