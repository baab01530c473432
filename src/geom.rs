#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space (CSS pixels, same space as pill coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box: top-left corner plus a non-negative extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The box spanned between two corners given in any order.
    #[must_use]
    pub fn spanning(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether both sides are at least `min`.
    #[must_use]
    pub fn meets(&self, min: f64) -> bool {
        self.width >= min && self.height >= min
    }

    /// Half-open containment: the left and top edges belong to the box, the
    /// right and bottom edges belong to whatever is next to it.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x < self.right() && pt.y >= self.y && pt.y < self.bottom()
    }
}

/// Whether the vertical line `x = x_line` passes through the box interior.
///
/// A line lying exactly on the left or right edge does not count.
#[must_use]
pub fn intersects_vertical(bounds: &Bounds, x_line: f64) -> bool {
    bounds.x < x_line && x_line < bounds.right()
}

/// Whether the horizontal line `y = y_line` passes through the box interior.
///
/// A line lying exactly on the top or bottom edge does not count.
#[must_use]
pub fn intersects_horizontal(bounds: &Bounds, y_line: f64) -> bool {
    bounds.y < y_line && y_line < bounds.bottom()
}
