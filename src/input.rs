//! Input model: pointer events, gesture sessions, and the gesture state machine.
//!
//! `PointerEvent` is what the host's pointer source delivers, already mapped
//! into canvas coordinates. `InputState` is the gesture being tracked between
//! pointer-down and pointer-up; each active variant carries the transient
//! session it needs, so a drag and a draw can never be in progress at once.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Pill, PillId};
use crate::geom::{Bounds, Point};

/// What a pointer-down landed on, as resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownTarget {
    /// Bare canvas; starts a draw.
    Empty,
    /// An existing pill; starts a drag.
    Pill(PillId),
}

/// A pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Move { x: f64, y: f64 },
    Down { x: f64, y: f64, target: DownTarget },
    Up { x: f64, y: f64 },
    Click { x: f64, y: f64 },
}

impl PointerEvent {
    /// Pointer position carried by the event.
    #[must_use]
    pub fn point(&self) -> Point {
        match *self {
            Self::Move { x, y } | Self::Down { x, y, .. } | Self::Up { x, y } | Self::Click { x, y } => Point::new(x, y),
        }
    }
}

/// A box being drawn from an anchor corner to the live pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSession {
    /// Where the pointer went down.
    pub anchor: Point,
    /// Normalized box between the anchor and the latest pointer position.
    pub bounds: Bounds,
}

impl DrawSession {
    #[must_use]
    pub fn open(anchor: Point) -> Self {
        Self { anchor, bounds: Bounds::spanning(anchor, anchor) }
    }

    /// Re-span the box to the current pointer position.
    pub fn track(&mut self, pointer: Point) {
        self.bounds = Bounds::spanning(self.anchor, pointer);
    }
}

/// A pill being moved with the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pill_id: PillId,
    /// Pointer position minus the pill's top-left at grab time, held for the
    /// whole drag so the pill does not jump under the pointer.
    pub grab_offset: Point,
}

impl DragSession {
    #[must_use]
    pub fn grab(pill: &Pill, pointer: Point) -> Self {
        Self { pill_id: pill.id, grab_offset: Point::new(pointer.x - pill.x, pointer.y - pill.y) }
    }

    /// Top-left corner for the dragged pill, snapped to whole pixels.
    #[must_use]
    pub fn target_for(&self, pointer: Point) -> Point {
        Point::new((pointer.x - self.grab_offset.x).round(), (pointer.y - self.grab_offset.y).round())
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; a click splits.
    #[default]
    Idle,
    /// Drawing a new pill from empty canvas.
    Drawing(DrawSession),
    /// Moving an existing pill.
    Dragging(DragSession),
    /// A draw just ended. The click the pointer source sends after that
    /// pointer-up is swallowed; any other event returns to `Idle` first.
    ClickSuppressed,
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing(_) => "drawing",
            Self::Dragging(_) => "dragging",
            Self::ClickSuppressed => "click_suppressed",
        }
    }
}
