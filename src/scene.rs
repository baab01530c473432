//! Read-only view of editor state for the renderer.
//!
//! The renderer gets pills, crosshair and the in-progress draw box through a
//! [`Scene`] borrowed from the engine. It holds shared references only, so
//! nothing drawn from it can feed back into core state.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;

use crate::doc::{Pill, PillId};
use crate::geom::{Bounds, Point};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene<'a> {
    /// Pills in stacking order.
    pub pills: &'a [Pill],
    /// Crosshair lines: vertical at `x`, horizontal at `y`.
    pub crosshair: Point,
    /// Box of the draw gesture in progress, if any.
    pub draft: Option<Bounds>,
    /// Pill currently being dragged, if any.
    pub active_pill: Option<PillId>,
}

impl<'a> Scene<'a> {
    /// Pills in paint order: stacking order, with the dragged pill raised to the top.
    pub fn draw_order(&self) -> impl Iterator<Item = &'a Pill> + 'a {
        let active = self.active_pill;
        let rest = self.pills.iter().filter(move |p| Some(p.id) != active);
        let raised = self.pills.iter().filter(move |p| Some(p.id) == active);
        rest.chain(raised)
    }
}
