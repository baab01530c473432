//! Document model: pills, their corner rounding, and the in-memory store.
//!
//! This module defines what lives on the canvas (`Pill`), the opaque color
//! token each pill carries (`Color`), a sparse update for in-place edits
//! (`PartialPill`), and the store that owns every live pill and the id
//! counter (`PillStore`).
//!
//! Mutations come only from the interaction controller. The renderer reads
//! the ordered pill list through [`PillStore::pills`]; list order is stacking
//! order and has no other meaning.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{CORNER_RADIUS, MIN_PILL};
use crate::geom::{Bounds, Point};
use crate::split::Piece;

/// Unique identifier for a pill. Never reused within a session.
pub type PillId = u64;

/// Opaque color token supplied by the color generator and copied verbatim
/// onto split pieces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-corner rounding radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadii {
    pub tl: f64,
    pub tr: f64,
    pub br: f64,
    pub bl: f64,
}

impl CornerRadii {
    /// All four corners square.
    pub const SQUARE: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Radii in CSS order: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub const fn new(tl: f64, tr: f64, br: f64, bl: f64) -> Self {
        Self { tl, tr, br, bl }
    }

    /// The same radius on every corner.
    #[must_use]
    pub const fn uniform(r: f64) -> Self {
        Self::new(r, r, r, r)
    }

    /// CSS `border-radius` shorthand, e.g. `"20px 0px 0px 20px"`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("{}px {}px {}px {}px", self.tl, self.tr, self.br, self.bl)
    }
}

impl Default for CornerRadii {
    fn default() -> Self {
        Self::uniform(CORNER_RADIUS)
    }
}

/// A pill as held in the store and handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pill {
    /// Unique identifier, assigned by the store.
    pub id: PillId,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    /// Missing radii deserialize as fully rounded.
    #[serde(default)]
    pub corner_radii: CornerRadii,
}

impl Pill {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }
}

/// A pill that has not been admitted to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct PillDraft {
    pub bounds: Bounds,
    pub color: Color,
    pub corner_radii: CornerRadii,
}

/// Sparse in-place update for a pill. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl PartialPill {
    /// Update that moves a pill's top-left corner to `to`.
    #[must_use]
    pub fn move_to(to: Point) -> Self {
        Self { x: Some(to.x), y: Some(to.y) }
    }
}

/// Ordered in-memory store of pills plus the id counter for the session.
#[derive(Debug, Clone)]
pub struct PillStore {
    pills: Vec<Pill>,
    next_id: PillId,
    min_pill: f64,
}

impl PillStore {
    /// Create an empty store that admits drawn pills of at least [`MIN_PILL`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_min_pill(MIN_PILL)
    }

    /// Create an empty store with a custom creation threshold.
    #[must_use]
    pub fn with_min_pill(min_pill: f64) -> Self {
        Self { pills: Vec::new(), next_id: 1, min_pill }
    }

    /// Whether a drawn box is large enough to become a pill.
    #[must_use]
    pub fn admits(&self, bounds: &Bounds) -> bool {
        bounds.meets(self.min_pill)
    }

    /// Admit a drawn pill, minting its id. Returns `None` when the draft is
    /// below the creation threshold on either axis.
    pub fn create(&mut self, draft: PillDraft) -> Option<&Pill> {
        if !self.admits(&draft.bounds) {
            return None;
        }
        let pill = self.mint(draft.bounds, draft.color, draft.corner_radii);
        self.pills.push(pill);
        self.pills.last()
    }

    /// Retire the pill `old` and append one new pill per piece, in order.
    ///
    /// Pieces inherit the retired pill's color. Returns the new pills, or
    /// `None` (leaving the store untouched) when `old` is not present.
    pub fn replace(&mut self, old: PillId, pieces: Vec<Piece>) -> Option<&[Pill]> {
        let index = self.pills.iter().position(|p| p.id == old)?;
        let parent = self.pills.remove(index);
        let start = self.pills.len();
        for piece in pieces {
            let child = self.mint(piece.bounds, parent.color.clone(), piece.corner_radii);
            self.pills.push(child);
        }
        Some(&self.pills[start..])
    }

    /// Apply a partial update in place. Returns false if the pill doesn't exist.
    pub fn mutate(&mut self, id: PillId, patch: &PartialPill) -> bool {
        let Some(pill) = self.pills.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if let Some(x) = patch.x {
            pill.x = x;
        }
        if let Some(y) = patch.y {
            pill.y = y;
        }
        true
    }

    /// Replace all pills with a snapshot. The id counter moves past the
    /// highest id seen so later pills never collide with restored ones.
    pub fn load_snapshot(&mut self, pills: Vec<Pill>) {
        let highest = pills.iter().map(|p| p.id).max().unwrap_or(0);
        self.next_id = self.next_id.max(highest.saturating_add(1));
        self.pills = pills;
    }

    /// Start a new session: drop every pill and restart ids at 1.
    pub fn reset(&mut self) {
        self.pills.clear();
        self.next_id = 1;
    }

    /// Return a reference to a pill by id.
    #[must_use]
    pub fn get(&self, id: PillId) -> Option<&Pill> {
        self.pills.iter().find(|p| p.id == id)
    }

    /// The topmost pill under `pt`, if any.
    #[must_use]
    pub fn pill_at(&self, pt: Point) -> Option<PillId> {
        self.pills.iter().rev().find(|p| p.bounds().contains(pt)).map(|p| p.id)
    }

    /// All pills in stacking order (first is drawn first).
    #[must_use]
    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    /// Ids of all pills in stacking order.
    #[must_use]
    pub fn ids(&self) -> Vec<PillId> {
        self.pills.iter().map(|p| p.id).collect()
    }

    /// The id the next minted pill will receive.
    #[must_use]
    pub fn next_id(&self) -> PillId {
        self.next_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }

    fn mint(&mut self, bounds: Bounds, color: Color, corner_radii: CornerRadii) -> Pill {
        let id = self.next_id;
        self.next_id += 1;
        Pill { id, x: bounds.x, y: bounds.y, width: bounds.width, height: bounds.height, color, corner_radii }
    }
}

impl Default for PillStore {
    fn default() -> Self {
        Self::new()
    }
}
