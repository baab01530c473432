use serde::Serialize;
use tracing::{debug, trace};

use crate::color::{ColorSource, PastelColors};
use crate::config::EditorConfig;
use crate::doc::{CornerRadii, PartialPill, Pill, PillDraft, PillId, PillStore};
use crate::geom::{Bounds, Point};
use crate::input::{DownTarget, DragSession, DrawSession, InputState, PointerEvent};
use crate::scene::Scene;
use crate::split::{SplitOutcome, split};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// A draw gesture produced a new pill.
    PillCreated(Pill),
    /// A draw gesture ended below the minimum pill size; nothing was created.
    DrawRejected { width: f64, height: f64 },
    /// A dragged pill moved to a new top-left corner.
    PillMoved { id: PillId, x: f64, y: f64 },
    /// A pill was retired and replaced by `children`.
    PillSplit { parent: PillId, children: Vec<Pill> },
    /// A pill too small to split was pushed off the split line.
    PillShifted { id: PillId, x: f64, y: f64 },
    RenderNeeded,
}

/// Interaction controller: owns the pill store and the gesture state, and
/// turns pointer events into store mutations.
///
/// All events are handled synchronously in delivery order; a click always
/// sees the pills and crosshair as of that click.
pub struct EngineCore {
    pub store: PillStore,
    pub input: InputState,
    pub config: EditorConfig,
    crosshair: Point,
    colors: Box<dyn ColorSource>,
}

impl Default for EngineCore {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self::new(config, PastelColors::from_seed(config.color_seed))
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: EditorConfig, colors: impl ColorSource + 'static) -> Self {
        Self {
            store: PillStore::with_min_pill(config.min_pill),
            input: InputState::Idle,
            config,
            crosshair: Point::default(),
            colors: Box::new(colors),
        }
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        let pt = event.point();
        match event {
            PointerEvent::Move { .. } => self.on_pointer_move(pt),
            PointerEvent::Down { target, .. } => self.on_pointer_down(pt, target),
            PointerEvent::Up { .. } => self.on_pointer_up(pt),
            PointerEvent::Click { .. } => self.on_click(pt),
        }
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.end_turn();
        self.crosshair = pt;
        match &mut self.input {
            InputState::Drawing(session) => {
                session.track(pt);
                trace!(bounds = ?session.bounds, "draw tracked");
            }
            InputState::Dragging(session) => {
                let id = session.pill_id;
                let to = session.target_for(pt);
                if self.store.mutate(id, &PartialPill::move_to(to)) {
                    return vec![Action::PillMoved { id, x: to.x, y: to.y }, Action::RenderNeeded];
                }
                debug!(id, "dragged pill vanished; dropping drag");
                self.input = InputState::Idle;
            }
            InputState::Idle | InputState::ClickSuppressed => {}
        }
        // The crosshair follows the pointer, so every move redraws.
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_down(&mut self, pt: Point, target: DownTarget) -> Vec<Action> {
        self.end_turn();
        self.crosshair = pt;
        if !self.input.is_idle() {
            debug!(state = self.input.label(), "pointer down during gesture ignored");
            return Vec::new();
        }
        match target {
            DownTarget::Empty => {
                self.input = InputState::Drawing(DrawSession::open(pt));
                debug!(x = pt.x, y = pt.y, "draw started");
                vec![Action::RenderNeeded]
            }
            DownTarget::Pill(id) => {
                let Some(pill) = self.store.get(id) else {
                    debug!(id, "pointer down on unknown pill ignored");
                    return Vec::new();
                };
                self.input = InputState::Dragging(DragSession::grab(pill, pt));
                debug!(id, "drag started");
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.end_turn();
        self.crosshair = pt;
        match std::mem::take(&mut self.input) {
            InputState::Drawing(session) => {
                // Whatever the draw produced, the click that follows this up must not split.
                self.input = InputState::ClickSuppressed;
                vec![self.finish_draw(session.bounds), Action::RenderNeeded]
            }
            InputState::Dragging(session) => {
                debug!(id = session.pill_id, "drag finished");
                vec![Action::RenderNeeded]
            }
            InputState::Idle | InputState::ClickSuppressed => Vec::new(),
        }
    }

    pub fn on_click(&mut self, pt: Point) -> Vec<Action> {
        self.crosshair = pt;
        match self.input {
            InputState::Idle => self.split_at(pt),
            InputState::ClickSuppressed => {
                debug!("click after draw suppressed");
                self.input = InputState::Idle;
                Vec::new()
            }
            InputState::Drawing(_) | InputState::Dragging(_) => {
                debug!(state = self.input.label(), "click during gesture ignored");
                Vec::new()
            }
        }
    }

    /// The host's event loop turn is over: a pending click suppression lapses.
    pub fn end_turn(&mut self) {
        if matches!(self.input, InputState::ClickSuppressed) {
            trace!("click suppression cleared");
            self.input = InputState::Idle;
        }
    }

    /// Start a new editing session: no pills, ids from 1, no gesture.
    pub fn reset(&mut self) {
        self.store.reset();
        self.input = InputState::Idle;
        self.crosshair = Point::default();
        debug!("session reset");
    }

    // --- Queries ---

    /// Current crosshair position (the latest pointer position).
    #[must_use]
    pub fn crosshair(&self) -> Point {
        self.crosshair
    }

    #[must_use]
    pub fn pills(&self) -> &[Pill] {
        self.store.pills()
    }

    #[must_use]
    pub fn pill(&self, id: PillId) -> Option<&Pill> {
        self.store.get(id)
    }

    /// Read-only view for the renderer.
    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        let (draft, active_pill) = match &self.input {
            InputState::Drawing(session) => (Some(session.bounds), None),
            InputState::Dragging(session) => (None, Some(session.pill_id)),
            InputState::Idle | InputState::ClickSuppressed => (None, None),
        };
        Scene { pills: self.store.pills(), crosshair: self.crosshair, draft, active_pill }
    }

    // --- Internals ---

    fn finish_draw(&mut self, bounds: Bounds) -> Action {
        if !self.store.admits(&bounds) {
            debug!(width = bounds.width, height = bounds.height, "draw below minimum size discarded");
            return Action::DrawRejected { width: bounds.width, height: bounds.height };
        }
        let draft = PillDraft {
            bounds,
            color: self.colors.next_color(),
            corner_radii: CornerRadii::uniform(self.config.corner_radius),
        };
        match self.store.create(draft) {
            Some(pill) => {
                debug!(id = pill.id, width = pill.width, height = pill.height, "pill created");
                Action::PillCreated(pill.clone())
            }
            None => Action::DrawRejected { width: bounds.width, height: bounds.height },
        }
    }

    /// Run the split engine over every pill present when the click arrived.
    fn split_at(&mut self, lines: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        for id in self.store.ids() {
            let Some(bounds) = self.store.get(id).map(Pill::bounds) else {
                continue;
            };
            match split(&bounds, lines, &self.config) {
                SplitOutcome::Untouched => {}
                SplitOutcome::Pieces(pieces) => {
                    if let Some(children) = self.store.replace(id, pieces) {
                        debug!(parent = id, pieces = children.len(), "pill split");
                        actions.push(Action::PillSplit { parent: id, children: children.to_vec() });
                    }
                }
                SplitOutcome::Shift { to } => {
                    if self.store.mutate(id, &PartialPill::move_to(to)) {
                        debug!(id, x = to.x, y = to.y, "pill too small to split; shifted");
                        actions.push(Action::PillShifted { id, x: to.x, y: to.y });
                    }
                }
            }
        }
        if !actions.is_empty() {
            actions.push(Action::RenderNeeded);
        }
        actions
    }
}
