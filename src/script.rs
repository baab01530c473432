//! JSON-lines pointer scripts for driving the engine without a host.
//!
//! One event per line, e.g.
//!
//! ```text
//! {"type":"down","x":10,"y":10,"target":"empty"}
//! {"type":"move","x":120,"y":90}
//! {"type":"up","x":120,"y":90}
//! {"type":"turn"}
//! {"type":"down","x":60,"y":50}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A `down` without a
//! `target` is resolved against the live store at replay time, the same way a
//! host would hit-test the pointer. `turn` marks the end of an event loop turn.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::BufRead;

use serde::Deserialize;
use tracing::trace;

use crate::engine::{Action, EngineCore};
use crate::geom::Point;
use crate::input::DownTarget;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

/// One scripted step.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Move {
        x: f64,
        y: f64,
    },
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<DownTarget>,
    },
    Up {
        x: f64,
        y: f64,
    },
    Click {
        x: f64,
        y: f64,
    },
    Turn,
}

/// Parse a whole script.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] with the 1-based line number of the first
/// malformed event, or [`ScriptError::Io`] if reading fails.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse { line: index + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Feed `events` through `core` in order, collecting every action produced.
pub fn replay(core: &mut EngineCore, events: &[ScriptEvent]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        trace!(?event, state = core.input.label(), "replay step");
        let produced = match *event {
            ScriptEvent::Move { x, y } => core.on_pointer_move(Point::new(x, y)),
            ScriptEvent::Down { x, y, target } => {
                let pt = Point::new(x, y);
                let target = target.unwrap_or_else(|| core.store.pill_at(pt).map_or(DownTarget::Empty, DownTarget::Pill));
                core.on_pointer_down(pt, target)
            }
            ScriptEvent::Up { x, y } => core.on_pointer_up(Point::new(x, y)),
            ScriptEvent::Click { x, y } => core.on_click(Point::new(x, y)),
            ScriptEvent::Turn => {
                core.end_turn();
                Vec::new()
            }
        };
        actions.extend(produced);
    }
    actions
}
