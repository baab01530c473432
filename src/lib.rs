//! Editing core for the pill splitter canvas.
//!
//! Users draw axis-aligned rounded rectangles ("pills") by click-dragging on
//! empty canvas, move them by dragging, and split them by clicking while the
//! crosshair guide lines pass through them. This crate owns the part of that
//! editor that has rules: the split geometry, the pill store, and the pointer
//! gesture state machine. The host layer captures raw pointer events, feeds
//! them to [`engine::EngineCore`], and draws the read-only [`scene::Scene`] it
//! gets back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller: pointer events in, [`engine::Action`]s out |
//! | [`split`] | Pure split decision for one pill and one pair of crosshair lines |
//! | [`doc`] | Pill records and the [`doc::PillStore`] that owns id assignment |
//! | [`input`] | Pointer events and the Idle / Drawing / Dragging gesture state |
//! | [`geom`] | Points, bounding boxes, and line intersection predicates |
//! | [`scene`] | Read-only view handed to the renderer |
//! | [`color`] | Color generator seam used when a pill is created |
//! | [`config`] | Size policy loaded from the environment |
//! | [`script`] | JSON-lines event scripts for headless replay |
//! | [`consts`] | Default numeric policy (minimum sizes, radii, shift offsets) |

pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod input;
pub mod scene;
pub mod script;
pub mod split;
