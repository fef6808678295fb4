//! Input adapter module (engine-facing).
//!
//! This module is independent of any rendering layer and never reads a
//! device itself. It maps `crossterm` key events into engine
//! [`crate::types::Action`]s, owns the drop timer that turns elapsed frame
//! time into gravity, and bundles both with an engine in a [`Controller`].

pub mod controller;
pub mod map;
pub mod timer;

pub use tetris_rules_core as core;
pub use tetris_rules_types as types;

pub use controller::Controller;
pub use map::{should_quit, BindingError, KeyBindings};
pub use timer::DropTimer;
