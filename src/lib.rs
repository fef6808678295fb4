//! Falling-block rules engine (workspace facade crate).
//!
//! This package re-exports the workspace crates under one name and hosts the
//! headless [`replay`] driver used by the `tetris-replay` binary.

pub mod replay;

pub use tetris_rules_core as core;
pub use tetris_rules_input as input;
pub use tetris_rules_types as types;
