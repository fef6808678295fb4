//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on rendering, input devices or timers:
//!
//! - **Deterministic**: a seeded or scripted random source reproduces a game exactly
//! - **Testable**: every rule is a plain synchronous method call
//! - **Portable**: canvas, terminal or headless callers drive the same engine
//! - **Allocation free**: moves, rotations, sweeps and snapshots stay on the stack
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven piece templates, `Shape` and rotation
//! - [`rng`]: random sources feeding piece selection
//! - [`arena`]: 12x20 settled grid with collision, merge and row sweep
//! - [`game_state`]: the [`Tetris`] engine (player, locking, wall kicks, scoring)
//! - [`snapshot`]: by-value copies of the engine state for renderers
//!
//! # Game Rules
//!
//! - **Random pieces**: each spawn draws `floor(7 * u)` over T, O, L, J, I, S, Z
//! - **Rotation**: clockwise only, with a widening left/right wall-kick search
//! - **Locking**: a piece that cannot move down merges into the arena immediately
//! - **Scoring**: 10, 20, 40, 80 ... for successive rows cleared by one lock
//! - **Game over**: a fresh piece that collides on spawn clears the arena and the score
//!
//! # Example
//!
//! ```
//! use tetris_rules_core::Tetris;
//! use tetris_rules_core::types::Action;
//!
//! let mut game = Tetris::new(12345);
//!
//! game.apply_action(Action::MoveRight);
//! game.apply_action(Action::Rotate);
//! for _ in 0..25 {
//!     game.apply_action(Action::MoveDown);
//! }
//!
//! // The first piece has locked somewhere in the bottom rows
//! let state = game.state();
//! assert!(state.arena[19].iter().any(|&c| c != 0));
//! ```
//!
//! # Timing
//!
//! The engine keeps no clock. Callers run gravity by calling
//! [`Tetris::move_down`](game_state::Tetris::move_down) whenever their own drop
//! interval elapses.

pub mod arena;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tetris_rules_types as types;

// Re-export commonly used types for convenience
pub use arena::{Arena, Sweep};
pub use game_state::{Player, Tetris};
pub use pieces::{create_piece, piece_by_name, random_kind, random_piece, Shape};
pub use rng::{RandomSource, ScriptedSource, SimpleRng};
pub use snapshot::{ArenaGrid, GameSnapshot, PlayerSnapshot};
