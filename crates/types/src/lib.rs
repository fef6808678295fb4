//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no I/O, usable from the engine, the input
//! layer and the replay driver alike.
//!
//! # Arena Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: `(ARENA_WIDTH / 2 - size / 2, 0)` for a piece of side `size`
//!
//! # Cell Values
//!
//! A cell is a `u8`: `0` is empty, `1..=7` identifies the piece that filled it.
//! Renderers index [`PALETTE`] with the cell value.
//!
//! | Piece | Value |
//! |-------|-------|
//! | T | 1 |
//! | O | 2 |
//! | L | 3 |
//! | J | 4 |
//! | I | 5 |
//! | S | 6 |
//! | Z | 7 |
//!
//! # Examples
//!
//! ```
//! use tetris_rules_types::{Action, PieceKind, ARENA_HEIGHT, ARENA_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed: PieceKind = "t".parse().unwrap();
//! assert_eq!(parsed, PieceKind::T);
//! assert_eq!(parsed.value(), 1);
//!
//! // Unknown names are rejected
//! assert!("x".parse::<PieceKind>().is_err());
//!
//! // Parse an engine action
//! assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
//!
//! assert_eq!(ARENA_WIDTH, 12);
//! assert_eq!(ARENA_HEIGHT, 20);
//! ```

use std::fmt;
use std::str::FromStr;

/// Arena width in cells (12 columns)
pub const ARENA_WIDTH: usize = 12;

/// Arena height in cells (20 rows)
pub const ARENA_HEIGHT: usize = 20;

/// Default interval between scheduled drops, in milliseconds
pub const DEFAULT_DROP_INTERVAL_MS: u32 = 1000;

/// Points for the first row cleared in one sweep; each further row doubles it.
pub const LINE_CLEAR_BASE_SCORE: u32 = 10;

/// Largest side length of a piece shape
pub const MAX_SHAPE_SIZE: usize = 4;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// A cell of the arena or of a piece shape (`0` = empty, `1..=7` = piece identity)
pub type Cell = u8;

/// Display colours indexed by cell value. Index 0 (empty) has no colour.
pub const PALETTE: [Option<&str>; 8] = [
    None,
    Some("#e27d60"),
    Some("#85dcb0"),
    Some("#e8a87c"),
    Some("#c38d9e"),
    Some("#41b3a3"),
    Some("#f64c72"),
    Some("#fbeec1"),
];

/// Catalog lookup failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PieceError {
    #[error("unknown piece type '{0}'")]
    UnknownPiece(String),
}

/// The seven piece kinds, in catalog order
///
/// The declaration order is the selection order used by the random piece
/// generator, and `value()` is the cell value each kind paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::T => 0,
            PieceKind::O => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::I => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Cell value painted by this kind (1-7)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.value(), 1);
    /// assert_eq!(PieceKind::Z.value(), 7);
    /// ```
    pub fn value(&self) -> Cell {
        self.index() as Cell + 1
    }

    /// Kind for a nonzero cell value
    pub fn from_value(value: Cell) -> Option<Self> {
        match value {
            1..=7 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::O => "O",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::I => "I",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }

    /// Display colour for this kind
    pub fn color(&self) -> &'static str {
        PALETTE[self.value() as usize].unwrap_or("#000")
    }
}

impl FromStr for PieceKind {
    type Err = PieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t" => Ok(PieceKind::T),
            "o" => Ok(PieceKind::O),
            "l" => Ok(PieceKind::L),
            "j" => Ok(PieceKind::J),
            "i" => Ok(PieceKind::I),
            "s" => Ok(PieceKind::S),
            "z" => Ok(PieceKind::Z),
            _ => Err(PieceError::UnknownPiece(s.to_string())),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotation direction
///
/// The sign convention follows the rotation algorithm: positive turns
/// clockwise, negative counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

impl Spin {
    /// `1` for clockwise, `-1` for counter-clockwise
    pub fn sign(&self) -> i8 {
        match self {
            Spin::Clockwise => 1,
            Spin::CounterClockwise => -1,
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Spin::Clockwise => Spin::CounterClockwise,
            Spin::CounterClockwise => Spin::Clockwise,
        }
    }
}

/// Engine operations a caller can trigger
///
/// These are the only four mutating operations the engine exposes; input
/// bindings and replay scripts map onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if blocked
    MoveDown,
    /// Rotate piece 90° clockwise with wall kicks
    Rotate,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveDown,
        Action::Rotate,
    ];

    /// Parse action from string
    ///
    /// Accepts the camelCase names and the short forms (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::Action;
    ///
    /// assert_eq!(Action::from_str("moveRight"), Some(Action::MoveRight));
    /// assert_eq!(Action::from_str("down"), Some(Action::MoveDown));
    /// assert_eq!(Action::from_str("ROTATE"), Some(Action::Rotate));
    /// assert_eq!(Action::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Action::MoveLeft),
            "moveright" | "right" => Some(Action::MoveRight),
            "movedown" | "down" => Some(Action::MoveDown),
            "rotate" => Some(Action::Rotate),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveDown => "moveDown",
            Action::Rotate => "rotate",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a shape's top-left corner in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i8,
    pub y: i8,
}

impl Offset {
    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}
