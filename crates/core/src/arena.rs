//! Arena module - the settled grid
//!
//! The arena is a 12x20 grid of cell values, stored as an array of rows so a
//! cleared row can be dropped and an empty one inserted at the top in place.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom).
//! Anything outside that rectangle counts as a collision.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, Offset, ARENA_HEIGHT, ARENA_WIDTH, EMPTY, LINE_CLEAR_BASE_SCORE};

/// One arena row
pub type Row = [Cell; ARENA_WIDTH];

/// Result of one sweep
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sweep {
    /// Row indices that were full when examined, in the order they were removed
    pub rows: ArrayVec<u8, ARENA_HEIGHT>,
    /// Points earned: 10, 20, 40, ... for the 1st, 2nd, 3rd, ... row
    pub score: u32,
}

impl Sweep {
    pub fn rows_cleared(&self) -> usize {
        self.rows.len()
    }
}

/// The settled grid - 12 columns x 20 rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arena {
    rows: [Row; ARENA_HEIGHT],
}

impl Arena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self {
            rows: [[EMPTY; ARENA_WIDTH]; ARENA_HEIGHT],
        }
    }

    /// Build an arena from explicit rows (row 0 first)
    pub fn from_rows(rows: [Row; ARENA_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Map (x, y) to array indices, or None outside the grid
    ///
    /// Takes `i16` so a shape offset plus a cell offset cannot overflow.
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<(usize, usize)> {
        if x < 0 || x as usize >= ARENA_WIDTH || y < 0 || y as usize >= ARENA_HEIGHT {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn width(&self) -> usize {
        ARENA_WIDTH
    }

    pub fn height(&self) -> usize {
        ARENA_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.cell_at(x.into(), y.into())
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        self.set_at(x.into(), y.into(), cell)
    }

    fn cell_at(&self, x: i16, y: i16) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    fn set_at(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = cell;
                true
            }
            None => false,
        }
    }

    /// Out of bounds or nonzero
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.occupied_at(x.into(), y.into())
    }

    fn occupied_at(&self, x: i16, y: i16) -> bool {
        !matches!(self.cell_at(x, y), Some(EMPTY))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < ARENA_HEIGHT && self.rows[y].iter().all(|&c| c != EMPTY)
    }

    pub fn rows(&self) -> &[Row; ARENA_HEIGHT] {
        &self.rows
    }

    /// Whether `shape` placed at `pos` overlaps a filled cell or leaves the grid
    pub fn collide(&self, shape: &Shape, pos: Offset) -> bool {
        shape.filled().any(|(dx, dy, _)| {
            self.occupied_at(
                i16::from(pos.x) + i16::from(dx),
                i16::from(pos.y) + i16::from(dy),
            )
        })
    }

    /// Write every nonzero shape cell into the arena at `pos`
    ///
    /// Cells that fall outside the grid are skipped.
    pub fn merge(&mut self, shape: &Shape, pos: Offset) {
        for (dx, dy, value) in shape.filled() {
            self.set_at(
                i16::from(pos.x) + i16::from(dx),
                i16::from(pos.y) + i16::from(dy),
                value,
            );
        }
    }

    /// Remove full rows from the bottom up, scoring 10, 20, 40, ... per row
    ///
    /// Row 0 is never examined, so a full top row stays in place.
    pub fn sweep(&mut self) -> Sweep {
        let mut sweep = Sweep::default();
        let mut multiplier = 1;
        let mut y = ARENA_HEIGHT - 1;

        while y > 0 {
            if !self.is_row_full(y) {
                y -= 1;
                continue;
            }

            // Shift rows 0..y down by one and blank the top. The same index
            // is examined again since it now holds the row from above.
            self.rows.copy_within(0..y, 1);
            self.rows[0] = [EMPTY; ARENA_WIDTH];

            sweep.rows.push(y as u8);
            sweep.score += multiplier * LINE_CLEAR_BASE_SCORE;
            multiplier *= 2;
        }

        sweep
    }

    /// Clear the entire arena
    pub fn clear(&mut self) {
        self.rows = [[EMPTY; ARENA_WIDTH]; ARENA_HEIGHT];
    }

    /// Whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|&c| c == EMPTY)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
