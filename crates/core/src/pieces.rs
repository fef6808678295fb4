//! Pieces module - the piece catalog and shape rotation
//!
//! Seven fixed templates, one per [`PieceKind`]. Templates are constants and
//! are never handed out by reference: every lookup returns an owned [`Shape`]
//! that the caller is free to rotate.

use crate::rng::RandomSource;
use crate::types::{Cell, PieceError, PieceKind, Spin, EMPTY, MAX_SHAPE_SIZE};

type Grid = [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

/// Square cell pattern of a piece in its current orientation
///
/// Only the top-left `size x size` block of `cells` is meaningful; the rest
/// stays zero. Shapes are square by construction, which the transpose-based
/// rotation relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: Grid,
}

impl Shape {
    /// Build a shape from square rows
    ///
    /// Returns `None` if the rows are not square or larger than 4x4.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_SHAPE_SIZE {
            return None;
        }
        let mut cells = [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            cells[y][..size].copy_from_slice(row);
        }
        Some(Self {
            size: size as u8,
            cells,
        })
    }

    /// Side length (2, 3 or 4 for catalog pieces)
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Width of the bounding box. Equal to [`Shape::size`].
    pub fn width(&self) -> usize {
        self.size()
    }

    /// Cell at `(x, y)`, or `None` outside the bounding box
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        Some(self.cells[y][x])
    }

    /// Rows of the bounding box, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let size = self.size();
        self.cells[..size].iter().map(move |row| &row[..size])
    }

    /// Nonzero cells as `(x, y, value)` relative to the top-left corner
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != EMPTY)
                .map(move |(x, &v)| (x as i8, y as i8, v))
        })
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Rotate 90° in place: transpose, then reverse each row (clockwise) or
    /// the row order (counter-clockwise)
    pub fn rotate(&mut self, spin: Spin) {
        let size = self.size();
        for y in 0..size {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }
        match spin {
            Spin::Clockwise => {
                for row in &mut self.cells[..size] {
                    row[..size].reverse();
                }
            }
            Spin::CounterClockwise => self.cells[..size].reverse(),
        }
    }

    /// Rotated copy; `self` is left untouched
    pub fn rotated(&self, spin: Spin) -> Self {
        let mut out = *self;
        out.rotate(spin);
        out
    }
}

impl Default for Shape {
    /// A 1x1 empty shape
    fn default() -> Self {
        template(1, [[EMPTY; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE])
    }
}

const fn template(size: u8, cells: Grid) -> Shape {
    Shape { size, cells }
}

const PIECE_T: Shape = template(3, [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0; 4]]);

const PIECE_O: Shape = template(2, [[2, 2, 0, 0], [2, 2, 0, 0], [0; 4], [0; 4]]);

const PIECE_L: Shape = template(3, [[0, 3, 0, 0], [0, 3, 0, 0], [0, 3, 3, 0], [0; 4]]);

const PIECE_J: Shape = template(3, [[0, 4, 0, 0], [0, 4, 0, 0], [4, 4, 0, 0], [0; 4]]);

const PIECE_I: Shape = template(
    4,
    [[0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0], [0, 5, 0, 0]],
);

const PIECE_S: Shape = template(3, [[0, 6, 6, 0], [6, 6, 0, 0], [0, 0, 0, 0], [0; 4]]);

const PIECE_Z: Shape = template(3, [[7, 7, 0, 0], [0, 7, 7, 0], [0, 0, 0, 0], [0; 4]]);

/// Get an owned copy of the template for a piece kind
pub fn create_piece(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::T => PIECE_T,
        PieceKind::O => PIECE_O,
        PieceKind::L => PIECE_L,
        PieceKind::J => PIECE_J,
        PieceKind::I => PIECE_I,
        PieceKind::S => PIECE_S,
        PieceKind::Z => PIECE_Z,
    }
}

/// Look up a template by name ("T", "o", ...)
///
/// # Examples
///
/// ```
/// use tetris_rules_core::pieces::piece_by_name;
///
/// let o = piece_by_name("O").unwrap();
/// assert_eq!(o.to_rows(), vec![vec![2, 2], vec![2, 2]]);
/// assert!(piece_by_name("W").is_err());
/// ```
pub fn piece_by_name(name: &str) -> Result<Shape, PieceError> {
    name.parse::<PieceKind>().map(create_piece)
}

/// Pick a kind uniformly: `floor(7 * u)` over the catalog order
pub fn random_kind(rng: &mut impl RandomSource) -> PieceKind {
    let count = PieceKind::ALL.len();
    let idx = (count as f64 * rng.next_unit()).floor() as usize;
    PieceKind::ALL[idx.min(count - 1)]
}

/// Owned copy of a uniformly chosen template
pub fn random_piece(rng: &mut impl RandomSource) -> Shape {
    create_piece(random_kind(rng))
}
