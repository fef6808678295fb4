use crate::pieces::Shape;
use crate::types::{Cell, Offset, ARENA_HEIGHT, ARENA_WIDTH, EMPTY};

/// Arena grid by value, row 0 first
pub type ArenaGrid = [[Cell; ARENA_WIDTH]; ARENA_HEIGHT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSnapshot {
    pub matrix: Shape,
    pub pos: Offset,
    pub score: u32,
}

/// Read-only copy of the engine state
///
/// Everything is held by value, so editing a snapshot never reaches back
/// into the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub arena: ArenaGrid,
    pub player: PlayerSnapshot,
}

impl GameSnapshot {
    /// Arena with the player's cells painted on top
    ///
    /// Player cells outside the grid are dropped.
    pub fn composite(&self) -> ArenaGrid {
        let mut grid = self.arena;
        for (dx, dy, value) in self.player.matrix.filled() {
            let x = self.player.pos.x as i16 + dx as i16;
            let y = self.player.pos.y as i16 + dy as i16;
            if (0..ARENA_WIDTH as i16).contains(&x) && (0..ARENA_HEIGHT as i16).contains(&y) {
                grid[y as usize][x as usize] = value;
            }
        }
        grid
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            arena: [[EMPTY; ARENA_WIDTH]; ARENA_HEIGHT],
            player: PlayerSnapshot {
                matrix: Shape::default(),
                pos: Offset::default(),
                score: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::create_piece;
    use crate::types::PieceKind;

    #[test]
    fn composite_overlays_player() {
        let mut snap = GameSnapshot::default();
        snap.arena[19][0] = 4;
        snap.player.matrix = create_piece(PieceKind::O);
        snap.player.pos = Offset::new(5, 0);

        let grid = snap.composite();
        assert_eq!(grid[19][0], 4);
        assert_eq!(grid[0][5], 2);
        assert_eq!(grid[1][6], 2);
        assert_eq!(grid[0][4], 0);
        // Source arena untouched
        assert_eq!(snap.arena[0][5], 0);
    }

    #[test]
    fn composite_drops_cells_outside_grid() {
        let mut snap = GameSnapshot::default();
        snap.player.matrix = create_piece(PieceKind::I);
        snap.player.pos = Offset::new(-1, 18);

        let grid = snap.composite();
        assert_eq!(grid[18][0], 5);
        assert_eq!(grid[19][0], 5);
    }
}
