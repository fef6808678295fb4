//! Game state module - the rules engine
//!
//! [`Tetris`] owns the arena and the falling player piece and exposes the four
//! operations a caller can trigger (left, right, down, rotate) plus a
//! snapshot accessor. There are no timers in here: gravity is just the caller
//! invoking [`Tetris::move_down`] on its own schedule.

use log::{debug, trace};

use crate::arena::Arena;
use crate::pieces::{random_piece, Shape};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{GameSnapshot, PlayerSnapshot};
use crate::types::{Action, Offset, Spin, ARENA_WIDTH};

/// The falling piece: its current orientation, position and the running score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub matrix: Shape,
    pub pos: Offset,
    pub score: u32,
}

impl Player {
    /// Spawn offset for a shape: horizontally centred, top row
    pub fn spawn_offset(shape: &Shape) -> Offset {
        let x = ARENA_WIDTH / 2 - shape.size() / 2;
        Offset::new(x as i8, 0)
    }
}

/// The rules engine
///
/// # Example
///
/// ```
/// use tetris_rules_core::Tetris;
///
/// let mut game = Tetris::new(12345);
/// game.move_left();
/// game.rotate();
/// game.move_down();
///
/// let state = game.state();
/// assert_eq!(state.player.score, 0);
/// assert_eq!(state.arena.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct Tetris<R = SimpleRng> {
    arena: Arena,
    player: Player,
    rng: R,
}

impl Tetris<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }

    /// Create a new game seeded from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::with_source(SimpleRng::from_entropy())
    }
}

impl Default for Tetris<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: RandomSource> Tetris<R> {
    /// Create a new game on an empty arena drawing pieces from `rng`
    pub fn with_source(rng: R) -> Self {
        Self::with_arena(Arena::new(), rng)
    }

    /// Create a new game on a prepared arena
    ///
    /// The first piece is spawned as usual; if it already collides the game
    /// is over immediately and the arena is cleared.
    pub fn with_arena(arena: Arena, mut rng: R) -> Self {
        let matrix = random_piece(&mut rng);
        let mut game = Self {
            arena,
            player: Player {
                matrix,
                pos: Player::spawn_offset(&matrix),
                score: 0,
            },
            rng,
        };
        if game.arena.collide(&game.player.matrix, game.player.pos) {
            game.game_over();
        }
        game
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn move_left(&mut self) {
        self.player_move(-1);
    }

    pub fn move_right(&mut self) {
        self.player_move(1);
    }

    /// Drop one row; lock, sweep and respawn if blocked
    pub fn move_down(&mut self) {
        self.player_drop();
    }

    /// Rotate clockwise with wall kicks
    pub fn rotate(&mut self) {
        self.player_rotate(Spin::Clockwise);
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::MoveDown => self.move_down(),
            Action::Rotate => self.rotate(),
        }
    }

    /// Independent copy of the arena and player
    pub fn state(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Refresh an existing snapshot in place
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.arena = *self.arena.rows();
        out.player = PlayerSnapshot {
            matrix: self.player.matrix,
            pos: self.player.pos,
            score: self.player.score,
        };
    }

    /// Shift horizontally; revert on collision
    pub(crate) fn player_move(&mut self, dir: i8) -> bool {
        self.player.pos.x += dir;
        if self.collides() {
            self.player.pos.x -= dir;
            return false;
        }
        true
    }

    /// Returns true if the piece locked
    pub(crate) fn player_drop(&mut self) -> bool {
        self.player.pos.y += 1;
        if !self.collides() {
            return false;
        }

        self.player.pos.y -= 1;
        self.arena.merge(&self.player.matrix, self.player.pos);
        debug!(
            "locked piece at ({}, {})",
            self.player.pos.x, self.player.pos.y
        );

        let sweep = self.arena.sweep();
        if sweep.rows_cleared() > 0 {
            self.player.score += sweep.score;
            debug!(
                "cleared rows {:?} for {} points (score {})",
                sweep.rows.as_slice(),
                sweep.score,
                self.player.score
            );
        }

        self.player_reset();
        if self.collides() {
            self.game_over();
        }
        true
    }

    /// Rotate, then shift by +1, -2, +3, -4, ... until the piece fits.
    /// The search stops as soon as the next shift is wider than the shape,
    /// before that position is tested, so a 3 or 4 wide shape tries
    /// x+1, x-1 and x+2 only. On failure the starting orientation and
    /// column are restored.
    pub(crate) fn player_rotate(&mut self, spin: Spin) -> bool {
        let origin_x = self.player.pos.x;
        let mut offset: i8 = 1;
        self.player.matrix.rotate(spin);

        while self.collides() {
            self.player.pos.x += offset;
            offset = -(offset + offset.signum());
            if offset > self.player.matrix.width() as i8 {
                self.player.matrix.rotate(spin.reverse());
                self.player.pos.x = origin_x;
                trace!("rotation blocked at x={}", origin_x);
                return false;
            }
        }
        true
    }

    /// Fresh random piece at the spawn position; the score carries over
    fn player_reset(&mut self) {
        self.player.matrix = random_piece(&mut self.rng);
        self.player.pos = Player::spawn_offset(&self.player.matrix);
        trace!("spawned piece at ({}, 0)", self.player.pos.x);
    }

    fn game_over(&mut self) {
        debug!("game over with score {}", self.player.score);
        self.player.score = 0;
        self.arena.clear();
    }

    fn collides(&self) -> bool {
        self.arena.collide(&self.player.matrix, self.player.pos)
    }
}
