//! One game driven by one key table and one drop timer.

use crossterm::event::KeyEvent;
use log::debug;

use crate::core::{GameSnapshot, RandomSource, SimpleRng, Tetris};
use crate::map::KeyBindings;
use crate::timer::DropTimer;
use crate::types::Action;

/// Glue between key events, elapsed time and an engine
///
/// Controllers share nothing, so several can run side by side in one
/// process as independent games.
#[derive(Debug, Clone)]
pub struct Controller<R = SimpleRng> {
    game: Tetris<R>,
    bindings: KeyBindings,
    timer: DropTimer,
}

impl<R: RandomSource> Controller<R> {
    pub fn new(game: Tetris<R>, bindings: KeyBindings, timer: DropTimer) -> Self {
        Self {
            game,
            bindings,
            timer,
        }
    }

    /// Apply the action bound to `key`, if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        let action = self.bindings.action_for(key)?;
        debug!("key {:?} -> {}", key.code, action);
        self.game.apply_action(action);
        Some(action)
    }

    /// Advance the drop timer; returns true if a gravity drop was applied
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if self.timer.advance(elapsed_ms) {
            self.game.move_down();
            return true;
        }
        false
    }

    pub fn game(&self) -> &Tetris<R> {
        &self.game
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    pub fn state(&self) -> GameSnapshot {
        self.game.state()
    }
}

impl Controller<SimpleRng> {
    /// Seeded game with the given keys and the default drop interval
    pub fn with_seed(seed: u32, bindings: KeyBindings) -> Self {
        Self::new(Tetris::new(seed), bindings, DropTimer::default())
    }
}
