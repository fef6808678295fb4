//! Drop scheduler.
//!
//! Gravity lives here rather than in the engine: the caller feeds elapsed
//! frame time in and gets told when one `move_down` is due.

use crate::types::DEFAULT_DROP_INTERVAL_MS;

/// Elapsed-time accumulator against a drop interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTimer {
    interval_ms: u32,
    counter_ms: u32,
}

impl DropTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            counter_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn counter_ms(&self) -> u32 {
        self.counter_ms
    }

    /// Add elapsed time; returns true (and restarts from zero) once the
    /// accumulated time is strictly greater than the interval.
    ///
    /// At most one drop is reported per call, however long the frame was.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.counter_ms = self.counter_ms.saturating_add(elapsed_ms);
        if self.counter_ms > self.interval_ms {
            self.counter_ms = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.counter_ms = 0;
    }
}

impl Default for DropTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DROP_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        assert_eq!(DropTimer::default().interval_ms(), 1000);
    }

    #[test]
    fn test_fires_only_past_interval() {
        let mut timer = DropTimer::new(100);
        assert!(!timer.advance(60));
        // Exactly at the interval is not enough
        assert!(!timer.advance(40));
        assert_eq!(timer.counter_ms(), 100);
        assert!(timer.advance(1));
        assert_eq!(timer.counter_ms(), 0);
    }

    #[test]
    fn test_long_frame_fires_once() {
        let mut timer = DropTimer::new(100);
        assert!(timer.advance(550));
        assert_eq!(timer.counter_ms(), 0);
        assert!(!timer.advance(16));
    }

    #[test]
    fn test_reset() {
        let mut timer = DropTimer::new(100);
        timer.advance(90);
        timer.reset();
        assert!(!timer.advance(90));
    }

    #[test]
    fn test_sixty_fps_frames() {
        let mut timer = DropTimer::default();
        let drops = (0..180).filter(|_| timer.advance(16)).count();
        // 63 frames of 16ms pass 1000ms; 180 frames hold two full cycles
        assert_eq!(drops, 2);
    }
}
