//! RNG module - random sources for piece selection
//!
//! The engine consumes one uniform draw in `[0, 1)` per spawned piece through
//! the [`RandomSource`] trait. Three sources are provided:
//!
//! - [`SimpleRng`]: a seedable LCG, deterministic across platforms
//! - [`rand::rngs::StdRng`]: for callers who already use `rand`
//! - [`ScriptedSource`]: replays a fixed list of piece kinds, for tests and replays

use rand::Rng;

use crate::types::PieceKind;

/// Uniform random numbers in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the thread-local `rand` generator
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

impl RandomSource for rand::rngs::StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Deterministic source that yields a fixed, cycling list of draws
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    units: Vec<f64>,
    index: usize,
}

impl ScriptedSource {
    /// Cycle through the given piece kinds in order
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_core::pieces::random_kind;
    /// use tetris_rules_core::rng::ScriptedSource;
    /// use tetris_rules_core::types::PieceKind;
    ///
    /// let mut src = ScriptedSource::new(&[PieceKind::I, PieceKind::O]);
    /// assert_eq!(random_kind(&mut src), PieceKind::I);
    /// assert_eq!(random_kind(&mut src), PieceKind::O);
    /// assert_eq!(random_kind(&mut src), PieceKind::I);
    /// ```
    pub fn new(kinds: &[PieceKind]) -> Self {
        let count = PieceKind::ALL.len() as f64;
        // Midpoint of each kind's bucket so floor(7 * u) lands on it exactly.
        let units = kinds
            .iter()
            .map(|k| (k.index() as f64 + 0.5) / count)
            .collect();
        Self::from_units(units)
    }

    /// Cycle through raw draws. Values are clamped into `[0, 1)`.
    pub fn from_units(units: Vec<f64>) -> Self {
        let units = units
            .into_iter()
            .map(|u| u.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { units, index: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let u = self.units[self.index % self.units.len()];
        self.index = self.index.wrapping_add(1);
        u
    }
}
