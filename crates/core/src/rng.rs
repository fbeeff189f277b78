//! RNG module - random source for food placement
//!
//! Food placement reseeds the generator every time food is eaten, so the
//! generator must support cheap reseeding. A simple LCG is plenty for picking
//! one of 64 cells, and it keeps games reproducible under test.

/// Source of pseudo-random numbers used by food placement.
pub trait RandomSource {
    /// Restart the sequence from `seed`.
    fn reseed(&mut self, seed: u32);

    /// Next value in the sequence.
    fn next_u32(&mut self) -> u32;

    /// Random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
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

    /// Current internal state (for debugging and snapshots)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG cycle with a tiny period; callers
        // reduce modulo 8, so hand them the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
