//! Seedable pseudo-random number generation.
//!
//! Deck sampling is the only source of randomness in a game, and the
//! generator is threaded explicitly through everything that samples. Given
//! the same seed, a whole match replays bit-identically.

// RNG reduction uses an intentional truncating cast
#![allow(clippy::cast_possible_truncation)]

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate the next random u64.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random u32 in `[0, max)`. Returns 0 when `max` is 0.
    pub fn next_u32(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u64() % u64::from(max)) as u32
    }
}
