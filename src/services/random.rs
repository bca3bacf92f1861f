//! Randomness for cosmetic output
//!
//! `ping` jitter, the `weather` mood and the matrix rain draw from a
//! `RandomSource`. None of it needs to be unpredictable, only varied, so the
//! production source is a xorshift generator seeded once per process. Tests
//! plug in a fixed source to get deterministic output.

use std::cell::Cell;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hasher};

pub trait RandomSource: std::fmt::Debug {
    /// A value in `[0, 1)`.
    fn next_unit(&self) -> f64;

    /// An index in `0..len`. Returns 0 for an empty range.
    fn next_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }
}

/// xorshift64* generator.
#[derive(Debug)]
pub struct XorShiftRandom {
    state: Cell<u64>,
}

impl XorShiftRandom {
    pub fn with_seed(seed: u64) -> Self {
        // Zero is a fixed point of xorshift
        let seed = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self {
            state: Cell::new(seed),
        }
    }

    /// Seed from the process-wide hasher keys.
    pub fn from_entropy() -> Self {
        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u64(std::process::id() as u64);
        Self::with_seed(hasher.finish())
    }

    fn next_u64(&self) -> u64 {
        let mut x = self.state.get();
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state.set(x);
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl Default for XorShiftRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for XorShiftRandom {
    fn next_unit(&self) -> f64 {
        // 53 high bits give a uniformly spaced double
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.0.clamp(0.0, 0.999_999_999)
    }
}
