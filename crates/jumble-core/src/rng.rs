//! Bounded pseudo-random draws for the reordering engines.
//!
//! Every engine decision (sub-block boundaries, reversal, swap picks) flows
//! through [`RandomSource`]. Generators are owned by the engine instance and
//! seeded once, so a fixed seed reproduces a block's reordering exactly.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of bounded natural numbers.
///
/// # Bound convention
///
/// `draw_offset(lower, upper)` returns `(next_raw() % upper) + lower`, so the
/// result lies in `[lower, lower + upper - 1]`, **not** `[lower, upper]`.
/// `upper` is a modulus, not an inclusive ceiling. Callers build their bounds
/// with this in mind; tests encode this range rather than the closed interval.
///
/// `upper == 0` is a caller bug. Debug builds assert; release builds return
/// `lower` without consuming entropy.
pub trait RandomSource {
    /// Next raw 64-bit value from the generator.
    fn next_raw(&mut self) -> u64;

    /// Natural number in `[0, upper - 1]`.
    #[inline]
    fn draw(&mut self, upper: usize) -> usize {
        self.draw_offset(0, upper)
    }

    /// Natural number in `[lower, lower + upper - 1]`.
    #[inline]
    fn draw_offset(&mut self, lower: usize, upper: usize) -> usize {
        debug_assert!(upper > 0, "random draw with zero modulus");
        if upper == 0 {
            return lower;
        }
        (self.next_raw() % upper as u64) as usize + lower
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_raw(&mut self) -> u64 {
        (**self).next_raw()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_raw(&mut self) -> u64 {
        (**self).next_raw()
    }
}

const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Xorshift64 generator (13/7/17 triple).
///
/// Seeds pass through one splitmix64 round so that adjacent seeds (and the
/// small values a wall clock produces) start from unrelated states.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Self {
        let state = splitmix64(seed);
        Self {
            state: if state == 0 {
                ZERO_SEED_REPLACEMENT
            } else {
                state
            },
        }
    }

    /// Seed from the wall clock: microseconds-within-second times seconds
    /// since the Unix epoch. Taken once per generator.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RandomSource for XorShift64 {
    #[inline]
    fn next_raw(&mut self) -> u64 {
        self.step()
    }
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Wall-clock derived seed (`micros * secs`, wrapping).
pub fn clock_seed() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.subsec_micros() as u64).wrapping_mul(now.as_secs())
}

/// How an engine's generator gets its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeedMode {
    /// Seed once from the wall clock at construction.
    #[default]
    Clock,
    /// Fixed seed; reproducible output for identical input.
    Fixed(u64),
}

impl SeedMode {
    pub fn generator(self) -> XorShift64 {
        match self {
            SeedMode::Clock => XorShift64::from_clock(),
            SeedMode::Fixed(seed) => XorShift64::new(seed),
        }
    }
}

/// Always yields the same raw value.
///
/// `ConstantSource(0)` makes every draw return its lower bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantSource(pub u64);

impl RandomSource for ConstantSource {
    #[inline]
    fn next_raw(&mut self) -> u64 {
        self.0
    }
}

/// Replays a scripted list of raw values, wrapping around at the end.
///
/// An empty script behaves like `ConstantSource(0)`.
#[derive(Debug, Clone)]
pub struct SequenceSource<'a> {
    values: &'a [u64],
    position: usize,
}

impl<'a> SequenceSource<'a> {
    pub fn new(values: &'a [u64]) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// Number of raw values consumed so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource<'_> {
    fn next_raw(&mut self) -> u64 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// Adapter for any [`rand::RngCore`] generator.
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandSource<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandomSource for RandSource<R> {
    #[inline]
    fn next_raw(&mut self) -> u64 {
        self.0.next_u64()
    }
}
