//! Seeded pseudo-random stream for reproducible readings.
//!
//! A 32-bit linear congruential generator (`a = 1664525`, `c = 1013904223`,
//! `m = 2^32`). The arithmetic is fixed: saved readings are reproduced from
//! nothing but their seed, so the sequence for a given seed must never change.

use chrono::Utc;
use rand::RngCore;

/// LCG multiplier.
pub const MULTIPLIER: u64 = 1_664_525;
/// LCG increment.
pub const INCREMENT: u64 = 1_013_904_223;
/// LCG modulus (2^32).
pub const MODULUS: u64 = 1 << 32;

/// Deterministic value stream in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a seed.
    ///
    /// Seeds are reduced modulo 2^32, so every seed below 2^32 starts from
    /// itself and wider seeds (millisecond timestamps) are folded in
    /// deterministically.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Create a generator seeded from the current time.
    ///
    /// Not reproducible unless the caller records the seed; prefer
    /// [`seed_from_clock`] plus [`SeededRng::new`] when it matters.
    pub fn from_clock() -> Self {
        Self::new(seed_from_clock())
    }

    /// Current raw state.
    pub fn state(&self) -> u32 {
        self.state as u32
    }

    /// Advance the generator and return the new raw 32-bit state.
    pub fn next_state(&mut self) -> u32 {
        // state < 2^32, so MULTIPLIER * state + INCREMENT stays below 2^53.
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state as u32
    }

    /// Advance the generator and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_state()) / MODULUS as f64
    }
}

impl Iterator for SeededRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.next_state()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_state());
        let lo = u64::from(self.next_state());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_state().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Current Unix time in milliseconds, for callers that did not supply a seed.
pub fn seed_from_clock() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Build a closure that yields the seeded value stream.
///
/// `None` seeds from the clock.
pub fn create_seeded_rng(seed: Option<u64>) -> impl FnMut() -> f64 {
    let mut rng = seed.map_or_else(SeededRng::from_clock, SeededRng::new);
    move || rng.next_f64()
}
