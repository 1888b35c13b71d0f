//! Random number abstraction for randomized blinking.

use core::cell::Cell;

/// Trait for abstracting the random number source.
///
/// One source is shared by reference between every channel of a group, so
/// implementations use interior mutability. Access stays on the control-loop thread.
pub trait RandomSource {
    /// Returns a value uniformly drawn from `[min, max)`.
    ///
    /// Returns `min` when the range is empty (`max <= min`).
    fn uniform(&self, min: u64, max: u64) -> u64;

    /// Fair coin flip.
    fn coin_flip(&self) -> bool {
        self.uniform(0, 2) == 1
    }
}

const DEFAULT_SEED: u32 = 0x2545_f491;

/// Marsaglia xorshift generator with 32 bits of state.
///
/// Not suitable for anything but visual effects.
#[derive(Debug)]
pub struct Xorshift32 {
    state: Cell<u32>,
}

impl Xorshift32 {
    /// Creates a generator from a seed. A zero seed is replaced by a fixed constant,
    /// since xorshift never leaves the all-zero state.
    pub const fn new(seed: u32) -> Self {
        let seed = if seed == 0 { DEFAULT_SEED } else { seed };
        Self {
            state: Cell::new(seed),
        }
    }

    fn next_u32(&self) -> u32 {
        let mut x = self.state.get();
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state.set(x);
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl RandomSource for Xorshift32 {
    fn uniform(&self, min: u64, max: u64) -> u64 {
        if max <= min {
            return min;
        }

        let span = max - min;
        let draw = (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32());
        min + draw % span
    }
}
