//! Deterministic byte-stream hashers.
//!
//! [`ChainMap::new`](crate::ChainMap::new) defaults to the standard
//! library's randomized state; any `BuildHasher` plugs in through
//! `with_hasher`. The hashers here are for callers that want repeatable
//! slot placement across runs and processes. Both are deterministic
//! (equal byte streams always hash equal) and neither resists crafted
//! collisions.

use core::hash::{BuildHasherDefault, Hasher};

/// Jenkins' one-at-a-time hash over the written byte stream.
#[derive(Clone, Debug, Default)]
pub struct OneAtATime {
    state: u32,
}

impl Hasher for OneAtATime {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = self.state.wrapping_add(u32::from(b));
            self.state = self.state.wrapping_add(self.state << 10);
            self.state ^= self.state >> 6;
        }
    }

    fn finish(&self) -> u64 {
        let mut h = self.state;
        h = h.wrapping_add(h << 3);
        h ^= h >> 11;
        h = h.wrapping_add(h << 15);
        u64::from(h)
    }
}

/// Builds [`OneAtATime`] hashers.
pub type OneAtATimeState = BuildHasherDefault<OneAtATime>;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Fibonacci multiplicative hash over the written byte stream.
#[derive(Clone, Debug, Default)]
pub struct Multiplicative {
    state: u64,
}

impl Hasher for Multiplicative {
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = (self.state ^ u64::from(b)).wrapping_mul(GOLDEN_GAMMA);
        }
    }

    fn finish(&self) -> u64 {
        let h = self.state;
        h ^ (h >> 32)
    }
}

/// Builds [`Multiplicative`] hashers.
pub type MultiplicativeState = BuildHasherDefault<Multiplicative>;

/// The deterministic state this crate prefers when asked for one.
pub type DeterministicState = OneAtATimeState;
