//! Deterministic hashing for tests, so that bucket placement (and therefore collisions) can be
//! chosen up front.

use std::hash::{BuildHasher, Hash, Hasher};

/// A key with an explicit hash. Equality only considers `value`, so two keys can share a hash
/// without being equal.
#[derive(Debug, Clone)]
pub struct Pinned<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> Pinned<T> {
    /// Creates a key that will hash to exactly `hash` under [`PassthroughState`].
    pub const fn new(hash: u64, value: T) -> Pinned<T> {
        Pinned { hash, value }
    }

    /// Consumes the key, returning the wrapped value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for Pinned<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for Pinned<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Pinned<T> {}

/// A hasher that reports the integer it was fed. A single write of up to eight bytes is read as a
/// little-endian integer and becomes the hash unchanged.
#[derive(Debug, Default)]
pub struct Passthrough {
    state: u64,
}

impl Hasher for Passthrough {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0_u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.state = self.state.wrapping_mul(31).wrapping_add(u64::from_le_bytes(word));
        }
    }

    fn write_u64(&mut self, value: u64) {
        self.state = self.state.wrapping_mul(31).wrapping_add(value);
    }
}

/// Builds [`Passthrough`] hashers.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughState;

impl BuildHasher for PassthroughState {
    type Hasher = Passthrough;

    fn build_hasher(&self) -> Self::Hasher {
        Passthrough::default()
    }
}
