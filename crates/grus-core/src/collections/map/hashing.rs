//! Universal hashing and prime-capacity helpers
//!
//! Slot indices come from `((scale * h(key) + shift) mod prime) mod capacity`
//! with `scale`/`shift` randomized per map instance, so a crafted key set
//! cannot force a pathological probe sequence across runs. Table capacities
//! are always prime.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, DefaultHasher, Hash, Hasher};

/// MAD (multiply-add-divide) compression prime. Larger than any table
/// capacity this crate will ever allocate.
pub const COMPRESSION_PRIME: u64 = 109_345_121;

/// Trial-division primality test. Capacities stay well under the range
/// where this matters for construction cost.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i * i <= n {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Smallest prime greater than or equal to `n`.
pub fn next_prime(n: u64) -> u64 {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Per-map universal hash function.
#[derive(Debug, Clone)]
pub struct UniversalHasher {
    prime: u64,
    scale: u64,
    shift: u64,
}

impl UniversalHasher {
    /// Randomized scale/shift drawn through the platform `RandomState`.
    pub fn new() -> Self {
        let seed = RandomState::new().build_hasher().finish();
        Self::with_seed(seed)
    }

    /// Deterministic parameters for reproducible tests.
    pub fn with_seed(seed: u64) -> Self {
        let prime = COMPRESSION_PRIME;
        // scale must be non-zero mod prime
        let scale = seed % (prime - 1) + 1;
        let shift = (seed >> 32) % prime;
        Self {
            prime,
            scale,
            shift,
        }
    }

    /// Table slot for `key` in a table of `capacity` slots.
    pub fn slot_for<K: Hash + ?Sized>(&self, key: &K, capacity: usize) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        let raw = hasher.finish() % self.prime;
        let compressed = (self.scale.wrapping_mul(raw).wrapping_add(self.shift)) % self.prime;
        (compressed % capacity as u64) as usize
    }
}

impl Default for UniversalHasher {
    fn default() -> Self {
        Self::new()
    }
}
