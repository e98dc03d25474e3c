//! Open-addressing associative map
//!
//! Linear probing with tombstone deletion, prime capacities and universal
//! hashing. The table never shrinks; growth happens only through rehash.

pub mod entry;
pub mod hashing;
pub mod linear_probing;

pub use hashing::{is_prime, next_prime, UniversalHasher};
pub use linear_probing::{LinearProbingMap, DEFAULT_LOAD_FACTOR};
