//! Open-addressing hash map with linear probing
//!
//! Prime-sized table, universal hashing, tombstone deletion, and a
//! load-factor-triggered rehash into the next prime at least twice the
//! current capacity. Probe loops are bounded by the table capacity; a full
//! table with no matching key is a capacity-exhaustion error, never a spin.

use std::hash::Hash;

use crate::collections::map::entry::Slot;
use crate::collections::map::hashing::{next_prime, UniversalHasher};
use crate::collections::ArrayList;
use crate::error::{GrusError, Result};

/// Rehash threshold used when callers do not specify one.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.5;

/// Outcome of a bounded linear probe for a key.
enum Probe {
    /// The key occupies this slot.
    Found(usize),
    /// The key is absent; this is the slot an insertion should claim
    /// (the first tombstone seen, else the terminating empty slot).
    Available(usize),
    /// The whole table was scanned: no match and no free slot.
    Exhausted,
}

/// Keyed storage for graph vertices, visited sets and distance tables.
///
/// `key_set`/`value_set` return entries in table scan order, which varies
/// with capacity and the per-map hash parameters; callers must not rely
/// on it.
#[derive(Debug, Clone)]
pub struct LinearProbingMap<K, V> {
    table: Vec<Slot<K, V>>,
    size: usize,
    load_limit: f64,
    hasher: UniversalHasher,
}

impl<K: Hash + Eq, V> LinearProbingMap<K, V> {
    /// Creates a map sized for `expected` elements at `load_factor`.
    ///
    /// Capacity is the smallest prime ≥ `expected / load_factor`. Fails on
    /// a zero expectation or a load factor outside (0, 1].
    pub fn new(expected: usize, load_factor: f64) -> Result<Self> {
        Self::build(expected, load_factor, UniversalHasher::new())
    }

    /// `new` with the default load factor of 0.5.
    pub fn with_expected(expected: usize) -> Result<Self> {
        Self::new(expected, DEFAULT_LOAD_FACTOR)
    }

    /// Deterministic hash parameters for reproducible tests.
    pub fn with_seed(expected: usize, load_factor: f64, seed: u64) -> Result<Self> {
        Self::build(expected, load_factor, UniversalHasher::with_seed(seed))
    }

    fn build(expected: usize, load_factor: f64, hasher: UniversalHasher) -> Result<Self> {
        if expected == 0 || !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(GrusError::InvalidSizing {
                expected,
                load_factor,
            });
        }
        let capacity = next_prime((expected as f64 / load_factor).ceil() as u64) as usize;
        Ok(Self {
            table: Self::empty_table(capacity),
            size: 0,
            load_limit: load_factor,
            hasher,
        })
    }

    fn empty_table(capacity: usize) -> Vec<Slot<K, V>> {
        let mut table = Vec::with_capacity(capacity);
        table.resize_with(capacity, || Slot::Empty);
        table
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Current load factor: size / capacity.
    pub fn load(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Bounded linear probe from the key's hash slot.
    ///
    /// Stops on an exact key match or on a never-used slot; tombstones are
    /// recorded as reuse candidates and probed past. At most `capacity`
    /// slots are examined.
    fn probe(&self, key: &K) -> Probe {
        let capacity = self.capacity();
        let mut pos = self.hasher.slot_for(key, capacity);
        let mut first_available: Option<usize> = None;

        for _ in 0..capacity {
            match &self.table[pos] {
                Slot::Occupied { key: k, .. } if k == key => return Probe::Found(pos),
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    if first_available.is_none() {
                        first_available = Some(pos);
                    }
                }
                Slot::Empty => return Probe::Available(first_available.unwrap_or(pos)),
            }
            pos = (pos + 1) % capacity;
        }

        match first_available {
            Some(pos) => Probe::Available(pos),
            None => Probe::Exhausted,
        }
    }

    fn raw_insert(&mut self, key: K, value: V) -> Result<()> {
        match self.probe(&key) {
            Probe::Found(pos) => {
                if let Some(slot_value) = self.table[pos].value_mut() {
                    *slot_value = value;
                }
            }
            Probe::Available(pos) => {
                self.table[pos] = Slot::Occupied { key, value };
                self.size += 1;
            }
            Probe::Exhausted => {
                return Err(GrusError::MapCapacityExhausted {
                    capacity: self.capacity(),
                })
            }
        }
        Ok(())
    }

    /// Inserts or overwrites `key`. Overwriting does not change size.
    /// Rehashes into a larger prime table when the load factor exceeds
    /// the configured limit afterwards.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        self.raw_insert(key, value)?;
        if self.load() > self.load_limit {
            self.rehash()?;
        }
        Ok(())
    }

    /// Reinserts every live entry into a table of the next prime capacity
    /// ≥ 2× the current one. Tombstones are dropped here.
    fn rehash(&mut self) -> Result<()> {
        let new_capacity = next_prime(2 * self.capacity() as u64) as usize;
        tracing::debug!(
            old_capacity = self.capacity(),
            new_capacity,
            size = self.size,
            "map_rehash"
        );
        let old = std::mem::replace(&mut self.table, Self::empty_table(new_capacity));
        self.size = 0;
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                self.raw_insert(key, value)?;
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match self.probe(key) {
            Probe::Found(pos) => self.table[pos].value(),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.probe(key) {
            Probe::Found(pos) => self.table[pos].value_mut(),
            _ => None,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Tombstones the key's slot and returns the value. Capacity never
    /// shrinks.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.probe(key) {
            Probe::Found(pos) => {
                let (_, value) = self.table[pos].bury()?;
                self.size -= 1;
                Some(value)
            }
            _ => None,
        }
    }

    /// Live entries in table scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.table.iter().filter_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        })
    }
}

impl<K: Hash + Eq + Clone, V> LinearProbingMap<K, V> {
    /// All live keys, in table scan order.
    pub fn key_set(&self) -> ArrayList<K> {
        self.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<K: Hash + Eq, V: Clone> LinearProbingMap<K, V> {
    /// All live values, in table scan order.
    pub fn value_set(&self) -> ArrayList<V> {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}
