//! Map table slots
//!
//! Each slot is tri-state: never used, occupied, or tombstoned (removed).
//! Tombstones keep probe chains intact for keys placed after the removed
//! entry; lookups probe past them, insertions reuse them.

/// One slot of the open-addressing table.
#[derive(Debug, Clone)]
pub enum Slot<K, V> {
    /// Never held an entry; terminates probe chains.
    Empty,
    /// Live key/value pair.
    Occupied { key: K, value: V },
    /// Held an entry that was removed; probe-transparent for lookups,
    /// a preferred reuse target for insertions.
    Tombstone,
}

impl<K, V> Slot<K, V> {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Slot::Tombstone)
    }

    pub fn key(&self) -> Option<&K> {
        match self {
            Slot::Occupied { key, .. } => Some(key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Replaces this slot with a tombstone, returning the entry if it
    /// was occupied.
    pub fn bury(&mut self) -> Option<(K, V)> {
        match std::mem::replace(self, Slot::Tombstone) {
            Slot::Occupied { key, value } => Some((key, value)),
            other => {
                // Burying a non-occupied slot must not resurrect state.
                *self = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bury_occupied() {
        let mut slot = Slot::Occupied {
            key: "k",
            value: 1,
        };
        assert_eq!(slot.bury(), Some(("k", 1)));
        assert!(slot.is_tombstone());
    }

    #[test]
    fn test_bury_empty_stays_empty() {
        let mut slot: Slot<&str, i32> = Slot::Empty;
        assert_eq!(slot.bury(), None);
        assert!(!slot.is_tombstone());
        assert!(!slot.is_occupied());
    }
}
