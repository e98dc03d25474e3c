//! Binary-heap priority queue
//!
//! Implicit binary heap over 1-indexed positions `[1..size]`, min- or
//! max-oriented, fixed at construction. Membership lookup is a linear
//! scan; `improve_priority` re-heapifies upward only, on the assumption
//! that priorities only ever improve (the relaxation discipline used by
//! Dijkstra and the corridor tree).

/// Heap ordering fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Min,
    Max,
}

impl Orientation {
    /// True when `a` is equal-or-better than `b` under this ordering.
    fn at_least_as_good<P: PartialOrd>(&self, a: &P, b: &P) -> bool {
        match self {
            Orientation::Min => a <= b,
            Orientation::Max => a >= b,
        }
    }

    /// True when `a` is strictly better than `b` under this ordering.
    fn strictly_better<P: PartialOrd>(&self, a: &P, b: &P) -> bool {
        match self {
            Orientation::Min => a < b,
            Orientation::Max => a > b,
        }
    }
}

#[derive(Debug, Clone)]
struct PqEntry<P, V> {
    priority: P,
    value: V,
}

/// Priority queue over values `V` keyed by an external priority `P`.
///
/// Invariant: for every position `i > 1`, the entry at `i / 2` is
/// equal-or-better than the entry at `i`.
#[derive(Debug, Clone)]
pub struct PriorityQueue<P, V> {
    // entries[pos - 1] holds heap position pos
    entries: Vec<PqEntry<P, V>>,
    orientation: Orientation,
}

impl<P: PartialOrd + Copy, V: PartialEq> PriorityQueue<P, V> {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            entries: Vec::new(),
            orientation,
        }
    }

    pub fn min() -> Self {
        Self::new(Orientation::Min)
    }

    pub fn max() -> Self {
        Self::new(Orientation::Max)
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn priority_at(&self, pos: usize) -> P {
        self.entries[pos - 1].priority
    }

    fn swap(&mut self, pos1: usize, pos2: usize) {
        self.entries.swap(pos1 - 1, pos2 - 1);
    }

    /// Appends and swims the new entry up to its place. O(log n).
    pub fn insert(&mut self, priority: P, value: V) {
        self.entries.push(PqEntry { priority, value });
        self.swim(self.size());
    }

    /// Removes and returns the best-priority value; `None` when empty.
    pub fn remove(&mut self) -> Option<V> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.size();
        self.swap(1, last);
        let entry = self.entries.pop()?;
        if !self.entries.is_empty() {
            self.sink(1);
        }
        Some(entry.value)
    }

    /// Best-priority value without removing it.
    pub fn peek(&self) -> Option<&V> {
        self.entries.first().map(|e| &e.value)
    }

    /// Heap position of `value` (1-indexed), by linear scan.
    pub fn position_of(&self, value: &V) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| &e.value == value)
            .map(|idx| idx + 1)
    }

    pub fn contains(&self, value: &V) -> bool {
        self.position_of(value).is_some()
    }

    /// Updates `value`'s priority and swims it up, but only when the new
    /// priority is strictly better under the configured ordering. A
    /// worse-or-equal priority is a no-op, not an error; so is an absent
    /// value.
    pub fn improve_priority(&mut self, new_priority: P, value: &V) {
        let Some(pos) = self.position_of(value) else {
            return;
        };
        let current = self.priority_at(pos);
        if !self.orientation.strictly_better(&new_priority, &current) {
            return;
        }
        self.entries[pos - 1].priority = new_priority;
        self.swim(pos);
    }

    /// Moves the entry at `pos` up while its parent compares worse.
    fn swim(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self
                .orientation
                .at_least_as_good(&self.priority_at(parent), &self.priority_at(pos))
            {
                break;
            }
            self.swap(parent, pos);
            pos = parent;
        }
    }

    /// Moves the entry at `pos` down, swapping with the better child,
    /// until the heap property holds.
    fn sink(&mut self, mut pos: usize) {
        let size = self.size();
        while 2 * pos <= size {
            let mut child = 2 * pos;
            if child < size
                && !self
                    .orientation
                    .at_least_as_good(&self.priority_at(child), &self.priority_at(child + 1))
            {
                child += 1;
            }
            if self
                .orientation
                .at_least_as_good(&self.priority_at(pos), &self.priority_at(child))
            {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
    }
}
