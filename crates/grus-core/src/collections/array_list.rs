//! Dynamic array list
//!
//! Ordered, 0-indexed, insertion-order-preserving sequence with O(1)
//! amortized append and O(n) arbitrary insert/delete. Backing storage for
//! the probing map, the priority queue and the traversal work lists, and
//! the sequence type every public contract in this crate returns.

/// An ordered, 0-indexed sequence of `T`.
///
/// Out-of-range positions are reported through `Option`/`bool` returns
/// rather than panics; an empty-list removal is a defined `None` outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Number of logically present elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elements.get_mut(index)
    }

    /// Appends an element at the end. O(1) amortized.
    pub fn add_last(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Inserts an element at position 0. O(n).
    pub fn add_first(&mut self, element: T) {
        self.elements.insert(0, element);
    }

    /// Inserts at `pos` (0 ≤ pos ≤ size). Returns false without mutating
    /// when `pos` is out of range.
    pub fn insert(&mut self, pos: usize, element: T) -> bool {
        if pos > self.elements.len() {
            return false;
        }
        self.elements.insert(pos, element);
        true
    }

    /// Removes and returns the first element.
    pub fn remove_first(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    /// Removes and returns the last element.
    pub fn remove_last(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Removes and returns the element at `pos`.
    pub fn remove(&mut self, pos: usize) -> Option<T> {
        if pos >= self.elements.len() {
            None
        } else {
            Some(self.elements.remove(pos))
        }
    }

    /// Replaces the element at `pos`, returning the previous value.
    pub fn set(&mut self, pos: usize, element: T) -> Option<T> {
        let slot = self.elements.get_mut(pos)?;
        Some(std::mem::replace(slot, element))
    }

    /// Swaps the elements at `pos1` and `pos2`. Returns false when either
    /// position is out of range.
    pub fn exchange(&mut self, pos1: usize, pos2: usize) -> bool {
        if pos1 >= self.elements.len() || pos2 >= self.elements.len() {
            return false;
        }
        self.elements.swap(pos1, pos2);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Sorts the list in place with merge sort.
    ///
    /// `le(a, b)` must return true when `a` sorts at-or-before `b`;
    /// the sort is stable under that convention.
    pub fn sort_by<F>(&mut self, le: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        let items = std::mem::take(&mut self.elements);
        self.elements = merge_sort(items, &le);
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Position of the first element equal to `element`, if present.
    /// Linear scan.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }
}

impl<T: Clone> ArrayList<T> {
    /// Copy of up to `count` elements starting at `start`. Out-of-range
    /// starts yield an empty list.
    pub fn sub_list(&self, start: usize, count: usize) -> ArrayList<T> {
        if start >= self.elements.len() {
            return ArrayList::new();
        }
        let end = usize::min(start + count, self.elements.len());
        ArrayList {
            elements: self.elements[start..end].to_vec(),
        }
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

fn merge_sort<T, F>(items: Vec<T>, le: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }
    let mut left = items;
    let right = left.split_off(left.len() / 2);
    merge(merge_sort(left, le), merge_sort(right, le), le)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, le: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut l = left.into_iter().peekable();
    let mut r = right.into_iter().peekable();
    loop {
        let take_left = match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => le(a, b),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        if take_left {
            if let Some(item) = l.next() {
                out.push(item);
            }
        } else if let Some(item) = r.next() {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut list = ArrayList::new();
        for i in 0..10 {
            list.add_last(i);
        }
        assert_eq!(list.size(), 10);
        for i in 0..10 {
            assert_eq!(list.get(i), Some(&i));
        }
    }

    #[test]
    fn test_insert_and_remove() {
        let mut list: ArrayList<i32> = vec![1, 2, 4].into();
        assert!(list.insert(2, 3));
        assert_eq!(list.size(), 4);
        assert_eq!(list.get(2), Some(&3));

        assert!(!list.insert(9, 99));
        assert_eq!(list.size(), 4);

        assert_eq!(list.remove(0), Some(1));
        assert_eq!(list.remove(10), None);
        assert_eq!(list.size(), 3);
    }

    #[test]
    fn test_empty_removals_are_none() {
        let mut list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.remove_first(), None);
        assert_eq!(list.remove_last(), None);
        assert!(list.first().is_none());
    }

    #[test]
    fn test_index_of() {
        let list: ArrayList<&str> = vec!["a", "b", "c"].into();
        assert_eq!(list.index_of(&"b"), Some(1));
        assert_eq!(list.index_of(&"z"), None);
    }

    #[test]
    fn test_exchange_and_set() {
        let mut list: ArrayList<i32> = vec![1, 2, 3].into();
        assert!(list.exchange(0, 2));
        assert_eq!(list.get(0), Some(&3));
        assert_eq!(list.set(1, 9), Some(2));
        assert!(!list.exchange(0, 5));
    }

    #[test]
    fn test_sub_list() {
        let list: ArrayList<i32> = vec![1, 2, 3, 4, 5].into();
        assert_eq!(list.sub_list(1, 3), vec![2, 3, 4].into());
        assert_eq!(list.sub_list(3, 10), vec![4, 5].into());
        assert!(list.sub_list(9, 2).is_empty());
    }

    #[test]
    fn test_merge_sort() {
        let mut list: ArrayList<i32> = vec![5, 3, 8, 1, 9, 2, 7].into();
        list.sort_by(|a, b| a <= b);
        let sorted: Vec<i32> = list.into_iter().collect();
        assert_eq!(sorted, vec![1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        // Sort pairs by first component only; second component tracks
        // original order.
        let mut list: ArrayList<(i32, usize)> =
            vec![(1, 0), (0, 1), (1, 2), (0, 3), (1, 4)].into();
        list.sort_by(|a, b| a.0 <= b.0);
        let sorted: Vec<(i32, usize)> = list.into_iter().collect();
        assert_eq!(sorted, vec![(0, 1), (0, 3), (1, 0), (1, 2), (1, 4)]);
    }
}
