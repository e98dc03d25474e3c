//! FIFO queue over the array list
//!
//! Work list for BFS and for the Kahn topological-sort frontier.

use crate::collections::ArrayList;

#[derive(Debug, Clone, Default)]
pub struct Queue<T> {
    items: ArrayList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: ArrayList::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.add_last(item);
    }

    /// Removes and returns the oldest item; `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.remove_first()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn size(&self) -> usize {
        self.items.size()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
