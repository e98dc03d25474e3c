//! LIFO stack over the array list
//!
//! Used by the traversal layer for path reconstruction and by the
//! iterative DFS work loop.

use crate::collections::ArrayList;

#[derive(Debug, Clone, Default)]
pub struct Stack<T> {
    items: ArrayList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            items: ArrayList::new(),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.add_last(item);
    }

    /// Removes and returns the most recently pushed item; `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.remove_last()
    }

    pub fn top(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        let last = self.items.size().checked_sub(1)?;
        self.items.get_mut(last)
    }

    pub fn size(&self) -> usize {
        self.items.size()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drains the stack into a list, most recently pushed first.
    pub fn drain(mut self) -> ArrayList<T> {
        let mut out = ArrayList::with_capacity(self.size());
        while let Some(item) = self.pop() {
            out.add_last(item);
        }
        out
    }
}
