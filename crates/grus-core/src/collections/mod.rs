//! Generic container substrate
//!
//! The data structures every other layer of this crate is built on:
//! a dynamic array list, an open-addressing hash map, a binary-heap
//! priority queue, and the stack/queue work lists. All are implemented
//! from first principles; none wrap the standard library's associative
//! containers or heap.

pub mod array_list;
pub mod map;
pub mod pq;
pub mod queue;
pub mod stack;

pub use array_list::ArrayList;
pub use map::LinearProbingMap;
pub use pq::{Orientation, PriorityQueue};
pub use queue::Queue;
pub use stack::Stack;
