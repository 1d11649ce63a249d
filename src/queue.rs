//! A minimal First-In-First-Out queue. [`Tree::bfs`][crate::Tree::bfs] uses one to hold the
//! nodes of the next level while it visits the current one.
//!
//! # Examples
//!
//! ```
//! use linked_bst::Queue;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::collections::VecDeque;

/// An unbounded FIFO queue.
#[derive(Clone, Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds `item` to the tail of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the item at the head of the queue, or `None` if it's empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}
