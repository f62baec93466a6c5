//! Queue: a FIFO sequence of opaque items.
//!
//! Items come out in the order they went in. The same item may occupy
//! several positions; each pop removes only the frontmost instance. The
//! queue never interprets or frees what its items designate.

use std::collections::VecDeque;

#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Enqueue at the tail.
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Dequeue from the head; `None` when the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
