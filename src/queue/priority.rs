/*!
 * Priority Queue
 * Thread-safe max-priority queue (highest priority first)
 */

use super::config::QueueConfig;
use super::heap::Heap;
use crate::errors::QueueResult;
use crate::node::Node;
use parking_lot::Mutex;
use std::fmt;
use tracing::trace;

/// Thread-safe max-priority queue
///
/// Every operation holds one exclusive lock for its whole duration, so
/// operations are linearizable. Nothing blocks waiting for entries: `pop()` on
/// an empty queue fails immediately with [`QueueError::Empty`](crate::QueueError::Empty).
///
/// Share between threads with `Arc<PriorityQueue<T>>`.
///
/// # Example
///
/// ```
/// use maxpq::{Node, PriorityQueue};
///
/// let queue = PriorityQueue::new();
/// queue.insert(Node::new("low", 1.0));
/// queue.insert(Node::new("high", 10.0));
///
/// assert_eq!(queue.pop().unwrap().into_value(), "high");
/// assert_eq!(queue.size(), 1);
/// ```
pub struct PriorityQueue<T> {
    inner: Mutex<Heap<T>>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue with zero capacity
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Self {
        Self {
            inner: Mutex::new(Heap::new(config)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Number of live entries
    pub fn size(&self) -> usize {
        self.inner.lock().len()
    }

    /// Logical storage capacity under the growth/shrink policy
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Add a node. Never fails.
    pub fn insert(&self, node: Node<T>) {
        let mut heap = self.inner.lock();
        let priority = node.priority();
        heap.push(node);
        trace!(priority, size = heap.len(), "Inserted node");
    }

    /// Insert many nodes under a single lock acquisition
    pub fn extend<I>(&self, nodes: I)
    where
        I: IntoIterator<Item = Node<T>>,
    {
        let mut heap = self.inner.lock();
        let before = heap.len();
        for node in nodes {
            heap.push(node);
        }
        trace!(added = heap.len() - before, size = heap.len(), "Inserted batch");
    }

    /// Highest-priority node, left in place
    pub fn max(&self) -> QueueResult<Node<T>>
    where
        T: Clone,
    {
        self.inner.lock().peek().cloned()
    }

    /// Inspect the highest-priority node without cloning it
    ///
    /// The queue stays locked while `f` runs; `f` must not call back into the
    /// same queue.
    pub fn peek_with<F, R>(&self, f: F) -> QueueResult<R>
    where
        F: FnOnce(&Node<T>) -> R,
    {
        self.inner.lock().peek().map(f)
    }

    /// Remove and return the highest-priority node
    pub fn pop(&self) -> QueueResult<Node<T>> {
        let mut heap = self.inner.lock();
        let node = heap.pop()?;
        trace!(priority = node.priority(), size = heap.len(), "Popped node");
        Ok(node)
    }

    /// Remove every node, highest priority first
    pub fn drain(&self) -> Vec<Node<T>> {
        let mut heap = self.inner.lock();
        let mut drained = Vec::with_capacity(heap.len());
        while let Ok(node) = heap.pop() {
            drained.push(node);
        }
        trace!(drained = drained.len(), "Drained queue");
        drained
    }

    /// Drop all entries, returning the queue to its freshly-built state
    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Node<T>> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        let queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heap = self.inner.lock();
        f.debug_struct("PriorityQueue")
            .field("size", &heap.len())
            .field("capacity", &heap.capacity())
            .finish()
    }
}
