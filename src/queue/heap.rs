/*!
 * Binary Max-Heap
 * Unsynchronized heap storage behind `PriorityQueue`
 */

use super::config::{QueueConfig, ShrinkPolicy};
use crate::errors::{QueueError, QueueResult};
use crate::node::Node;
use tracing::debug;

/// Array-backed binary max-heap of nodes
///
/// Children of index `i` live at `2i + 1` and `2i + 2`. `nodes.len()` is the
/// live count; `capacity` is the logical capacity driven by the growth policy
/// (`2 * (cap + 1)` on a full insert, halved when a pop leaves exactly a
/// quarter of it occupied).
pub(crate) struct Heap<T> {
    nodes: Vec<Node<T>>,
    capacity: usize,
    config: QueueConfig,
}

impl<T> Heap<T> {
    pub fn new(config: QueueConfig) -> Self {
        Self {
            nodes: Vec::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            config,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn peek(&self) -> QueueResult<&Node<T>> {
        self.nodes.first().ok_or(QueueError::Empty)
    }

    pub fn push(&mut self, node: Node<T>) {
        if self.nodes.len() >= self.capacity {
            self.resize(2 * (self.capacity + 1));
        }
        self.nodes.push(node);
        self.swim(self.nodes.len() - 1);
    }

    pub fn pop(&mut self) -> QueueResult<Node<T>> {
        if self.nodes.is_empty() {
            return Err(QueueError::Empty);
        }

        // Last live entry takes the root slot
        let max = self.nodes.swap_remove(0);
        self.sink(0);

        let count = self.nodes.len();
        if self.config.shrink == ShrinkPolicy::QuarterHalve
            && count > 0
            && count == self.capacity / 4
        {
            self.resize(self.capacity / 2);
        }
        Ok(max)
    }

    /// Drop every entry and return to the configured initial capacity
    pub fn clear(&mut self) {
        let dropped = self.nodes.len();
        self.nodes = Vec::with_capacity(self.config.initial_capacity);
        self.capacity = self.config.initial_capacity;
        debug!(dropped, capacity = self.capacity, "Heap cleared");
    }

    fn swim(&mut self, mut x: usize) {
        while x > 0 {
            let parent = (x - 1) >> 1;
            if self.nodes[x].outranks(&self.nodes[parent]) {
                self.nodes.swap(x, parent);
                x = parent;
            } else {
                break;
            }
        }
    }

    fn sink(&mut self, mut x: usize) {
        let len = self.nodes.len();
        loop {
            let mut child = (x << 1) + 1;
            if child >= len {
                break;
            }
            // Ties favour the left child
            if child + 1 < len && self.nodes[child + 1].outranks(&self.nodes[child]) {
                child += 1;
            }
            if self.nodes[child].outranks(&self.nodes[x]) {
                self.nodes.swap(x, child);
                x = child;
            } else {
                break;
            }
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug!(from = self.capacity, to = capacity, len = self.nodes.len(), "Resizing heap storage");
        if capacity > self.nodes.capacity() {
            self.nodes.reserve_exact(capacity - self.nodes.len());
        } else {
            self.nodes.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    /// Check the max-heap property over every live parent/child pair
    #[cfg(test)]
    pub fn is_heap(&self) -> bool {
        (1..self.nodes.len()).all(|i| !self.nodes[i].outranks(&self.nodes[(i - 1) / 2]))
    }
}
