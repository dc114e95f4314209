/*!
 * Queue Node
 * Immutable value/priority pair stored by the priority queue
 */

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A value tagged with a floating-point priority
///
/// The payload type is fixed at compile time by `T`, so values come back out
/// of the queue with their concrete type.
///
/// # Example
///
/// ```
/// use maxpq::Node;
///
/// let node = Node::new("render", 4.5);
/// assert_eq!(node.priority(), 4.5);
/// assert_eq!(*node.value(), "render");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<T> {
    value: T,
    priority: f64,
}

impl<T> Node<T> {
    /// Create a node. Any priority is accepted, including NaN and infinities.
    #[inline]
    pub fn new(value: T, priority: f64) -> Self {
        Self { value, priority }
    }

    #[inline]
    pub fn priority(&self) -> f64 {
        self.priority
    }

    /// Borrow the payload
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the node and return the payload
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub fn into_parts(self) -> (T, f64) {
        (self.value, self.priority)
    }

    /// Whether this node ranks strictly above `other`
    ///
    /// NaN ranks below every other priority (including `-inf`) and ties with
    /// another NaN.
    #[inline]
    pub(crate) fn outranks(&self, other: &Self) -> bool {
        rank(self.priority, other.priority) == Ordering::Greater
    }
}

impl<T> From<(T, f64)> for Node<T> {
    fn from((value, priority): (T, f64)) -> Self {
        Self::new(value, priority)
    }
}

/// Total order over priorities with NaN lowest
#[inline]
fn rank(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
