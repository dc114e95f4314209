/*!
 * maxpq
 * Thread-safe max-priority queue backed by a binary heap
 */

pub mod errors;
pub mod node;
pub mod queue;
pub mod tracer;

// Re-exports
pub use errors::{QueueError, QueueResult};
pub use node::Node;
pub use queue::{PriorityQueue, QueueConfig, ShrinkPolicy};
pub use tracer::init_tracing;
