/*!
 * Priority Queue Module
 *
 * Binary max-heap storage guarded by a single lock:
 * - `heap`: unsynchronized array heap with doubling growth and quarter-triggered shrink
 * - `priority`: the thread-safe `PriorityQueue` front end
 * - `config`: construction-time tuning
 */

mod config;
mod heap;
mod priority;

pub use config::{QueueConfig, ShrinkPolicy};
pub use priority::PriorityQueue;
