/*!
 * Error Types
 * Queue error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Priority queue errors with serialization support
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", rename_all = "snake_case")]
pub enum QueueError {
    #[error("no such element: priority queue is empty")]
    #[diagnostic(
        code(queue::empty),
        help("Check `is_empty()` before calling `max()` or `pop()`, or treat this as end of input.")
    )]
    Empty,
}

/// Result type for priority queue operations
pub type QueueResult<T> = Result<T, QueueError>;
