//! Error type for queue operations

use std::fmt;

/// Error type for partial queue operations
///
/// `peek`, `pop`, and `replace` need an extreme element to act on; when the
/// queue holds none they return this error instead of a sentinel value,
/// since the element type is arbitrary and no in-band sentinel is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// The queue holds no elements
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Empty => write!(f, "the queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}
