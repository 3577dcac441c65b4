//! Array-Backed Binary-Heap Priority Queue
//!
//! This crate provides a priority queue built on a binary heap stored as a
//! flat, growable sequence, with the ordering between elements supplied by
//! the caller rather than demanded of the element type.
//!
//! # Features
//!
//! - **Pluggable ordering**: any `Fn(&T, &T) -> bool` closure, or the
//!   ready-made [`MaxOrder`]/[`MinOrder`] strategies for `T: Ord`
//! - **Flat storage**: a complete binary tree in level order inside one
//!   `Vec<T>`; no per-node allocation, rebalancing is index arithmetic
//! - **Root replacement**: [`PriorityQueue::replace`] swaps out the extreme
//!   element in a single sift-down pass instead of a pop plus a push
//! - **Explicit emptiness errors**: `peek`/`pop`/`replace` return
//!   [`QueueError::Empty`] rather than a sentinel, so arbitrary element
//!   types stay safe
//!
//! # Example
//!
//! ```rust
//! use pqueue::{MinQueue, PriorityQueue};
//!
//! let mut queue = PriorityQueue::new();
//! queue.push_all([5, 2, 8, 1, 9]);
//! assert_eq!(queue.pop(), Ok(9));
//! assert_eq!(queue.pop(), Ok(8));
//!
//! let mut min = MinQueue::new_min();
//! min.push_all([5, 2, 8, 1, 9]);
//! assert_eq!(min.pop(), Ok(1));
//! ```

pub mod error;
pub mod ordering;
pub mod queue;

// Re-export the public surface for convenience
pub use error::QueueError;
pub use ordering::{Greater, MaxOrder, MinOrder};
pub use queue::{MaxQueue, MinQueue, PriorityQueue};
