//! # Double-Ended Collections
//!
//! Two array-backed containers missing from `std::collections`:
//!
//! * [`Deque`]: a double-ended queue over a power-of-two ring buffer with
//!   Python-style extras (bounded `maxlen` with eviction, signed indexing,
//!   rotation, search, shrink-on-removal).
//! * [`MinMaxHeap`]: a double-ended priority queue with O(1) access to both
//!   the minimum and the maximum and O(log n) push / pop at either end.
//!
//! Both containers own their elements outright; cloning is a deep copy and
//! dropping runs every element's destructor exactly once.  Neither type does
//! any internal synchronization.
//!
//! ## Key Features
//!
//! * **Mask Indexing:** deque cursors wrap with `& (capacity - 1)`; the slot
//!   count is always a power of two.
//! * **Grow After Write:** a push that fills the last free slot doubles the
//!   buffer immediately, so one slot is always free.
//! * **Shrink Hysteresis:** removals halve the buffer only once it is a
//!   quarter full, and never below `minlen`.
//! * **Level-Aware Heap:** even tree levels order as a min-heap, odd levels as
//!   a max-heap.
//! * **Typed Errors:** operations that need an element return
//!   [`CollectionError`] instead of a sentinel.
//!
//! ## Examples
//!
//! ### Deque
//!
//! ```rust
//! use double_ended_collections::{Deque, DequeOptions};
//!
//! // Keep only the three most recent readings.
//! let mut recent: Deque<i32> = DequeOptions::new().maxlen(3).build();
//! for reading in 0..4 {
//!     recent.push_back(reading);
//! }
//! assert_eq!(recent.to_string(), "Deque(1, 2, 3)");
//!
//! recent.rotate(1);
//! assert_eq!(recent.at(0), Ok(&3));
//! assert_eq!(recent.at(-1), Ok(&2));
//! ```
//!
//! ### MinMaxHeap
//!
//! ```rust
//! use double_ended_collections::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::from(vec![5, 1, 7, 2, 9, 0]);
//! assert_eq!(heap.pop_min(), Ok(0));
//! assert_eq!(heap.pop_max(), Ok(9));
//! assert_eq!(heap.peek_min(), Ok(&1));
//! assert_eq!(heap.peek_max(), Ok(&7));
//! ```

// --- Macros ---

/// Creates a [`Deque`] holding the arguments, front to back.
///
/// ```rust
/// use double_ended_collections::{deque, Deque};
///
/// let d: Deque<&str> = deque!["a", "b"];
/// assert_eq!(d.len(), 2);
/// let empty: Deque<u8> = deque![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::Deque::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Deque::from([$($value),+])
    };
}

/// Creates a [`MinMaxHeap`] holding the arguments.
///
/// ```rust
/// use double_ended_collections::{minmax_heap, MinMaxHeap};
///
/// let heap: MinMaxHeap<u32> = minmax_heap![4, 8, 1];
/// assert_eq!(heap.peek_max(), Ok(&8));
/// ```
#[macro_export]
macro_rules! minmax_heap {
    () => {
        $crate::MinMaxHeap::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::MinMaxHeap::from([$($value),+])
    };
}

// --- Module Declarations ---

pub mod error;
pub mod heaps;
pub mod utils;
pub mod vecs;

// --- Re-exports ---

pub use error::{CollectionError, Result};
pub use heaps::minmax_heap::MinMaxHeap;
pub use vecs::deque::{AnyDeque, Deque};
pub use vecs::options::DequeOptions;
