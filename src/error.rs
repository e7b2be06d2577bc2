//! Error type shared by [`Deque`](crate::Deque) and [`MinMaxHeap`](crate::MinMaxHeap).
//!
//! # Error Categories
//!
//! - **Empty**: an element was requested from a container holding none
//! - **NotFound**: a value search (`remove_value`, `index`) found no equal element
//! - **CapacityExceeded**: `Deque::insert` on a deque already holding `maxlen` elements
//! - **IndexOutOfRange**: signed indexing outside `[-len, len)`

use std::fmt;

/// Failure modes of the collection operations.
///
/// A failed operation leaves the container exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionError {
    /// The container holds no elements.
    Empty,

    /// No element compared equal to the search target.
    NotFound,

    /// The deque is already at its configured `maxlen`.
    CapacityExceeded { maxlen: usize },

    /// Signed index outside `[-len, len)`.
    IndexOutOfRange { index: isize, len: usize },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::Empty => write!(f, "container is empty"),
            CollectionError::NotFound => write!(f, "value not found in container"),
            CollectionError::CapacityExceeded { maxlen } => {
                write!(f, "deque is already at its maximum length of {}", maxlen)
            }
            CollectionError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
        }
    }
}

impl std::error::Error for CollectionError {}

/// Convenience alias used by every fallible collection operation.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        assert_eq!(CollectionError::Empty.to_string(), "container is empty");
        assert_eq!(
            CollectionError::NotFound.to_string(),
            "value not found in container"
        );
        assert_eq!(
            CollectionError::CapacityExceeded { maxlen: 3 }.to_string(),
            "deque is already at its maximum length of 3"
        );
        assert_eq!(
            CollectionError::IndexOutOfRange { index: -5, len: 2 }.to_string(),
            "index -5 out of range for length 2"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&CollectionError::Empty);
    }
}
