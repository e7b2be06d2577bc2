//! Construction-time policy for [`Deque`].

use crate::utils::capacity;
use crate::vecs::deque::Deque;

/// Builder for the four deque policy knobs.
///
/// Requested values are normalized when the deque is built, not when they
/// are set:
///
/// | knob | `0` / `None` means | otherwise |
/// |------|--------------------|-----------|
/// | `capacity` | 64 slots | next power of two, capped at the power of two covering `maxlen` |
/// | `minlen` | 64 slots | next power of two; shrink and `clear` never go below it |
/// | `maxlen` | unbounded | pushes evict from the opposite end to stay `<= maxlen` |
/// | `shrink` | - | removals may halve the buffer once it is a quarter full |
///
/// ```rust
/// use double_ended_collections::DequeOptions;
///
/// let d = DequeOptions::new().maxlen(3).build_from([0, 1, 2, 3]);
/// assert_eq!(d.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(d.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DequeOptions {
    capacity: usize,
    minlen: usize,
    maxlen: Option<usize>,
    shrink: bool,
}

impl Default for DequeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DequeOptions {
    pub const fn new() -> Self {
        Self {
            capacity: capacity::DEFAULT_CAPACITY,
            minlen: capacity::DEFAULT_CAPACITY,
            maxlen: None,
            shrink: true,
        }
    }

    /// Initial slot count request.
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Floor for shrinking and clearing.
    pub const fn minlen(mut self, minlen: usize) -> Self {
        self.minlen = minlen;
        self
    }

    /// Bound on the logical length; `0` means unbounded.
    pub const fn maxlen(mut self, maxlen: usize) -> Self {
        self.maxlen = if maxlen == 0 { None } else { Some(maxlen) };
        self
    }

    /// Removes any `maxlen` bound.
    pub const fn unbounded(mut self) -> Self {
        self.maxlen = None;
        self
    }

    /// Whether removals may reallocate into a smaller buffer.
    pub const fn shrink(mut self, shrink: bool) -> Self {
        self.shrink = shrink;
        self
    }

    /// Slot count the deque is first allocated with.
    pub fn initial_capacity(&self) -> usize {
        capacity::bounded(self.capacity, self.maxlen)
    }

    /// Normalized shrink floor.
    pub fn normalized_minlen(&self) -> usize {
        capacity::normalize(self.minlen)
    }

    pub fn max_len(&self) -> Option<usize> {
        self.maxlen
    }

    pub fn shrinks(&self) -> bool {
        self.shrink
    }

    /// Builds an empty deque.
    pub fn build<T>(self) -> Deque<T> {
        Deque::with_options(self)
    }

    /// Builds a deque and pushes every element of `iter` to the back, in order.
    ///
    /// With a `maxlen`, only the last `maxlen` elements survive.
    pub fn build_from<T, I: IntoIterator<Item = T>>(self, iter: I) -> Deque<T> {
        let mut deque = Deque::with_options(self);
        deque.extend(iter);
        deque
    }
}
