//! Capacity normalization for the ring-buffer deque.
//!
//! The deque masks logical indices with `capacity - 1`, so every slot count
//! that reaches an allocation goes through [`normalize`] first.

/// Slot count used when a caller asks for a capacity (or `minlen`) of zero.
pub const DEFAULT_CAPACITY: usize = 64;

/// Largest power of two a slot count is ever rounded up to.
pub const MAX_CAPACITY: usize = 1 << (usize::BITS - 2);

/// Rounds a requested slot count up to a power of two.
///
/// `0` becomes [`DEFAULT_CAPACITY`]; requests above [`MAX_CAPACITY`] saturate.
#[inline]
pub fn normalize(requested: usize) -> usize {
    if requested == 0 {
        DEFAULT_CAPACITY
    } else {
        requested.min(MAX_CAPACITY).next_power_of_two()
    }
}

/// Normalizes `requested` and caps it at the power of two covering `maxlen`.
///
/// `None` and `Some(0)` both mean "unbounded".
#[inline]
pub fn bounded(requested: usize, maxlen: Option<usize>) -> usize {
    let capacity = normalize(requested);
    match maxlen {
        Some(max) if max > 0 => capacity.min(normalize(max)),
        _ => capacity,
    }
}

/// `index & (capacity - 1)`.
///
/// `capacity` must be a power of two.
#[inline(always)]
pub fn wrap(index: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    index & (capacity - 1)
}

/// Resolves a possibly negative index against `len` the way slice bounds do:
/// negative values count back from the end, then the result is clamped into
/// `[0, len]`.
#[inline]
pub fn clamp_index(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

/// Resolves a possibly negative index against `len`, returning `None` when it
/// falls outside `[-len, len)`.
#[inline]
pub fn checked_index(index: isize, len: usize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else if (index as usize) < len {
        Some(index as usize)
    } else {
        None
    }
}
