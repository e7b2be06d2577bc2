//! Double-ended queue backed by a power-of-two ring buffer.
//!
//! # Layout
//! The deque owns a boxed slice of `MaybeUninit<T>` slots plus a `head` and a
//! `tail` cursor.  The live elements occupy `[head, tail)` cyclically; every
//! other slot is uninitialised memory.  Cursors are reduced with
//! `& (capacity - 1)`, which is why the slot count is always a power of two.
//!
//! `head == tail` always means "empty".  A push writes its element first and
//! then checks whether the cursors met; if they did the buffer is doubled on
//! the spot, so at least one slot is free whenever control returns to the
//! caller.
//!
//! # Policy
//! See [`DequeOptions`] for `minlen`, `maxlen` and `shrink`.  With `shrink`
//! enabled a removal that leaves the deque at most a quarter full halves the
//! buffer, repeatedly if needed, but never below `minlen`.  Growth happens at full and shrinking at a
//! quarter, so alternating push/pop around a power-of-two size does not
//! reallocate every call.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::{self, MaybeUninit};
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;
use std::collections::VecDeque;

use crate::error::{CollectionError, Result};
use crate::utils::capacity;
use crate::vecs::deque_iter::{IntoIter, Iter, IterMut};
use crate::vecs::options::DequeOptions;

// ─── AnyDeque ─────────────────────────────────────────────────────────────────

/// Object-safe view of a double-ended queue that reports failures as
/// [`CollectionError`].
///
/// Implemented by [`Deque<T>`] and by `VecDeque<T>`, so code written against
/// `&mut dyn AnyDeque<T>` sees the same `Empty` / `IndexOutOfRange` errors and
/// the same signed indexing and rotation regardless of the backend.
pub trait AnyDeque<T> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn push_back(&mut self, value: T);
    fn push_front(&mut self, value: T);
    /// Fails with [`CollectionError::Empty`] when there is nothing to pop.
    fn pop_back(&mut self) -> Result<T>;
    /// Fails with [`CollectionError::Empty`] when there is nothing to pop.
    fn pop_front(&mut self) -> Result<T>;
    fn front(&self) -> Result<&T>;
    fn back(&self) -> Result<&T>;
    /// Signed access: negative positions count back from the end.
    fn at(&self, index: isize) -> Result<&T>;
    /// Rotates right by `n` steps (left for negative `n`).
    fn rotate(&mut self, n: isize);
    fn clear(&mut self);
}

impl<T> AnyDeque<T> for VecDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }
    fn push_front(&mut self, value: T) {
        self.push_front(value);
    }
    fn pop_back(&mut self) -> Result<T> {
        self.pop_back().ok_or(CollectionError::Empty)
    }
    fn pop_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(CollectionError::Empty)
    }
    fn front(&self) -> Result<&T> {
        self.front().ok_or(CollectionError::Empty)
    }
    fn back(&self) -> Result<&T> {
        self.back().ok_or(CollectionError::Empty)
    }
    fn at(&self, index: isize) -> Result<&T> {
        let len = self.len();
        capacity::checked_index(index, len)
            .and_then(|i| self.get(i))
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }
    fn rotate(&mut self, n: isize) {
        let len = self.len();
        if len > 1 {
            self.rotate_right(n.rem_euclid(len as isize) as usize);
        }
    }
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> AnyDeque<T> for Deque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, value: T) {
        self.push_back(value);
    }
    fn push_front(&mut self, value: T) {
        self.push_front(value);
    }
    fn pop_back(&mut self) -> Result<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Result<T> {
        self.pop_front()
    }
    fn front(&self) -> Result<&T> {
        self.front()
    }
    fn back(&self) -> Result<&T> {
        self.back()
    }
    fn at(&self, index: isize) -> Result<&T> {
        self.at(index)
    }
    fn rotate(&mut self, n: isize) {
        self.rotate(n);
    }
    fn clear(&mut self) {
        self.clear();
    }
}

// ─── Deque ────────────────────────────────────────────────────────────────────

/// A growable double-ended queue over a power-of-two ring buffer.
///
/// # Invariants
/// * `buf.len()` is a power of two and never below 1.
/// * `head < buf.len()` and `tail < buf.len()`.
/// * `len() == (tail - head) & (buf.len() - 1)` and `len() < buf.len()`.
/// * With a `maxlen`, `len() <= maxlen`.
///
/// ```rust
/// use double_ended_collections::{deque, Deque};
///
/// let mut d: Deque<i32> = deque![1, 2, 3];
/// d.push_front(0);
/// d.rotate(1);
/// assert_eq!(d.to_string(), "Deque(3, 0, 1, 2)");
/// assert_eq!(d.pop_back(), Ok(2));
/// ```
pub struct Deque<T> {
    buf: Box<[MaybeUninit<T>]>,
    head: usize,
    tail: usize,
    minlen: usize,
    maxlen: Option<usize>,
    shrink: bool,
}

impl<T> Deque<T> {
    /// Creates an empty deque with the default policy (64 slots, `minlen` 64,
    /// unbounded, shrinking enabled).
    pub fn new() -> Self {
        Self::with_options(DequeOptions::new())
    }

    /// Creates an empty deque whose buffer starts at `capacity` rounded up to a
    /// power of two (`0` selects the default).
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(DequeOptions::new().capacity(capacity))
    }

    /// Creates an empty deque from a full set of policy knobs.
    pub fn with_options(options: DequeOptions) -> Self {
        Self {
            buf: Self::allocate(options.initial_capacity()),
            head: 0,
            tail: 0,
            minlen: options.normalized_minlen(),
            maxlen: options.max_len(),
            shrink: options.shrinks(),
        }
    }

    /// The policy this deque runs under, with the current capacity as the
    /// capacity request.
    pub fn options(&self) -> DequeOptions {
        DequeOptions::new()
            .capacity(self.capacity())
            .minlen(self.minlen)
            .maxlen(self.maxlen.unwrap_or(0))
            .shrink(self.shrink)
    }

    // --- Inspection ---

    /// Returns the number of elements currently in the deque.
    #[inline(always)]
    pub fn len(&self) -> usize {
        capacity::wrap(self.tail.wrapping_sub(self.head), self.capacity())
    }

    /// Returns `true` if the deque holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Number of allocated slots.  Always a power of two; one slot is always
    /// free, so at most `capacity() - 1` elements are stored.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Normalized floor below which shrinking and `clear` never go.
    pub fn minlen(&self) -> usize {
        self.minlen
    }

    /// Length bound enforced by the pushes, or `None` when unbounded.
    pub fn maxlen(&self) -> Option<usize> {
        self.maxlen
    }

    /// Whether removals may reallocate into a smaller buffer.
    pub fn shrinks(&self) -> bool {
        self.shrink
    }

    // --- Slot arithmetic ---

    #[inline(always)]
    fn wrap_add(&self, idx: usize, add: usize) -> usize {
        capacity::wrap(idx.wrapping_add(add), self.capacity())
    }

    #[inline(always)]
    fn wrap_sub(&self, idx: usize, sub: usize) -> usize {
        capacity::wrap(idx.wrapping_sub(sub), self.capacity())
    }

    /// Physical slot of logical position `index`.
    #[inline(always)]
    fn slot(&self, index: usize) -> usize {
        self.wrap_add(self.head, index)
    }

    #[inline(always)]
    fn ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    #[inline(always)]
    fn ptr_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    /// Moves the value out of `slot`.
    ///
    /// # Safety
    /// `slot` must hold a live element, and the caller must treat it as
    /// uninitialised afterwards.
    #[inline(always)]
    unsafe fn read_slot(&self, slot: usize) -> T {
        unsafe { ptr::read(self.ptr().add(slot)) }
    }

    /// # Safety
    /// `slot` must be outside the live range.
    #[inline(always)]
    unsafe fn write_slot(&mut self, slot: usize, value: T) {
        unsafe { ptr::write(self.ptr_mut().add(slot), value) }
    }

    /// Bitwise-moves the element in `from` into `to`.
    ///
    /// # Safety
    /// `from` must hold a live element and `to` must not; the roles are
    /// swapped afterwards.
    #[inline(always)]
    unsafe fn move_slot(&mut self, from: usize, to: usize) {
        unsafe {
            let p = self.ptr_mut();
            ptr::copy(p.add(from), p.add(to), 1);
        }
    }

    fn allocate(capacity: usize) -> Box<[MaybeUninit<T>]> {
        debug_assert!(capacity.is_power_of_two());
        Box::new_uninit_slice(capacity)
    }

    // --- Reallocation ---

    /// Moves the `len` live elements into a fresh buffer of `new_capacity`
    /// slots, packed from slot 0.  The old buffer is released only after every
    /// element has been copied out of it.
    fn relocate(&mut self, new_capacity: usize, len: usize) {
        debug_assert!(new_capacity.is_power_of_two());
        debug_assert!(len < new_capacity);
        let mut buf = Self::allocate(new_capacity);
        let first = len.min(self.capacity() - self.head);
        // SAFETY: the live range is `[head, head + first)` followed by
        // `[0, len - first)`; both fit in the new buffer since
        // `len < new_capacity`, and the two allocations are distinct.
        // The old buffer is dropped as `MaybeUninit`, so no element is
        // dropped twice.
        unsafe {
            let src = self.buf.as_ptr();
            let dst = buf.as_mut_ptr();
            ptr::copy_nonoverlapping(src.add(self.head), dst, first);
            ptr::copy_nonoverlapping(src, dst.add(first), len - first);
        }
        self.buf = buf;
        self.head = 0;
        self.tail = len;
    }

    /// Doubles the buffer.  Called right after a write made `head == tail`,
    /// i.e. when every slot is live.
    #[inline(never)]
    fn grow(&mut self) {
        let old = self.capacity();
        let new = old * 2;
        log::trace!("deque grow: {} -> {} slots", old, new);
        self.relocate(new, old);
    }

    /// Halves the buffer for as long as shrinking is enabled, the buffer is
    /// above `minlen`, and at most a quarter of it is live.
    ///
    /// Bulk removals (`truncate`, `retain`) may skip several sizes at once;
    /// the deque is left with the shrink condition false, and only one
    /// reallocation is made.
    fn shrink_if_sparse(&mut self) {
        if !self.shrink {
            return;
        }
        let cap = self.capacity();
        let len = self.len();
        let mut target = cap;
        while target > self.minlen && len <= target / 4 {
            target /= 2;
        }
        if target < cap {
            log::trace!("deque shrink: {} -> {} slots ({} live)", cap, target, len);
            self.relocate(target, len);
        }
    }

    #[inline(always)]
    fn at_maxlen(&self) -> bool {
        self.maxlen.is_some_and(|max| self.len() >= max)
    }

    // --- Access ---

    /// Returns a reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            // SAFETY: `index < len`, so the slot holds a live element.
            unsafe { Some(&*self.ptr().add(self.slot(index))) }
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            let slot = self.slot(index);
            // SAFETY: `index < len`, so the slot holds a live element.
            unsafe { Some(&mut *self.ptr_mut().add(slot)) }
        } else {
            None
        }
    }

    /// Signed indexing: negative positions count back from the end.
    ///
    /// Fails with [`CollectionError::IndexOutOfRange`] outside `[-len, len)`.
    pub fn at(&self, index: isize) -> Result<&T> {
        let len = self.len();
        capacity::checked_index(index, len)
            .and_then(|i| self.get(i))
            .ok_or(CollectionError::IndexOutOfRange { index, len })
    }

    /// Mutable counterpart of [`at`](Deque::at).
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let len = self.len();
        match capacity::checked_index(index, len) {
            Some(i) => self
                .get_mut(i)
                .ok_or(CollectionError::IndexOutOfRange { index, len }),
            None => Err(CollectionError::IndexOutOfRange { index, len }),
        }
    }

    /// Overwrites the element at signed `index`, returning the previous value.
    pub fn set(&mut self, index: isize, value: T) -> Result<T> {
        let slot = self.at_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Front element (`peekleft`).
    pub fn front(&self) -> Result<&T> {
        self.get(0).ok_or(CollectionError::Empty)
    }

    /// Back element (`peek`).
    pub fn back(&self) -> Result<&T> {
        self.get(self.len().wrapping_sub(1))
            .ok_or(CollectionError::Empty)
    }

    /// Mutable front element.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(CollectionError::Empty)
    }

    /// Mutable back element.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        let last = self.len().wrapping_sub(1);
        self.get_mut(last).ok_or(CollectionError::Empty)
    }

    // --- Modification ---

    /// Appends `value` to the back (`append`).
    ///
    /// At `maxlen`, the front element is dropped before `value` is written.
    pub fn push_back(&mut self, value: T) {
        if self.at_maxlen() {
            drop(self.take_front());
        }
        unsafe { self.write_slot(self.tail, value) };
        self.tail = self.wrap_add(self.tail, 1);
        if self.head == self.tail {
            self.grow();
        }
    }

    /// Prepends `value` to the front (`appendleft`).
    ///
    /// At `maxlen`, the back element is dropped before `value` is written.
    pub fn push_front(&mut self, value: T) {
        if self.at_maxlen() {
            drop(self.take_back());
        }
        self.head = self.wrap_sub(self.head, 1);
        unsafe { self.write_slot(self.head, value) };
        if self.head == self.tail {
            self.grow();
        }
    }

    /// Pushes every element to the back, in iteration order.
    pub fn extend_back<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }

    /// Pushes every element to the front, in iteration order, so the run ends
    /// up reversed at the head of the deque (`extendleft`).
    pub fn extend_front<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_front(value);
        }
    }

    /// Removes the back element without applying the shrink policy.
    pub(crate) fn take_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.tail = self.wrap_sub(self.tail, 1);
        unsafe { Some(self.read_slot(self.tail)) }
    }

    /// Removes the front element without applying the shrink policy.
    pub(crate) fn take_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = unsafe { self.read_slot(self.head) };
        self.head = self.wrap_add(self.head, 1);
        Some(value)
    }

    /// Removes and returns the back element (`pop`).
    pub fn pop_back(&mut self) -> Result<T> {
        let value = self.take_back().ok_or(CollectionError::Empty)?;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Removes and returns the front element (`popleft`).
    pub fn pop_front(&mut self) -> Result<T> {
        let value = self.take_front().ok_or(CollectionError::Empty)?;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Inserts `value` before logical position `index`.
    ///
    /// Negative indices count back from the end; anything still out of range
    /// saturates to the nearest end.  Only the shorter side of the deque is
    /// shifted.  Unlike the push methods this never evicts: at `maxlen` it
    /// fails with [`CollectionError::CapacityExceeded`].
    pub fn insert(&mut self, index: isize, value: T) -> Result<()> {
        if let Some(maxlen) = self.maxlen {
            if self.len() >= maxlen {
                return Err(CollectionError::CapacityExceeded { maxlen });
            }
        }
        let len = self.len();
        let index = capacity::clamp_index(index, len);
        unsafe {
            if index < len / 2 {
                // Open a slot before the head and slide [0, index) down into it.
                self.head = self.wrap_sub(self.head, 1);
                for i in 0..index {
                    self.move_slot(self.slot(i + 1), self.slot(i));
                }
            } else {
                // Slide [index, len) up by one into the free tail slot.
                for i in (index..len).rev() {
                    self.move_slot(self.slot(i), self.slot(i + 1));
                }
                self.tail = self.wrap_add(self.tail, 1);
            }
            self.write_slot(self.slot(index), value);
        }
        if self.head == self.tail {
            self.grow();
        }
        Ok(())
    }

    /// Removes and returns the element at logical `index`, or `None` if out of
    /// bounds.  Shifts whichever side of `index` is shorter.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let len = self.len();
        if index >= len {
            return None;
        }
        let value = unsafe { self.read_slot(self.slot(index)) };
        unsafe {
            if index < len / 2 {
                for i in (0..index).rev() {
                    self.move_slot(self.slot(i), self.slot(i + 1));
                }
                self.head = self.wrap_add(self.head, 1);
            } else {
                for i in index + 1..len {
                    self.move_slot(self.slot(i), self.slot(i - 1));
                }
                self.tail = self.wrap_sub(self.tail, 1);
            }
        }
        self.shrink_if_sparse();
        Some(value)
    }

    /// Removes the first element equal to `value` and returns it.
    pub fn remove_value(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let index = self.position(value).ok_or(CollectionError::NotFound)?;
        self.remove(index).ok_or(CollectionError::NotFound)
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        for _ in 0..self.len() {
            if let Some(value) = self.take_front() {
                if keep(&value) {
                    unsafe { self.write_slot(self.tail, value) };
                    self.tail = self.wrap_add(self.tail, 1);
                }
            }
        }
        self.shrink_if_sparse();
    }

    /// Drops elements from the back until at most `len` remain.
    pub fn truncate(&mut self, len: usize) {
        while self.len() > len {
            drop(self.take_back());
        }
        self.shrink_if_sparse();
    }

    /// Drops every element.  A buffer larger than `minlen` is replaced by a
    /// `minlen`-slot one; a smaller buffer is kept.
    pub fn clear(&mut self) {
        self.drop_live();
        if self.capacity() > self.minlen {
            log::trace!("deque reset: {} -> {} slots", self.capacity(), self.minlen);
            self.buf = Self::allocate(self.minlen);
        }
    }

    fn drop_live(&mut self) {
        let (front, back) = self.as_mut_slices();
        let (front, back) = (front as *mut [T], back as *mut [T]);
        self.head = 0;
        self.tail = 0;
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }

    // --- Search ---

    /// Logical index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|x| x == value)
    }

    /// Logical index of the first element equal to `value` inside the
    /// slice-style window `[start, stop)`.  Both bounds accept negative values
    /// and are clamped into `[0, len]` independently.
    pub fn index(&self, value: &T, start: isize, stop: isize) -> Result<usize>
    where
        T: PartialEq,
    {
        let len = self.len();
        let start = capacity::clamp_index(start, len);
        let stop = capacity::clamp_index(stop, len);
        (start..stop)
            .find(|&i| self[i] == *value)
            .ok_or(CollectionError::NotFound)
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|x| *x == value).count()
    }

    /// Returns `true` if any element equals `value` (`in`).
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    // --- Reordering ---

    /// Reverses the elements in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        for i in 0..len / 2 {
            let (a, b) = (self.slot(i), self.slot(len - 1 - i));
            self.buf.swap(a, b);
        }
    }

    /// Rotates right by `n` steps (left for negative `n`): after
    /// `rotate(1)` the former back element is at the front.
    ///
    /// Each step moves one element across the free gap, so the cost is
    /// `min(n mod len, len - n mod len)` element moves.
    pub fn rotate(&mut self, n: isize) {
        let len = self.len();
        if len <= 1 {
            return;
        }
        let right = n.rem_euclid(len as isize) as usize;
        if right <= len / 2 {
            for _ in 0..right {
                self.rotate_right_one();
            }
        } else {
            for _ in 0..len - right {
                self.rotate_left_one();
            }
        }
    }

    #[inline]
    fn rotate_right_one(&mut self) {
        self.tail = self.wrap_sub(self.tail, 1);
        self.head = self.wrap_sub(self.head, 1);
        unsafe { self.move_slot(self.tail, self.head) };
    }

    #[inline]
    fn rotate_left_one(&mut self) {
        unsafe { self.move_slot(self.head, self.tail) };
        self.head = self.wrap_add(self.head, 1);
        self.tail = self.wrap_add(self.tail, 1);
    }

    // --- Slices & Iteration ---

    /// Returns up to two contiguous slices covering the logical range `[0, len)`.
    ///
    /// The second slice is empty unless the live range wraps past the end of
    /// the buffer.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let len = self.len();
        let first = len.min(self.capacity() - self.head);
        // SAFETY: both runs lie inside the buffer and hold only live,
        // initialised elements; they do not overlap because `len < capacity`.
        unsafe {
            let ptr = self.ptr();
            (
                slice::from_raw_parts(ptr.add(self.head), first),
                slice::from_raw_parts(ptr, len - first),
            )
        }
    }

    /// Mutable counterpart of [`as_slices`](Deque::as_slices).
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let len = self.len();
        let head = self.head;
        let first = len.min(self.capacity() - head);
        // SAFETY: as in `as_slices`; the runs are disjoint, so handing out two
        // exclusive slices does not alias.
        unsafe {
            let ptr = self.ptr_mut();
            (
                slice::from_raw_parts_mut(ptr.add(head), first),
                slice::from_raw_parts_mut(ptr, len - first),
            )
        }
    }

    /// Repacks the live range so it starts at slot 0 and returns it as one slice.
    pub fn make_contiguous(&mut self) -> &mut [T] {
        let len = self.len();
        if self.head + len > self.capacity() {
            self.relocate(self.capacity(), len);
        }
        self.as_mut_slices().0
    }

    /// Front-to-back iterator; `.rev()` walks back-to-front.
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter::new(front, back)
    }

    /// Front-to-back iterator yielding exclusive references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut::new(front, back)
    }
}

// --- Traits ---

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.drop_live();
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        let mut out = Self {
            buf: Self::allocate(self.capacity()),
            head: 0,
            tail: 0,
            minlen: self.minlen,
            maxlen: self.maxlen,
            shrink: self.shrink,
        };
        for value in self.iter() {
            unsafe { out.write_slot(out.tail, value.clone()) };
            out.tail += 1;
        }
        out
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders as `Deque(e1, e2, ...)` using each element's `Debug` form.
impl<T: fmt::Debug> fmt::Display for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deque(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        f.write_str(")")
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(value) => value,
            None => panic!("index {} out of bounds for deque of length {}", index, len),
        }
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {} out of bounds for deque of length {}", index, len),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_back(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend_back(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        // Default policy, with room for the hinted length plus the free slot.
        let requested = lower.saturating_add(1).max(capacity::DEFAULT_CAPACITY);
        let mut deque = Self::with_capacity(requested);
        deque.extend_back(iter);
        deque
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
