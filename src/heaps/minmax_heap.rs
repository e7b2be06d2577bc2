//! Min-max heap: a double-ended priority queue over an implicit binary tree.
//!
//! Even tree levels order like a min-heap and odd levels like a max-heap, so
//! the minimum is always the root and the maximum is the larger of the root's
//! children.  Push and both pops are O(log n); both peeks are O(1).

use core::fmt;
use core::mem;

use crate::error::{CollectionError, Result};
use crate::heaps::heap_iter::{Drain, IntoIter, Iter};
use crate::utils::level::{self, Level};

/// Smallest buffer a growing heap allocates.
const MIN_CAPACITY: usize = 4;

/// A double-ended priority queue with O(1) access to both extremes.
///
/// # Behavior
/// * **Min:** `peek_min` / `pop_min` address the root.
/// * **Max:** `peek_max` / `pop_max` address the larger child of the root
///   (or the root itself when it is the only element).
/// * **Growth:** the buffer doubles when a push finds it full and never
///   shrinks; `clear` keeps the allocation.
///
/// ```rust
/// use double_ended_collections::{minmax_heap, MinMaxHeap};
///
/// let mut heap: MinMaxHeap<i32> = minmax_heap![5, 1, 9, 3];
/// assert_eq!(heap.peek_min(), Ok(&1));
/// assert_eq!(heap.peek_max(), Ok(&9));
/// assert_eq!(heap.pop_max(), Ok(9));
/// assert_eq!(heap.pop_min(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub struct MinMaxHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates an empty heap without allocating.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from arbitrary-order elements in O(n).
    pub fn from_vec(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }

    // --- Inspection ---

    /// Number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the heap can hold before it reallocates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Smallest element (`get_min`).
    pub fn peek_min(&self) -> Result<&T> {
        self.data.first().ok_or(CollectionError::Empty)
    }

    /// Largest element (`get_max`).
    pub fn peek_max(&self) -> Result<&T> {
        self.max_index()
            .map(|i| &self.data[i])
            .ok_or(CollectionError::Empty)
    }

    /// Slot of the maximum: the root for one element, otherwise the larger of
    /// the root's children.
    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.data[2] > self.data[1] { 2 } else { 1 }),
        }
    }

    // --- Modification ---

    /// Inserts `value`, doubling the buffer first when it is full.
    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        self.data.push(value);
        self.bubble_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest element.
    pub fn pop_min(&mut self) -> Result<T> {
        self.remove_at(0).ok_or(CollectionError::Empty)
    }

    /// Removes and returns the largest element.
    pub fn pop_max(&mut self) -> Result<T> {
        let index = self.max_index().ok_or(CollectionError::Empty)?;
        self.remove_at(index).ok_or(CollectionError::Empty)
    }

    /// Pushes `value` and pops the minimum in one step.
    ///
    /// Returns `value` untouched when it would be the minimum anyway.
    pub fn push_pop_min(&mut self, value: T) -> T {
        match self.data.first() {
            Some(min) if *min < value => {}
            _ => return value,
        }
        let min = mem::replace(&mut self.data[0], value);
        self.trickle_down(0);
        min
    }

    /// Pushes `value` and pops the maximum in one step.
    ///
    /// Returns `value` untouched when it would be the maximum anyway.
    pub fn push_pop_max(&mut self, value: T) -> T {
        let index = match self.max_index() {
            Some(i) if self.data[i] > value => i,
            _ => return value,
        };
        let max = mem::replace(&mut self.data[index], value);
        if index > 0 && self.data[index] < self.data[0] {
            self.data.swap(index, 0);
        }
        self.trickle_down(index);
        max
    }

    /// Drops every element; the allocation is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Removes every element in heap order; the allocation is kept.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self.data.drain(..))
    }

    // --- Consumption ---

    /// Consumes the heap and returns its buffer in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Iterates in heap (buffer) order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.data.iter())
    }

    // --- Internals ---

    #[inline]
    fn grow_if_full(&mut self) {
        let old = self.data.capacity();
        if self.data.len() == old {
            self.data.reserve_exact(old.max(MIN_CAPACITY));
            log::trace!("min-max heap grow: {} -> {} slots", old, self.data.capacity());
        }
    }

    /// Takes the element at `index` out, refilling the slot with the last
    /// element and trickling it down.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        let last = self.data.pop()?;
        if index == self.data.len() {
            return Some(last);
        }
        let removed = mem::replace(&mut self.data[index], last);
        self.trickle_down(index);
        Some(removed)
    }

    /// Bottom-up construction: trickle every internal node down, deepest first.
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.trickle_down(index);
        }
    }

    /// Restores order above a freshly written leaf.
    ///
    /// A violation against the parent (which sits on the other level family)
    /// swaps once and continues from the parent; the remaining walk compares
    /// against grandparents only.
    fn bubble_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let level = Level::of(index);
        let parent = level::parent(index);
        if level.flip().prefers(&self.data[index], &self.data[parent]) {
            self.data.swap(index, parent);
            self.bubble_up_grandparents(parent, level.flip());
        } else {
            self.bubble_up_grandparents(index, level);
        }
    }

    fn bubble_up_grandparents(&mut self, mut index: usize, level: Level) {
        while index > 2 {
            let grandparent = level::grandparent(index);
            if !level.prefers(&self.data[index], &self.data[grandparent]) {
                break;
            }
            self.data.swap(index, grandparent);
            index = grandparent;
        }
    }

    #[inline]
    fn trickle_down(&mut self, index: usize) {
        self.trickle_down_as(index, Level::of(index));
    }

    /// Sinks the element at `index` until it is ordered against its children
    /// and grandchildren.  `level` is the family of `index`, and stays the
    /// same for every grandchild hop.
    fn trickle_down_as(&mut self, mut index: usize, level: Level) {
        let len = self.data.len();
        loop {
            let child = level::first_child(index);
            if child >= len {
                break;
            }
            let grandchild = level::first_grandchild(index);
            let mut best = child;
            for candidate in [
                child + 1,
                grandchild,
                grandchild + 1,
                grandchild + 2,
                grandchild + 3,
            ]
            .into_iter()
            .take_while(|&i| i < len)
            {
                if level.prefers(&self.data[candidate], &self.data[best]) {
                    best = candidate;
                }
            }

            if !level.prefers(&self.data[best], &self.data[index]) {
                break;
            }
            self.data.swap(best, index);

            // A direct child has no descendants that could be out of order
            // with the value it just received.
            if !level::is_grandchild(best, index) {
                break;
            }
            let parent = level::parent(best);
            if level.prefers(&self.data[parent], &self.data[best]) {
                self.data.swap(parent, best);
            }
            index = best;
        }
    }
}

// --- Trait Implementations ---

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for MinMaxHeap<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.capacity());
        data.extend(self.data.iter().cloned());
        Self { data }
    }
}

impl<T: fmt::Debug> fmt::Debug for MinMaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinMaxHeap<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_vec(Vec::from(values))
    }
}

impl<T> IntoIterator for MinMaxHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.data.into_iter())
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
