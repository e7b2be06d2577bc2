//! Index arithmetic for the implicit min-max tree.
//!
//! Node `i` has children `2i + 1` and `2i + 2`. Levels are counted from the
//! root (level 0); even levels order like a min-heap, odd levels like a
//! max-heap.

/// Ordering family of a tree level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Even level: each node is `<=` all of its descendants.
    Min,
    /// Odd level: each node is `>=` all of its descendants.
    Max,
}

impl Level {
    /// Level family of the node stored at `index`.
    ///
    /// `index + 1` has an odd bit width exactly when the node sits on an even
    /// level.
    #[inline(always)]
    pub fn of(index: usize) -> Self {
        if bit_width(index + 1) % 2 == 1 {
            Level::Min
        } else {
            Level::Max
        }
    }

    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Level::Min => Level::Max,
            Level::Max => Level::Min,
        }
    }

    /// Whether `a` belongs above `b` under this level's ordering.
    #[inline(always)]
    pub fn prefers<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Level::Min => less(a, b),
            Level::Max => greater(a, b),
        }
    }
}

#[inline(always)]
fn less<T: Ord>(a: &T, b: &T) -> bool {
    a < b
}

#[inline(always)]
fn greater<T: Ord>(a: &T, b: &T) -> bool {
    a > b
}

/// Number of significant bits in `n`.
#[inline(always)]
pub fn bit_width(n: usize) -> u32 {
    usize::BITS - n.leading_zeros()
}

#[inline(always)]
pub fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline(always)]
pub fn grandparent(index: usize) -> usize {
    (index - 3) / 4
}

#[inline(always)]
pub fn first_child(index: usize) -> usize {
    2 * index + 1
}

#[inline(always)]
pub fn first_grandchild(index: usize) -> usize {
    4 * index + 3
}

/// Whether `index` is a grandchild of `ancestor` rather than a direct child.
#[inline(always)]
pub fn is_grandchild(index: usize, ancestor: usize) -> bool {
    index >= first_grandchild(ancestor)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Depth of `index` counted by walking parent links.
    fn depth(mut index: usize) -> u32 {
        let mut depth = 0;
        while index > 0 {
            index = parent(index);
            depth += 1;
        }
        depth
    }

    #[test]
    fn test_level_bit_width_matches_depth_parity() {
        for i in 0..5000 {
            let by_width = Level::of(i);
            let by_walk = if depth(i) % 2 == 0 {
                Level::Min
            } else {
                Level::Max
            };
            assert_eq!(by_width, by_walk, "index {}", i);
        }
    }

    #[test]
    fn test_level_of_first_levels() {
        assert_eq!(Level::of(0), Level::Min);
        assert_eq!(Level::of(1), Level::Max);
        assert_eq!(Level::of(2), Level::Max);
        for i in 3..7 {
            assert_eq!(Level::of(i), Level::Min);
        }
        for i in 7..15 {
            assert_eq!(Level::of(i), Level::Max);
        }
    }

    #[test]
    fn test_level_tree_links() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(6), 2);
        assert_eq!(grandparent(3), 0);
        assert_eq!(grandparent(6), 0);
        assert_eq!(grandparent(7), 1);
        assert_eq!(grandparent(14), 2);
        assert_eq!(first_child(2), 5);
        assert_eq!(first_grandchild(1), 7);
        assert!(is_grandchild(3, 0));
        assert!(!is_grandchild(2, 0));
        for i in 3..1000 {
            assert_eq!(grandparent(i), parent(parent(i)));
        }
    }

    #[test]
    fn test_level_prefers() {
        assert!(Level::Min.prefers(&1, &2));
        assert!(!Level::Min.prefers(&2, &2));
        assert!(Level::Max.prefers(&3, &2));
        assert!(!Level::Max.prefers(&2, &2));
        assert_eq!(Level::Min.flip(), Level::Max);
        assert_eq!(Level::Max.flip(), Level::Min);
    }
}
