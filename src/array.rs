//! Balanced binary search tree stored in a flat array
//!
//! Construction places the lower median of the input at slot 1 and
//! recurses on both halves at slots 2i / 2i + 1, giving the breadth-first
//! (heap) layout. Search walks the same index arithmetic from the root.
//! Unwritten slots hold the caller-supplied sentinel, which also stops
//! a descent.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::compare::{Comparator, NaturalOrder};
use crate::layout::{self, Span};
use crate::BsaError;

/// Pointer-free balanced binary search tree ("binary search array")
///
/// Built once from a strictly ascending, duplicate-free sequence and then
/// queried by equality. [`prepare`](Self::prepare) needs `&mut self`;
/// every query takes `&self`, so a built tree can be shared across
/// threads for concurrent searches without locking.
///
/// ```
/// use bsarray::BinarySearchArray;
///
/// let mut tree = BinarySearchArray::new(i32::MIN, bsarray::NaturalOrder);
/// tree.prepare(&[0, 1, 2, 3, 4, 5, 6]);
///
/// assert_eq!(tree.size(), 8);
/// let slot = tree.search(&5);
/// assert_ne!(slot, 0);
/// assert_eq!(*tree.get(slot), 5);
/// assert_eq!(tree.search(&-1), 0);
/// ```
#[derive(Debug, Clone)]
pub struct BinarySearchArray<T, C = NaturalOrder> {
    /// Slots, 1-indexed; slot 0 is reserved
    tree: Vec<T>,

    /// Terminator written into every unused slot
    invalid: T,

    /// Total order used for construction and search
    compare: C,

    /// Elements written by the last build
    count: usize,
}

impl<T, C> BinarySearchArray<T, C>
where
    T: Clone + PartialEq,
    C: Comparator<T>,
{
    /// Create an empty tree with the given sentinel and comparator
    ///
    /// The sentinel must never compare equal to a real element.
    pub fn new(invalid: T, compare: C) -> Self {
        Self {
            tree: Vec::new(),
            invalid,
            compare,
            count: 0,
        }
    }

    /// Build the tree from a strictly ascending, duplicate-free slice
    ///
    /// Discards the previous tree. Capacity becomes the smallest power of
    /// two strictly greater than `input.len()`. Cost is O(n).
    ///
    /// # Panics
    ///
    /// Panics if `input` is empty. Ordering is not checked; use
    /// [`try_prepare`](Self::try_prepare) for untrusted input.
    pub fn prepare(&mut self, input: &[T]) {
        assert!(!input.is_empty(), "cannot build a tree from empty input");

        let capacity = layout::capacity_for(input.len());
        self.tree.clear();
        self.tree.resize(capacity, self.invalid.clone());
        self.count = input.len();

        if let Some(span) = Span::whole(input.len()) {
            self.fill(input, 1, span);
        }

        debug!(
            length = input.len(),
            capacity,
            height = layout::height_for(input.len()),
            "built binary search array"
        );
    }

    /// Checked variant of [`prepare`](Self::prepare)
    ///
    /// Rejects empty input, input that is not strictly ascending under the
    /// comparator, and input containing the sentinel. On error the current
    /// tree is left untouched.
    pub fn try_prepare(&mut self, input: &[T]) -> Result<(), BsaError> {
        if input.is_empty() {
            return Err(BsaError::EmptyInput);
        }
        if let Some(position) = input.iter().position(|value| *value == self.invalid) {
            return Err(BsaError::SentinelInInput { position });
        }
        if let Some(position) = input
            .windows(2)
            .position(|pair| self.compare.compare(&pair[0], &pair[1]).is_ge())
        {
            return Err(BsaError::NotStrictlyAscending {
                position: position + 1,
            });
        }

        self.prepare(input);
        Ok(())
    }

    fn fill(&mut self, input: &[T], index: usize, span: Span) {
        debug_assert!(
            index < self.tree.len(),
            "slot {} outside capacity {}",
            index,
            self.tree.len()
        );

        self.tree[index] = input[span.midpoint()].clone();

        let (left, right) = span.halves();
        if let Some(left) = left {
            self.fill(input, layout::left_child(index), left);
        }
        if let Some(right) = right {
            self.fill(input, layout::right_child(index), right);
        }
    }

    /// Locate `key`, returning its 1-based slot or `0` if absent
    ///
    /// At most `height()` comparator calls.
    pub fn search(&self, key: &T) -> usize {
        let mut i = 1;
        let l = self.tree.len();

        while i < l && self.tree[i] != self.invalid {
            match self.compare.compare(key, &self.tree[i]) {
                Ordering::Less => i = layout::left_child(i),
                Ordering::Greater => i = layout::right_child(i),
                Ordering::Equal => {
                    trace!(slot = i, "search hit");
                    return i;
                }
            }
        }

        trace!(stopped_at = i, "search miss");
        0
    }

    /// Slot holding `key`, if any
    pub fn find(&self, key: &T) -> Option<usize> {
        match self.search(key) {
            0 => None,
            slot => Some(slot),
        }
    }

    /// Check whether `key` is stored
    pub fn contains(&self, key: &T) -> bool {
        self.search(key) != 0
    }
}

impl<T, C> BinarySearchArray<T, C>
where
    T: PartialEq,
{
    /// Raw slot value at 1-based `index`
    ///
    /// # Panics
    ///
    /// Panics if `index == 0` or `index >= size()`.
    pub fn get(&self, index: usize) -> &T {
        assert!(index > 0, "slot 0 is reserved");
        assert!(
            index < self.tree.len(),
            "slot {} out of bounds for size {}",
            index,
            self.tree.len()
        );
        &self.tree[index]
    }

    /// Checked variant of [`get`](Self::get)
    pub fn try_get(&self, index: usize) -> Result<&T, BsaError> {
        if index == 0 {
            return Err(BsaError::ReservedIndex);
        }
        self.tree.get(index).ok_or(BsaError::IndexOutOfBounds {
            index,
            size: self.tree.len(),
        })
    }

    /// Backing array length (0 before the first build)
    #[inline]
    pub fn size(&self) -> usize {
        self.tree.len()
    }

    /// Elements stored by the last build
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if nothing has been built yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of levels in the current tree
    pub fn height(&self) -> usize {
        layout::height_for(self.count)
    }

    /// Sentinel marking unused slots
    pub fn invalid(&self) -> &T {
        &self.invalid
    }

    /// Check if `index` is an unused slot
    ///
    /// Slot 0 and anything beyond the capacity count as vacant.
    pub fn is_vacant(&self, index: usize) -> bool {
        index == 0
            || self
                .tree
                .get(index)
                .map_or(true, |value| *value == self.invalid)
    }

    /// Whole backing storage, including reserved slot 0
    pub fn slots(&self) -> &[T] {
        &self.tree
    }

    /// In-order (ascending) iterator over stored elements
    pub fn iter(&self) -> InOrder<'_, T, C> {
        let mut iter = InOrder {
            array: self,
            stack: Vec::with_capacity(self.height()),
        };
        iter.descend_left(1);
        iter
    }
}

/// In-order traversal of a [`BinarySearchArray`]
///
/// Keeps only a stack of pending slot indices, at most `height()` deep.
#[derive(Debug)]
pub struct InOrder<'a, T, C> {
    array: &'a BinarySearchArray<T, C>,
    stack: Vec<usize>,
}

impl<T: PartialEq, C> InOrder<'_, T, C> {
    fn descend_left(&mut self, mut index: usize) {
        while !self.array.is_vacant(index) {
            self.stack.push(index);
            index = layout::left_child(index);
        }
    }
}

impl<'a, T: PartialEq, C> Iterator for InOrder<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        self.descend_left(layout::right_child(index));
        let array = self.array;
        Some(&array.tree[index])
    }
}

impl<'a, T: PartialEq, C> IntoIterator for &'a BinarySearchArray<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(input: &[i32]) -> BinarySearchArray<i32> {
        let mut tree = BinarySearchArray::new(i32::MIN, NaturalOrder);
        tree.prepare(input);
        tree
    }

    #[test]
    fn test_unbuilt_tree_is_empty() {
        let tree: BinarySearchArray<i32> = BinarySearchArray::new(i32::MIN, NaturalOrder);
        assert_eq!(tree.size(), 0);
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.search(&3), 0);
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn test_heap_layout_of_seven() {
        let tree = built(&[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(tree.slots(), &[i32::MIN, 3, 1, 5, 0, 2, 4, 6]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_heap_layout_of_nine() {
        let tree = built(&[7, 8, 9, 10, 11, 12, 13, 14, 15]);
        let m = i32::MIN;
        assert_eq!(
            tree.slots(),
            &[m, 11, 8, 13, 7, 9, 12, 14, m, m, m, 10, m, m, m, 15]
        );
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.height(), 4);
    }

    #[test]
    fn test_single_element() {
        let tree = built(&[42]);
        assert_eq!(tree.size(), 2);
        assert_eq!(*tree.get(1), 42);
        assert_eq!(tree.slots()[0], i32::MIN);
        assert_eq!(tree.search(&42), 1);
        assert_eq!(tree.search(&41), 0);
    }

    #[test]
    fn test_search_every_element() {
        let input: Vec<i32> = (0..100).map(|x| x * 3).collect();
        let tree = built(&input);
        for x in &input {
            let slot = tree.search(x);
            assert_ne!(slot, 0, "{} should be found", x);
            assert_eq!(tree.get(slot), x);
        }
        assert_eq!(tree.search(&1), 0);
        assert_eq!(tree.search(&300), 0);
        assert_eq!(tree.search(&-3), 0);
    }

    #[test]
    fn test_sentinel_is_never_found() {
        let tree = built(&[1, 2, 3]);
        assert_eq!(tree.search(&i32::MIN), 0);
    }

    #[test]
    fn test_find_and_contains() {
        let tree = built(&[10, 20, 30]);
        assert_eq!(tree.find(&20), Some(1));
        assert_eq!(tree.find(&25), None);
        assert!(tree.contains(&30));
        assert!(!tree.contains(&31));
    }

    #[test]
    fn test_rebuild_discards_previous_tree() {
        let mut tree = built(&(0..20).collect::<Vec<_>>());
        assert_eq!(tree.size(), 32);

        tree.prepare(&[100, 200]);
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.len(), 2);
        for stale in 0..20 {
            assert_eq!(tree.search(&stale), 0);
        }
        assert_eq!(tree.slots(), &[i32::MIN, 100, i32::MIN, 200]);
    }

    #[test]
    fn test_in_order_iteration_is_sorted_input() {
        for n in 1..64 {
            let input: Vec<i32> = (0..n).map(|x| x * 2 + 1).collect();
            let tree = built(&input);
            let collected: Vec<i32> = tree.iter().copied().collect();
            assert_eq!(collected, input);
        }
    }

    #[test]
    fn test_vacant_slots() {
        // Lower median of [1, 2] is 1, so 2 lands in the right child.
        let tree = built(&[1, 2]);
        assert_eq!(tree.slots(), &[i32::MIN, 1, i32::MIN, 2]);
        assert!(tree.is_vacant(0));
        assert!(!tree.is_vacant(1));
        assert!(tree.is_vacant(2));
        assert!(!tree.is_vacant(3));
        assert!(tree.is_vacant(99));
    }

    #[test]
    fn test_try_get_errors() {
        let tree = built(&[1, 2, 3]);
        assert_eq!(tree.try_get(1).ok(), Some(&2));
        assert!(matches!(tree.try_get(0), Err(BsaError::ReservedIndex)));
        assert!(matches!(
            tree.try_get(4),
            Err(BsaError::IndexOutOfBounds { index: 4, size: 4 })
        ));
    }

    #[test]
    fn test_try_prepare_rejects_bad_input() {
        let mut tree = built(&[1, 2, 3]);

        assert!(matches!(tree.try_prepare(&[]), Err(BsaError::EmptyInput)));
        assert!(matches!(
            tree.try_prepare(&[1, 3, 3]),
            Err(BsaError::NotStrictlyAscending { position: 2 })
        ));
        assert!(matches!(
            tree.try_prepare(&[5, 4]),
            Err(BsaError::NotStrictlyAscending { position: 1 })
        ));
        assert!(matches!(
            tree.try_prepare(&[i32::MIN, 0]),
            Err(BsaError::SentinelInInput { position: 0 })
        ));

        // Failed builds leave the old tree in place.
        assert_eq!(tree.search(&2), 1);
        assert_eq!(tree.size(), 4);

        assert!(tree.try_prepare(&[4, 5, 6, 7]).is_ok());
        assert_eq!(tree.size(), 8);
    }

    #[test]
    #[should_panic(expected = "empty input")]
    fn test_prepare_empty_panics() {
        let mut tree: BinarySearchArray<i32> = BinarySearchArray::new(i32::MIN, NaturalOrder);
        tree.prepare(&[]);
    }

    #[test]
    #[should_panic(expected = "reserved")]
    fn test_get_zero_panics() {
        built(&[1]).get(0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_past_capacity_panics() {
        built(&[1, 2, 3]).get(4);
    }
}
