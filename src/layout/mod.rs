//! Index arithmetic of the implicit tree
//!
//! Slots are 1-indexed; slot 0 is reserved and doubles as "not found".
//! Node i has children 2i and 2i + 1 and parent ⌊i / 2⌋, so level d
//! occupies slots [2^d, 2^(d+1)). No links are stored anywhere.
//!
//! A tree built from n ≥ 1 elements has ⌊log2 n⌋ + 1 levels (spans halve
//! at every split), so its deepest slot is below 2^(⌊log2 n⌋ + 1), the
//! smallest power of two strictly greater than n. That is [`capacity_for`].

mod span;

pub use span::Span;

/// Smallest power of two strictly greater than `length`
///
/// `capacity_for(0) == 1`, `capacity_for(7) == 8`, `capacity_for(8) == 16`.
#[inline]
pub fn capacity_for(length: usize) -> usize {
    (length + 1).next_power_of_two()
}

/// Number of levels in a tree built from `length` elements: ⌈log2(length + 1)⌉
#[inline]
pub fn height_for(length: usize) -> usize {
    capacity_for(length).trailing_zeros() as usize
}

/// Left child slot
#[inline]
pub fn left_child(index: usize) -> usize {
    index * 2
}

/// Right child slot
#[inline]
pub fn right_child(index: usize) -> usize {
    index * 2 + 1
}

/// Parent slot; the root's parent is the reserved slot 0
#[inline]
pub fn parent(index: usize) -> usize {
    index / 2
}

/// Zero-based level of `index` (root = 0)
#[inline]
pub fn depth_of(index: usize) -> usize {
    assert!(index > 0, "slot 0 is not part of the tree");
    (usize::BITS - 1 - index.leading_zeros()) as usize
}
