//! # Binary Search Array
//!
//! A balanced binary search tree with no pointers: nodes live in one flat
//! array and parent/child links are computed from indices.
//!
//! ## Core Algorithm
//!
//! 1. **Sizing**: backing array length = smallest power of two > n
//! 2. **Construction**: lower-median bisection of the sorted input, node
//!    at slot i, halves at slots 2i and 2i + 1 (breadth-first layout)
//! 3. **Search**: descend from slot 1 by index doubling, stop on the
//!    sentinel or past the end
//!
//! Result: O(n) build, O(log n) search, root-to-leaf paths packed at the
//! front of the array for cache locality.
//!
//! ## Usage Example
//!
//! ```
//! use bsarray::{BinarySearchArray, Signed};
//!
//! fn compare(left: &i32, right: &i32) -> i32 {
//!     (left > right) as i32 - (left < right) as i32
//! }
//!
//! let mut tree = BinarySearchArray::new(i32::MIN, Signed(compare));
//! tree.prepare(&[7, 8, 9, 10, 11, 12, 13, 14, 15]);
//!
//! assert_eq!(tree.size(), 16);
//! assert_eq!(tree.search(&5), 0);
//! assert!(tree.contains(&12));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod array;   // Tree storage, build and search
pub mod compare; // Comparator capability
pub mod layout;  // Implicit index arithmetic
pub mod render;  // Slot rendering

// Re-exports for convenience
pub use array::{BinarySearchArray, InOrder};
pub use compare::{Comparator, NaturalOrder, Reverse, Signed};
pub use layout::{capacity_for, height_for, Span};
pub use render::SlotDump;

use thiserror::Error;

/// Errors reported by the checked operations
///
/// The unchecked operations panic on the same conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BsaError {
    /// Build input was empty
    #[error("input sequence must be non-empty")]
    EmptyInput,

    /// Build input was not strictly ascending under the comparator
    #[error("input is not strictly ascending at position {position}")]
    NotStrictlyAscending {
        /// First position that does not compare greater than its predecessor
        position: usize,
    },

    /// Build input contained the sentinel value
    #[error("input contains the sentinel value at position {position}")]
    SentinelInInput {
        /// Position of the sentinel within the input
        position: usize,
    },

    /// Slot 0 was requested
    #[error("slot 0 is reserved")]
    ReservedIndex,

    /// Slot index past the end of the backing array
    #[error("slot {index} out of bounds for size {size}")]
    IndexOutOfBounds {
        /// Requested slot
        index: usize,
        /// Backing array length
        size: usize,
    },
}
