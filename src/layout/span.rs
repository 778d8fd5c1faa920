//! Input span bisected during construction
//!
//! Span = inclusive range [start, end] of the sorted input
//! Split point is the lower median: c = ⌊(start + end) / 2⌋
//!   Left half:  [start, c - 1]  (absent when c == start)
//!   Right half: [c + 1, end]    (absent when c == end)

use std::fmt;

/// Inclusive range of input positions (never empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First input position (inclusive)
    pub start: usize,

    /// Last input position (inclusive)
    pub end: usize,
}

impl Span {
    /// Span covering a whole input of `length` elements
    ///
    /// Returns `None` for an empty input.
    pub fn whole(length: usize) -> Option<Self> {
        length.checked_sub(1).map(|end| Self { start: 0, end })
    }

    /// Check if the span holds a single position
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.start == self.end
    }

    /// Number of positions covered
    #[inline]
    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    /// Lower median, the element placed at the current tree slot
    #[inline]
    pub fn midpoint(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }

    /// Sub-spans left and right of the midpoint
    ///
    /// Each half has length ≤ ⌊length / 2⌋, which bounds the recursion
    /// depth by ⌊log2 length⌋.
    pub fn halves(&self) -> (Option<Span>, Option<Span>) {
        let mid = self.midpoint();
        let left = (self.start < mid).then(|| Span {
            start: self.start,
            end: mid - 1,
        });
        let right = (mid < self.end).then(|| Span {
            start: mid + 1,
            end: self.end,
        });
        (left, right)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            write!(f, "[{}]", self.start)
        } else {
            write!(f, "[{}, {}]", self.start, self.end)
        }
    }
}
