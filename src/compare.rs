//! Pluggable total orders
//!
//! A [`Comparator`] ranks two values: `Less` when the first is logically
//! smaller, `Greater` when larger, `Equal` otherwise. It decides both the
//! shape of a built tree and the direction of every search step, so it
//! must be deterministic and total.

use std::cmp::Ordering;

/// Total order over `T` used to build and search a tree
pub trait Comparator<T> {
    /// Compare `left` against `right`
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Ordering given by `T: Ord`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Adapter for comparators returning a signed integer
///
/// Negative means less, zero equal, positive greater. Any integer type
/// that widens losslessly into `i64` works as the return type.
#[derive(Debug, Clone, Copy)]
pub struct Signed<F>(pub F);

impl<T, F, R> Comparator<T> for Signed<F>
where
    F: Fn(&T, &T) -> R,
    R: Into<i64>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left, right).into().cmp(&0)
    }
}

/// Inverts another comparator
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<C>(pub C);

impl<T, C> Comparator<T> for Reverse<C>
where
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(left, right).reverse()
    }
}
