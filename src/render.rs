//! Text rendering of a tree's raw slots
//!
//! Format: `[i] value` per slot, `[i] -` for sentinel slots, joined by
//! `, `. Slot 0 is included so the reserved position stays visible.

use std::fmt;

use crate::BinarySearchArray;

/// Borrowed [`Display`](fmt::Display) view over every slot of a tree
#[derive(Debug)]
pub struct SlotDump<'a, T, C> {
    array: &'a BinarySearchArray<T, C>,
}

impl<'a, T, C> SlotDump<'a, T, C> {
    /// Wrap `array` for display
    pub fn new(array: &'a BinarySearchArray<T, C>) -> Self {
        Self { array }
    }
}

impl<T, C> fmt::Display for SlotDump<'_, T, C>
where
    T: PartialEq + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.array.slots().iter().enumerate() {
            // Uniform separator, slot 0 included.
            if i > 0 {
                f.write_str(", ")?;
            }
            if self.array.is_vacant(i) {
                write!(f, "[{}] -", i)?;
            } else {
                write!(f, "[{}] {}", i, value)?;
            }
        }
        Ok(())
    }
}

impl<T: PartialEq, C> BinarySearchArray<T, C> {
    /// Display view of all slots
    pub fn dump(&self) -> SlotDump<'_, T, C> {
        SlotDump::new(self)
    }
}
