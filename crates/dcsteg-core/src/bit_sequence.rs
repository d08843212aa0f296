//! Growable bit container that remembers the highest index ever addressed.
//!
//! [`CountedBitSequence`] reports its length as "highest touched index + 1".
//! Clearing a bit counts as touching it, so trailing zeros that were written
//! explicitly extend the length, while bits never addressed do not.

use std::ops::Range;

use bitvec::prelude::*;

/// Ordered bit sequence with range based length semantics.
///
/// ```rust
/// use dcsteg_core::CountedBitSequence;
///
/// let mut bits = CountedBitSequence::new();
/// bits.set(5, true);
/// bits.clear(2);
/// assert_eq!(bits.len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountedBitSequence {
    bits: BitVec<u8, Lsb0>,
    highest_touched: Option<usize>,
}

impl CountedBitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of addressed bits, that is the highest touched index plus one.
    pub fn len(&self) -> usize {
        self.highest_touched.map_or(0, |i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.highest_touched.is_none()
    }

    /// Bits that were never written read as `false`.
    pub fn get(&self, index: usize) -> bool {
        self.bits.get(index).map_or(false, |b| *b)
    }

    pub fn set(&mut self, index: usize, bit: bool) {
        self.grow_to(index + 1);
        self.bits.set(index, bit);
        self.touch(index);
    }

    pub fn clear(&mut self, index: usize) {
        self.set(index, false);
    }

    /// Sets every bit of the half-open `range` to `bit`.
    pub fn set_range(&mut self, range: Range<usize>, bit: bool) {
        if range.is_empty() {
            return;
        }
        let last = range.end - 1;
        self.grow_to(range.end);
        self.bits[range].fill(bit);
        self.touch(last);
    }

    pub fn clear_range(&mut self, range: Range<usize>) {
        self.set_range(range, false);
    }

    /// Writes `bit` at index `len()`.
    pub fn append(&mut self, bit: bool) {
        let next = self.len();
        self.set(next, bit);
    }

    /// Appends the addressed bits `0..other.len()` of `other`.
    pub fn append_all(&mut self, other: &CountedBitSequence) {
        for bit in other.iter() {
            self.append(bit);
        }
    }

    /// Iterates over the addressed bits `0..len()`.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    fn grow_to(&mut self, len: usize) {
        if self.bits.len() < len {
            self.bits.resize(len, false);
        }
    }

    fn touch(&mut self, index: usize) {
        self.highest_touched = Some(self.highest_touched.map_or(index, |h| h.max(index)));
    }
}

impl FromIterator<bool> for CountedBitSequence {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        let mut seq = Self::new();
        for bit in iter {
            seq.append(bit);
        }
        seq
    }
}
