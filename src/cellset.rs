//! A fixed-capacity set of board cell indices using const generics.
//!
//! The set is `no_std` friendly and avoids heap allocations: up to `CELLS`
//! linear indices are packed into the bits of an unsigned integer `T`.
//! Membership, insertion and removal are single bit operations.

use core::fmt;
use core::mem;
use core::ops::{BitAnd, BitOr};
use num_traits::{PrimInt, Unsigned, Zero};

/// A set of cell indices in `[0, CELLS)` stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const CELLS: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const CELLS: usize> CellSet<T, CELLS>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create a new empty set.
    #[inline]
    pub fn new() -> Self {
        debug_assert!(CELLS <= mem::size_of::<T>() * 8);
        CellSet { bits: T::zero() }
    }

    /// Number of indices in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set holds no indices.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns `true` if `index` is in the set.
    #[inline]
    pub fn contains(&self, index: u32) -> bool {
        debug_assert!((index as usize) < CELLS);
        ((self.bits >> index as usize) & T::one()) != T::zero()
    }

    /// Add `index` to the set.
    #[inline]
    pub fn insert(&mut self, index: u32) {
        debug_assert!((index as usize) < CELLS);
        self.bits = self.bits | (T::one() << index as usize);
    }

    /// Remove `index` from the set. Returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, index: u32) -> bool {
        let present = self.contains(index);
        self.bits = self.bits & !(T::one() << index as usize);
        present
    }

    /// Iterator over the indices in the set, in increasing order.
    #[inline]
    pub fn iter(&self) -> Indices<'_, T, CELLS> {
        Indices {
            set: self,
            next: 0,
        }
    }
}

impl<T, const CELLS: usize> Default for CellSet<T, CELLS>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CELLS: usize> FromIterator<u32> for CellSet<T, CELLS>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl<T, const CELLS: usize> fmt::Debug for CellSet<T, CELLS>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellSet<{}>", CELLS)?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Intersection of two sets.
impl<T, const CELLS: usize> BitAnd for CellSet<T, CELLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

/// Union of two sets.
impl<T, const CELLS: usize> BitOr for CellSet<T, CELLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

/// Iterator over the indices held by a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Indices<'a, T, const CELLS: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T, CELLS>,
    next: u32,
}

impl<'a, T, const CELLS: usize> Iterator for Indices<'a, T, CELLS>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = u32;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while (self.next as usize) < CELLS {
            let index = self.next;
            self.next += 1;
            if self.set.contains(index) {
                return Some(index);
            }
        }
        None
    }
}
