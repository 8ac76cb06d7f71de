//! Wraparound arithmetic.
//!
//! Every result is re-masked to `BITS` bits, so overflow is never
//! observable: adding past the top of the range lands back at the bottom.
//! Subtracting two counters yields the forward modular distance from the
//! right operand to the left, itself a counter.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::counter::Counter;
use crate::primitives::word::Word;

impl<T: Word, const BITS: u32> Counter<T, BITS> {
    /// Adds a signed delta, wrapping at the `BITS` boundary.
    ///
    /// Negative deltas move backwards on the circle; the two's-complement
    /// add and the final mask make both directions total.
    #[inline]
    pub fn offset(self, delta: i64) -> Self {
        Self::from_u64(self.to_u64().wrapping_add(delta as u64))
    }

    /// Advances by one, wrapping.
    #[inline]
    pub fn increment(&mut self) {
        *self = self.next();
    }

    /// Steps back by one, wrapping.
    #[inline]
    pub fn decrement(&mut self) {
        *self = self.prev();
    }

    /// The counter one step ahead.
    #[inline]
    pub fn next(self) -> Self {
        Self::from_u64(self.to_u64().wrapping_add(1))
    }

    /// The counter one step behind.
    #[inline]
    pub fn prev(self) -> Self {
        Self::from_u64(self.to_u64().wrapping_sub(1))
    }
}

impl<T: Word, const BITS: u32> Add<T> for Counter<T, BITS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self {
        Self::from_u64(self.to_u64().wrapping_add(rhs.to_u64()))
    }
}

impl<T: Word, const BITS: u32> Sub<T> for Counter<T, BITS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self {
        Self::from_u64(self.to_u64().wrapping_sub(rhs.to_u64()))
    }
}

impl<T: Word, const BITS: u32> Add for Counter<T, BITS> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self + rhs.value()
    }
}

/// `a - b` is the forward modular distance from `b` to `a`.
impl<T: Word, const BITS: u32> Sub for Counter<T, BITS> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self - rhs.value()
    }
}

impl<T: Word, const BITS: u32> AddAssign<T> for Counter<T, BITS> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Word, const BITS: u32> SubAssign<T> for Counter<T, BITS> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Word, const BITS: u32> AddAssign for Counter<T, BITS> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Word, const BITS: u32> SubAssign for Counter<T, BITS> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
