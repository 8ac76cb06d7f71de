//! # Layer 2: Width conversion
//!
//! Truncation drops high bits to store or transmit a counter in fewer bits;
//! expansion recovers the full-width value next to a trusted recent
//! reference. Truncation is trivially lossy; all the design weight sits in
//! the expansion window.
//!
//! ## The acceptance window
//!
//! A `SMALL`-bit truncation leaves `2^SMALL` full-width candidates. Exactly
//! one of them lies inside any half-open window of `2^SMALL` consecutive
//! values, so expansion picks the candidate inside the window anchored at
//! the reference:
//!
//! ```text
//!          past  <= MSB_s + bias            future < MSB_s - bias
//!       [------------------------- recent -------------------------)
//!                           window size: 2^SMALL
//! ```
//!
//! `bias` shifts the window: positive values tolerate deeper past skew at
//! the cost of future reach, negative values the opposite. A true value
//! outside the window aliases silently to the in-window candidate with the
//! same low bits; keep `|bias|` well below `2^(SMALL-1)` and the reference
//! fresh relative to the reporting rate.

use crate::counter::Counter;
use crate::primitives::word::{mask_of, Word};

impl<T: Word, const BITS: u32> Counter<T, BITS> {
    /// Drops the high bits, narrowing to a `SMALL`-bit counter.
    ///
    /// Lossy and total. `SMALL` may equal `BITS` (the operation is then the
    /// identity, which is what makes truncation idempotent).
    ///
    /// The target width is usually inferred:
    ///
    /// ```rust
    /// use lapcount::prelude::*;
    ///
    /// let full = Counter16::new(0x1234);
    /// let narrow: Counter4 = full.truncate();
    /// assert_eq!(narrow, 0x4);
    /// ```
    #[inline]
    pub fn truncate<U: Word, const SMALL: u32>(self) -> Counter<U, SMALL> {
        const {
            assert!(SMALL <= BITS, "cannot truncate to a wider counter");
        }
        Counter::from_u64(self.to_u64())
    }

    /// Reconstructs a full-width counter from its truncated form and a
    /// recent full-width reference.
    ///
    /// The result is the unique value that truncates to `truncated` and
    /// lies inside the bias-adjusted window around `recent`: strictly less
    /// than `2^(SMALL-1) - bias` ahead of it, at most `2^(SMALL-1) + bias`
    /// behind it. If the true original was outside that window, the result
    /// still truncates correctly but names the wrong epoch; there is no way
    /// to detect this here, so the staleness bound is the caller's contract.
    pub fn expand_from_truncated<U: Word, const SMALL: u32>(
        recent: Self,
        truncated: Counter<U, SMALL>,
        bias: i32,
    ) -> Self {
        const {
            assert!(SMALL < BITS, "expansion must widen the counter");
        }
        // Forward distance in the small space from the reference's low bits
        // to the truncated value, in [0, 2^SMALL).
        let ahead =
            (truncated.to_u64().wrapping_sub(recent.to_u64()) & mask_of(SMALL)) as i128;
        // How far ahead of the reference we are willing to go. Everything
        // past that is read as the previous epoch. i128 keeps the math
        // total for any bias at any width up to 63 bits.
        let reach = (1i128 << (SMALL - 1)) - bias as i128;
        let delta = if ahead < reach {
            ahead
        } else {
            ahead - (1i128 << SMALL)
        };
        recent.offset(delta as i64)
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Counter4, Counter8, Counter16};

    #[test]
    fn truncate_drops_high_bits() {
        let full = Counter16::new(0xABCD);
        let low8: Counter8 = full.truncate();
        let low4: Counter4 = full.truncate();
        assert_eq!(low8, 0xCD);
        assert_eq!(low4, 0xD);
    }

    #[test]
    fn truncation_is_idempotent() {
        let full = Counter16::new(0xABCD);
        let once: Counter4 = full.truncate();
        let twice: Counter4 = once.truncate();
        assert_eq!(once, twice);
    }

    #[test]
    fn expansion_follows_the_reference_epoch() {
        // Reference and original share high bits: candidate is taken as-is.
        let recent = Counter16::new(0x1230);
        let narrow: Counter8 = Counter16::new(0x1234).truncate();
        let out = Counter16::expand_from_truncated(recent, narrow, 0);
        assert_eq!(out, 0x1234);
    }

    #[test]
    fn expansion_crosses_epochs_both_ways() {
        // Original just past an epoch boundary, reference just before it.
        let recent = Counter16::new(0x12FE);
        let narrow: Counter8 = Counter16::new(0x1302).truncate();
        assert_eq!(Counter16::expand_from_truncated(recent, narrow, 0), 0x1302);

        // And the mirror: original behind the boundary the reference passed.
        let recent = Counter16::new(0x1302);
        let narrow: Counter8 = Counter16::new(0x12FE).truncate();
        assert_eq!(Counter16::expand_from_truncated(recent, narrow, 0), 0x12FE);
    }

    #[test]
    fn bias_shifts_the_boundary() {
        // 8 ahead of an 4-bit reference is exactly antipodal: with bias 0
        // it resolves to the past epoch...
        let recent = Counter16::new(0x100);
        let narrow: Counter4 = Counter16::new(0x108).truncate();
        assert_eq!(Counter16::expand_from_truncated(recent, narrow, 0), 0xF8);
        // ...a negative bias extends future reach and flips the call.
        assert_eq!(Counter16::expand_from_truncated(recent, narrow, -1), 0x108);
    }
}
