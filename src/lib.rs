#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (the API itself only needs core)
// - serde: optional serialization of counter values

//! # lapcount
//!
//! Fixed-width wraparound counters with truncation and reference-based
//! expansion.
//!
//! **Value types for timestamps and sequence numbers that live modulo a
//! power of two.**
//!
//! A [`Counter<T, BITS>`](Counter) holds an unsigned value truncated to
//! `BITS` bits inside a native container `T`. All arithmetic wraps at the
//! `BITS` boundary, and comparisons answer "which of two points is ahead on
//! the circle" instead of "which raw integer is larger". A counter can be
//! truncated to fewer bits for storage or transmission, and later expanded
//! back to full width using a nearby reference value.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Word (native containers u8/u16/u32/u64), mask/msb helpers      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Counter core                                            |
//! |  - Counter<T, BITS> value type (masking, constants)               |
//! |  - Wraparound comparison and arithmetic                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Width conversion                                        |
//! |  - truncate (mask + narrow), expand_from_truncated (windowed)     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## The half-range contract
//!
//! Two counters of width `BITS` order correctly only while their true
//! (unwrapped) distance is strictly less than `2^(BITS-1)`. This is the
//! fundamental trade-off of fixed-width wraparound counters: the type cannot
//! detect a violation at runtime, it just returns the wrong ordering.
//! Likewise [`Counter::expand_from_truncated`] reconstructs the original
//! value only while the reference is recent enough; a stale reference
//! silently aliases to the nearest in-window candidate. Callers own both
//! bounds.
//!
//! ## Quick Start
//!
//! ```rust
//! use lapcount::prelude::*;
//!
//! // A 32-bit tick counter just below the wrap boundary.
//! let t0 = Counter32::new(0xffff_ff00);
//! let deadline = t0 + 0x200;
//! assert!(t0 < deadline); // still ordered correctly across the wrap
//!
//! // Ship only the low 8 bits, recover the full value near a reference.
//! let full = Counter16::new(0x1234);
//! let narrow: Counter8 = full.truncate();
//! let recent = Counter16::new(0x1230);
//! let back = Counter16::expand_from_truncated(recent, narrow, 0);
//! assert_eq!(back, full);
//! ```
//!
//! ## Features
//!
//! - **Zero runtime overhead**: plain `Copy` values, no allocation, no I/O;
//!   width mismatches fail at compile time.
//! - **Arbitrary widths**: any `1..=container` bit width works; the
//!   canonical set (4, 8, 10, 16, 24, 32, 48, 64) ships as aliases.
//! - **`no_std`**: the crate only needs `core` (`std` is a default feature
//!   for convenience).
//! - **`serde`** (optional): serializes the raw value, re-masks on
//!   deserialize.

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Counter core
// =============================================================================
pub mod counter;

// =============================================================================
// Layer 2: Width conversion
// =============================================================================
mod expand;

// Canonical width aliases (Counter4 .. Counter64)
pub mod aliases;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use aliases::{
    Counter4, Counter8, Counter10, Counter16, Counter24, Counter32, Counter48, Counter64,
};
pub use counter::Counter;
pub use primitives::word::Word;

/// Common items for working with wraparound counters.
pub mod prelude {
    pub use crate::aliases::{
        Counter4, Counter8, Counter10, Counter16, Counter24, Counter32, Counter48, Counter64,
    };
    pub use crate::counter::Counter;
    pub use crate::primitives::word::Word;
}
