//! # Layer 1: Counter core
//!
//! The wraparound value type and its point-on-a-circle semantics.
//!
//! - **Value**: `Counter<T, BITS>`, a masked `BITS`-bit value in container `T`.
//! - **Comparison**: ordering by signed modular distance, valid inside the
//!   half window.
//! - **Arithmetic**: add/subtract that wrap at the `BITS` boundary.

mod arith;
mod cmp;
mod value;

pub use value::Counter;
