//! # Layer 0: Primitives
//!
//! Basic building blocks for the counter types:
//! - `word.rs`: the native containers (`u8`/`u16`/`u32`/`u64`) and the
//!   const-fn mask/msb helpers everything else is built on.

pub mod word;

// Re-export key items at this level
pub use word::{mask_of, msb_of, Word};
