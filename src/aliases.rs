//! Canonical width aliases.
//!
//! One alias per width in the supported set, each stored in the smallest
//! native container that holds it. Widths 4, 10, 24 and 48 are padded
//! (container wider than the logical width); the rest fill their container
//! exactly. Other widths are available through [`Counter`] directly.

use paste::paste;

use crate::counter::Counter;

macro_rules! counter_aliases {
    ($($bits:literal => $container:ty),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!(
                    "A ", stringify!($bits),
                    "-bit wraparound counter stored in a `",
                    stringify!($container), "`."
                )]
                pub type [<Counter $bits>] = Counter<$container, $bits>;
            )*
        }
    };
}

counter_aliases! {
    4  => u8,
    8  => u8,
    10 => u16,
    16 => u16,
    24 => u32,
    32 => u32,
    48 => u64,
    64 => u64,
}
