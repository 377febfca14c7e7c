//! Logging macro shims.
//!
//! Dispatches to `defmt` or `log`, whichever feature is enabled. If neither is
//! enabled, the macros expand to nothing so call sites don't need `#[cfg]`.

#![macro_use]
#![allow(unused_macros)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("You may not enable both `defmt` and `log` features.");

macro_rules! trace {
    ($($x:tt)*) => {
        {
            #[cfg(feature = "log")]
            ::log::trace!($($x)*);
            #[cfg(feature = "defmt")]
            ::defmt::trace!($($x)*);
        }
    };
}

macro_rules! debug {
    ($($x:tt)*) => {
        {
            #[cfg(feature = "log")]
            ::log::debug!($($x)*);
            #[cfg(feature = "defmt")]
            ::defmt::debug!($($x)*);
        }
    };
}

macro_rules! warn {
    ($($x:tt)*) => {
        {
            #[cfg(feature = "log")]
            ::log::warn!($($x)*);
            #[cfg(feature = "defmt")]
            ::defmt::warn!($($x)*);
        }
    };
}

macro_rules! error {
    ($($x:tt)*) => {
        {
            #[cfg(feature = "log")]
            ::log::error!($($x)*);
            #[cfg(feature = "defmt")]
            ::defmt::error!($($x)*);
        }
    };
}
