#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod bus;
pub mod error;
pub mod hal;
pub mod platform;

pub use bus::SoftI2c;
pub use error::{ErrorKind, RegisterWidth, Result, Stage, TransactionResult};
pub use hal::Error as HalError;
pub use platform::{PinState, Platform};
