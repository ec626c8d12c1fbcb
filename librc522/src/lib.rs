// librc522/src/lib.rs

//! librc522
//!
//! Pure Rust driver for the NXP MFRC522 contactless reader and the
//! ISO 14443-A / Mifare One card commands it relays.
#![warn(missing_docs)]

pub mod card;
pub mod clock;
pub mod constants;
pub mod device;
#[cfg(feature = "diagnostics")]
pub mod diagnostics;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod registers;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Error, Result, Status and the card newtypes live at the crate root.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
