// librc522/src/prelude.rs

pub use crate::card::{Card, CardInfo, Keyring, SectorTrailer};
pub use crate::clock::{Clock, Delay};
pub use crate::device::{Device, DeviceBuilder, DriverConfig, Initialized, Uninitialized};
pub use crate::protocol::{Command, Frame};
pub use crate::registers::{PcdCommand, Register};
pub use crate::transport::{Bus, SpiTransport, Transport};
pub use crate::{
    AuthMode, BlockData, CardType, Error, RequestMode, Result, SectorKey, SerialNumber, Status,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
