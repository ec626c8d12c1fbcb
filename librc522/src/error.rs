// librc522/src/error.rs

use derive_more::Display;
use thiserror::Error;

use crate::registers::ErrorFlags;

/// Crate-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no tag answered")]
    NoTag,

    #[error("command timed out after {polls} polls")]
    Timeout { polls: u32 },

    #[error("peripheral reported error flags {0:?}")]
    Peripheral(ErrorFlags),

    #[error("unexpected response length: expected {expected} bits, got {actual}")]
    BitLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("authentication failed: crypto unit not engaged")]
    AuthenticationFailed,

    #[error("card did not acknowledge: {0:#04x}")]
    Nack(u8),

    #[error("crc coprocessor did not finish")]
    CrcTimeout,

    #[error("frame too long: max {max} bytes, got {actual}")]
    FrameTooLong { max: usize, actual: usize },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("sector {sector} out of range: card has {count} sectors")]
    SectorOutOfRange { sector: u8, count: usize },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Three-valued outcome of a card operation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    #[display(fmt = "OK")]
    Ok,
    #[display(fmt = "NO_TAG")]
    NoTag,
    #[display(fmt = "ERROR")]
    Error,
}

impl Status {
    /// Classify any operation result.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

impl Error {
    pub fn status(&self) -> Status {
        match self {
            Error::NoTag => Status::NoTag,
            _ => Status::Error,
        }
    }
}
