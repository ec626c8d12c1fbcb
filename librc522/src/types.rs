// librc522/src/types.rs

use std::fmt;

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::protocol::checksum::bcc;
use crate::Error;

/// Card serial number from anticollision: 4 UID bytes followed by their BCC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SerialNumber([u8; 5]);

impl SerialNumber {
    /// Wrap 5 raw bytes without checking the BCC.
    pub fn from_bytes(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    /// Build a serial from a 4-byte UID, appending its check byte.
    pub fn from_uid(uid: [u8; 4]) -> Self {
        Self([uid[0], uid[1], uid[2], uid[3], bcc(&uid)])
    }

    pub fn as_bytes(&self) -> &[u8; 5] {
        &self.0
    }

    pub fn uid(&self) -> [u8; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    pub fn check_byte(&self) -> u8 {
        self.0[4]
    }

    pub fn is_valid(&self) -> bool {
        bcc(&self.0[..4]) == self.0[4]
    }

    /// Big-endian integer form of the UID bytes.
    pub fn to_u32(&self) -> u32 {
        u32::from_be_bytes(self.uid())
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for SerialNumber {
    type Error = Error;

    /// Requires exactly 5 bytes with a matching check byte.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 5] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 5,
            actual: bytes.len(),
        })?;
        let serial = Self(arr);
        if !serial.is_valid() {
            return Err(Error::ChecksumMismatch {
                expected: bcc(&arr[..4]),
                actual: arr[4],
            });
        }
        Ok(serial)
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(&self.0))
    }
}

/// 6-byte Mifare sector key (Key A or Key B).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectorKey([u8; 6]);

impl SectorKey {
    /// Factory transport key.
    pub const DEFAULT: Self = Self([0xFF; 6]);

    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Parse `"ffffffffffff"`, `"ff ff ff ff ff ff"` or `"ff:ff:..."`.
    pub fn from_hex(s: &str) -> crate::Result<Self> {
        crate::utils::parse_hex_array(s).map(Self)
    }
}

impl Default for SectorKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Keys stay out of logs.
impl fmt::Debug for SectorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SectorKey(******)")
    }
}

impl TryFrom<&[u8]> for SectorKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidLength {
                expected: 6,
                actual: bytes.len(),
            })
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.0)
    }

    /// Printable ASCII with `.` for everything else.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| match b {
                0x20..=0x7E => b as char,
                _ => '.',
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            })
    }
}

/// Card family decoded from the 2-byte answer to request.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardType {
    #[display(fmt = "Mifare Ultralight")]
    MifareUltralight,
    #[display(fmt = "Mifare One (S50)")]
    MifareOneS50,
    #[display(fmt = "Mifare One (S70)")]
    MifareOneS70,
    #[display(fmt = "Mifare Pro (X)")]
    MifareProX,
    #[display(fmt = "Mifare DESFire")]
    MifareDesfire,
    #[display(fmt = "unknown ({:#06x})", _0)]
    Unknown(u16),
}

impl CardType {
    /// Decode from the answer bytes, first byte high: `{0x04, 0x00}` is S50.
    pub fn from_atqa(atqa: [u8; 2]) -> Self {
        match u16::from_be_bytes(atqa) {
            0x4400 => Self::MifareUltralight,
            0x0400 => Self::MifareOneS50,
            0x0200 => Self::MifareOneS70,
            0x0800 => Self::MifareProX,
            0x4403 => Self::MifareDesfire,
            other => Self::Unknown(other),
        }
    }
}

/// Probe flavour for Request.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RequestMode {
    /// REQA: only cards not in the halt state answer.
    #[default]
    Idle = 0x26,
    /// WUPA: halted cards answer as well.
    All = 0x52,
}

/// Which sector key to authenticate with.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AuthMode {
    #[default]
    KeyA = 0x60,
    KeyB = 0x61,
}
