// librc522/src/card/trailer.rs

//! Mifare One 1K sector layout: 16 sectors of 4 blocks, the last block of
//! each sector holding Key A, the access bits and Key B.

use crate::constants::{BLOCKS_PER_SECTOR, SECTOR_COUNT};
use crate::types::{BlockData, SectorKey};
use crate::{Error, Result};

/// Sector that holds `block`.
pub fn sector_of(block: u8) -> u8 {
    block / BLOCKS_PER_SECTOR
}

/// Trailer block of `sector`.
pub fn trailer_block(sector: u8) -> Result<u8> {
    Ok(check_sector(sector)? * BLOCKS_PER_SECTOR + (BLOCKS_PER_SECTOR - 1))
}

pub fn is_trailer(block: u8) -> bool {
    block % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1
}

/// Sector numbers must stay inside the 1K layout.
pub(crate) fn check_sector(sector: u8) -> Result<u8> {
    if usize::from(sector) >= SECTOR_COUNT {
        return Err(Error::SectorOutOfRange {
            sector,
            count: SECTOR_COUNT,
        });
    }
    Ok(sector)
}

/// Contents of a sector trailer block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorTrailer {
    pub key_a: SectorKey,
    /// Access conditions plus the general purpose byte.
    pub access_bits: [u8; 4],
    pub key_b: SectorKey,
}

impl SectorTrailer {
    /// Transport configuration: keys A and B readable/writable with Key A.
    pub const DEFAULT_ACCESS_BITS: [u8; 4] = [0xFF, 0x07, 0x80, 0x69];

    pub fn new(key_a: SectorKey, key_b: SectorKey) -> Self {
        Self {
            key_a,
            access_bits: Self::DEFAULT_ACCESS_BITS,
            key_b,
        }
    }

    pub fn to_block(&self) -> BlockData {
        let mut bytes = [0u8; 16];
        bytes[..6].copy_from_slice(self.key_a.as_bytes());
        bytes[6..10].copy_from_slice(&self.access_bits);
        bytes[10..].copy_from_slice(self.key_b.as_bytes());
        BlockData::from_bytes(bytes)
    }

    /// Decode a trailer as read from the card. Key A always reads back as
    /// zeros on real cards.
    pub fn from_block(block: &BlockData) -> Self {
        let b = block.as_bytes();
        let mut key_a = [0u8; 6];
        let mut access_bits = [0u8; 4];
        let mut key_b = [0u8; 6];
        key_a.copy_from_slice(&b[..6]);
        access_bits.copy_from_slice(&b[6..10]);
        key_b.copy_from_slice(&b[10..]);
        Self {
            key_a: SectorKey::new(key_a),
            access_bits,
            key_b: SectorKey::new(key_b),
        }
    }
}

impl Default for SectorTrailer {
    fn default() -> Self {
        Self::new(SectorKey::DEFAULT, SectorKey::DEFAULT)
    }
}
