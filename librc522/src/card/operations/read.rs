// librc522/src/card/operations/read.rs

use crate::card::operations::authenticate_block;
use crate::card::trailer::trailer_block;
use crate::card::{Card, Keyring};
use crate::constants::BLOCKS_PER_SECTOR;
use crate::device::{Device, Initialized};
use crate::types::BlockData;
use crate::Result;

/// Authenticate the block's sector, then read the block.
pub fn read_block(
    card: &Card,
    device: &mut Device<Initialized>,
    block: u8,
    keys: &Keyring,
) -> Result<BlockData> {
    authenticate_block(card, device, block, keys)?;
    device.read_block(block)
}

/// Read every block of `sector`, trailer included, under one authentication.
pub fn read_sector(
    card: &Card,
    device: &mut Device<Initialized>,
    sector: u8,
    keys: &Keyring,
) -> Result<Vec<BlockData>> {
    let last = trailer_block(sector)?;
    let first = last + 1 - BLOCKS_PER_SECTOR;
    authenticate_block(card, device, first, keys)?;
    (first..=last).map(|b| device.read_block(b)).collect()
}
