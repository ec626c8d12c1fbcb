// librc522/src/card/operations/write.rs

use crate::card::operations::authenticate_block;
use crate::card::trailer::{trailer_block, SectorTrailer};
use crate::card::{Card, Keyring};
use crate::device::{Device, Initialized};
use crate::types::BlockData;
use crate::Result;

/// Authenticate the block's sector, then write the block.
pub fn write_block(
    card: &Card,
    device: &mut Device<Initialized>,
    block: u8,
    data: &BlockData,
    keys: &Keyring,
) -> Result<()> {
    authenticate_block(card, device, block, keys)?;
    device.write_block(block, data)
}

/// Replace the keys and access bits of `sector`. Wrong access bits can lock
/// the sector permanently.
pub fn write_trailer(
    card: &Card,
    device: &mut Device<Initialized>,
    sector: u8,
    trailer: &SectorTrailer,
    keys: &Keyring,
) -> Result<()> {
    let block = trailer_block(sector)?;
    write_block(card, device, block, &trailer.to_block(), keys)
}
