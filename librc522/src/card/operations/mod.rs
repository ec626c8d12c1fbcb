// librc522/src/card/operations/mod.rs

pub mod read;
pub mod write;

pub use read::{read_block, read_sector};
pub use write::{write_block, write_trailer};

use crate::card::trailer::sector_of;
use crate::card::{Card, Keyring};
use crate::device::{Device, Initialized};
use crate::Result;

/// Authenticate the sector holding `block` with the key the ring holds for it.
pub fn authenticate_block(
    card: &Card,
    device: &mut Device<Initialized>,
    block: u8,
    keys: &Keyring,
) -> Result<()> {
    let (mode, key) = keys.key_for(sector_of(block));
    device.authenticate(mode, block, &key, card.serial())
}
