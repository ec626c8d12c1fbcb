// librc522/src/card/mod.rs

use crate::device::{Device, Initialized};
use crate::types::{BlockData, CardType, SerialNumber};
use crate::Result;

mod info;
pub use info::CardInfo;

mod keys;
pub use keys::Keyring;

pub mod operations;
pub mod trailer;
pub use trailer::SectorTrailer;

/// A card that answered Request, Anticoll and Select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    serial: SerialNumber,
    card_type: CardType,
    sak: u8,
}

impl Card {
    pub fn new(serial: SerialNumber, card_type: CardType, sak: u8) -> Self {
        Self {
            serial,
            card_type,
            sak,
        }
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }
    pub fn card_type(&self) -> CardType {
        self.card_type
    }
    /// Select acknowledge byte.
    pub fn size_code(&self) -> u8 {
        self.sak
    }

    pub fn read_block(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        keys: &Keyring,
    ) -> Result<BlockData> {
        operations::read_block(self, device, block, keys)
    }

    pub fn read_sector(
        &self,
        device: &mut Device<Initialized>,
        sector: u8,
        keys: &Keyring,
    ) -> Result<Vec<BlockData>> {
        operations::read_sector(self, device, sector, keys)
    }

    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        data: &BlockData,
        keys: &Keyring,
    ) -> Result<()> {
        operations::write_block(self, device, block, data, keys)
    }

    pub fn write_trailer(
        &self,
        device: &mut Device<Initialized>,
        sector: u8,
        trailer: &SectorTrailer,
        keys: &Keyring,
    ) -> Result<()> {
        operations::write_trailer(self, device, sector, trailer, keys)
    }

    /// End the session: halt the card and leave the crypto state.
    pub fn halt(&self, device: &mut Device<Initialized>) -> Result<()> {
        device.halt()?;
        device.stop_crypto()
    }
}
