// librc522/src/card/info.rs

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{CardType, SerialNumber};

/// Plain-data summary of a selected card, suitable for logging or storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardInfo {
    pub serial: SerialNumber,
    pub card_type: CardType,
    pub size_code: u8,
}

impl CardInfo {
    pub fn new(serial: SerialNumber, card_type: CardType, size_code: u8) -> Self {
        Self {
            serial,
            card_type,
            size_code,
        }
    }

    /// Identifier bytes as a big-endian integer.
    pub fn id(&self) -> u32 {
        self.serial.to_u32()
    }
}

impl From<&crate::card::Card> for CardInfo {
    fn from(card: &crate::card::Card) -> Self {
        CardInfo::new(*card.serial(), card.card_type(), card.size_code())
    }
}
