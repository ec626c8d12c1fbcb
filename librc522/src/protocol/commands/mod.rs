// librc522/src/protocol/commands/mod.rs

pub mod auth;
pub mod halt;
pub mod read;
pub mod request;
pub mod select;
pub mod write;

pub use auth::encode_auth;
pub use halt::encode_halt;
pub use read::encode_read;
pub use request::{encode_anticoll, encode_request};
pub use select::encode_select;
pub use write::{encode_write, encode_write_data};

use crate::registers::PcdCommand;
use crate::types::{AuthMode, BlockData, RequestMode, SectorKey, SerialNumber};

/// Card-side (PICC) opcodes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiccCommand {
    ReqIdl = 0x26,
    ReqAll = 0x52,
    /// Cascade level 1, shared by anticollision and select.
    SelCl1 = 0x93,
    Auth1A = 0x60,
    Auth1B = 0x61,
    Read = 0x30,
    Write = 0xA0,
    Halt = 0x50,
}

/// One card exchange. Each variant knows its frame body, whether CRC_A is
/// appended, which peripheral command carries it and how the last byte is
/// framed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Request(RequestMode),
    Anticoll,
    Select(SerialNumber),
    Authenticate {
        mode: AuthMode,
        block: u8,
        key: SectorKey,
        serial: SerialNumber,
    },
    Read {
        block: u8,
    },
    /// First write phase: announce the target block.
    Write {
        block: u8,
    },
    /// Second write phase: the payload.
    WriteData(BlockData),
    Halt,
}

impl Command {
    /// Frame body without CRC.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Request(mode) => encode_request(*mode).to_vec(),
            Self::Anticoll => encode_anticoll().to_vec(),
            Self::Select(serial) => encode_select(serial).to_vec(),
            Self::Authenticate {
                mode,
                block,
                key,
                serial,
            } => encode_auth(*mode, *block, key, serial).to_vec(),
            Self::Read { block } => encode_read(*block).to_vec(),
            Self::Write { block } => encode_write(*block).to_vec(),
            Self::WriteData(data) => encode_write_data(data).to_vec(),
            Self::Halt => encode_halt().to_vec(),
        }
    }

    /// Whether CRC_A is appended before sending.
    pub fn needs_crc(&self) -> bool {
        !matches!(
            self,
            Self::Request(_) | Self::Anticoll | Self::Authenticate { .. }
        )
    }

    pub fn pcd_command(&self) -> PcdCommand {
        match self {
            Self::Authenticate { .. } => PcdCommand::Authent,
            _ => PcdCommand::Transceive,
        }
    }

    /// Valid bits in the last transmitted byte (0 = whole byte).
    pub fn tx_last_bits(&self) -> u8 {
        match self {
            Self::Request(_) => 7,
            _ => 0,
        }
    }
}
