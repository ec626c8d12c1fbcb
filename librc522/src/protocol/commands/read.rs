// librc522/src/protocol/commands/read.rs

use crate::protocol::commands::PiccCommand;

/// Read one 16-byte block. CRC_A follows.
pub fn encode_read(block: u8) -> [u8; 2] {
    [PiccCommand::Read as u8, block]
}
