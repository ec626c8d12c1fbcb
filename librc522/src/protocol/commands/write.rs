// librc522/src/protocol/commands/write.rs

use crate::protocol::commands::PiccCommand;
use crate::types::BlockData;

/// Write phase one: opcode and block address. CRC_A follows.
pub fn encode_write(block: u8) -> [u8; 2] {
    [PiccCommand::Write as u8, block]
}

/// Write phase two: the 16 payload bytes. CRC_A follows.
pub fn encode_write_data(data: &BlockData) -> [u8; 16] {
    *data.as_bytes()
}
