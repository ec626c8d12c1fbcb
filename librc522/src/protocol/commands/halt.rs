// librc522/src/protocol/commands/halt.rs

use crate::protocol::commands::PiccCommand;

/// HLTA. CRC_A follows.
pub fn encode_halt() -> [u8; 2] {
    [PiccCommand::Halt as u8, 0x00]
}
