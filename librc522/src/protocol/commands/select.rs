// librc522/src/protocol/commands/select.rs

use crate::constants::NVB_SELECT;
use crate::protocol::commands::PiccCommand;
use crate::types::SerialNumber;

/// Select prefix: opcode, NVB and the full 5-byte serial. CRC_A follows.
pub fn encode_select(serial: &SerialNumber) -> [u8; 7] {
    let mut buf = [0u8; 7];
    buf[0] = PiccCommand::SelCl1 as u8;
    buf[1] = NVB_SELECT;
    buf[2..].copy_from_slice(serial.as_bytes());
    buf
}
