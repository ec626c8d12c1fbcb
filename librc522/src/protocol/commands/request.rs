// librc522/src/protocol/commands/request.rs

use crate::constants::NVB_ANTICOLL;
use crate::protocol::commands::PiccCommand;
use crate::types::RequestMode;

/// REQA / WUPA: a single 7-bit short frame.
pub fn encode_request(mode: RequestMode) -> [u8; 1] {
    let cmd = match mode {
        RequestMode::Idle => PiccCommand::ReqIdl,
        RequestMode::All => PiccCommand::ReqAll,
    };
    [cmd as u8]
}

/// Anticollision, cascade level 1, no known UID bits.
pub fn encode_anticoll() -> [u8; 2] {
    [PiccCommand::SelCl1 as u8, NVB_ANTICOLL]
}
