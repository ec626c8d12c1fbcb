// librc522/src/protocol/commands/auth.rs

use crate::protocol::commands::PiccCommand;
use crate::types::{AuthMode, SectorKey, SerialNumber};

/// MFAuthent input: mode, block address, 6 key bytes, 4 UID bytes.
pub fn encode_auth(
    mode: AuthMode,
    block: u8,
    key: &SectorKey,
    serial: &SerialNumber,
) -> [u8; 12] {
    let mut buf = [0u8; 12];
    buf[0] = match mode {
        AuthMode::KeyA => PiccCommand::Auth1A,
        AuthMode::KeyB => PiccCommand::Auth1B,
    } as u8;
    buf[1] = block;
    buf[2..8].copy_from_slice(key.as_bytes());
    buf[8..].copy_from_slice(&serial.uid());
    buf
}
