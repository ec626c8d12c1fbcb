// librc522/src/protocol/responses/ack.rs

use crate::constants::{ACK_BITS, ACK_VALUE};
use crate::protocol::{parser, Frame};
use crate::{Error, Result};

/// Mifare ACK: a 4-bit answer whose low nibble is 0xA.
pub fn expect_ack(frame: &Frame) -> Result<()> {
    parser::expect_bits(frame, ACK_BITS)?;
    let nibble = parser::byte_at(frame.as_bytes(), 0)? & 0x0F;
    if nibble != ACK_VALUE {
        return Err(Error::Nack(nibble));
    }
    Ok(())
}
