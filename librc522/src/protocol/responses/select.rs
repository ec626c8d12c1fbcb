// librc522/src/protocol/responses/select.rs

use crate::constants::SAK_BITS;
use crate::protocol::{parser, Frame};
use crate::Result;

/// Select acknowledge: 24 bits, the first byte being the size code (SAK).
pub fn decode_sak(frame: &Frame) -> Result<u8> {
    parser::expect_bits(frame, SAK_BITS)?;
    parser::byte_at(frame.as_bytes(), 0)
}
