// librc522/src/protocol/responses/request.rs

use crate::constants::ATQA_BITS;
use crate::protocol::{parser, Frame};
use crate::Result;

/// Answer to request: exactly 16 bits of card type.
pub fn decode_atqa(frame: &Frame) -> Result<[u8; 2]> {
    parser::expect_bits(frame, ATQA_BITS)?;
    let b = parser::slice_at(frame.as_bytes(), 0, 2)?;
    Ok([b[0], b[1]])
}
