// librc522/src/protocol/responses/anticoll.rs

use crate::constants::SERIAL_BITS;
use crate::protocol::{parser, Frame};
use crate::types::SerialNumber;
use crate::Result;

/// Anticollision answer: 40 bits, the fifth byte being the XOR of the first
/// four.
pub fn decode_serial(frame: &Frame) -> Result<SerialNumber> {
    parser::expect_bits(frame, SERIAL_BITS)?;
    let bytes = parser::slice_at(frame.as_bytes(), 0, 5)?;
    SerialNumber::try_from(bytes)
}
