// librc522/src/protocol/responses/read.rs

use crate::constants::{BLOCK_BITS, MAX_LEN};
use crate::protocol::{parser, Frame};
use crate::types::BlockData;
use crate::Result;

/// Read answer: 144 bits (16 data bytes + CRC_A). Only the data bytes were
/// drained from the FIFO.
pub fn decode_block(frame: &Frame) -> Result<BlockData> {
    parser::expect_bits(frame, BLOCK_BITS)?;
    BlockData::try_from(parser::slice_at(frame.as_bytes(), 0, MAX_LEN)?)
}
