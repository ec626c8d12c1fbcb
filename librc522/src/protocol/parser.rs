// librc522/src/protocol/parser.rs

use crate::protocol::Frame;
use crate::{Error, Result};

/// Require an answer of exactly `expected` bits.
pub fn expect_bits(frame: &Frame, expected: usize) -> Result<()> {
    if frame.bit_len() != expected {
        return Err(Error::BitLength {
            expected,
            actual: frame.bit_len(),
        });
    }
    Ok(())
}

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}
