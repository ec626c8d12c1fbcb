// librc522/src/protocol/frame.rs

use crate::constants::MAX_LEN;
use crate::{Error, Result};

/// Card answer drained from the peripheral FIFO.
///
/// `bits` is the length the peripheral reported for the whole answer and is
/// computed before the byte count is clamped to [`MAX_LEN`]: a block read
/// answers 18 bytes (144 bits) of which only the 16 data bytes are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    buf: [u8; MAX_LEN],
    len: usize,
    bits: usize,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            buf: [0u8; MAX_LEN],
            len: 0,
            bits: 0,
        }
    }

    /// Build a frame from raw bytes and a reported bit length.
    pub fn from_parts(bytes: &[u8], bits: usize) -> Result<Self> {
        if bytes.len() > MAX_LEN {
            return Err(Error::FrameTooLong {
                max: MAX_LEN,
                actual: bytes.len(),
            });
        }
        let mut frame = Self::new();
        frame.buf[..bytes.len()].copy_from_slice(bytes);
        frame.len = bytes.len();
        frame.bits = bits;
        Ok(frame)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Answer length in bits as reported by the peripheral.
    pub fn bit_len(&self) -> usize {
        self.bits
    }

    /// Bytes to drain for a FIFO level: at least one, never more than [`MAX_LEN`].
    pub fn drain_len(fifo_level: usize) -> usize {
        fifo_level.clamp(1, MAX_LEN)
    }

    /// Answer length in bits. `last_bits == 0` means the last byte is whole.
    pub fn bit_count(fifo_level: usize, last_bits: u8) -> usize {
        match last_bits {
            0 => fifo_level * 8,
            n => fifo_level.saturating_sub(1) * 8 + usize::from(n),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.len = 0;
        self.bits = 0;
    }

    pub(crate) fn set_bit_len(&mut self, bits: usize) {
        self.bits = bits;
    }

    pub(crate) fn push(&mut self, byte: u8) {
        if self.len < MAX_LEN {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
