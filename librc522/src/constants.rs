// librc522/src/constants.rs
//! Common protocol constants used across the crate

/// Largest frame exchanged with a card, also the Mifare block size.
pub const MAX_LEN: usize = 16;

/// Depth of the peripheral's internal FIFO.
pub const FIFO_SIZE: usize = 64;

/// Default IRQ poll budget for one command executor call.
pub const EXECUTOR_POLLS: u32 = 2000;

/// Default poll budget for the CRC coprocessor.
pub const CRC_POLLS: u32 = 255;

/// Answer to request: 2 bytes of card type.
pub const ATQA_BITS: usize = 16;

/// Anticollision answer: 4 identifier bytes and the check byte.
pub const SERIAL_BITS: usize = 40;

/// Select acknowledge: SAK plus CRC_A.
pub const SAK_BITS: usize = 24;

/// Read answer: one block plus CRC_A (0x90).
pub const BLOCK_BITS: usize = 144;

/// Mifare ACK/NAK is a single 4-bit nibble.
pub const ACK_BITS: usize = 4;

/// ACK nibble value; anything else is a NAK.
pub const ACK_VALUE: u8 = 0x0A;

/// NVB byte for anticollision with no known identifier bits.
pub const NVB_ANTICOLL: u8 = 0x20;

/// NVB byte for select with the full 40-bit serial.
pub const NVB_SELECT: u8 = 0x70;

/// Blocks per sector on a Mifare Classic 1K card.
pub const BLOCKS_PER_SECTOR: u8 = 4;

/// Number of sectors on a Mifare Classic 1K card.
pub const SECTOR_COUNT: usize = 16;
