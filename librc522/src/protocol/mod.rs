// librc522/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{bcc, crc_a};
pub use commands::{Command, PiccCommand};
pub use frame::Frame;
pub use responses::{decode_atqa, decode_block, decode_sak, decode_serial, expect_ack};
