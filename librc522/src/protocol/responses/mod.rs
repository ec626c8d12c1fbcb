// librc522/src/protocol/responses/mod.rs

//! Validators for card answers. Each checks the exact bit length its
//! exchange must produce before looking at the bytes.

pub mod ack;
pub mod anticoll;
pub mod read;
pub mod request;
pub mod select;

pub use ack::expect_ack;
pub use anticoll::decode_serial;
pub use read::decode_block;
pub use request::decode_atqa;
pub use select::decode_sak;
