// fixtures.rs — commonly used card answers and frames

use librc522::protocol::crc_a;
use librc522::transport::CardReply;
use librc522::types::{BlockData, SerialNumber};

pub fn sample_uid() -> [u8; 4] {
    [0x11, 0x22, 0x33, 0x44]
}

pub fn sample_serial() -> SerialNumber {
    SerialNumber::from_uid(sample_uid())
}

/// 0x11 ^ 0x22 ^ 0x33 ^ 0x44
pub const SAMPLE_BCC: u8 = 0x44;

pub fn s50_atqa() -> CardReply {
    CardReply::bytes(&[0x04, 0x00])
}

pub fn serial_reply(bytes: [u8; 5]) -> CardReply {
    CardReply::bytes(&bytes)
}

/// SAK 0x08 with its CRC_A.
pub fn s50_sak() -> CardReply {
    let mut bytes = vec![0x08];
    bytes.extend_from_slice(&crc_a(&[0x08]));
    CardReply::bytes(&bytes)
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}

/// 16 data bytes followed by their CRC_A, as a card answers Read.
pub fn block_reply(data: &BlockData) -> CardReply {
    let mut bytes = data.as_bytes().to_vec();
    bytes.extend_from_slice(&crc_a(data.as_bytes()));
    CardReply::bytes(&bytes)
}

pub fn counting_block() -> BlockData {
    let bytes: Vec<u8> = (0u8..16).collect();
    BlockData::try_from(&bytes[..]).unwrap()
}
