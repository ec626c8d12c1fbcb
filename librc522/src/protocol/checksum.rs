// librc522/src/protocol/checksum.rs

/// Block check character of an anticollision answer: XOR of the UID bytes.
pub fn bcc(uid: &[u8]) -> u8 {
    uid.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// ISO/IEC 14443-A CRC_A (preset 0x6363, reflected polynomial 0x8408).
///
/// Returned low byte first, the order in which it is appended to a frame and
/// the order the peripheral's coprocessor yields it with `ModeReg = 0x3D`.
/// Used by the register simulator and for verifying coprocessor output.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(0x6363u16, |crc, &byte| {
        let mut b = byte ^ (crc & 0x00FF) as u8;
        b ^= b << 4;
        let b = u16::from(b);
        (crc >> 8) ^ (b << 8) ^ (b << 3) ^ (b >> 4)
    });
    crc.to_le_bytes()
}
