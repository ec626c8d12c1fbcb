//! Hex formatting and parsing for keys, serials and block dumps.

use std::fmt::Write;

use crate::{Error, Result};

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with one space between bytes: `&[0xde, 0xad]` -> `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace and `:` separators are ignored, so `"ff:ff"`,
/// `"ff ff"` and `"ffff"` are equivalent.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|c| !c.is_ascii_whitespace() && *c != b':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(Error::InvalidHex(format!("odd number of digits in '{}'", s)));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = nibble(pair[0]);
            let lo = nibble(pair[1]);
            match (hi, lo) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(Error::InvalidHex(format!(
                    "invalid pair '{}{}'",
                    pair[0] as char, pair[1] as char
                ))),
            }
        })
        .collect()
}

/// Parse a hex string into a fixed-size array.
pub fn parse_hex_array<const N: usize>(s: &str) -> Result<[u8; N]> {
    let bytes = parse_hex(s)?;
    bytes.try_into().map_err(|v: Vec<u8>| Error::InvalidLength {
        expected: N,
        actual: v.len(),
    })
}

fn nibble(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}
