//! # Hex Encoding/Decoding Utilities
//!
//! Advertisement payloads are usually captured as hex strings by BLE
//! scanners, in one of several shapes: `10020089a0`, `10 02 00 89 a0`,
//! `10:02:00:89:A0` or `0x10020089a0`. These helpers turn such input into
//! bytes and format payloads back for logs.
//!
//! ## Usage
//!
//! ```rust
//! use victron_ble::util::hex::{decode_hex, encode_hex_upper, parse_hex_lenient};
//!
//! let data = decode_hex("1002a4a302").unwrap();
//! assert_eq!(data, [0x10, 0x02, 0xA4, 0xA3, 0x02]);
//! assert_eq!(encode_hex_upper(&data), "1002A4A302");
//!
//! let scanned = parse_hex_lenient("10:02:A4:A3:02").unwrap();
//! assert_eq!(scanned, data);
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Invalid hex character: {0}")]
    InvalidCharacter(char),

    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Encode bytes to uppercase hex string
pub fn encode_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Decode a hex string to bytes
///
/// Accepts both cases. Whitespace is stripped, anything else that is not a
/// hex digit is rejected.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();
    decode_cleaned(&cleaned)
}

/// Decode hex as printed by common BLE scanners
///
/// Strips an optional `0x` prefix, whitespace, and `:`/`-` byte separators
/// before decoding. Other characters are still rejected.
pub fn parse_hex_lenient(input: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = input.trim();
    let unprefixed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let cleaned: String = unprefixed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();
    decode_cleaned(&cleaned)
}

fn decode_cleaned(cleaned: &str) -> Result<Vec<u8>, HexError> {
    if cleaned.is_empty() {
        return Err(HexError::EmptyString);
    }

    if let Some(bad) = cleaned.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(HexError::InvalidCharacter(bad));
    }

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(cleaned).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, .. } => HexError::InvalidCharacter(c),
        _ => HexError::OddLength(cleaned.len()),
    })
}

/// Format payload bytes for compact display in logs ("10 02 a4 a3 02")
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
