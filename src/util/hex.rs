//! # Hex Encoding/Decoding Utilities
//!
//! Telegrams arrive from gateways and log files as hex text. These helpers
//! turn that text into bytes and format bytes for debug output.
//!
//! ```rust
//! use energycam_wmbus::util::hex::{encode_hex, format_hex_compact, parse_hex_lenient};
//!
//! let data = parse_hex_lenient("2F-2F:04 13").unwrap();
//! assert_eq!(data, [0x2F, 0x2F, 0x04, 0x13]);
//! assert_eq!(encode_hex(&data), "2f2f0413");
//! assert_eq!(format_hex_compact(&data), "2f 2f 04 13");
//! ```

use thiserror::Error;

/// Errors that can occur during hex operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Empty hex string")]
    EmptyString,

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a strict hex string to bytes
///
/// Accepts both uppercase and lowercase hex characters.
/// Whitespace is stripped, any other separator is an error.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(HexError::EmptyString);
    }
    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Parse hex string that may contain spaces or other separators
///
/// More lenient than decode_hex, strips all non-hex characters.
pub fn parse_hex_lenient(input: &str) -> Result<Vec<u8>, HexError> {
    let hex_chars: String = input.chars().filter(|c| c.is_ascii_hexdigit()).collect();

    if hex_chars.is_empty() {
        return Err(HexError::EmptyString);
    }
    if hex_chars.len() % 2 != 0 {
        return Err(HexError::OddLength(hex_chars.len()));
    }

    hex::decode(&hex_chars).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "2f 2f 04 13" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Helper for creating test data from hex strings
///
/// Panics on invalid hex (intended for test code only).
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    decode_hex(hex).expect("Invalid hex in test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_whitespace() {
        let expected = vec![0x2F, 0x2F, 0x04, 0x13];
        assert_eq!(decode_hex("2F 2F 04 13").unwrap(), expected);
        assert_eq!(decode_hex("2f2f0413\n").unwrap(), expected);
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_hex_compact(&[0xE8, 0x03, 0x00, 0x00]), "e8 03 00 00");
        assert_eq!(format_hex_compact(&[]), "");
    }

    #[test]
    fn test_parse_lenient() {
        let expected = vec![0x2F, 0x2F, 0x04];
        assert_eq!(parse_hex_lenient("2F-2F:04").unwrap(), expected);
        assert_eq!(parse_hex_lenient("0x2F, 0x2F, 0x04").unwrap_err(), HexError::OddLength(9));
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("E8030000"), vec![0xE8, 0x03, 0x00, 0x00]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(decode_hex(""), Err(HexError::EmptyString));
        assert_eq!(decode_hex("  "), Err(HexError::EmptyString));
        assert_eq!(decode_hex("1"), Err(HexError::OddLength(1)));
        assert!(matches!(decode_hex("GG"), Err(HexError::DecodeError(_))));
        assert_eq!(parse_hex_lenient("zz"), Err(HexError::EmptyString));
    }
}
