//! # Utility Modules
//!
//! Hex encoding/decoding helpers shared by the telegram container, the
//! diagnostics and the CLI.

pub mod hex;

pub use hex::{decode_hex, encode_hex, format_hex_compact, hex_to_bytes, parse_hex_lenient};
