//! # Decode Error Handling
//!
//! This module defines the DecodeError enum, which represents the fatal error
//! conditions that can occur while decoding an EnergyCam telegram.
//!
//! Encrypted frames, stale values, skipped extension fields and unknown unit
//! codes are not errors: they are reported through
//! [`DecodeEvent`](crate::diagnostics::DecodeEvent) and decoding either
//! aborts cleanly or carries on.

use thiserror::Error;

/// The telegram field being read when a buffer ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameField {
    Marker,
    Dif,
    Vif,
    Value,
}

impl std::fmt::Display for FrameField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FrameField::Marker => "plaintext marker",
            FrameField::Dif => "DIF",
            FrameField::Vif => "VIF",
            FrameField::Value => "value field",
        };
        f.write_str(name)
    }
}

/// Represents the fatal error types that can occur in the decoder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The buffer ends before the given field could be read.
    #[error("Truncated frame: {field} needs {needed} bytes, got {actual}")]
    TruncatedFrame {
        field: FrameField,
        needed: usize,
        actual: usize,
    },

    /// Indicates an invalid hexadecimal telegram string was provided.
    #[error("Invalid hexadecimal string: {0}")]
    InvalidHex(String),
}

impl From<crate::util::hex::HexError> for DecodeError {
    fn from(err: crate::util::hex::HexError) -> Self {
        DecodeError::InvalidHex(err.to_string())
    }
}
