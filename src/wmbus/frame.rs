use crate::constants::{ENERGYCAM_MARKER_OFFSET, ENERGYCAM_PLAINTEXT_MARKER};
use crate::error::{DecodeError, FrameField};

/// Whether the application payload of a telegram can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSecurity {
    Plaintext,
    /// `marker` holds the two bytes found instead of `2F 2F`.
    Encrypted { marker: [u8; 2] },
}

/// Checks that the application payload is not encrypted.
///
/// A decrypted EnergyCam payload starts with two idle fillers (`2F 2F`) at
/// offset 15; anything else means the payload is still encrypted.
pub fn validate_frame(raw: &[u8]) -> Result<FrameSecurity, DecodeError> {
    let marker = raw
        .get(ENERGYCAM_MARKER_OFFSET..ENERGYCAM_MARKER_OFFSET + 2)
        .map(|m| [m[0], m[1]])
        .ok_or(DecodeError::TruncatedFrame {
            field: FrameField::Marker,
            needed: ENERGYCAM_MARKER_OFFSET + 2,
            actual: raw.len(),
        })?;

    if marker == ENERGYCAM_PLAINTEXT_MARKER {
        Ok(FrameSecurity::Plaintext)
    } else {
        Ok(FrameSecurity::Encrypted { marker })
    }
}
