//! EnergyCam Telegram Constants
//!
//! Fixed offsets and bit masks of the single-record wM-Bus application
//! telegram sent by EnergyCam devices (EN 13757-3 data record layout).

/// Offset of the two-byte plaintext marker
pub const ENERGYCAM_MARKER_OFFSET: usize = 15;

/// Plaintext marker: two idle-filler DIFs only appear in decrypted payloads
pub const ENERGYCAM_PLAINTEXT_MARKER: [u8; 2] = [MBUS_DIB_DIF_IDLE_FILLER, MBUS_DIB_DIF_IDLE_FILLER];

/// Offset of the primary DIF byte
pub const ENERGYCAM_DIF_OFFSET: usize = 17;

/// Offset of the primary VIF byte, before extension adjustment
pub const ENERGYCAM_VIF_OFFSET: usize = 18;

/// Offset of the value field, before extension adjustment
pub const ENERGYCAM_VALUE_OFFSET: usize = 19;

/// Width of the little-endian value field
pub const ENERGYCAM_VALUE_LENGTH: usize = 4;

/// Shortest telegram that can carry a value (no extension fields)
pub const ENERGYCAM_MIN_TELEGRAM_LENGTH: usize = ENERGYCAM_VALUE_OFFSET + ENERGYCAM_VALUE_LENGTH;

/// DIF idle filler
pub const MBUS_DIB_DIF_IDLE_FILLER: u8 = 0x2F;

/// DIF extension bit
pub const MBUS_DIB_DIF_EXTENSION_BIT: u8 = 0x80;

/// DIF mask for function; both bits set means "value during error state"
pub const MBUS_DATA_RECORD_DIF_MASK_FUNCTION: u8 = 0x30;

/// VIF extension bit
pub const MBUS_DIB_VIF_EXTENSION_BIT: u8 = 0x80;

/// VIF mask for the unit code (bits 3-6)
pub const ENERGYCAM_VIF_MASK_UNIT: u8 = 0x78;

/// Shift applied after masking the unit code
pub const ENERGYCAM_VIF_UNIT_SHIFT: u8 = 3;

/// VIF mask for the decimal exponent (bits 0-2)
pub const ENERGYCAM_VIF_MASK_EXPONENT: u8 = 0x07;
