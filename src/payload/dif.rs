//! Data Information Field (DIF) analysis.
//!
//! Only the extension bit and the "value during error state" function code
//! are interpreted. Data length and storage bits are fixed by the EnergyCam
//! telegram layout and ignored here.

use crate::constants::{MBUS_DATA_RECORD_DIF_MASK_FUNCTION, MBUS_DIB_DIF_EXTENSION_BIT};
use bitflags::bitflags;

bitflags! {
    /// Bits of a DIF byte
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DifFlags: u8 {
        /// A DIFE follows
        const EXTENSION = MBUS_DIB_DIF_EXTENSION_BIT;
        /// Least significant storage number bit
        const STORAGE = 0x40;
        /// High bit of the function field
        const FUNCTION_HIGH = 0x20;
        /// Low bit of the function field
        const FUNCTION_LOW = 0x10;
        /// Function field value 3: value during error state
        const ERROR_STATE = MBUS_DATA_RECORD_DIF_MASK_FUNCTION;
    }
}

/// Result of analysing one DIF byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifInfo {
    pub dif: u8,
    pub has_extension: bool,
    pub is_error_state: bool,
}

impl DifInfo {
    pub fn flags(&self) -> DifFlags {
        DifFlags::from_bits_truncate(self.dif)
    }
}

/// Interprets a single DIF byte.
pub fn analyse_dif(dif: u8) -> DifInfo {
    let flags = DifFlags::from_bits_truncate(dif);
    DifInfo {
        dif,
        has_extension: flags.contains(DifFlags::EXTENSION),
        is_error_state: flags.contains(DifFlags::ERROR_STATE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_instantaneous_dif() {
        let info = analyse_dif(0x04);
        assert!(!info.has_extension);
        assert!(!info.is_error_state);
    }

    #[test]
    fn test_extension_dif() {
        let info = analyse_dif(0x84);
        assert!(info.has_extension);
        assert!(!info.is_error_state);
    }

    #[test]
    fn test_error_state_needs_both_function_bits() {
        assert!(analyse_dif(0x34).is_error_state);
        assert!(analyse_dif(0xB4).is_error_state);
        assert!(!analyse_dif(0x14).is_error_state);
        assert!(!analyse_dif(0x24).is_error_state);
    }

    #[test]
    fn test_exhaustive_dif_bits() {
        for byte in 0u8..=0xFF {
            let info = analyse_dif(byte);
            assert_eq!(info.has_extension, byte & 0x80 != 0, "DIF 0x{byte:02X}");
            assert_eq!(info.is_error_state, byte & 0x30 == 0x30, "DIF 0x{byte:02X}");
            assert_eq!(info.dif, byte);
        }
    }

    #[test]
    fn test_flags_keep_raw_bits() {
        let info = analyse_dif(0xF0);
        assert!(info.flags().contains(DifFlags::EXTENSION | DifFlags::STORAGE));
        assert!(info.flags().contains(DifFlags::ERROR_STATE));
    }

    proptest! {
        #[test]
        fn prop_function_low_alone_is_not_error(byte in 0u8..=0xFF) {
            let info = analyse_dif((byte & !0x20) | 0x10);
            prop_assert!(!info.is_error_state);
        }
    }
}
