use crate::constants::{
    ENERGYCAM_VIF_MASK_EXPONENT, ENERGYCAM_VIF_MASK_UNIT, ENERGYCAM_VIF_UNIT_SHIFT,
    MBUS_DIB_VIF_EXTENSION_BIT,
};
use crate::payload::unit_maps::{lookup_unit, UNSET_UNIT};

/// Result of analysing one VIF byte.
///
/// `unit` is [`UNSET_UNIT`] when `unit_code` is not in the unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VifInfo {
    pub vif: u8,
    pub has_extension: bool,
    pub unit_code: u8,
    pub unit: &'static str,
    pub exponent: u8,
}

impl VifInfo {
    pub fn is_unit_known(&self) -> bool {
        lookup_unit(self.unit_code).is_some()
    }
}

/// Interprets a single VIF byte.
pub fn analyse_vif(vif: u8) -> VifInfo {
    let unit_code = (vif & ENERGYCAM_VIF_MASK_UNIT) >> ENERGYCAM_VIF_UNIT_SHIFT;

    VifInfo {
        vif,
        has_extension: vif & MBUS_DIB_VIF_EXTENSION_BIT != 0,
        unit_code,
        unit: lookup_unit(unit_code).unwrap_or(UNSET_UNIT),
        exponent: vif & ENERGYCAM_VIF_MASK_EXPONENT,
    }
}

#[cfg(test)]
mod tests {
    use super::analyse_vif;
    use crate::payload::unit_maps::UNSET_UNIT;
    use proptest::prelude::*;
    use proptest::proptest;

    #[test]
    fn test_volume_vif() {
        let info = analyse_vif(0x13);
        assert!(!info.has_extension);
        assert_eq!(info.unit_code, 2);
        assert_eq!(info.unit, "m3");
        assert_eq!(info.exponent, 3);
        assert!(info.is_unit_known());
    }

    #[test]
    fn test_energy_vif() {
        let info = analyse_vif(0x03);
        assert_eq!(info.unit, "Wh");
        assert_eq!(info.exponent, 3);
    }

    #[test]
    fn test_unknown_unit_is_unset() {
        // unit code 5
        let info = analyse_vif(0x2A);
        assert_eq!(info.unit_code, 5);
        assert_eq!(info.unit, UNSET_UNIT);
        assert_eq!(info.exponent, 2);
        assert!(!info.is_unit_known());
    }

    #[test]
    fn test_extension_bit_does_not_touch_unit() {
        let info = analyse_vif(0x93);
        assert!(info.has_extension);
        assert_eq!(info.unit, "m3");
        assert_eq!(info.exponent, 3);
    }

    #[test]
    fn test_exhaustive_vif_bits() {
        for byte in 0u8..=0xFF {
            let info = analyse_vif(byte);
            assert_eq!(info.exponent, byte & 0x07);
            assert_eq!(info.unit_code, (byte & 0x78) >> 3);
            assert_eq!(info.has_extension, byte & 0x80 != 0);
        }
    }

    proptest! {
        #[test]
        fn prop_exponent_is_three_bits(vif_code in 0u8..=0xFFu8) {
            let info = analyse_vif(vif_code);
            prop_assert!(info.exponent <= 7);
            prop_assert!(info.unit_code <= 15);
        }
    }
}
