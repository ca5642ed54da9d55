//! Meter Type Mapping Table and Lookup Function
//!
//! EnergyCam devices are configured with the class of meter they are mounted
//! on. The code is reported by the device registry, not by the telegram.

/// Meter type code for oil meters.
pub const METER_TYPE_OIL: u8 = 1;
/// Meter type code for electricity meters.
pub const METER_TYPE_ELECTRICITY: u8 = 2;
/// Meter type code for gas meters.
pub const METER_TYPE_GAS: u8 = 3;
/// Meter type code for water meters.
pub const METER_TYPE_WATER: u8 = 7;
/// Meter type code for unclassified meters.
pub const METER_TYPE_UNKNOWN: u8 = 15;

/// Meter type codes and their labels.
pub const METER_TYPES: &[(u8, &str)] = &[
    (METER_TYPE_OIL, "Oil"),
    (METER_TYPE_ELECTRICITY, "Energy (electricity)"),
    (METER_TYPE_GAS, "Gas"),
    (METER_TYPE_WATER, "Water"),
    (METER_TYPE_UNKNOWN, "Unknown"),
];

/// Looks up a meter type code.
pub fn lookup_meter_type(code: u8) -> Option<&'static str> {
    METER_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// Label for a meter type code, falling back to the `Unknown` label.
pub fn meter_type_label(code: u8) -> &'static str {
    lookup_meter_type(code).unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_meter_type_all_cases() {
        for (code, label) in METER_TYPES.iter() {
            assert_eq!(lookup_meter_type(*code), Some(*label));
        }
    }

    #[test]
    fn test_unlisted_code_falls_back() {
        assert_eq!(lookup_meter_type(4), None);
        assert_eq!(meter_type_label(4), "Unknown");
        assert_eq!(meter_type_label(METER_TYPE_WATER), "Water");
    }
}
