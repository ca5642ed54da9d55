//! Unit Code Mapping Table and Lookup Function
//!
//! EnergyCam devices pack a 4-bit unit code into VIF bits 3-6. Only the codes
//! below are known; anything else resolves to [`UNSET_UNIT`]. New codes are
//! added here without touching the VIF analysis.

/// Unit label used when the code is not in [`UNIT_CODES`].
pub const UNSET_UNIT: &str = "unset";

/// Unit codes (VIF bits 3-6) and their labels.
pub const UNIT_CODES: &[(u8, &str)] = &[(0x00, "Wh"), (0x02, "m3")];

/// Looks up a raw unit code.
pub fn lookup_unit(code: u8) -> Option<&'static str> {
    UNIT_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, unit)| *unit)
}
