//! The payload module contains the components responsible for decoding the
//! single data record (DIF, VIF, value) carried by an EnergyCam telegram.

pub mod dif;
pub mod unit_maps;
pub mod value;
pub mod vif;

pub use dif::{analyse_dif, DifFlags, DifInfo};
pub use unit_maps::{lookup_unit, UNIT_CODES, UNSET_UNIT};
pub use value::{extract_value, scale_value, ScaledValue};
pub use vif::{analyse_vif, VifInfo};
