//! # Meter Devices
//!
//! A meter is described to the decoder by a plain [`MeterDescriptor`]: the
//! device identifier and the class of meter it reads. [`EnergyCam`] adds the
//! per-device state the registry keeps between telegrams.

pub mod energy_cam;
pub mod meter_type;

pub use energy_cam::EnergyCam;
pub use meter_type::{lookup_meter_type, meter_type_label, METER_TYPES};

use serde::{Deserialize, Serialize};

/// Identity and meter class of one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterDescriptor {
    pub id: String,
    pub meter_type: u8,
}

impl MeterDescriptor {
    pub fn new(id: impl Into<String>, meter_type: u8) -> Self {
        Self {
            id: id.into(),
            meter_type,
        }
    }

    /// Human-readable meter class.
    pub fn meter_type_label(&self) -> &'static str {
        meter_type_label(self.meter_type)
    }
}
