//! # Decode Diagnostics
//!
//! The telegram decoder does not log on its own. Every noteworthy step is
//! handed to a [`DecodeObserver`] as a [`DecodeEvent`], and the caller
//! decides what to do with it:
//!
//! - [`LogObserver`] forwards events to the `log` facade at the level
//!   returned by [`DecodeEvent::level`]
//! - [`RecordingObserver`] keeps them in memory, mostly for tests
//! - any `FnMut(&DecodeEvent)` closure is an observer as well
//!
//! ```rust
//! use energycam_wmbus::diagnostics::{DecodeEvent, RecordingObserver};
//! use energycam_wmbus::{decode_telegram, MeterDescriptor, Telegram};
//!
//! let meter = MeterDescriptor::new("12345678", 7);
//! let mut telegram = Telegram::new(vec![0u8; 23]);
//! let mut observer = RecordingObserver::new();
//! decode_telegram(&meter, &mut telegram, &mut observer).unwrap();
//! assert!(matches!(observer.events()[2], DecodeEvent::Encrypted { .. }));
//! ```

use crate::payload::{DifInfo, ScaledValue, VifInfo};
use crate::util::hex::format_hex_compact;
use crate::wmbus::telegram::Measurement;
use log::Level;
use std::fmt;

/// A structured event emitted while decoding one telegram.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeEvent {
    /// Decoding of a telegram started.
    Received { meter_id: String, meter_type: u8 },
    /// Raw bytes of the telegram being decoded.
    RawFrame(Vec<u8>),
    /// The plaintext marker was not found; decoding stops.
    Encrypted { marker: [u8; 2] },
    /// The DIF byte was analysed.
    Dif(DifInfo),
    /// The DIF signals a value recorded during an error state.
    StaleValue,
    /// A DIFE follows the DIF; it is skipped.
    DifExtension,
    /// The VIF byte was analysed.
    Vif(VifInfo),
    /// The VIF unit code is not in the unit table.
    UnknownUnit { unit_code: u8 },
    /// A VIFE follows the VIF; it is skipped.
    VifExtension,
    /// The value field was read.
    RawValue(ScaledValue),
    /// A measurement was appended to the telegram.
    Decoded {
        meter_id: String,
        meter_type: u8,
        measurement: Measurement,
    },
}

impl DecodeEvent {
    /// Log level this event maps to.
    pub fn level(&self) -> Level {
        match self {
            DecodeEvent::Received { .. } | DecodeEvent::Decoded { .. } => Level::Info,
            DecodeEvent::Encrypted { .. } => Level::Error,
            DecodeEvent::StaleValue
            | DecodeEvent::DifExtension
            | DecodeEvent::UnknownUnit { .. }
            | DecodeEvent::VifExtension => Level::Warn,
            DecodeEvent::RawFrame(_)
            | DecodeEvent::Dif(_)
            | DecodeEvent::Vif(_)
            | DecodeEvent::RawValue(_) => Level::Debug,
        }
    }

    /// True for conditions the caller should be warned about.
    pub fn is_warning(&self) -> bool {
        self.level() <= Level::Warn
    }
}

impl fmt::Display for DecodeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeEvent::Received {
                meter_id,
                meter_type,
            } => write!(
                f,
                "Got new message from {} meter with ID {}",
                crate::device::meter_type_label(*meter_type),
                meter_id
            ),
            DecodeEvent::RawFrame(raw) => write!(f, "Raw message: {}", format_hex_compact(raw)),
            DecodeEvent::Encrypted { marker } => write!(
                f,
                "Received an encrypted message (marker {}). Deactivate the encryption or set the AES key for the device",
                format_hex_compact(marker)
            ),
            DecodeEvent::Dif(info) => write!(f, "DIF: {:02x}", info.dif),
            DecodeEvent::StaleValue => {
                f.write_str("Received old value. The device failed to read a new value")
            }
            DecodeEvent::DifExtension => f.write_str(
                "Received multiple data information fields. Only single are supported, ignoring second field",
            ),
            DecodeEvent::Vif(info) => write!(
                f,
                "VIF: {:02x} (unit code {}, exponent {})",
                info.vif, info.unit_code, info.exponent
            ),
            DecodeEvent::UnknownUnit { unit_code } => {
                write!(f, "Received unknown unit code {unit_code}, using 'unset'")
            }
            DecodeEvent::VifExtension => f.write_str(
                "Received multiple value information fields. Only single are supported, ignoring second field",
            ),
            DecodeEvent::RawValue(value) => write!(
                f,
                "Raw value: {} exponent: {}",
                value.raw, value.exponent
            ),
            DecodeEvent::Decoded {
                meter_id,
                meter_type,
                measurement,
            } => write!(
                f,
                "New value from {}: {}: {} {}",
                meter_id,
                crate::device::meter_type_label(*meter_type),
                measurement.value,
                measurement.unit
            ),
        }
    }
}

/// Receives decode events.
pub trait DecodeObserver {
    fn on_event(&mut self, event: DecodeEvent);
}

impl<F> DecodeObserver for F
where
    F: FnMut(&DecodeEvent),
{
    fn on_event(&mut self, event: DecodeEvent) {
        self(&event)
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl DecodeObserver for LogObserver {
    fn on_event(&mut self, event: DecodeEvent) {
        let level = event.level();
        if !log::log_enabled!(target: "energycam_wmbus::decoder", level) {
            return;
        }
        log::log!(target: "energycam_wmbus::decoder", level, "{event}");
    }
}

/// Keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    events: Vec<DecodeEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[DecodeEvent] {
        &self.events
    }

    /// Events at warning level or above.
    pub fn warnings(&self) -> impl Iterator<Item = &DecodeEvent> {
        self.events.iter().filter(|e| e.is_warning())
    }

    pub fn into_events(self) -> Vec<DecodeEvent> {
        self.events
    }
}

impl DecodeObserver for RecordingObserver {
    fn on_event(&mut self, event: DecodeEvent) {
        self.events.push(event);
    }
}
