//! # EnergyCam Telegram Decoding
//!
//! Decodes the single data record of an EnergyCam telegram in four forward
//! steps:
//!
//! 1. **Validate** - the plaintext marker `2F 2F` must sit at offset 15,
//!    otherwise the payload is still encrypted and decoding is aborted
//! 2. **DIF** - offset 17; an extension bit means one DIFE follows, which is
//!    skipped
//! 3. **VIF** - offset 18 (+1); an extension bit means one VIFE follows,
//!    which is skipped as well
//! 4. **Value** - 4 bytes little-endian right after, scaled by `10^-exponent`
//!
//! Only one extension byte per field is skipped. Devices chaining several
//! DIFEs or VIFEs are not supported and will decode at the wrong offset.

use crate::constants::{ENERGYCAM_DIF_OFFSET, ENERGYCAM_VALUE_OFFSET, ENERGYCAM_VIF_OFFSET};
use crate::device::MeterDescriptor;
use crate::diagnostics::{DecodeEvent, DecodeObserver};
use crate::error::{DecodeError, FrameField};
use crate::payload::{analyse_dif, analyse_vif, extract_value};
use crate::wmbus::frame::{validate_frame, FrameSecurity};
use crate::wmbus::telegram::{Measurement, Telegram};

/// Terminal state of a decode call.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// The payload is encrypted; nothing was appended.
    Aborted,
    /// The measurement was appended to the telegram.
    Decoded(Measurement),
}

impl DecodeOutcome {
    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            DecodeOutcome::Decoded(m) => Some(m),
            DecodeOutcome::Aborted => None,
        }
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self, DecodeOutcome::Decoded(_))
    }
}

fn read_byte(raw: &[u8], offset: usize, field: FrameField) -> Result<u8, DecodeError> {
    raw.get(offset)
        .copied()
        .ok_or(DecodeError::TruncatedFrame {
            field,
            needed: offset + 1,
            actual: raw.len(),
        })
}

/// Decodes the primary value of `telegram` and appends it.
///
/// # Returns
/// * `Ok(DecodeOutcome::Decoded(_))` - measurement appended
/// * `Ok(DecodeOutcome::Aborted)` - payload encrypted, telegram unchanged
/// * `Err(DecodeError::TruncatedFrame { .. })` - buffer too short, telegram unchanged
pub fn decode_telegram<O>(
    meter: &MeterDescriptor,
    telegram: &mut Telegram,
    observer: &mut O,
) -> Result<DecodeOutcome, DecodeError>
where
    O: DecodeObserver + ?Sized,
{
    let raw = telegram.raw();
    observer.on_event(DecodeEvent::Received {
        meter_id: meter.id.clone(),
        meter_type: meter.meter_type,
    });
    observer.on_event(DecodeEvent::RawFrame(raw.to_vec()));

    if let FrameSecurity::Encrypted { marker } = validate_frame(raw)? {
        observer.on_event(DecodeEvent::Encrypted { marker });
        return Ok(DecodeOutcome::Aborted);
    }

    let mut offset = 0;

    let dif = analyse_dif(read_byte(raw, ENERGYCAM_DIF_OFFSET, FrameField::Dif)?);
    observer.on_event(DecodeEvent::Dif(dif));
    if dif.is_error_state {
        observer.on_event(DecodeEvent::StaleValue);
    }
    if dif.has_extension {
        observer.on_event(DecodeEvent::DifExtension);
        offset += 1;
    }

    let vif = analyse_vif(read_byte(raw, ENERGYCAM_VIF_OFFSET + offset, FrameField::Vif)?);
    observer.on_event(DecodeEvent::Vif(vif));
    if !vif.is_unit_known() {
        observer.on_event(DecodeEvent::UnknownUnit {
            unit_code: vif.unit_code,
        });
    }
    if vif.has_extension {
        observer.on_event(DecodeEvent::VifExtension);
        offset += 1;
    }

    let value = extract_value(raw, ENERGYCAM_VALUE_OFFSET + offset, vif.exponent)?;
    observer.on_event(DecodeEvent::RawValue(value));

    let measurement = Measurement::new(value.value, vif.unit);
    telegram.add_value(measurement.value, measurement.unit.clone());
    observer.on_event(DecodeEvent::Decoded {
        meter_id: meter.id.clone(),
        meter_type: meter.meter_type,
        measurement: measurement.clone(),
    });

    Ok(DecodeOutcome::Decoded(measurement))
}

/// A decoder bound to one observer, for decoding many telegrams.
#[derive(Debug, Default)]
pub struct TelegramDecoder<O> {
    observer: O,
}

impl<O: DecodeObserver> TelegramDecoder<O> {
    pub fn new(observer: O) -> Self {
        Self { observer }
    }

    pub fn decode(
        &mut self,
        meter: &MeterDescriptor,
        telegram: &mut Telegram,
    ) -> Result<DecodeOutcome, DecodeError> {
        decode_telegram(meter, telegram, &mut self.observer)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
