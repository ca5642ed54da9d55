use crate::device::MeterDescriptor;
use crate::diagnostics::{DecodeObserver, LogObserver};
use crate::error::DecodeError;
use crate::wmbus::decoder::{decode_telegram, DecodeOutcome};
use crate::wmbus::telegram::Telegram;
use chrono::{DateTime, Utc};

/// An EnergyCam optical meter reader as tracked by the device registry.
#[derive(Debug, Clone)]
pub struct EnergyCam {
    pub descriptor: MeterDescriptor,
    pub updated_at: Option<DateTime<Utc>>,
}

impl EnergyCam {
    pub fn new(id: impl Into<String>, meter_type: u8) -> Self {
        Self {
            descriptor: MeterDescriptor::new(id, meter_type),
            updated_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    /// Decodes a telegram from this device, logging through `log`.
    pub fn process_new_message(
        &mut self,
        telegram: &mut Telegram,
    ) -> Result<DecodeOutcome, DecodeError> {
        self.process_new_message_with(telegram, &mut LogObserver)
    }

    /// Decodes a telegram from this device, reporting to `observer`.
    ///
    /// `updated_at` is only touched when a value was decoded.
    pub fn process_new_message_with<O>(
        &mut self,
        telegram: &mut Telegram,
        observer: &mut O,
    ) -> Result<DecodeOutcome, DecodeError>
    where
        O: DecodeObserver + ?Sized,
    {
        let outcome = decode_telegram(&self.descriptor, telegram, observer)?;
        if outcome.is_decoded() {
            self.updated_at = Some(Utc::now());
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingObserver;

    fn plain_frame() -> Vec<u8> {
        let mut raw = vec![0u8; 23];
        raw[15] = 0x2F;
        raw[16] = 0x2F;
        raw[17] = 0x04;
        raw[18] = 0x13;
        raw[19] = 0xE8;
        raw[20] = 0x03;
        raw
    }

    #[test]
    fn test_updated_on_decode() {
        let mut cam = EnergyCam::new("87654321", 7);
        let before = Utc::now();
        let mut telegram = Telegram::new(plain_frame());
        let outcome = cam.process_new_message(&mut telegram).unwrap();
        assert!(outcome.is_decoded());
        assert!(cam.updated_at.unwrap() >= before);
        assert_eq!(cam.id(), "87654321");
    }

    #[test]
    fn test_not_updated_when_encrypted() {
        let mut cam = EnergyCam::new("87654321", 7);
        let mut raw = plain_frame();
        raw[16] = 0x00;
        let mut telegram = Telegram::new(raw);
        let mut observer = RecordingObserver::new();
        let outcome = cam
            .process_new_message_with(&mut telegram, &mut observer)
            .unwrap();
        assert_eq!(outcome, DecodeOutcome::Aborted);
        assert!(cam.updated_at.is_none());
    }

    #[test]
    fn test_not_updated_when_truncated() {
        let mut cam = EnergyCam::new("87654321", 2);
        let mut telegram = Telegram::new(plain_frame()[..20].to_vec());
        assert!(cam.process_new_message(&mut telegram).is_err());
        assert!(cam.updated_at.is_none());
        assert!(telegram.values().is_empty());
    }
}
