use crate::error::DecodeError;
use crate::util::hex::parse_hex_lenient;
use serde::{Deserialize, Serialize};

/// A decoded reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: String,
}

impl Measurement {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Represents a received wM-Bus telegram and the measurements decoded from it.
///
/// The raw bytes never change after construction; decoding only appends to
/// the measurement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telegram {
    #[serde(with = "hex_bytes")]
    raw: Vec<u8>,
    values: Vec<Measurement>,
}

impl Telegram {
    pub fn new(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            raw: raw.into(),
            values: Vec::new(),
        }
    }

    /// Builds a telegram from hex text. Spaces and separators are ignored.
    pub fn from_hex(hex: &str) -> Result<Self, DecodeError> {
        Ok(Self::new(parse_hex_lenient(hex)?))
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn values(&self) -> &[Measurement] {
        &self.values
    }

    pub fn add_value(&mut self, value: f64, unit: impl Into<String>) {
        self.values.push(Measurement::new(value, unit));
    }
}

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_spaces() {
        let telegram = Telegram::from_hex("2F 2F 04").unwrap();
        assert_eq!(telegram.raw(), &[0x2F, 0x2F, 0x04]);
        assert!(telegram.values().is_empty());
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(
            Telegram::from_hex("2F2"),
            Err(DecodeError::InvalidHex(_))
        ));
        assert!(Telegram::from_hex("").is_err());
    }

    #[test]
    fn test_add_value_keeps_order() {
        let mut telegram = Telegram::new(vec![0x00]);
        telegram.add_value(1.0, "m3");
        telegram.add_value(2.5, "Wh");
        assert_eq!(telegram.values()[0], Measurement::new(1.0, "m3"));
        assert_eq!(telegram.values()[1].unit, "Wh");
        assert_eq!(telegram.raw(), &[0x00]);
    }

    #[test]
    fn test_json_uses_hex_raw() {
        let mut telegram = Telegram::new(vec![0x2F, 0x2F]);
        telegram.add_value(1.0, "m3");
        let json = serde_json::to_string(&telegram).unwrap();
        assert_eq!(json, r#"{"raw":"2f2f","values":[{"value":1.0,"unit":"m3"}]}"#);
        let back: Telegram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, telegram);
    }
}
