//! Value field extraction: a 4-byte little-endian unsigned integer scaled by
//! a decimal exponent.

use crate::constants::ENERGYCAM_VALUE_LENGTH;
use crate::error::{DecodeError, FrameField};
use nom::{number::complete::le_u32, IResult};

/// Raw integer and scaled value read from a telegram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledValue {
    pub raw: u32,
    pub exponent: u8,
    pub value: f64,
}

fn parse_value_field(input: &[u8]) -> IResult<&[u8], u32> {
    le_u32(input)
}

/// Scales a raw integer by `10^-exponent`.
pub fn scale_value(raw: u32, exponent: u8) -> f64 {
    raw as f64 / 10f64.powi(i32::from(exponent))
}

/// Reads the value field at `offset` and scales it.
pub fn extract_value(raw: &[u8], offset: usize, exponent: u8) -> Result<ScaledValue, DecodeError> {
    let truncated = || DecodeError::TruncatedFrame {
        field: FrameField::Value,
        needed: offset + ENERGYCAM_VALUE_LENGTH,
        actual: raw.len(),
    };

    let field = raw.get(offset..).ok_or_else(truncated)?;
    let (_, value) = parse_value_field(field).map_err(|_| truncated())?;

    Ok(ScaledValue {
        raw: value,
        exponent,
        value: scale_value(value, exponent),
    })
}
