#![no_main]

use energycam_wmbus::constants::ENERGYCAM_MIN_TELEGRAM_LENGTH;
use energycam_wmbus::diagnostics::DecodeEvent;
use energycam_wmbus::{decode_telegram, DecodeError, DecodeOutcome, MeterDescriptor, Telegram};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let meter = MeterDescriptor::new("fuzz", data.first().copied().unwrap_or(15));
    let mut telegram = Telegram::new(data.to_vec());

    let first = decode_telegram(&meter, &mut telegram, &mut |_: &DecodeEvent| {});
    match &first {
        Ok(DecodeOutcome::Decoded(m)) => {
            assert_eq!(telegram.values().len(), 1);
            assert!(m.value.is_finite());
            assert!(data.len() >= ENERGYCAM_MIN_TELEGRAM_LENGTH);
        }
        Ok(DecodeOutcome::Aborted) => assert!(telegram.values().is_empty()),
        Err(DecodeError::TruncatedFrame { needed, actual, .. }) => {
            assert!(needed > actual);
            assert!(telegram.values().is_empty());
        }
        Err(DecodeError::InvalidHex(_)) => unreachable!(),
    }

    // Decoding is a pure function of the bytes
    let mut second = Telegram::new(data.to_vec());
    let again = decode_telegram(&meter, &mut second, &mut |_: &DecodeEvent| {});
    assert_eq!(telegram.values(), second.values());
    assert_eq!(first, again);
});
