//! Unit tests for the logging functionality in the `energycam-wmbus` crate.

use energycam_wmbus::logging::{init_logger, log_error};
use energycam_wmbus::{EnergyCam, Telegram};

/// Tests that the logging helper does not panic before or after init.
#[test]
fn test_logging() {
    log_error("This is an error message");
    init_logger();
    log_error("This is an error message");
}

/// Tests that the logger can be initialized twice and then used by the decoder.
#[test]
fn test_init_logger_and_decode() {
    init_logger();
    init_logger();

    let mut raw = vec![0u8; 15];
    raw.extend_from_slice(&[0x2F, 0x2F, 0x04, 0x13, 0xE8, 0x03, 0x00, 0x00]);
    let mut telegram = Telegram::new(raw);
    let mut cam = EnergyCam::new("12345678", 7);
    assert!(cam.process_new_message(&mut telegram).unwrap().is_decoded());
}
