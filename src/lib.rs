//! # energycam-wmbus - Decoder for EnergyCam wireless M-Bus telegrams
//!
//! EnergyCam devices read mechanical utility meters (electricity, water, gas,
//! oil) optically and broadcast the reading as a wireless M-Bus telegram
//! carrying a single data record. This crate decodes that record.
//!
//! ## Features
//!
//! - Detect encrypted payloads through the `2F 2F` plaintext marker
//! - Analyse the Data Information Field (DIF) and Value Information Field (VIF)
//! - Skip a single DIFE/VIFE when the extension bit is set
//! - Scale the 32-bit little-endian value by the VIF decimal exponent
//! - Report every decode step to an injected [`DecodeObserver`]
//!
//! ## Usage
//!
//! ```rust
//! use energycam_wmbus::{decode_telegram, DecodeOutcome, LogObserver, MeterDescriptor, Telegram};
//!
//! let meter = MeterDescriptor::new("12345678", 7);
//! let mut telegram =
//!     Telegram::from_hex("000000000000000000000000000000 2F2F 04 13 E8030000").unwrap();
//!
//! let outcome = decode_telegram(&meter, &mut telegram, &mut LogObserver).unwrap();
//! assert!(matches!(outcome, DecodeOutcome::Decoded(_)));
//! assert_eq!(telegram.values()[0].value, 1.0);
//! assert_eq!(telegram.values()[0].unit, "m3");
//! ```

pub mod constants;
pub mod device;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod payload;
pub mod util;
pub mod wmbus;

pub use crate::error::{DecodeError, FrameField};
pub use crate::logging::{init_logger, log_error};

pub use device::{EnergyCam, MeterDescriptor};
pub use diagnostics::{DecodeEvent, DecodeObserver, LogObserver, RecordingObserver};
pub use payload::{analyse_dif, analyse_vif, extract_value, DifInfo, VifInfo};
pub use wmbus::{decode_telegram, DecodeOutcome, Measurement, Telegram, TelegramDecoder};
