//! # Wireless M-Bus (wM-Bus) Module
//!
//! This module handles the application layer of wireless M-Bus telegrams
//! sent by EnergyCam devices: the telegram container, the plaintext check
//! and the single-record decoder.
//!
pub mod decoder;
pub mod frame;
pub mod telegram;

// Re-export the necessary types and functions from the submodules
pub use decoder::{decode_telegram, DecodeOutcome, TelegramDecoder};
pub use frame::{validate_frame, FrameSecurity};
pub use telegram::{Measurement, Telegram};
