//! # Error Handling
//!
//! This module defines the DetectError enum, which represents the error
//! conditions of the victron-ble crate. Classifying a payload never fails;
//! these errors come from the conversion traits, the override table builder
//! and the command-line input path.

use thiserror::Error;

use crate::util::hex::HexError;

/// Represents the different error types that can occur in the crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetectError {
    /// A mode byte that is not part of the known record-type space.
    #[error("Unknown mode code: 0x{0:02X}")]
    UnknownMode(u8),

    /// A device kind name that does not match any decoder variant.
    #[error("Unknown device kind: {0}")]
    UnknownDeviceKind(String),

    /// The same model id appears twice in an override table.
    #[error("Duplicate model id in override table: 0x{0:04X}")]
    DuplicateModelId(u16),

    /// Hex input could not be decoded into a payload.
    #[error("Invalid hex payload: {0}")]
    InvalidHex(#[from] HexError),
}
