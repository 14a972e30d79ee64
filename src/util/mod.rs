//! # Utility Modules
//!
//! Helpers shared by the library and the command-line tool.

pub mod hex;

pub use hex::{decode_hex, encode_hex, encode_hex_upper, format_hex_compact, parse_hex_lenient, HexError};
