//! # victron-ble - Device-Type Detection for Victron Energy BLE Advertisements
//!
//! Victron devices broadcast their state in the manufacturer-specific data of
//! BLE advertisements. Each product family uses its own binary layout, so the
//! first step of decoding is deciding which decoder a payload belongs to.
//! This crate makes that decision from the fixed header at the start of the
//! payload.
//!
//! ## Features
//!
//! - Read the model id and mode code from the advertisement header
//! - Resolve per-model overrides before the generic mode-code mapping
//! - Treat truncated and unsupported payloads as "no decoder", never as errors
//! - Pure and allocation-free on the detection path, safe to call from any thread
//!
//! ## Usage
//!
//! ```rust
//! use victron_ble::{classify, detect_device_type, DeviceKind, ResolutionSource};
//!
//! // Smart Battery Sense advertises the battery-monitor mode code
//! let payload = [0x10, 0x02, 0xA4, 0xA3, 0x02, 0x55, 0x01];
//! assert_eq!(detect_device_type(&payload), Some(DeviceKind::BatterySense));
//!
//! let detection = classify(&payload).unwrap();
//! assert_eq!(detection.source, ResolutionSource::ModelOverride);
//! ```

pub mod devices;
pub mod error;
pub mod logging;
pub mod util;

pub use crate::error::DetectError;
pub use crate::logging::init_logger;

pub use devices::{
    classify, detect_device_type, mode_fallback, AdvertisementHeader, Detection, DeviceKind,
    ModeCode, ModelInfo, ResolutionSource,
};
