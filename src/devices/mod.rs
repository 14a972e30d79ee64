//! # Device Detection
//!
//! Maps a raw Victron BLE advertisement payload to the decoder that should
//! parse its body. Decoders themselves live outside this crate; this module
//! only returns a [`DeviceKind`] selector.
//!
//! - [`kind`]: decoder variants and the mode-code fallback mapping
//! - [`overrides`]: per-model exceptions to the mode mapping
//! - [`detect`]: header parsing and the resolution policy

pub mod detect;
pub mod kind;
pub mod overrides;

pub use detect::{
    classify, detect_device_type, AdvertisementHeader, Detection, ResolutionSource, HEADER_LEN,
};
pub use kind::{mode_fallback, DeviceKind, ModeCode};
pub use overrides::{all_models, lookup, model_info, model_name, ModelInfo};
