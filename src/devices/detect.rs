//! Header Classifier
//!
//! Resolves which decoder should interpret a manufacturer-specific
//! advertisement payload, using the fixed header at its start:
//!
//! ```text
//! offset  0      2          4      5
//!         +------+----------+------+---------------------
//!         | ---- | model id | mode | body (decoder input)
//!         +------+----------+------+---------------------
//!                  u16 LE     u8
//! ```
//!
//! Resolution is override-first: a model id listed in the override table
//! selects its decoder outright, otherwise the mode code picks the generic
//! decoder for its family. Truncated headers and unsupported devices both
//! resolve to `None`; neither is an error.
//!
//! ## Usage Example
//!
//! ```rust
//! use victron_ble::{detect_device_type, DeviceKind};
//!
//! let payload = [0x10, 0x02, 0xA4, 0xA3, 0x02, 0x00];
//! assert_eq!(detect_device_type(&payload), Some(DeviceKind::BatterySense));
//!
//! assert_eq!(detect_device_type(&[0x10, 0x02]), None);
//! ```

use nom::bytes::complete::take;
use nom::number::complete::{le_u16, u8 as nom_u8};
use nom::IResult;
use serde::Serialize;

use crate::devices::kind::{mode_fallback, DeviceKind, ModeCode};
use crate::devices::overrides;

/// Bytes needed to cover the model id and mode fields
pub const HEADER_LEN: usize = 5;
/// Offset of the little-endian model id
pub const MODEL_ID_OFFSET: usize = 2;
/// Offset of the mode byte
pub const MODE_OFFSET: usize = 4;

/// The two classification fields of an advertisement header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvertisementHeader {
    pub model_id: u16,
    pub mode: u8,
}

impl AdvertisementHeader {
    /// Read the header from the start of a payload.
    ///
    /// Returns `None` for payloads shorter than [`HEADER_LEN`].
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < HEADER_LEN {
            return None;
        }
        parse_header(data).ok().map(|(_, header)| header)
    }

    /// Mode byte as a known record type, if it is one
    pub fn mode_code(&self) -> Option<ModeCode> {
        ModeCode::try_from(self.mode).ok()
    }
}

fn parse_header(input: &[u8]) -> IResult<&[u8], AdvertisementHeader> {
    let (input, _) = take(MODEL_ID_OFFSET)(input)?;
    let (input, model_id) = le_u16(input)?;
    let (input, mode) = nom_u8(input)?;
    Ok((input, AdvertisementHeader { model_id, mode }))
}

/// Which lookup tier produced a detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResolutionSource {
    /// The model id is listed in the override table
    ModelOverride,
    /// The mode code was mapped through the fallback table
    ModeFallback,
}

/// Classification result with the header it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub header: AdvertisementHeader,
    /// Resolved decoder, `None` for unsupported devices
    pub kind: Option<DeviceKind>,
    pub source: ResolutionSource,
    /// Product name when the model id is in the override table
    pub model_name: Option<&'static str>,
}

/// Select the decoder for an advertisement payload.
///
/// Pure and total: any byte slice is accepted, and misses (short payload,
/// unknown model with an unknown or reserved mode) give `None`.
pub fn detect_device_type(data: &[u8]) -> Option<DeviceKind> {
    let header = AdvertisementHeader::parse(data)?;
    overrides::lookup(header.model_id).or_else(|| mode_fallback(header.mode))
}

/// Classify a payload and report how the decoder was chosen.
///
/// Returns `None` only when the header is truncated. `kind` always agrees
/// with [`detect_device_type`] for the same bytes.
pub fn classify(data: &[u8]) -> Option<Detection> {
    let header = AdvertisementHeader::parse(data)?;

    let detection = match overrides::model_info(header.model_id) {
        Some(info) => Detection {
            header,
            kind: Some(info.kind),
            source: ResolutionSource::ModelOverride,
            model_name: Some(info.name),
        },
        None => Detection {
            header,
            kind: mode_fallback(header.mode),
            source: ResolutionSource::ModeFallback,
            model_name: None,
        },
    };

    Some(detection)
}
