//! Model Override Table
//!
//! Some products advertise a generic mode code but need a dedicated decoder:
//! the Smart Battery Sense shares the battery-monitor record type, and the
//! Blue Smart chargers share the Smart BatteryProtect record type while using
//! their own field layout. The model id at offset 2 identifies these products
//! exactly and takes precedence over the mode code.
//!
//! Adding a product is a one-line edit to [`MODEL_OVERRIDES`].
//!
//! ## Usage Example
//!
//! ```rust
//! use victron_ble::devices::overrides::{lookup, model_name};
//! use victron_ble::DeviceKind;
//!
//! assert_eq!(lookup(0xA3A4), Some(DeviceKind::BatterySense));
//! assert_eq!(model_name(0xA3A4), Some("Smart Battery Sense"));
//! assert_eq!(lookup(0x0000), None);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::devices::kind::DeviceKind;
use crate::error::DetectError;

/// A product whose model id alone selects the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Vendor model id, as advertised little-endian at offset 2
    pub model_id: u16,
    /// Product name
    pub name: &'static str,
    /// Decoder to use for this product
    pub kind: DeviceKind,
}

impl ModelInfo {
    pub const fn new(model_id: u16, name: &'static str, kind: DeviceKind) -> Self {
        Self {
            model_id,
            name,
            kind,
        }
    }
}

/// Products forced onto a particular decoder regardless of their mode code
pub static MODEL_OVERRIDES: &[ModelInfo] = &[
    // ===== SMART BATTERY SENSE =====
    ModelInfo::new(0xA3A4, "Smart Battery Sense", DeviceKind::BatterySense),
    ModelInfo::new(0xA3A5, "Smart Battery Sense", DeviceKind::BatterySense),

    // ===== BLUE SMART CHARGERS =====
    ModelInfo::new(0xA300, "Blue Smart Charger - Generic", DeviceKind::SmartCharger),
    ModelInfo::new(0xA301, "Blue Smart IP65 Charger 12|10", DeviceKind::SmartCharger),
    ModelInfo::new(0xA302, "Blue Smart IP65 Charger 12|15", DeviceKind::SmartCharger),
    ModelInfo::new(0xA303, "Blue Smart IP65 Charger 24|8", DeviceKind::SmartCharger),
    ModelInfo::new(0xA304, "Blue Smart IP65 Charger 12|5", DeviceKind::SmartCharger),
    ModelInfo::new(0xA305, "Blue Smart IP65 Charger 12|7", DeviceKind::SmartCharger),
    ModelInfo::new(0xA306, "Blue Smart IP65 Charger 24|5", DeviceKind::SmartCharger),
    ModelInfo::new(0xA307, "Blue Smart IP65 Charger 12|4", DeviceKind::SmartCharger),
    ModelInfo::new(0xA308, "Blue Smart IP65s Charger 12|4", DeviceKind::SmartCharger),
    ModelInfo::new(0xA309, "Blue Smart IP65s Charger 12|5", DeviceKind::SmartCharger),
    ModelInfo::new(0xA30A, "Blue Smart IP65 Charger 12|25", DeviceKind::SmartCharger),
    ModelInfo::new(0xA30B, "Blue Smart IP65 Charger 24|13", DeviceKind::SmartCharger),
    ModelInfo::new(0xA30C, "Blue Smart IP65 Charger 6V/12V-1.1A", DeviceKind::SmartCharger),
    ModelInfo::new(0xA30D, "Blue Smart IP65s Charger 12/4", DeviceKind::SmartCharger),
    ModelInfo::new(0xA30E, "Blue Smart IP65s Charger 12/5", DeviceKind::SmartCharger),
    ModelInfo::new(0xA30F, "Blue Smart IP65 Charger 12/7", DeviceKind::SmartCharger),
    ModelInfo::new(0xA310, "Blue Smart IP67 Charger 12|7", DeviceKind::SmartCharger),
    ModelInfo::new(0xA311, "Blue Smart IP67 Charger 12|13", DeviceKind::SmartCharger),
    ModelInfo::new(0xA312, "Blue Smart IP67 Charger 24|5", DeviceKind::SmartCharger),
    ModelInfo::new(0xA313, "Blue Smart IP67 Charger 12|17", DeviceKind::SmartCharger),
    ModelInfo::new(0xA314, "Blue Smart IP67 Charger 12|25", DeviceKind::SmartCharger),
    ModelInfo::new(0xA315, "Blue Smart IP67 Charger 24|8", DeviceKind::SmartCharger),
    ModelInfo::new(0xA316, "Blue Smart IP67 Charger 24|12", DeviceKind::SmartCharger),
    ModelInfo::new(0xA317, "Blue Smart IP67 Charger 12/7", DeviceKind::SmartCharger),
    ModelInfo::new(0xA318, "Blue Smart IP67 Charger 12/13", DeviceKind::SmartCharger),
    ModelInfo::new(0xA319, "Blue Smart IP67 Charger 24/5", DeviceKind::SmartCharger),
    ModelInfo::new(0xA31A, "Blue Smart IP67 Charger 12/17", DeviceKind::SmartCharger),
    ModelInfo::new(0xA31B, "Blue Smart IP67 Charger 12/25", DeviceKind::SmartCharger),
    ModelInfo::new(0xA31C, "Blue Smart IP67 Charger 24/8", DeviceKind::SmartCharger),
    ModelInfo::new(0xA31D, "Blue Smart IP67 Charger 24/12", DeviceKind::SmartCharger),
    ModelInfo::new(0xA320, "Blue Smart IP22 Charger 12|15 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA321, "Blue Smart IP22 Charger 12|15 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA322, "Blue Smart IP22 Charger 12|20 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA323, "Blue Smart IP22 Charger 12|20 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA324, "Blue Smart IP22 Charger 12|30 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA325, "Blue Smart IP22 Charger 12|30 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA326, "Blue Smart IP22 Charger 24|8 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA327, "Blue Smart IP22 Charger 24|8 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA328, "Blue Smart IP22 Charger 24|12 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA329, "Blue Smart IP22 Charger 24|12 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA32A, "Blue Smart IP22 Charger 24|16 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA32B, "Blue Smart IP22 Charger 24|16 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA32C, "Blue Smart IP22 Charger 12/15 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA32D, "Blue Smart IP22 Charger 12/15 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA32E, "Blue Smart IP22 Charger 12/20 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA32F, "Blue Smart IP22 Charger 12/20 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA330, "Blue Smart IP22 Charger 12/30 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA331, "Blue Smart IP22 Charger 12/30 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA332, "Blue Smart IP22 Charger 24/8 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA333, "Blue Smart IP22 Charger 24/8 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA334, "Blue Smart IP22 Charger 24/12 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA335, "Blue Smart IP22 Charger 24/12 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA336, "Blue Smart IP22 Charger 24/16 (1)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA337, "Blue Smart IP22 Charger 24/16 (3)", DeviceKind::SmartCharger),
    ModelInfo::new(0xA338, "Blue Smart IP65 Charger 12/10", DeviceKind::SmartCharger),
    ModelInfo::new(0xA339, "Blue Smart IP65 Charger 12/15", DeviceKind::SmartCharger),
    ModelInfo::new(0xA33A, "Blue Smart IP65 Charger 24/5", DeviceKind::SmartCharger),
    ModelInfo::new(0xA33B, "Blue Smart IP65 Charger 24/8", DeviceKind::SmartCharger),
    ModelInfo::new(0xA33C, "Blue Smart IP65 Charger 12/5", DeviceKind::SmartCharger),
];

/// Override table indexed by model id, built once on first use
pub static OVERRIDE_TABLE: Lazy<HashMap<u16, &'static ModelInfo>> = Lazy::new(|| {
    match build_override_table(MODEL_OVERRIDES) {
        Ok(table) => table,
        Err(e) => panic!("invalid model override table: {e}"),
    }
});

/// Index a list of overrides by model id
///
/// Each model id may appear once; a repeated id is rejected with
/// [`DetectError::DuplicateModelId`] so ambiguous tables never reach the
/// classifier.
pub fn build_override_table<'a>(
    entries: &'a [ModelInfo],
) -> Result<HashMap<u16, &'a ModelInfo>, DetectError> {
    let mut table = HashMap::with_capacity(entries.len());
    for entry in entries {
        if table.insert(entry.model_id, entry).is_some() {
            return Err(DetectError::DuplicateModelId(entry.model_id));
        }
    }
    Ok(table)
}

/// Decoder forced for a model id, if any
pub fn lookup(model_id: u16) -> Option<DeviceKind> {
    OVERRIDE_TABLE.get(&model_id).map(|info| info.kind)
}

/// Full override entry for a model id
pub fn model_info(model_id: u16) -> Option<&'static ModelInfo> {
    OVERRIDE_TABLE.get(&model_id).copied()
}

/// Product name for a model id in the override table
pub fn model_name(model_id: u16) -> Option<&'static str> {
    model_info(model_id).map(|info| info.name)
}

/// All overrides, in table order
pub fn all_models() -> impl Iterator<Item = &'static ModelInfo> {
    MODEL_OVERRIDES.iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_table_is_valid() {
        let table = build_override_table(MODEL_OVERRIDES).unwrap();
        assert_eq!(table.len(), MODEL_OVERRIDES.len());
        assert_eq!(OVERRIDE_TABLE.len(), 61);
    }

    #[test]
    fn test_duplicate_model_id_rejected() {
        let entries = [
            ModelInfo::new(0xA3A4, "Smart Battery Sense", DeviceKind::BatterySense),
            ModelInfo::new(0xA3A4, "Impostor", DeviceKind::SmartCharger),
        ];
        assert_eq!(
            build_override_table(&entries),
            Err(DetectError::DuplicateModelId(0xA3A4))
        );
    }

    #[test]
    fn test_battery_sense_overrides() {
        assert_eq!(lookup(0xA3A4), Some(DeviceKind::BatterySense));
        assert_eq!(lookup(0xA3A5), Some(DeviceKind::BatterySense));
    }

    #[test]
    fn test_charger_range() {
        for model_id in (0xA300u16..=0xA31D).chain(0xA320..=0xA33C) {
            assert_eq!(lookup(model_id), Some(DeviceKind::SmartCharger), "0x{:04X}", model_id);
        }
        // Gap in the charger range
        assert_eq!(lookup(0xA31E), None);
        assert_eq!(lookup(0xA31F), None);
        assert_eq!(lookup(0xA33D), None);
    }

    #[test]
    fn test_model_names() {
        assert_eq!(model_name(0xA300), Some("Blue Smart Charger - Generic"));
        assert_eq!(model_name(0xA33C), Some("Blue Smart IP65 Charger 12/5"));
        assert_eq!(model_name(0x0000), None);
    }

    #[test]
    fn test_all_models_in_table_order() {
        let first = all_models().next().unwrap();
        assert_eq!(first.model_id, 0xA3A4);
        assert_eq!(all_models().count(), MODEL_OVERRIDES.len());
    }
}
