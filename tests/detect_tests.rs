//! Integration tests for advertisement header classification

use proptest::prelude::*;
use victron_ble::devices::overrides::{all_models, lookup};
use victron_ble::{classify, detect_device_type, mode_fallback, DeviceKind, ResolutionSource};

fn payload(model_id: u16, mode: u8) -> Vec<u8> {
    let [lo, hi] = model_id.to_le_bytes();
    vec![0x10, 0x02, lo, hi, mode, 0x7E, 0x01, 0xC3, 0x5A]
}

#[test]
fn test_battery_sense_overrides_battery_monitor_mode() {
    let data = [0x10, 0x02, 0xA4, 0xA3, 0x02];
    assert_eq!(mode_fallback(0x02), Some(DeviceKind::BatteryMonitor));
    assert_eq!(detect_device_type(&data), Some(DeviceKind::BatterySense));
}

#[test]
fn test_generic_battery_monitor() {
    assert_eq!(
        detect_device_type(&[0x10, 0x02, 0x00, 0x00, 0x02]),
        Some(DeviceKind::BatteryMonitor)
    );
}

#[test]
fn test_generic_solar_charger() {
    assert_eq!(
        detect_device_type(&[0x10, 0x02, 0x00, 0x00, 0x01]),
        Some(DeviceKind::SolarCharger)
    );
}

#[test]
fn test_ac_charger_has_no_decoder() {
    assert_eq!(detect_device_type(&[0x10, 0x02, 0x00, 0x00, 0x08]), None);
}

#[test]
fn test_truncated_payload() {
    assert_eq!(detect_device_type(&[0x00, 0x00]), None);
    assert_eq!(detect_device_type(&[]), None);
    // Model id present, mode byte missing
    assert_eq!(detect_device_type(&[0x10, 0x02, 0xA4, 0xA3]), None);
}

#[test]
fn test_smart_charger_overrides_battery_protect_mode() {
    let data = [0x10, 0x02, 0x00, 0xA3, 0x09];
    assert_eq!(mode_fallback(0x09), Some(DeviceKind::SmartBatteryProtect));
    assert_eq!(detect_device_type(&data), Some(DeviceKind::SmartCharger));
}

#[test]
fn test_exact_header_length_is_enough() {
    assert_eq!(
        detect_device_type(&[0xFF, 0xFF, 0x00, 0x00, 0x0F]),
        Some(DeviceKind::OrionXs)
    );
}

#[test]
fn test_real_world_advertisements() {
    // SmartSolar MPPT 75/15, encrypted body
    let solar = [
        0x10, 0x02, 0x89, 0xA0, 0x01, 0x3B, 0x01, 0x28, 0x49, 0x9E, 0xF0, 0x1D, 0x5A, 0x14,
    ];
    assert_eq!(detect_device_type(&solar), Some(DeviceKind::SolarCharger));

    // Lynx Smart BMS 500
    let bms = [0x10, 0x02, 0xE8, 0xA3, 0x0A, 0x00, 0x00, 0xD1];
    assert_eq!(detect_device_type(&bms), Some(DeviceKind::LynxSmartBms));

    // MultiPlus reporting over VE.Bus
    let vebus = [0x10, 0x02, 0x80, 0x27, 0x0C, 0x11, 0x22];
    assert_eq!(detect_device_type(&vebus), Some(DeviceKind::VeBus));
}

#[test]
fn test_every_override_is_reachable() {
    for info in all_models() {
        for mode in [0x00u8, 0x02, 0x09, 0x0F, 0xFF] {
            assert_eq!(
                detect_device_type(&payload(info.model_id, mode)),
                Some(info.kind),
                "{} (0x{:04X}) with mode 0x{:02X}",
                info.name,
                info.model_id,
                mode
            );
        }
    }
}

#[test]
fn test_classify_distinguishes_tiers() {
    let over = classify(&payload(0xA3A5, 0x02)).unwrap();
    assert_eq!(over.source, ResolutionSource::ModelOverride);
    assert_eq!(over.kind, Some(DeviceKind::BatterySense));

    let fallback = classify(&payload(0xA389, 0x0B)).unwrap();
    assert_eq!(fallback.source, ResolutionSource::ModeFallback);
    assert_eq!(fallback.kind, None);
    assert_eq!(fallback.header.model_id, 0xA389);
}

#[test]
fn test_concurrent_classification() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            std::thread::spawn(move || {
                let data = payload(0xA300 + u16::from(i), 0x09);
                (0..1000).all(|_| detect_device_type(&data) == Some(DeviceKind::SmartCharger))
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

proptest! {
    #[test]
    fn prop_short_payloads_never_resolve(data in prop::collection::vec(any::<u8>(), 0..5)) {
        prop_assert_eq!(detect_device_type(&data), None);
        prop_assert!(classify(&data).is_none());
    }

    #[test]
    fn prop_override_ignores_mode(
        index in 0usize..61,
        mode in any::<u8>(),
        prefix in any::<[u8; 2]>(),
        body in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let info = all_models().nth(index).unwrap();
        let mut data = prefix.to_vec();
        data.extend_from_slice(&info.model_id.to_le_bytes());
        data.push(mode);
        data.extend_from_slice(&body);
        prop_assert_eq!(detect_device_type(&data), Some(info.kind));
    }

    #[test]
    fn prop_unlisted_model_uses_mode_only(
        model_id in any::<u16>(),
        mode in any::<u8>(),
        prefix in any::<[u8; 2]>(),
        body in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        prop_assume!(lookup(model_id).is_none());
        let mut data = prefix.to_vec();
        data.extend_from_slice(&model_id.to_le_bytes());
        data.push(mode);
        data.extend_from_slice(&body);
        prop_assert_eq!(detect_device_type(&data), mode_fallback(mode));
    }

    #[test]
    fn prop_classification_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..32)) {
        let first = detect_device_type(&data);
        prop_assert_eq!(detect_device_type(&data), first);
        prop_assert_eq!(classify(&data).and_then(|d| d.kind), first);
    }
}
