#![no_main]

use libfuzzer_sys::fuzz_target;
use victron_ble::devices::overrides::lookup;
use victron_ble::{classify, detect_device_type, mode_fallback};

fuzz_target!(|data: &[u8]| {
    // Any input must classify without panicking
    let kind = detect_device_type(data);
    let detection = classify(data);

    match detection {
        None => {
            assert!(data.len() < 5);
            assert!(kind.is_none());
        }
        Some(d) => {
            assert_eq!(d.kind, kind);
            let model_id = u16::from_le_bytes([data[2], data[3]]);
            assert_eq!(d.header.model_id, model_id);
            assert_eq!(d.header.mode, data[4]);
            assert_eq!(kind, lookup(model_id).or_else(|| mode_fallback(data[4])));
        }
    }
});
