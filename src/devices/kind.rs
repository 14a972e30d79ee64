//! Device-decoder variants and advertised mode codes
//!
//! Every Victron advertisement carries a record-type byte (the mode code)
//! naming the general product family. Most families have exactly one
//! decoder; a few are reserved and have no decoder yet.
//!
//! ## Mode Code Table
//!
//! | Code | Family              | Decoder              |
//! |------|---------------------|----------------------|
//! | 0x01 | Solar charger       | SolarCharger         |
//! | 0x02 | Battery monitor     | BatteryMonitor       |
//! | 0x03 | Inverter            | Inverter             |
//! | 0x04 | DC/DC converter     | DcDcConverter        |
//! | 0x05 | Smart lithium       | SmartLithium         |
//! | 0x06 | Inverter RS         | -                    |
//! | 0x08 | AC charger          | -                    |
//! | 0x09 | Smart BatteryProtect| SmartBatteryProtect  |
//! | 0x0A | Lynx Smart BMS      | LynxSmartBms         |
//! | 0x0B | Multi RS            | -                    |
//! | 0x0C | VE.Bus              | VeBus                |
//! | 0x0D | DC energy meter     | DcEnergyMeter        |
//! | 0x0F | Orion XS            | OrionXs              |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DetectError;

/// Selector for the decoder that interprets the body of an advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DeviceKind {
    BatteryMonitor,
    BatterySense,
    DcDcConverter,
    DcEnergyMeter,
    Inverter,
    LynxSmartBms,
    OrionXs,
    SmartBatteryProtect,
    SmartCharger,
    SmartLithium,
    SolarCharger,
    VeBus,
}

impl DeviceKind {
    /// Every decoder variant, in declaration order.
    pub const ALL: [DeviceKind; 12] = [
        DeviceKind::BatteryMonitor,
        DeviceKind::BatterySense,
        DeviceKind::DcDcConverter,
        DeviceKind::DcEnergyMeter,
        DeviceKind::Inverter,
        DeviceKind::LynxSmartBms,
        DeviceKind::OrionXs,
        DeviceKind::SmartBatteryProtect,
        DeviceKind::SmartCharger,
        DeviceKind::SmartLithium,
        DeviceKind::SolarCharger,
        DeviceKind::VeBus,
    ];

    /// Stable display name of the variant.
    pub const fn name(self) -> &'static str {
        match self {
            DeviceKind::BatteryMonitor => "BatteryMonitor",
            DeviceKind::BatterySense => "BatterySense",
            DeviceKind::DcDcConverter => "DcDcConverter",
            DeviceKind::DcEnergyMeter => "DcEnergyMeter",
            DeviceKind::Inverter => "Inverter",
            DeviceKind::LynxSmartBms => "LynxSmartBMS",
            DeviceKind::OrionXs => "OrionXS",
            DeviceKind::SmartBatteryProtect => "SmartBatteryProtect",
            DeviceKind::SmartCharger => "SmartCharger",
            DeviceKind::SmartLithium => "SmartLithium",
            DeviceKind::SolarCharger => "SolarCharger",
            DeviceKind::VeBus => "VEBus",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeviceKind {
    type Err = DetectError;

    /// Case-insensitive match on the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DetectError::UnknownDeviceKind(s.to_string()))
    }
}

/// Record-type byte at offset 4 of the advertisement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ModeCode {
    SolarCharger = 0x01,
    BatteryMonitor = 0x02,
    Inverter = 0x03,
    DcDcConverter = 0x04,
    SmartLithium = 0x05,
    InverterRs = 0x06,
    AcCharger = 0x08,
    SmartBatteryProtect = 0x09,
    LynxSmartBms = 0x0A,
    MultiRs = 0x0B,
    VeBus = 0x0C,
    DcEnergyMeter = 0x0D,
    OrionXs = 0x0F,
}

impl ModeCode {
    /// Every known mode code, ordered by value.
    pub const ALL: [ModeCode; 13] = [
        ModeCode::SolarCharger,
        ModeCode::BatteryMonitor,
        ModeCode::Inverter,
        ModeCode::DcDcConverter,
        ModeCode::SmartLithium,
        ModeCode::InverterRs,
        ModeCode::AcCharger,
        ModeCode::SmartBatteryProtect,
        ModeCode::LynxSmartBms,
        ModeCode::MultiRs,
        ModeCode::VeBus,
        ModeCode::DcEnergyMeter,
        ModeCode::OrionXs,
    ];

    /// Raw byte value.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decoder used when no model override applies.
    ///
    /// Reserved families (AC charger, Inverter RS, Multi RS) have no decoder
    /// and yield `None`.
    pub const fn device_kind(self) -> Option<DeviceKind> {
        match self {
            ModeCode::SolarCharger => Some(DeviceKind::SolarCharger),
            ModeCode::BatteryMonitor => Some(DeviceKind::BatteryMonitor),
            ModeCode::Inverter => Some(DeviceKind::Inverter),
            ModeCode::DcDcConverter => Some(DeviceKind::DcDcConverter),
            ModeCode::SmartLithium => Some(DeviceKind::SmartLithium),
            ModeCode::InverterRs => None,
            ModeCode::AcCharger => None,
            ModeCode::SmartBatteryProtect => Some(DeviceKind::SmartBatteryProtect),
            ModeCode::LynxSmartBms => Some(DeviceKind::LynxSmartBms),
            ModeCode::MultiRs => None,
            ModeCode::VeBus => Some(DeviceKind::VeBus),
            ModeCode::DcEnergyMeter => Some(DeviceKind::DcEnergyMeter),
            ModeCode::OrionXs => Some(DeviceKind::OrionXs),
        }
    }

    /// Human-readable family name.
    pub const fn family(self) -> &'static str {
        match self {
            ModeCode::SolarCharger => "Solar charger",
            ModeCode::BatteryMonitor => "Battery monitor",
            ModeCode::Inverter => "Inverter",
            ModeCode::DcDcConverter => "DC/DC converter",
            ModeCode::SmartLithium => "Smart lithium",
            ModeCode::InverterRs => "Inverter RS",
            ModeCode::AcCharger => "AC charger",
            ModeCode::SmartBatteryProtect => "Smart BatteryProtect",
            ModeCode::LynxSmartBms => "Lynx Smart BMS",
            ModeCode::MultiRs => "Multi RS",
            ModeCode::VeBus => "VE.Bus",
            ModeCode::DcEnergyMeter => "DC energy meter",
            ModeCode::OrionXs => "Orion XS",
        }
    }
}

impl TryFrom<u8> for ModeCode {
    type Error = DetectError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(ModeCode::SolarCharger),
            0x02 => Ok(ModeCode::BatteryMonitor),
            0x03 => Ok(ModeCode::Inverter),
            0x04 => Ok(ModeCode::DcDcConverter),
            0x05 => Ok(ModeCode::SmartLithium),
            0x06 => Ok(ModeCode::InverterRs),
            0x08 => Ok(ModeCode::AcCharger),
            0x09 => Ok(ModeCode::SmartBatteryProtect),
            0x0A => Ok(ModeCode::LynxSmartBms),
            0x0B => Ok(ModeCode::MultiRs),
            0x0C => Ok(ModeCode::VeBus),
            0x0D => Ok(ModeCode::DcEnergyMeter),
            0x0F => Ok(ModeCode::OrionXs),
            other => Err(DetectError::UnknownMode(other)),
        }
    }
}

/// Map a raw mode byte to its fallback decoder.
///
/// Total over `u8`: unknown and reserved codes both give `None`.
pub fn mode_fallback(mode: u8) -> Option<DeviceKind> {
    ModeCode::try_from(mode).ok().and_then(ModeCode::device_kind)
}
