use std::fmt;

use serde::{Serialize, Serializer};

use super::layout;
use crate::frames::common::reader::PayloadReader;
use crate::frames::common::temperature_from_raw;
use crate::frames::error::DecodeError;

/// Decoded status frame. JSON field names follow the device's
/// documented report keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub ullage_cm: u16,
    #[serde(rename = "temp_C")]
    pub temp_c: i16,
    pub firmware: String,
    #[serde(rename = "contactReason")]
    pub contact_reason: ContactReason,
    #[serde(rename = "lastReset")]
    pub last_reset: LastReset,
    pub active: bool,
    pub bat_pct: u8,
    #[serde(rename = "txPeriod_h")]
    pub tx_period_h: u8,
    #[serde(rename = "sensorRSSI_dBm")]
    pub sensor_rssi_dbm: i16,
    pub hw_id: u8,
}

/// Why the device initiated this status contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactReason {
    Reset,
    Scheduled,
    Manual,
    Activation,
    Unknown(u8),
}

impl ContactReason {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => ContactReason::Reset,
            1 => ContactReason::Scheduled,
            2 => ContactReason::Manual,
            3 => ContactReason::Activation,
            other => ContactReason::Unknown(other),
        }
    }
}

impl fmt::Display for ContactReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactReason::Reset => f.write_str("Reset"),
            ContactReason::Scheduled => f.write_str("Scheduled"),
            ContactReason::Manual => f.write_str("Manual"),
            ContactReason::Activation => f.write_str("Activation"),
            ContactReason::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

impl Serialize for ContactReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Cause of the device's most recent reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastReset {
    PowerOn,
    BrownOut,
    External,
    Watchdog,
    M3Lockup,
    M3SystemRequest,
    Em4,
    BackupMode,
    Unknown(u8),
}

impl LastReset {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => LastReset::PowerOn,
            1 => LastReset::BrownOut,
            2 => LastReset::External,
            3 => LastReset::Watchdog,
            4 => LastReset::M3Lockup,
            5 => LastReset::M3SystemRequest,
            6 => LastReset::Em4,
            7 => LastReset::BackupMode,
            other => LastReset::Unknown(other),
        }
    }
}

impl fmt::Display for LastReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastReset::PowerOn => f.write_str("Power on"),
            LastReset::BrownOut => f.write_str("Brown out"),
            LastReset::External => f.write_str("External"),
            LastReset::Watchdog => f.write_str("Watchdog"),
            LastReset::M3Lockup => f.write_str("M3 lockup"),
            LastReset::M3SystemRequest => f.write_str("M3 system request"),
            LastReset::Em4 => f.write_str("EM4"),
            LastReset::BackupMode => f.write_str("Backup mode"),
            LastReset::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

impl Serialize for LastReset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn parse_status(payload: &[u8]) -> Result<Status, DecodeError> {
    let reader = PayloadReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    let hw_id = reader.read_u8(layout::HW_ID_OFFSET)?;
    let firmware = format!(
        "{}.{}",
        reader.read_u8(layout::FW_MAJOR_OFFSET)?,
        reader.read_u8(layout::FW_MINOR_OFFSET)?
    );
    let reason = reader.read_u8(layout::REASON_OFFSET)?;
    let sensor_rssi_dbm = -i16::from(reader.read_u8(layout::SENSOR_RSSI_OFFSET)?);
    let bat_pct = reader.read_u8(layout::BATTERY_OFFSET)?;
    let tx_period_h = reader.read_u8(layout::TX_PERIOD_OFFSET)?;
    let ullage_cm = reader.read_u16_be(layout::ULLAGE_RANGE.clone())?;
    let temp_c = temperature_from_raw(reader.read_u8(layout::TEMPERATURE_OFFSET)?);

    Ok(Status {
        ullage_cm,
        temp_c,
        firmware,
        contact_reason: ContactReason::from_code(reason & layout::CONTACT_REASON_MASK),
        last_reset: LastReset::from_code(
            (reason >> layout::LAST_RESET_SHIFT) & layout::LAST_RESET_MASK,
        ),
        active: (reason >> layout::ACTIVE_BIT) & 0x1 == 1,
        bat_pct,
        tx_period_h,
        sensor_rssi_dbm,
        hw_id,
    })
}
