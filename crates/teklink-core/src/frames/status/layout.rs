pub const FPORT: u8 = 48;

pub const HW_ID_OFFSET: usize = 3;
pub const FW_MAJOR_OFFSET: usize = 4;
pub const FW_MINOR_OFFSET: usize = 5;
pub const REASON_OFFSET: usize = 6;
pub const SENSOR_RSSI_OFFSET: usize = 8;
pub const BATTERY_OFFSET: usize = 10;
pub const TX_PERIOD_OFFSET: usize = 13;
pub const ULLAGE_RANGE: std::ops::Range<usize> = 14..16;
pub const TEMPERATURE_OFFSET: usize = 16;

pub const MIN_LEN: usize = TEMPERATURE_OFFSET + 1;

// Reason byte: bits 0-1 contact reason, bits 2-4 last reset, bit 5 active.
pub const CONTACT_REASON_MASK: u8 = 0x03;
pub const LAST_RESET_SHIFT: u32 = 2;
pub const LAST_RESET_MASK: u8 = 0x07;
pub const ACTIVE_BIT: u32 = 5;
