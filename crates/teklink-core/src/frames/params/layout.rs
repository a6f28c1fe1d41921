pub const FPORT: u8 = 67;

/// Leading message-type byte of a parameter read response.
pub const READ_RESPONSE_MSG_TYPE: u8 = 0x43;
/// Message-type byte of a parameter write request (downlink direction).
pub const WRITE_REQUEST_MSG_TYPE: u8 = 0x42;
/// Product identifier of the TEK-766.
pub const PRODUCT_ID: u8 = 0x00;

pub const MSG_TYPE_OFFSET: usize = 0;
pub const PRODUCT_ID_OFFSET: usize = 1;
pub const RESERVED_OFFSET: usize = 2;
pub const HEADER_LEN: usize = 3;

// Each record starts with a 1-byte length and a 2-byte big-endian identifier.
pub const RECORD_HEADER_LEN: usize = 3;

pub const PARAM_TX_PERIOD: u16 = 0x0500;
pub const PARAM_TX_RANDOM: u16 = 0x0502;
pub const PARAM_LOGGER_INTERVAL: u16 = 0x0503;
pub const PARAM_STATUS_PERIOD: u16 = 0x0505;
pub const PARAM_LIMIT1: u16 = 0x4001;
pub const PARAM_LIMIT2: u16 = 0x4002;
pub const PARAM_LIMIT3: u16 = 0x4003;
pub const PARAM_PING_RATE: u16 = 0x4005;
pub const PARAM_RSSI_THRESHOLD: u16 = 0x4006;

// Alarm limit wire form: bits 0-9 threshold, 10-13 tolerance, 14 enabled,
// 15 polarity (1 = higher than threshold).
pub const LIMIT_THRESHOLD_MASK: u16 = 0x03ff;
pub const LIMIT_TOLERANCE_SHIFT: u32 = 10;
pub const LIMIT_TOLERANCE_MASK: u16 = 0x0f;
pub const LIMIT_ENABLED_BIT: u32 = 14;
pub const LIMIT_POLARITY_BIT: u32 = 15;
