pub const FPORT: u8 = 16;

pub const ULLAGE_RANGE: std::ops::Range<usize> = 4..6;
pub const TEMPERATURE_OFFSET: usize = 6;
pub const RADIO_OFFSET: usize = 7;

pub const MIN_LEN: usize = RADIO_OFFSET + 1;
