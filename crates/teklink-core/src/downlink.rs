//! Parameter write request building (message type `0x42`).
//!
//! The downlink mirror of the parameter read response: the same
//! 3-byte header shape followed by `[len, id_hi, id_lo, value...]`
//! blocks. Setters convert human-usable units into the device's raw
//! encodings, so a built request round-trips through the uplink
//! registry.

use crate::frames::params::layout;
use crate::frames::params::registry::AlarmLimit;

/// fPort to send parameter write requests on.
pub const DOWNLINK_FPORT: u8 = 42;

/// One of the three static alarm limit slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSlot {
    Limit1,
    Limit2,
    Limit3,
}

impl LimitSlot {
    fn identifier(self) -> u16 {
        match self {
            LimitSlot::Limit1 => layout::PARAM_LIMIT1,
            LimitSlot::Limit2 => layout::PARAM_LIMIT2,
            LimitSlot::Limit3 => layout::PARAM_LIMIT3,
        }
    }
}

/// Builder for a parameter write request payload.
///
/// Blocks are emitted in insertion order; setting the same parameter
/// twice emits it twice, matching the device's last-write-wins
/// behavior.
///
/// # Examples
/// ```
/// use teklink_core::ParamWriteRequest;
///
/// let payload = ParamWriteRequest::new().tx_period_hours(12).encode();
/// assert_eq!(payload[0], 0x42);
/// assert_eq!(payload.len(), 3 + 3 + 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParamWriteRequest {
    blocks: Vec<(u16, Vec<u8>)>,
}

impl ParamWriteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no parameter has been set.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Transmission period, converted to seconds on the wire.
    pub fn tx_period_hours(mut self, hours: u32) -> Self {
        self.push_u32(layout::PARAM_TX_PERIOD, hours * 3600);
        self
    }

    /// Transmission randomization window, converted to seconds.
    pub fn tx_random_minutes(mut self, minutes: u32) -> Self {
        self.push_u32(layout::PARAM_TX_RANDOM, minutes * 60);
        self
    }

    /// Logger interval, converted to seconds.
    pub fn logger_interval_minutes(mut self, minutes: u32) -> Self {
        self.push_u32(layout::PARAM_LOGGER_INTERVAL, minutes * 60);
        self
    }

    /// Status report period, converted to seconds.
    pub fn status_period_days(mut self, days: u32) -> Self {
        self.push_u32(layout::PARAM_STATUS_PERIOD, days * 86400);
        self
    }

    pub fn ping_rate_minutes(mut self, minutes: u8) -> Self {
        self.blocks.push((layout::PARAM_PING_RATE, vec![minutes]));
        self
    }

    pub fn rf_rssi_threshold_dbm(mut self, dbm: i8) -> Self {
        self.blocks
            .push((layout::PARAM_RSSI_THRESHOLD, vec![dbm as u8]));
        self
    }

    /// Set one of the three static alarm limits.
    pub fn limit(mut self, slot: LimitSlot, limit: AlarmLimit) -> Self {
        self.blocks
            .push((slot.identifier(), limit.to_packed().to_le_bytes().to_vec()));
        self
    }

    /// Encode the request: the 3-byte header, then one block per
    /// parameter in insertion order.
    pub fn encode(&self) -> Vec<u8> {
        let mut payload = vec![layout::WRITE_REQUEST_MSG_TYPE, layout::PRODUCT_ID, 0x00];
        for (identifier, value) in &self.blocks {
            payload.push(value.len() as u8);
            payload.extend_from_slice(&identifier.to_be_bytes());
            payload.extend_from_slice(value);
        }
        payload
    }

    fn push_u32(&mut self, identifier: u16, value: u32) {
        self.blocks.push((identifier, value.to_le_bytes().to_vec()));
    }
}
