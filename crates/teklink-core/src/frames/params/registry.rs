use std::collections::BTreeMap;

use serde::Serialize;

use super::layout;
use crate::frames::common::reader::PayloadReader;
use crate::frames::error::DecodeError;

/// One decoded parameter field value.
///
/// Serialized untagged, so a field renders as its plain JSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Limit(AlarmLimit),
}

/// Static alarm limit configuration, unpacked from its 16-bit wire form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlarmLimit {
    pub threshold_cm: u16,
    pub tolerance_cm: u8,
    pub enabled: bool,
    pub polarity: Polarity,
}

impl AlarmLimit {
    pub fn from_packed(packed: u16) -> Self {
        Self {
            threshold_cm: packed & layout::LIMIT_THRESHOLD_MASK,
            tolerance_cm: ((packed >> layout::LIMIT_TOLERANCE_SHIFT) & layout::LIMIT_TOLERANCE_MASK)
                as u8,
            enabled: (packed >> layout::LIMIT_ENABLED_BIT) & 1 == 1,
            polarity: if (packed >> layout::LIMIT_POLARITY_BIT) & 1 == 1 {
                Polarity::HigherThanThreshold
            } else {
                Polarity::LowerThanThreshold
            },
        }
    }

    pub fn to_packed(self) -> u16 {
        let mut packed = self.threshold_cm & layout::LIMIT_THRESHOLD_MASK;
        packed |= (u16::from(self.tolerance_cm) & layout::LIMIT_TOLERANCE_MASK)
            << layout::LIMIT_TOLERANCE_SHIFT;
        if self.enabled {
            packed |= 1 << layout::LIMIT_ENABLED_BIT;
        }
        if self.polarity == Polarity::HigherThanThreshold {
            packed |= 1 << layout::LIMIT_POLARITY_BIT;
        }
        packed
    }
}

/// Which side of the threshold raises the alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherThanThreshold,
    LowerThanThreshold,
}

type DecodeFn = fn(&[u8], &mut BTreeMap<String, ParamValue>) -> Result<(), DecodeError>;

/// Known parameter decode rules: identifier, expected value length,
/// decoder. A record that matches no entry falls back to a hex field.
const REGISTRY: &[(u16, u8, DecodeFn)] = &[
    (layout::PARAM_TX_PERIOD, 4, decode_tx_period),
    (layout::PARAM_TX_RANDOM, 4, decode_tx_random),
    (layout::PARAM_LOGGER_INTERVAL, 4, decode_logger_interval),
    (layout::PARAM_STATUS_PERIOD, 4, decode_status_period),
    (layout::PARAM_LIMIT1, 2, decode_limit1),
    (layout::PARAM_LIMIT2, 2, decode_limit2),
    (layout::PARAM_LIMIT3, 2, decode_limit3),
    (layout::PARAM_PING_RATE, 1, decode_ping_rate),
    (layout::PARAM_RSSI_THRESHOLD, 1, decode_rssi_threshold),
];

/// Decode one record's value into named fields.
///
/// The registry guarantees a matched decoder sees exactly its expected
/// value length, so the reads inside cannot run past the slice.
pub(crate) fn decode_param(
    identifier: u16,
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    for (id, expected_len, decode) in REGISTRY {
        if *id == identifier && usize::from(*expected_len) == value.len() {
            return decode(value, fields);
        }
    }

    fields.insert(
        format!("param_{identifier:04x}"),
        ParamValue::Text(hex_string(value)),
    );
    Ok(())
}

fn hex_string(value: &[u8]) -> String {
    value.iter().map(|b| format!("{b:02x}")).collect()
}

fn seconds_pair(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
    seconds_key: &str,
    derived_key: &str,
    divisor: f64,
) -> Result<(), DecodeError> {
    let seconds = PayloadReader::new(value).read_u32_le(0..4)?;
    fields.insert(
        seconds_key.to_string(),
        ParamValue::Integer(i64::from(seconds)),
    );
    fields.insert(
        derived_key.to_string(),
        ParamValue::Float(f64::from(seconds) / divisor),
    );
    Ok(())
}

fn decode_tx_period(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    seconds_pair(value, fields, "tx_period_s", "tx_period_h", 3600.0)
}

fn decode_tx_random(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    seconds_pair(value, fields, "tx_random_s", "tx_random_min", 60.0)
}

fn decode_logger_interval(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    seconds_pair(
        value,
        fields,
        "logger_interval_s",
        "logger_interval_min",
        60.0,
    )
}

fn decode_status_period(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    seconds_pair(
        value,
        fields,
        "status_period_s",
        "status_period_days",
        86400.0,
    )
}

fn decode_ping_rate(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    let rate = PayloadReader::new(value).read_u8(0)?;
    fields.insert(
        "ping_rate_min".to_string(),
        ParamValue::Integer(i64::from(rate)),
    );
    Ok(())
}

fn decode_rssi_threshold(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    // Two's-complement 8-bit.
    let raw = PayloadReader::new(value).read_u8(0)?;
    fields.insert(
        "rf_rssi_threshold_dbm".to_string(),
        ParamValue::Integer(i64::from(raw as i8)),
    );
    Ok(())
}

fn limit_field(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
    key: &str,
) -> Result<(), DecodeError> {
    let packed = PayloadReader::new(value).read_u16_le(0..2)?;
    fields.insert(
        key.to_string(),
        ParamValue::Limit(AlarmLimit::from_packed(packed)),
    );
    Ok(())
}

fn decode_limit1(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    limit_field(value, fields, "limit1")
}

fn decode_limit2(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    limit_field(value, fields, "limit2")
}

fn decode_limit3(
    value: &[u8],
    fields: &mut BTreeMap<String, ParamValue>,
) -> Result<(), DecodeError> {
    limit_field(value, fields, "limit3")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{AlarmLimit, ParamValue, Polarity, decode_param};
    use crate::frames::params::layout;

    fn decode(identifier: u16, value: &[u8]) -> BTreeMap<String, ParamValue> {
        let mut fields = BTreeMap::new();
        decode_param(identifier, value, &mut fields).unwrap();
        fields
    }

    #[test]
    fn decode_tx_period_seconds_and_hours() {
        let fields = decode(layout::PARAM_TX_PERIOD, &[0x3c, 0x00, 0x00, 0x00]);
        assert_eq!(fields["tx_period_s"], ParamValue::Integer(60));
        assert_eq!(fields["tx_period_h"], ParamValue::Float(60.0 / 3600.0));
    }

    #[test]
    fn decode_status_period_days() {
        let fields = decode(layout::PARAM_STATUS_PERIOD, &[0x80, 0x3a, 0x09, 0x00]);
        assert_eq!(fields["status_period_s"], ParamValue::Integer(604800));
        assert_eq!(fields["status_period_days"], ParamValue::Float(7.0));
    }

    #[test]
    fn decode_ping_rate() {
        let fields = decode(layout::PARAM_PING_RATE, &[15]);
        assert_eq!(fields["ping_rate_min"], ParamValue::Integer(15));
    }

    #[test]
    fn decode_rssi_threshold_is_signed() {
        let fields = decode(layout::PARAM_RSSI_THRESHOLD, &[0x9f]);
        assert_eq!(fields["rf_rssi_threshold_dbm"], ParamValue::Integer(-97));
    }

    #[test]
    fn decode_alarm_limit_bits() {
        // 0x01c0 little-endian: threshold 448, tolerance 0, disabled, lower.
        let fields = decode(layout::PARAM_LIMIT1, &[0xc0, 0x01]);
        assert_eq!(
            fields["limit1"],
            ParamValue::Limit(AlarmLimit {
                threshold_cm: 448,
                tolerance_cm: 0,
                enabled: false,
                polarity: Polarity::LowerThanThreshold,
            })
        );
    }

    #[test]
    fn decode_enabled_higher_limit() {
        let limit = AlarmLimit {
            threshold_cm: 320,
            tolerance_cm: 5,
            enabled: true,
            polarity: Polarity::HigherThanThreshold,
        };

        let fields = decode(layout::PARAM_LIMIT3, &limit.to_packed().to_le_bytes());
        assert_eq!(fields["limit3"], ParamValue::Limit(limit));
    }

    #[test]
    fn unknown_identifier_falls_back_to_hex() {
        let fields = decode(0x0501, &[0xab, 0xcd]);
        assert_eq!(fields["param_0501"], ParamValue::Text("abcd".to_string()));
    }

    #[test]
    fn known_identifier_with_wrong_length_falls_back_to_hex() {
        let fields = decode(layout::PARAM_TX_PERIOD, &[0x3c, 0x00]);
        assert_eq!(fields["param_0500"], ParamValue::Text("3c00".to_string()));
    }

    #[test]
    fn fallback_hex_has_two_chars_per_byte() {
        let value = [0x00, 0x01, 0x0a, 0xff];
        let fields = decode(0x7fff, &value);
        match &fields["param_7fff"] {
            ParamValue::Text(hex) => assert_eq!(hex.len(), 2 * value.len()),
            other => panic!("expected hex text, got {other:?}"),
        }
    }

    #[test]
    fn alarm_limit_packing_round_trips() {
        let limit = AlarmLimit {
            threshold_cm: 0x3ff,
            tolerance_cm: 0xf,
            enabled: true,
            polarity: Polarity::HigherThanThreshold,
        };
        assert_eq!(AlarmLimit::from_packed(limit.to_packed()), limit);
        assert_eq!(limit.to_packed(), 0xffff);
    }
}
