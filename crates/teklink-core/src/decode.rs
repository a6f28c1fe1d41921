use crate::frames::error::DecodeError;
use crate::frames::measurement::{self, parse_measurement};
use crate::frames::params::{self, parse_param_response};
use crate::frames::status::{self, parse_status};
use crate::{Uplink, UplinkData};

/// Decode one uplink payload according to its fPort and leading byte.
///
/// fPort 16 selects the measurement frame, fPort 48 the status frame,
/// and fPort 67 (or a payload starting with `0x43` on any other port)
/// the parameter read response. Anything else passes through unchanged
/// as a raw document. Decoding is stateless: the result is a pure
/// function of `(port, payload)`.
///
/// # Examples
/// ```
/// use teklink_core::{UplinkData, decode_uplink};
///
/// let payload = [0x43, 0x00, 0x00, 0x04, 0x05, 0x00, 0x3c, 0x00, 0x00, 0x00];
/// let uplink = decode_uplink(67, &payload)?;
/// match uplink.data {
///     UplinkData::ParameterResponse(response) => {
///         assert_eq!(response.params["tx_period_s"], teklink_core::ParamValue::Integer(60));
///     }
///     _ => unreachable!(),
/// }
/// # Ok::<(), teklink_core::DecodeError>(())
/// ```
pub fn decode_uplink(port: u8, payload: &[u8]) -> Result<Uplink, DecodeError> {
    let data = match port {
        measurement::layout::FPORT => UplinkData::Measurement(parse_measurement(payload)?),
        status::layout::FPORT => UplinkData::Status(parse_status(payload)?),
        params::layout::FPORT => UplinkData::ParameterResponse(parse_param_response(payload)?),
        _ if payload.first() == Some(&params::layout::READ_RESPONSE_MSG_TYPE) => {
            UplinkData::ParameterResponse(parse_param_response(payload)?)
        }
        _ => UplinkData::Raw {
            raw: payload.to_vec(),
        },
    };
    Ok(Uplink { data })
}

#[cfg(test)]
mod tests {
    use super::decode_uplink;
    use crate::UplinkData;

    const MEASUREMENT: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x64, 0x1e, 0x32];

    #[test]
    fn port_16_decodes_measurement() {
        let uplink = decode_uplink(16, &MEASUREMENT).unwrap();
        match uplink.data {
            UplinkData::Measurement(m) => {
                assert_eq!(m.ullage_cm, 100);
                assert_eq!(m.temp_c, 30);
            }
            other => panic!("expected measurement, got {other:?}"),
        }
    }

    #[test]
    fn port_48_decodes_status() {
        let mut payload = [0u8; 17];
        payload[4] = 2;
        payload[5] = 1;

        let uplink = decode_uplink(48, &payload).unwrap();
        match uplink.data {
            UplinkData::Status(status) => assert_eq!(status.firmware, "2.1"),
            other => panic!("expected status, got {other:?}"),
        }
    }

    #[test]
    fn port_67_decodes_parameter_response() {
        let uplink = decode_uplink(67, &[0x43, 0x00, 0x00]).unwrap();
        assert!(matches!(uplink.data, UplinkData::ParameterResponse(_)));
    }

    #[test]
    fn leading_0x43_decodes_parameter_response_on_any_port() {
        let uplink = decode_uplink(1, &[0x43, 0x00, 0x00]).unwrap();
        assert!(matches!(uplink.data, UplinkData::ParameterResponse(_)));
    }

    #[test]
    fn unrecognized_port_passes_through_raw() {
        let payload = [0x01, 0x02, 0xff];

        let uplink = decode_uplink(99, &payload).unwrap();
        match uplink.data {
            UplinkData::Raw { raw } => assert_eq!(raw, payload),
            other => panic!("expected raw passthrough, got {other:?}"),
        }
    }

    #[test]
    fn empty_unrecognized_payload_passes_through() {
        let uplink = decode_uplink(99, &[]).unwrap();
        assert!(matches!(uplink.data, UplinkData::Raw { raw } if raw.is_empty()));
    }

    #[test]
    fn decoding_is_stateless() {
        // A call with a negative-temperature payload must not influence
        // the next call's sign correction.
        let mut cold = MEASUREMENT;
        cold[6] = 0xf0;

        let first = decode_uplink(16, &cold).unwrap();
        let second = decode_uplink(16, &MEASUREMENT).unwrap();
        let third = decode_uplink(16, &cold).unwrap();

        match second.data {
            UplinkData::Measurement(m) => assert_eq!(m.temp_c, 30),
            other => panic!("expected measurement, got {other:?}"),
        }
        assert_eq!(first, third);
    }

    #[test]
    fn short_measurement_frame_is_an_error() {
        let err = decode_uplink(16, &[0x00, 0x01]).unwrap_err();
        assert!(err.to_string().contains("payload too short"));
    }
}
