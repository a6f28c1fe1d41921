//! Codec for TEK-766 tank-level sensor LoRaWAN payloads.
//!
//! This crate implements the decode path used by the CLI: an uplink
//! payload and its fPort are dispatched to a frame decoder
//! (layout/parser) and assembled into a deterministic JSON-serializable
//! document. Decoding is byte-oriented and side-effect free; nothing is
//! shared between invocations. Wire conventions are captured in layout
//! modules and a shared reader so parsers stay minimal.
//!
//! Three uplink frame kinds exist:
//! - measurement (fPort 16): fixed-layout ullage/temperature report
//! - status (fPort 48): fixed-layout device health report
//! - parameter read response (fPort 67, or leading byte `0x43`): a
//!   variable-length stream of tagged value records
//!
//! Anything else passes through unchanged as a raw document. The encode
//! path builds parameter write requests for the downlink direction.
//!
//! Invariants:
//! - Document outputs are deterministic and stable across runs.
//! - A truncated parameter record stops the stream but keeps every
//!   field decoded before it.
//! - Decoding never reads past the payload; malformed fixed frames fail
//!   with an explicit error instead of producing garbage fields.
//!
//! # Examples
//! ```
//! use teklink_core::{UplinkData, decode_uplink};
//!
//! let payload = [0x00, 0x00, 0x00, 0x00, 0x00, 0x64, 0x1e, 0x32];
//! let uplink = decode_uplink(16, &payload)?;
//! match uplink.data {
//!     UplinkData::Measurement(m) => assert_eq!(m.ullage_cm, 100),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), teklink_core::DecodeError>(())
//! ```

use serde::Serialize;

mod decode;
mod downlink;
mod frames;

pub use decode::decode_uplink;
pub use downlink::{DOWNLINK_FPORT, LimitSlot, ParamWriteRequest};
pub use frames::error::DecodeError;
pub use frames::measurement::{Measurement, parse_measurement};
pub use frames::params::{
    AlarmLimit, ParamResponse, ParamValue, Polarity, RawRecord, parse_param_response,
};
pub use frames::status::{ContactReason, LastReset, Status, parse_status};

/// Decoded uplink document.
///
/// Serializes to the `{"data": {...}}` envelope consumed by the
/// network-server integration.
///
/// # Examples
/// ```
/// use teklink_core::{Uplink, UplinkData};
///
/// let uplink = Uplink {
///     data: UplinkData::Raw { raw: vec![1, 2, 3] },
/// };
/// let json = serde_json::to_value(&uplink).unwrap();
/// assert_eq!(json["data"]["raw"][0], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Uplink {
    /// Frame-kind specific document body.
    pub data: UplinkData,
}

/// Document body for one decoded uplink frame.
///
/// Serialized untagged: the JSON object is the variant's own field set,
/// so consumers see the frame's fields directly under `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UplinkData {
    /// Fixed-layout measurement frame (fPort 16).
    Measurement(Measurement),
    /// Fixed-layout status frame (fPort 48).
    Status(Status),
    /// Parameter read response (fPort 67 or leading byte `0x43`).
    ParameterResponse(ParamResponse),
    /// Unrecognized input, passed through unchanged.
    Raw {
        /// The input payload bytes.
        raw: Vec<u8>,
    },
}
