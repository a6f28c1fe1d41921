use std::collections::BTreeMap;

use serde::Serialize;

use super::layout;
use super::registry::{self, ParamValue};
use crate::frames::common::reader::PayloadReader;
use crate::frames::error::DecodeError;

/// Decoded parameter read response.
///
/// `params` is data-driven by the registry: its key set depends on which
/// records the device included. The map serializes flattened into the
/// document body, alongside the header echo and the diagnostic record
/// list. `BTreeMap` keeps the JSON output deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamResponse {
    pub msg_type: u8,
    pub product_id: u8,
    pub reserved: u8,
    #[serde(flatten)]
    pub params: BTreeMap<String, ParamValue>,
    #[serde(rename = "_raw_param_list")]
    pub raw_records: Vec<RawRecord>,
}

/// Diagnostic descriptor for one record in the stream, decoded or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    pub id_hex: String,
    pub len: u8,
    #[serde(skip_serializing_if = "is_false")]
    pub truncated: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Parse a parameter read response payload.
///
/// Iterates the record stream after the 3-byte header. Fewer than three
/// bytes remaining is a clean end; a record whose declared value length
/// runs past the buffer is recorded as truncated and stops the stream.
/// Fields decoded before a truncated record are always preserved.
pub fn parse_param_response(payload: &[u8]) -> Result<ParamResponse, DecodeError> {
    let reader = PayloadReader::new(payload);
    reader.require_len(layout::HEADER_LEN)?;

    let mut response = ParamResponse {
        msg_type: reader.read_u8(layout::MSG_TYPE_OFFSET)?,
        product_id: reader.read_u8(layout::PRODUCT_ID_OFFSET)?,
        reserved: reader.read_u8(layout::RESERVED_OFFSET)?,
        params: BTreeMap::new(),
        raw_records: Vec::new(),
    };

    let mut pos = layout::HEADER_LEN;
    while payload.len() - pos >= layout::RECORD_HEADER_LEN {
        let len = reader.read_u8(pos)?;
        let identifier = reader.read_u16_be(pos + 1..pos + 3)?;
        let value_start = pos + layout::RECORD_HEADER_LEN;
        let value_end = value_start + usize::from(len);

        if value_end > payload.len() {
            response.raw_records.push(RawRecord {
                id_hex: format!("{identifier:04x}"),
                len,
                truncated: true,
            });
            break;
        }

        response.raw_records.push(RawRecord {
            id_hex: format!("{identifier:04x}"),
            len,
            truncated: false,
        });
        let value = reader.read_slice(value_start..value_end)?;
        registry::decode_param(identifier, value, &mut response.params)?;
        pos = value_end;
    }

    Ok(response)
}
