use serde::Serialize;

use super::layout;
use crate::frames::common::reader::PayloadReader;
use crate::frames::common::temperature_from_raw;
use crate::frames::error::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub ullage_cm: u16,
    #[serde(rename = "temp_C")]
    pub temp_c: i16,
    pub src: u8,
    pub srssi: u8,
}

pub fn parse_measurement(payload: &[u8]) -> Result<Measurement, DecodeError> {
    let reader = PayloadReader::new(payload);
    reader.require_len(layout::MIN_LEN)?;

    let ullage_cm = reader.read_u16_be(layout::ULLAGE_RANGE.clone())?;
    let temp_c = temperature_from_raw(reader.read_u8(layout::TEMPERATURE_OFFSET)?);
    let radio = reader.read_u8(layout::RADIO_OFFSET)?;

    Ok(Measurement {
        ullage_cm,
        temp_c,
        src: radio >> 4,
        srssi: radio & 0xf,
    })
}
