//! Status frame decoding (fPort 48).
//!
//! The parser extracts hardware/firmware identification, the packed
//! contact-reason byte, battery, radio, and level fields from fixed
//! offsets. Reason-byte codes map onto total enumerations; codes outside
//! the documented set surface as an explicit unknown variant instead of
//! falling through silently.

pub mod layout;
pub mod parser;

pub use parser::{ContactReason, LastReset, Status, parse_status};
