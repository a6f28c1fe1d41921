//! Parameter read response decoding (message type `0x43`).
//!
//! The payload is a 3-byte header followed by a stream of
//! length-identifier-value records. Record identifiers are big-endian on
//! the wire while the values inside are little-endian. Known
//! `(identifier, length)` pairs decode through a fixed registry into
//! named fields; unknown records fall back to a hex-string field. A
//! record whose declared length runs past the buffer is recorded as
//! truncated and stops the stream, keeping everything decoded before it.

pub mod layout;
pub mod parser;
pub mod registry;

pub use parser::{ParamResponse, RawRecord, parse_param_response};
pub use registry::{AlarmLimit, ParamValue, Polarity};
