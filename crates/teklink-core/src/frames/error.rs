use thiserror::Error;

/// Errors returned by uplink frame decoding.
///
/// The only failure mode is a recognized frame shorter than its layout
/// requires. Truncated parameter records, unknown parameter identifiers,
/// and unrecognized frames are all handled in-band (diagnostic entry,
/// hex fallback, raw passthrough) and never surface here.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
