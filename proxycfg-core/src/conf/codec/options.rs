//! Protocol option payloads: an opaque JSON value and its text form.
//!
//! Object keys are emitted in sorted order, so encoding is deterministic.

use crate::conf::error::ParseError;
use serde_json::Value;

pub fn decode(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(|e| ParseError::MalformedOptions {
        reason: e.to_string(),
    })
}

pub fn encode(payload: &Value) -> String {
    payload.to_string()
}

/// Blank text means no payload.
pub fn decode_optional(text: &str) -> Result<Option<Value>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    decode(text).map(Some)
}

pub fn encode_optional(payload: Option<&Value>) -> String {
    payload.map(encode).unwrap_or_default()
}
