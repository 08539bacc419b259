//! JWT inspection and unsigned token assembly
//!
//! Nothing here signs or verifies tokens. `encode_jwt` is a formatting aid
//! and always emits an empty signature segment.

use serde::Serialize;
use serde_json::{json, Value};

use crate::converters::base64::{decode_any_alphabet, encode_base64_url};
use crate::error::{ConversionError, ConversionResult, ParseError};

/// Notice appended to every token produced by [`encode_jwt`]
pub const UNSIGNED_NOTICE: &str =
    "Note: This is an unsigned JWT. For production use, add a secret key.";

/// Decoded view of a token
#[derive(Debug, Clone, Serialize)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

/// Split a token into its header, payload and raw signature, rendered as pretty JSON.
pub fn decode_jwt(token: &str) -> ConversionResult<String> {
    let decoded = parse_token(token)?;
    serde_json::to_string_pretty(&decoded)
        .map_err(|e| ConversionError::format(format!("Failed to serialize JWT: {}", e)))
}

pub fn parse_token(token: &str) -> ConversionResult<DecodedJwt> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(ConversionError::format(format!(
            "Invalid JWT format: expected 3 segments, found {}",
            parts.len()
        )));
    }

    Ok(DecodedJwt {
        header: decode_segment("header", parts[0])?,
        payload: decode_segment("payload", parts[1])?,
        signature: parts[2].to_string(),
    })
}

fn decode_segment(name: &str, segment: &str) -> ConversionResult<Value> {
    let bytes = decode_any_alphabet(segment).map_err(|e| {
        ConversionError::decode(format!("Invalid JWT {} segment: {}", name, e))
    })?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ConversionError::from(ParseError::from_json(&format!("Invalid JWT {} JSON", name), &e)))
}

/// Build an unsigned token from JSON.
///
/// `header` and `payload` members are used when present and truthy. Otherwise the
/// header defaults to HS256/JWT and the whole document becomes the payload, so an
/// object carrying only `header` ends up with that key inside its payload too.
pub fn encode_jwt(json_text: &str) -> ConversionResult<String> {
    let data: Value = serde_json::from_str(json_text)
        .map_err(|e| ConversionError::invalid_argument(format!("Invalid JSON format: {}", e)))?;

    let header = member(&data, "header")
        .cloned()
        .unwrap_or_else(|| json!({"alg": "HS256", "typ": "JWT"}));
    let payload = member(&data, "payload").unwrap_or(&data);

    let encoded_header = encode_segment(&header)?;
    let encoded_payload = encode_segment(payload)?;

    Ok(format!(
        "{}.{}.\n\n{}",
        encoded_header, encoded_payload, UNSIGNED_NOTICE
    ))
}

fn encode_segment(value: &Value) -> ConversionResult<String> {
    let bytes = serde_json::to_vec(value)
        .map_err(|e| ConversionError::format(format!("Failed to serialize JWT segment: {}", e)))?;
    Ok(encode_base64_url(&bytes))
}

/// Look up an object member, ignoring null/false/0/"" values.
fn member<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.as_object()
        .and_then(|obj| obj.get(key))
        .filter(|value| is_truthy(value))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
