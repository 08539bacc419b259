//! Tests for JWT inspection/assembly and cron descriptions

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tcv::converters::jwt::{parse_token, UNSIGNED_NOTICE};
use tcv::converters::{cron_to_human, decode_jwt, encode_jwt};
use tcv::{ConversionError, ConversionErrorKind};

const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0In0.sig";

/// Decode the header and payload of an encoded token back into JSON
fn reopen(token: &str) -> (Value, Value) {
    let (segments, notice) = token.split_once("\n\n").unwrap();
    assert_eq!(notice, UNSIGNED_NOTICE);
    assert!(segments.ends_with('.'));

    let decoded = parse_token(&format!("{}sig", segments)).unwrap();
    (decoded.header, decoded.payload)
}

#[test]
fn test_decode_reference_token() {
    let decoded: Value = serde_json::from_str(&decode_jwt(TOKEN).unwrap()).unwrap();
    assert_eq!(
        decoded,
        json!({
            "header": {"alg": "HS256"},
            "payload": {"sub": "1234"},
            "signature": "sig"
        })
    );
}

#[test]
fn test_decode_accepts_url_alphabet() {
    // payload {"d":"??>"} uses '-' in the URL-safe alphabet
    let token = "eyJhbGciOiJub25lIn0.eyJkIjoiPz8-In0.";
    let decoded = parse_token(token).unwrap();
    assert_eq!(decoded.payload, json!({"d": "??>"}));
    assert_eq!(decoded.signature, "");
}

#[test]
fn test_decode_errors() {
    assert_matches!(
        decode_jwt("only.two").unwrap_err(),
        ConversionError::Format { .. }
    );
    assert_eq!(
        decode_jwt("!!!.eyJzdWIiOiIxMjM0In0.sig").unwrap_err().kind(),
        ConversionErrorKind::Decode
    );
}

#[test]
fn test_encode_default_header() {
    let token = encode_jwt(r#"{"sub":"1234"}"#).unwrap();
    assert!(!token.contains('='));
    let (header, payload) = reopen(&token);
    assert_eq!(header, json!({"alg": "HS256", "typ": "JWT"}));
    assert_eq!(payload, json!({"sub": "1234"}));
}

#[test]
fn test_encode_header_only_object_keeps_header_in_payload() {
    let token = encode_jwt(r#"{"header":{"alg":"none"},"sub":"1"}"#).unwrap();
    let (header, payload) = reopen(&token);
    assert_eq!(header, json!({"alg": "none"}));
    assert_eq!(payload, json!({"header": {"alg": "none"}, "sub": "1"}));
}

#[test]
fn test_encode_non_object_becomes_payload() {
    let (header, payload) = reopen(&encode_jwt("[1,2]").unwrap());
    assert_eq!(header, json!({"alg": "HS256", "typ": "JWT"}));
    assert_eq!(payload, json!([1, 2]));
}

#[test]
fn test_encode_then_decode() {
    let token = encode_jwt(r#"{"header":{"alg":"HS512"},"payload":{"admin":true}}"#).unwrap();
    let (segments, _) = token.split_once("\n\n").unwrap();
    let decoded: Value = serde_json::from_str(&decode_jwt(segments).unwrap()).unwrap();
    assert_eq!(decoded["header"], json!({"alg": "HS512"}));
    assert_eq!(decoded["payload"], json!({"admin": true}));
    assert_eq!(decoded["signature"], "");
}

#[test]
fn test_cron_midnight() {
    assert_eq!(cron_to_human("0 0 * * *").unwrap(), "At 12:00 AM");
}

#[test]
fn test_cron_business_hours() {
    assert_eq!(
        cron_to_human("*/5 9-17 * * 1-5").unwrap(),
        "Every 5 minutes, between 09:00 AM and 05:59 PM, Monday through Friday"
    );
}

#[test]
fn test_cron_invalid() {
    for expr in ["invalid", "", "* * *", "61 * * * *", "* * * * 8", "*/0 * * * *"] {
        let err = cron_to_human(expr).unwrap_err();
        assert_eq!(err.kind(), ConversionErrorKind::InvalidArgument, "{:?}", expr);
    }
}
