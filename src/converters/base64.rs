//! Standard Base64 codec over UTF-8 text

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine;

use crate::error::{ConversionError, ConversionResult};

/// Standard alphabet decoder that accepts input with or without `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode the UTF-8 bytes of `text` as padded standard Base64.
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 back to text.
///
/// Padding is optional. Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn decode_base64(text: &str) -> ConversionResult<String> {
    let bytes = decode_bytes(text)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub(crate) fn decode_bytes(text: &str) -> ConversionResult<Vec<u8>> {
    LENIENT
        .decode(text.as_bytes())
        .map_err(|e| ConversionError::decode(format!("Invalid Base64 input: {}", e)))
}

/// Base64-URL without padding, as used for JWT segments.
pub(crate) fn encode_base64_url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a segment written in either the standard or the URL-safe alphabet.
pub(crate) fn decode_any_alphabet(segment: &str) -> ConversionResult<Vec<u8>> {
    let normalized: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    decode_bytes(&normalized)
}
