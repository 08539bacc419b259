//! Percent-encoding of URI components

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{ConversionError, ConversionResult};

/// Characters left as-is in a URI component, besides ASCII alphanumerics
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_url(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// Decode percent-escapes, rejecting truncated or non-hex escapes and invalid UTF-8.
pub fn decode_url(text: &str) -> ConversionResult<String> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(ConversionError::decode(format!(
                    "URI malformed: invalid percent-escape at position {}",
                    i
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(text)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ConversionError::decode("URI malformed: escapes do not form valid UTF-8"))
}
