//! Hex <-> binary digit strings and hex -> C array literal
//!
//! All three conversions silently drop characters outside their digit set
//! before doing any work, so pasted dumps with spaces, `0x` prefixes or
//! separators are accepted as-is.

const C_ARRAY_PREFIX: &str = "const unsigned char data[] = {\n  ";
const C_ARRAY_SUFFIX: &str = "\n};";
/// Hex characters emitted per line of the C array (12 bytes)
const C_ARRAY_LINE_DIGITS: usize = 24;

fn strip_non_hex(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_hexdigit()).collect()
}

/// Map each hex digit to its zero-padded 4-bit form, space separated.
pub fn hex_to_binary(hex: &str) -> String {
    strip_non_hex(hex)
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|nibble| format!("{:04b}", nibble))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Group bits by four (right-padding the last group with zeros) into uppercase hex.
pub fn binary_to_hex(binary: &str) -> String {
    let bits: Vec<u32> = binary
        .chars()
        .filter_map(|c| match c {
            '0' => Some(0),
            '1' => Some(1),
            _ => None,
        })
        .collect();

    bits.chunks(4)
        .map(|chunk| {
            let value = (0..4).fold(0u32, |acc, i| (acc << 1) | chunk.get(i).copied().unwrap_or(0));
            // value is always < 16
            char::from_digit(value, 16)
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('0')
        })
        .collect()
}

/// Render hex digits as a `const unsigned char` array literal.
///
/// Bytes are taken as consecutive two-character slices; an odd trailing digit
/// becomes its own `0xN` entry rather than being padded.
pub fn hex_to_c_array(hex: &str) -> String {
    let digits = strip_non_hex(hex).to_ascii_uppercase();
    let len = digits.len();

    let mut result = String::from(C_ARRAY_PREFIX);
    for i in (0..len).step_by(2) {
        if i > 0 && i % C_ARRAY_LINE_DIGITS == 0 {
            result.push_str("\n  ");
        }
        let end = (i + 2).min(len);
        result.push_str("0x");
        result.push_str(&digits[i..end]);
        if i + 2 < len {
            result.push_str(", ");
        }
    }
    result.push_str(C_ARRAY_SUFFIX);
    result
}
