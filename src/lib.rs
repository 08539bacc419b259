//! Text conversion toolkit
//!
//! Converts between JSON and YAML, encodes and decodes Base64, URL and JWT
//! text, hashes input, reshapes hex strings and explains cron expressions.
//! The `tcv` binary wraps these conversions in one subcommand each.

pub mod cli;
pub mod conversion;
pub mod converters;
pub mod error;
pub mod input;

// Re-export commonly used types
pub use conversion::{ConversionConfig, ConversionEngine, ConversionOutput, Direction, Operation};
pub use converters::{
    binary_to_hex, cron_to_human, decode_base64, decode_jwt, decode_url, encode_base64,
    encode_jwt, encode_url, generate_hash, hex_to_binary, hex_to_c_array, json_to_yaml,
    to_camel_case, to_kebab_case, to_lower_case, to_pascal_case, to_snake_case, to_upper_case,
    yaml_to_json, HashAlgorithm, TextCase,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult, ParseError};
pub use input::InputSource;

/// Run one operation on in-memory text with the default configuration
pub fn convert(operation: Operation, input: &str) -> ConversionResult<String> {
    let output = ConversionEngine::default().convert_str(operation, input)?;
    Ok(output.content)
}
