//! Pure text conversions
//!
//! Every function here takes text (plus an optional selector) and either returns
//! the converted text or fails with a [`ConversionError`](crate::error::ConversionError).
//! None of them touch the filesystem or keep state between calls.

pub mod base64;
pub mod cron;
pub mod hash;
pub mod hex;
pub mod jwt;
pub mod structured;
pub mod text;
pub mod url;

pub use self::base64::{decode_base64, encode_base64};
pub use self::cron::cron_to_human;
pub use self::hash::{generate_hash, HashAlgorithm};
pub use self::hex::{binary_to_hex, hex_to_binary, hex_to_c_array};
pub use self::jwt::{decode_jwt, encode_jwt};
pub use self::structured::{json_to_yaml, yaml_to_json};
pub use self::text::{
    to_camel_case, to_kebab_case, to_lower_case, to_pascal_case, to_snake_case, to_upper_case,
    TextCase,
};
pub use self::url::{decode_url, encode_url};
