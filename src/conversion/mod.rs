//! Command dispatch for the conversion library
//!
//! This module maps a command (and its selector argument) to exactly one
//! conversion function, and holds the configuration and engine that feed it input.

pub mod config;
pub mod engine;

pub use config::ConversionConfig;
pub use engine::{ConversionEngine, ConversionMetadata, ConversionOutput};

use std::fmt;

use crate::converters::{self, HashAlgorithm, TextCase};
use crate::error::ConversionResult;

/// Direction selector for two-way codecs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl Direction {
    /// Parse `encode`/`decode`, returning `fallback` for any other selector.
    ///
    /// The second value reports whether the fallback was taken.
    pub fn parse_or(selector: &str, fallback: Direction) -> (Direction, bool) {
        match selector {
            "encode" => (Direction::Encode, false),
            "decode" => (Direction::Decode, false),
            _ => (fallback, true),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversion, fully resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    JsonToYaml,
    YamlToJson,
    Base64(Direction),
    Hash(HashAlgorithm),
    HexToBinary,
    BinaryToHex,
    HexToCArray,
    Cron,
    Jwt(Direction),
    Url(Direction),
    Text(TextCase),
}

impl Operation {
    /// Run the conversion on already-prepared input.
    pub fn apply(&self, input: &str) -> ConversionResult<String> {
        match self {
            Operation::JsonToYaml => converters::json_to_yaml(input),
            Operation::YamlToJson => converters::yaml_to_json(input),
            Operation::Base64(Direction::Encode) => Ok(converters::encode_base64(input)),
            Operation::Base64(Direction::Decode) => converters::decode_base64(input),
            Operation::Hash(algorithm) => Ok(algorithm.digest_hex(input.as_bytes())),
            Operation::HexToBinary => Ok(converters::hex_to_binary(input)),
            Operation::BinaryToHex => Ok(converters::binary_to_hex(input)),
            Operation::HexToCArray => Ok(converters::hex_to_c_array(input)),
            Operation::Cron => converters::cron_to_human(input),
            Operation::Jwt(Direction::Encode) => converters::encode_jwt(input),
            Operation::Jwt(Direction::Decode) => converters::decode_jwt(input),
            Operation::Url(Direction::Encode) => Ok(converters::encode_url(input)),
            Operation::Url(Direction::Decode) => converters::decode_url(input),
            Operation::Text(case) => Ok(case.apply(input)),
        }
    }

    /// Whether surrounding whitespace is stripped before conversion.
    ///
    /// Structured documents are passed through untouched.
    pub fn trims_input(&self) -> bool {
        !matches!(self, Operation::JsonToYaml | Operation::YamlToJson)
    }

    /// Command name as used on the command line
    pub fn command_name(&self) -> &'static str {
        match self {
            Operation::JsonToYaml => "json2yaml",
            Operation::YamlToJson => "yaml2json",
            Operation::Base64(_) => "base64",
            Operation::Hash(_) => "hash",
            Operation::HexToBinary => "hex2bin",
            Operation::BinaryToHex => "bin2hex",
            Operation::HexToCArray => "hex2c",
            Operation::Cron => "cron",
            Operation::Jwt(_) => "jwt",
            Operation::Url(_) => "url",
            Operation::Text(_) => "text",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Base64(d) | Operation::Jwt(d) | Operation::Url(d) => {
                write!(f, "{} {}", self.command_name(), d)
            }
            Operation::Hash(alg) => write!(f, "hash {}", alg),
            Operation::Text(case) => write!(f, "text {}", case),
            _ => f.write_str(self.command_name()),
        }
    }
}
