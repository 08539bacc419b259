//! Error types and handling infrastructure for text conversions

use std::fmt;
use std::path::Path;

/// Category of a conversion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// Malformed JSON, YAML or JWT segment content
    Parse,
    /// Structurally invalid input shape
    Format,
    /// Invalid Base64 or percent-encoding
    Decode,
    /// Unrecognized selector, algorithm or cron syntax
    InvalidArgument,
    /// Reading input or writing output failed
    Io,
    /// Input exceeds the configured size limit
    InputTooLarge,
}

impl ConversionErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionErrorKind::Parse => "parse error",
            ConversionErrorKind::Format => "format error",
            ConversionErrorKind::Decode => "decode error",
            ConversionErrorKind::InvalidArgument => "invalid argument",
            ConversionErrorKind::Io => "I/O error",
            ConversionErrorKind::InputTooLarge => "input too large",
        }
    }
}

impl fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{message}")]
    Format { message: String },

    #[error("{message}")]
    Decode { message: String },

    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },
}

impl ConversionError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn io(error: &std::io::Error, path: Option<&Path>) -> Self {
        let message = match path {
            Some(p) => format!("{}: {}", p.display(), error),
            None => error.to_string(),
        };
        Self::Io { message }
    }

    /// The category this error belongs to
    pub fn kind(&self) -> ConversionErrorKind {
        match self {
            Self::Parse(_) => ConversionErrorKind::Parse,
            Self::Format { .. } => ConversionErrorKind::Format,
            Self::Decode { .. } => ConversionErrorKind::Decode,
            Self::InvalidArgument { .. } => ConversionErrorKind::InvalidArgument,
            Self::Io { .. } => ConversionErrorKind::Io,
            Self::InputTooLarge { .. } => ConversionErrorKind::InputTooLarge,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => match err.location {
                Some((line, col)) => format!(
                    "{} (line {}, column {})",
                    err.message, line, col
                ),
                None => err.message.clone(),
            },
            _ => self.to_string(),
        }
    }
}

/// Parsing errors for JSON, YAML and JWT segments
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }

    pub fn from_json(prefix: &str, err: &serde_json::Error) -> Self {
        let location = (err.line() > 0).then(|| (err.line(), err.column()));
        Self::new(format!("{}: {}", prefix, err), location)
    }

    pub fn from_yaml(prefix: &str, err: &serde_yaml::Error) -> Self {
        let location = err.location().map(|loc| (loc.line(), loc.column()));
        Self::new(format!("{}: {}", prefix, err), location)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
