//! Input sources for conversions

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{ConversionError, ConversionResult};

/// Where the text to convert comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Literal(String),
    /// Contents of an existing file
    File(PathBuf),
    /// Standard input stream
    Stdin,
}

impl InputSource {
    /// Resolve a command-line argument.
    ///
    /// An argument naming an existing regular file is read as that file; any other
    /// argument is literal text. No argument means standard input.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => InputSource::Stdin,
            Some(value) if Path::new(value).is_file() => InputSource::File(PathBuf::from(value)),
            Some(value) => InputSource::Literal(value.to_string()),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            InputSource::Literal(_) => "literal argument".to_string(),
            InputSource::File(path) => format!("file: {}", path.display()),
            InputSource::Stdin => "standard input".to_string(),
        }
    }

    /// Size in bytes if it is known before reading
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            InputSource::Literal(s) => Some(s.len() as u64),
            InputSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            InputSource::Stdin => None,
        }
    }

    /// Read the whole source as UTF-8 text, refusing anything over `limit` bytes.
    pub fn read_content(&self, limit: usize) -> ConversionResult<String> {
        if let Some(size) = self.estimated_size() {
            check_size(size as usize, limit)?;
        }

        let content = match self {
            InputSource::Literal(text) => text.clone(),
            InputSource::File(path) => std::fs::read_to_string(path)
                .map_err(|e| ConversionError::io(&e, Some(path.as_path())))?,
            InputSource::Stdin => read_stdin(limit)?,
        };

        check_size(content.len(), limit)?;
        Ok(content)
    }
}

fn read_stdin(limit: usize) -> ConversionResult<String> {
    if atty::is(atty::Stream::Stdin) {
        return Err(ConversionError::invalid_argument(
            "No input provided. Pass text or a file path, or pipe data on standard input",
        ));
    }

    let mut buffer = Vec::new();
    // One byte past the limit is enough to know it was exceeded
    std::io::stdin()
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| ConversionError::io(&e, None))?;

    // The cut may split a multibyte character, so size goes first
    check_size(buffer.len(), limit)?;
    String::from_utf8(buffer).map_err(|e| {
        ConversionError::decode(format!("Standard input is not valid UTF-8: {}", e.utf8_error()))
    })
}

fn check_size(size: usize, limit: usize) -> ConversionResult<()> {
    if size > limit {
        return Err(ConversionError::InputTooLarge { size, limit });
    }
    Ok(())
}
