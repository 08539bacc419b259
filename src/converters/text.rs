//! Text case transforms
//!
//! camel/pascal split words only on runs of whitespace, `_` and `-`; they do
//! not look at internal capitalization. snake/kebab additionally break at a
//! lowercase-to-uppercase boundary.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::ConversionError;

struct CasePatterns {
    word_delimiters: Regex,
    camel_boundary: Regex,
    snake_separators: Regex,
    kebab_separators: Regex,
}

fn patterns() -> &'static CasePatterns {
    static PATTERNS: OnceLock<CasePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| CasePatterns {
        word_delimiters: Regex::new(r"[\s_-]+").expect("static pattern"),
        camel_boundary: Regex::new(r"([a-z])([A-Z])").expect("static pattern"),
        snake_separators: Regex::new(r"[\s-]+").expect("static pattern"),
        kebab_separators: Regex::new(r"[\s_]+").expect("static pattern"),
    })
}

/// Text transformation selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Upper,
    Lower,
    Camel,
    Snake,
    Kebab,
    Pascal,
}

impl TextCase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextCase::Upper => "upper",
            TextCase::Lower => "lower",
            TextCase::Camel => "camel",
            TextCase::Snake => "snake",
            TextCase::Kebab => "kebab",
            TextCase::Pascal => "pascal",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            TextCase::Upper => to_upper_case(text),
            TextCase::Lower => to_lower_case(text),
            TextCase::Camel => to_camel_case(text),
            TextCase::Snake => to_snake_case(text),
            TextCase::Kebab => to_kebab_case(text),
            TextCase::Pascal => to_pascal_case(text),
        }
    }
}

impl fmt::Display for TextCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextCase {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upper" => Ok(TextCase::Upper),
            "lower" => Ok(TextCase::Lower),
            "camel" => Ok(TextCase::Camel),
            "snake" => Ok(TextCase::Snake),
            "kebab" => Ok(TextCase::Kebab),
            "pascal" => Ok(TextCase::Pascal),
            other => Err(ConversionError::invalid_argument(format!(
                "Unknown operation: {}",
                other
            ))),
        }
    }
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// First word lowercased, later words capitalized, no separator.
pub fn to_camel_case(text: &str) -> String {
    let mut words = patterns().word_delimiters.split(text);
    let mut result = words.next().map(str::to_lowercase).unwrap_or_default();
    for word in words {
        result.push_str(&capitalize(word));
    }
    result
}

/// Every word capitalized, no separator.
pub fn to_pascal_case(text: &str) -> String {
    patterns()
        .word_delimiters
        .split(text)
        .map(capitalize)
        .collect()
}

pub fn to_snake_case(text: &str) -> String {
    let p = patterns();
    let split = p.camel_boundary.replace_all(text, "${1}_${2}");
    p.snake_separators.replace_all(&split, "_").to_lowercase()
}

pub fn to_kebab_case(text: &str) -> String {
    let p = patterns();
    let split = p.camel_boundary.replace_all(text, "${1}-${2}");
    p.kebab_separators.replace_all(&split, "-").to_lowercase()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
