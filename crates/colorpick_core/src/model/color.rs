//! Color domain model.
//!
//! # Responsibility
//! - Define the single persisted record (`ColorRecord`).
//! - Own the hex color grammar (`#rgb` or `#rrggbb`, case-insensitive).
//!
//! # Invariants
//! - A `HexColor` can only be obtained through `HexColor::parse`, so every
//!   record in memory satisfies the grammar.
//! - Valid input is preserved verbatim: no case folding, no 3->6 expansion.
//! - Deserialization runs the same validator; malformed persisted values are
//!   rejected at decode time.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Built-in color used when no valid persisted record exists.
pub const DEFAULT_COLOR: &str = "#ff0080";

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid hex color regex")
});

/// Validation error for hex color input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValidationError {
    /// Input is empty.
    Empty,
    /// Input does not start with `#`.
    MissingHash(String),
    /// Digit count after `#` is neither 3 nor 6.
    InvalidLength(String),
    /// Input contains characters outside `[0-9A-Fa-f]` after `#`.
    InvalidDigit(String),
}

impl Display for ColorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "color cannot be empty"),
            Self::MissingHash(value) => write!(f, "color `{value}` must start with `#`"),
            Self::InvalidLength(value) => {
                write!(f, "color `{value}` must have 3 or 6 hex digits")
            }
            Self::InvalidDigit(value) => {
                write!(f, "color `{value}` contains non-hex characters")
            }
        }
    }
}

impl Error for ColorValidationError {}

/// A validated hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Validates `input` against the hex color grammar.
    ///
    /// The input is expected to be trimmed by the caller; surrounding
    /// whitespace counts as garbage and is rejected.
    pub fn parse(input: &str) -> Result<Self, ColorValidationError> {
        if HEX_COLOR_RE.is_match(input) {
            return Ok(Self(input.to_string()));
        }
        Err(classify_rejection(input))
    }

    /// Returns the color exactly as it was submitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// The single persisted record.
///
/// Overwritten wholesale on every successful submission, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub color: HexColor,
}

impl ColorRecord {
    pub fn new(color: HexColor) -> Self {
        Self { color }
    }
}

impl Default for ColorRecord {
    fn default() -> Self {
        Self {
            color: HexColor(DEFAULT_COLOR.to_string()),
        }
    }
}

fn classify_rejection(input: &str) -> ColorValidationError {
    let Some(digits) = input.strip_prefix('#') else {
        if input.is_empty() {
            return ColorValidationError::Empty;
        }
        return ColorValidationError::MissingHash(input.to_string());
    };

    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return ColorValidationError::InvalidDigit(input.to_string());
    }
    ColorValidationError::InvalidLength(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::{ColorRecord, ColorValidationError, HexColor, DEFAULT_COLOR};

    #[test]
    fn parse_accepts_short_and_long_forms_verbatim() {
        for input in ["#fff", "#FFF", "#a1B", "#ff0080", "#123ABC", "#000000"] {
            let color = HexColor::parse(input).expect("valid color should parse");
            assert_eq!(color.as_str(), input);
        }
    }

    #[test]
    fn parse_rejects_malformed_inputs() {
        for input in [
            "", "red", "#12345", "#gggggg", "123456", "#", "#1234", "#1234567", " #fff",
            "#fff ", "#fff\n", "##fff", "#ff0080;", "<script>",
        ] {
            assert!(
                HexColor::parse(input).is_err(),
                "`{input:?}` should be rejected"
            );
        }
    }

    #[test]
    fn parse_reports_rejection_reason() {
        assert_eq!(HexColor::parse(""), Err(ColorValidationError::Empty));
        assert_eq!(
            HexColor::parse("123456"),
            Err(ColorValidationError::MissingHash("123456".to_string()))
        );
        assert_eq!(
            HexColor::parse("#12345"),
            Err(ColorValidationError::InvalidLength("#12345".to_string()))
        );
        assert_eq!(
            HexColor::parse("#gggggg"),
            Err(ColorValidationError::InvalidDigit("#gggggg".to_string()))
        );
    }

    #[test]
    fn default_record_uses_builtin_color() {
        assert_eq!(ColorRecord::default().color.as_str(), DEFAULT_COLOR);
        assert!(HexColor::parse(DEFAULT_COLOR).is_ok());
    }
}
