//! Errors raised while resolving a color specification.

use core::fmt;

/// Raised by [`crate::Color`]'s parsing constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// `name()` was given a string not present in the named-color table.
    LookupError(String),
    /// `hex()` was given a string carrying a `#` prefix (rejected -- callers
    /// pass the six hex digits directly).
    LeadingHash,
    /// `hex()` was given a string that is not exactly six hex digits.
    InvalidHexLength(usize),
    /// `hex()` was given a non-hex-digit character.
    InvalidHexDigit(char),
    /// `rgb()` was given a component outside `0..=255`.
    ComponentOutOfRange { component: &'static str, value: i32 },
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::LookupError(name) => write!(f, "unknown color name {name:?}"),
            ColorError::LeadingHash => write!(f, "hex color must not include a leading '#'"),
            ColorError::InvalidHexLength(len) => {
                write!(f, "hex color must be exactly 6 digits, got {len}")
            }
            ColorError::InvalidHexDigit(c) => write!(f, "invalid hex digit {c:?}"),
            ColorError::ComponentOutOfRange { component, value } => write!(
                f,
                "{component} component {value} out of range 0..=255"
            ),
        }
    }
}

impl std::error::Error for ColorError {}
