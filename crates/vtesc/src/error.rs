//! Error types raised by [`crate::format`] substitution.

use core::fmt;

/// Raised by [`crate::EscSegment::formatting`] / [`crate::EscContainer::formatting`]
/// when a printf-style substitution cannot be carried out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Fewer arguments were supplied than the format string consumes.
    TooFewArgs { needed: usize, got: usize },
    /// More arguments were supplied than the format string consumes.
    TooManyArgs { needed: usize, got: usize },
    /// A named (`%(key)s`) substitution referenced a key not present in the mapping.
    MissingKey(String),
    /// A conversion other than `s` was requested for an `EscSegment`/`EscContainer` argument.
    UnsupportedConversion(char),
    /// A flag other than `-`/`+` was requested for an `EscSegment`/`EscContainer` argument.
    UnsupportedFlag(char),
    /// The format string itself is malformed (dangling `%`, bad width, ...).
    MalformedSpec(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::TooFewArgs { needed, got } => {
                write!(f, "too few arguments: format needs {needed}, got {got}")
            }
            FormatError::TooManyArgs { needed, got } => {
                write!(f, "too many arguments: format needs {needed}, got {got}")
            }
            FormatError::MissingKey(k) => write!(f, "missing mapping key {k:?}"),
            FormatError::UnsupportedConversion(c) => {
                write!(
                    f,
                    "unsupported conversion '{c}' for an escape-aware argument (only 's' is allowed)"
                )
            }
            FormatError::UnsupportedFlag(c) => {
                write!(
                    f,
                    "unsupported flag '{c}' for an escape-aware argument (only '-' or '+' are allowed)"
                )
            }
            FormatError::MalformedSpec(s) => write!(f, "malformed format spec: {s}"),
        }
    }
}

impl std::error::Error for FormatError {}
