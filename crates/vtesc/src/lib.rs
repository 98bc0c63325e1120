//! Escape-sequence-aware text values.
//!
//! [`EscSegment`] and [`EscContainer`] are the base currency every other
//! crate in this workspace builds sequences out of: an `intro`/`string`/
//! `outro` triple keeps a piece of text's printable width separate from its
//! on-wire byte form, so higher layers can slice, pad, and measure terminal
//! output without re-parsing escape codes.

pub mod container;
pub mod error;
pub mod format;
pub mod segment;

pub use container::EscContainer;
pub use error::FormatError;
pub use format::FormatArg;
pub use segment::EscSegment;
