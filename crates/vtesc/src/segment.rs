use std::fmt;
use std::ops::Add;

use crate::container::EscContainer;
use crate::error::FormatError;
use crate::format::{self, FormatArg};

/// An immutable piece of text with an `intro` escape prefix, a printable
/// `string` body, and an `outro` escape suffix.
///
/// `len(seg) == seg.string.chars().count()`; the on-wire byte form is always
/// `intro + string + outro`. A "pure" segment (constructed with
/// [`EscSegment::new_pure`]) treats the whole payload as non-printable --
/// this models string-terminated escapes like DCS/OSC/APP where the payload
/// carries no visible cells of its own.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EscSegment {
    intro: String,
    string: String,
    outro: String,
    len: usize,
    esc_len: usize,
    pure: bool,
}

impl EscSegment {
    /// Build a segment from its three fields.
    #[must_use]
    pub fn new(intro: impl Into<String>, string: impl Into<String>, outro: impl Into<String>) -> Self {
        let intro = intro.into();
        let string = string.into();
        let outro = outro.into();
        let len = string.chars().count();
        let esc_len = intro.chars().count() + outro.chars().count();
        Self {
            intro,
            string,
            outro,
            len,
            esc_len,
            pure: false,
        }
    }

    /// Build an Fe-style introducer: `ESC` followed by `params`, used as `intro`.
    #[must_use]
    pub fn new_esc(params: &[&str], string: impl Into<String>, outro: impl Into<String>) -> Self {
        let mut intro = String::from('\x1b');
        for p in params {
            intro.push_str(p);
        }
        Self::new(intro, string, outro)
    }

    /// Build a segment for a string-terminated escape (DCS/OSC/APP): the
    /// entire payload is opaque, so `len() == 0` regardless of `payload`'s
    /// content.
    #[must_use]
    pub fn new_pure(intro: impl Into<String>, payload: impl Into<String>, outro: impl Into<String>) -> Self {
        let intro = intro.into();
        let payload = payload.into();
        let outro = outro.into();
        let esc_len = intro.chars().count() + payload.chars().count() + outro.chars().count();
        Self {
            intro,
            string: payload,
            outro,
            len: 0,
            esc_len,
            pure: true,
        }
    }

    /// The empty segment: `("", "", "")`.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    /// Printable length: the number of Unicode scalar values in `string`
    /// (zero for a "pure" segment).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0 && self.string.is_empty()
    }

    /// True if this segment was built with [`EscSegment::new_pure`].
    #[must_use]
    pub fn is_pure(&self) -> bool {
        self.pure
    }

    /// Combined character length of `intro` and `outro` -- the "escape
    /// weight" added to any printf width specifier referencing this segment.
    #[must_use]
    pub fn esc_len(&self) -> usize {
        self.esc_len
    }

    /// Total on-wire byte length: `intro.len() + string.len() + outro.len()`.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.intro.len() + self.string.len() + self.outro.len()
    }

    #[must_use]
    pub fn intro(&self) -> &str {
        &self.intro
    }

    #[must_use]
    pub fn string(&self) -> &str {
        &self.string
    }

    #[must_use]
    pub fn outro(&self) -> &str {
        &self.outro
    }

    /// The exact on-wire byte form: `intro + string + outro`.
    #[must_use]
    pub fn to_wire_string(&self) -> String {
        let mut s = String::with_capacity(self.byte_len());
        s.push_str(&self.intro);
        s.push_str(&self.string);
        s.push_str(&self.outro);
        s
    }

    /// Extend `intro`/`outro` with `prefix`/`suffix`.
    ///
    /// Non-inner wrap: `prefix + intro`, `outro + suffix`.
    /// Inner wrap (`inner = true`): `intro + prefix`, `suffix + outro`.
    ///
    /// Either way `string` (and therefore `len()`) is untouched.
    #[must_use]
    pub fn wrap(&self, prefix: &str, suffix: &str, inner: bool) -> Self {
        if inner {
            Self::new(
                format!("{}{}", self.intro, prefix),
                self.string.clone(),
                format!("{}{}", suffix, self.outro),
            )
        } else {
            Self::new(
                format!("{}{}", prefix, self.intro),
                self.string.clone(),
                format!("{}{}", self.outro, suffix),
            )
        }
    }

    /// Slice the printable `string` by a half-open character range.
    /// Out-of-range bounds clamp; a fully out-of-range slice returns an
    /// empty-string segment that still carries `intro`/`outro`.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> Self {
        if self.pure {
            // Pure segments carry no addressable printable text.
            return self.clone();
        }
        let total = self.len;
        let start = start.min(total);
        let end = end.clamp(start, total);
        if start == end {
            return Self::new(self.intro.clone(), String::new(), self.outro.clone());
        }
        let sliced: String = self.string.chars().skip(start).take(end - start).collect();
        Self::new(self.intro.clone(), sliced, self.outro.clone())
    }

    /// Attempt to fuse `self` with `other`, producing a single segment when
    /// the adjacent escape boundary is mergeable -- either one side's escape
    /// field is empty, or `self`'s and `other`'s `intro`/`outro` pair match
    /// exactly (two runs under the identical open/close escapes collapse
    /// into one instead of closing and reopening the same style) --
    /// otherwise falling back to a two-segment container. Same contract as
    /// [`EscContainer::assimilate`] but for a single right-hand segment.
    #[must_use]
    pub fn assimilate(&self, other: &EscSegment) -> EscContainer {
        if self.outro.is_empty() && other.intro.is_empty() {
            let merged = Self::new(
                self.intro.clone(),
                format!("{}{}", self.string, other.string),
                other.outro.clone(),
            );
            return EscContainer::from_segment(merged);
        }
        if self.intro == other.intro && self.outro == other.outro {
            let merged = Self::new(
                self.intro.clone(),
                format!("{}{}", self.string, other.string),
                other.outro.clone(),
            );
            return EscContainer::from_segment(merged);
        }
        EscContainer::from_segments(vec![self.clone(), other.clone()])
    }

    /// Printf-style substitution inside `string`. See [`crate::format`] for
    /// the supported directives.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] on argument-count mismatch, a mapping
    /// requested without one supplied (or vice versa), or an unsupported
    /// flag/conversion applied to an `EscSegment`/`EscContainer` argument.
    pub fn formatting(&self, args: &[FormatArg<'_>]) -> Result<Self, FormatError> {
        let formatted = format::apply(&self.string, args)?;
        Ok(Self::new(self.intro.clone(), formatted, self.outro.clone()))
    }
}

impl Default for EscSegment {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for EscSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EscSegment")
            .field("intro", &self.intro)
            .field("string", &self.string)
            .field("outro", &self.outro)
            .field("len", &self.len)
            .field("pure", &self.pure)
            .finish()
    }
}

impl fmt::Display for EscSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.intro)?;
        f.write_str(&self.string)?;
        f.write_str(&self.outro)
    }
}

impl Add<&EscSegment> for &EscSegment {
    type Output = EscContainer;
    fn add(self, rhs: &EscSegment) -> EscContainer {
        EscContainer::from_segments(vec![self.clone(), rhs.clone()])
    }
}

impl Add<&str> for &EscSegment {
    type Output = EscContainer;
    fn add(self, rhs: &str) -> EscContainer {
        EscContainer::from_segments(vec![self.clone(), EscSegment::new("", rhs, "")])
    }
}

impl Add<&EscContainer> for &EscSegment {
    type Output = EscContainer;
    fn add(self, rhs: &EscContainer) -> EscContainer {
        let mut segs = Vec::with_capacity(rhs.segments().len() + 1);
        segs.push(self.clone());
        segs.extend(rhs.segments().iter().cloned());
        EscContainer::from_segments(segs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_matches_string() {
        let s = EscSegment::new("\x1b[31m", "hi", "\x1b[0m");
        assert_eq!(s.len(), 2);
        assert_eq!(s.byte_len(), s.to_wire_string().len());
    }

    #[test]
    fn pure_segment_has_zero_printable_length() {
        let s = EscSegment::new_pure("\x1bP", "1$r0 q", "\x1b\\");
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn wrap_preserves_string_and_outer_wrap_prepends_prefix() {
        let s = EscSegment::new("\x1b[31m", "hi", "\x1b[0m");
        let wrapped = s.wrap("(", ")", false);
        assert_eq!(wrapped.string(), "hi");
        assert_eq!(wrapped.intro(), "(\x1b[31m");
        assert_eq!(wrapped.outro(), "\x1b[0m)");
    }

    #[test]
    fn wrap_inner_appends_to_intro_and_prepends_to_outro() {
        let s = EscSegment::new("\x1b[31m", "hi", "\x1b[0m");
        let wrapped = s.wrap("(", ")", true);
        assert_eq!(wrapped.intro(), "\x1b[31m(");
        assert_eq!(wrapped.outro(), ")\x1b[0m");
    }

    #[test]
    fn slice_out_of_range_retains_escapes() {
        let s = EscSegment::new("\x1b[31m", "hi", "\x1b[0m");
        let sliced = s.slice(10, 20);
        assert_eq!(sliced.string(), "");
        assert_eq!(sliced.intro(), "\x1b[31m");
        assert_eq!(sliced.outro(), "\x1b[0m");
    }

    #[test]
    fn assimilate_merges_when_boundary_empty() {
        let a = EscSegment::new("\x1b[31m", "ab", "");
        let b = EscSegment::new("", "cd", "\x1b[0m");
        let merged = a.assimilate(&b);
        assert_eq!(merged.segments().len(), 1);
        assert_eq!(merged.segments()[0].string(), "abcd");
    }

    #[test]
    fn assimilate_merges_when_intro_outro_pair_matches() {
        let a = EscSegment::new("\x1b[31m", "ab", "\x1b[0m");
        let b = EscSegment::new("\x1b[31m", "cd", "\x1b[0m");
        let merged = a.assimilate(&b);
        assert_eq!(merged.segments().len(), 1);
        assert_eq!(merged.segments()[0].string(), "abcd");
        assert_eq!(merged.segments()[0].intro(), "\x1b[31m");
        assert_eq!(merged.segments()[0].outro(), "\x1b[0m");
    }

    #[test]
    fn assimilate_keeps_two_segments_when_boundary_not_mergeable() {
        let a = EscSegment::new("\x1b[31m", "ab", "\x1b[0m");
        let b = EscSegment::new("\x1b[32m", "cd", "\x1b[0m");
        let merged = a.assimilate(&b);
        assert_eq!(merged.segments().len(), 2);
    }
}
