//! Printf-style substitution for [`crate::EscSegment`]/[`crate::EscContainer`].
//!
//! Directives look like `%[flags][width]conv`, where `conv` is one of
//! `s`/`d`/`f`/`x`/`X`/`%`. Flags are `-` (left-align) and `0` (zero-pad) for
//! plain arguments. When the argument being substituted is itself an
//! [`crate::EscSegment`] or [`crate::EscContainer`], only the `s` conversion
//! and the `-`/`+` flags are accepted -- `+` means "treat the field width as
//! a printable-width target and add the argument's escape weight to the
//! underlying padding", so two equally-wide colored strings still line up
//! visually once their escapes are stripped.

use std::fmt::Write as _;

use crate::container::EscContainer;
use crate::error::FormatError;
use crate::segment::EscSegment;

/// One substitutable value. Borrowing variants avoid cloning call-site data
/// that is only needed for the duration of one `formatting()` call.
#[derive(Debug, Clone, Copy)]
pub enum FormatArg<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
    Esc(&'a EscSegment),
    EscC(&'a EscContainer),
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(v: &'a str) -> Self {
        FormatArg::Str(v)
    }
}

impl From<i64> for FormatArg<'_> {
    fn from(v: i64) -> Self {
        FormatArg::Int(v)
    }
}

impl From<f64> for FormatArg<'_> {
    fn from(v: f64) -> Self {
        FormatArg::Float(v)
    }
}

impl<'a> From<&'a EscSegment> for FormatArg<'a> {
    fn from(v: &'a EscSegment) -> Self {
        FormatArg::Esc(v)
    }
}

impl<'a> From<&'a EscContainer> for FormatArg<'a> {
    fn from(v: &'a EscContainer) -> Self {
        FormatArg::EscC(v)
    }
}

impl FormatArg<'_> {
    fn is_escape_aware(&self) -> bool {
        matches!(self, FormatArg::Esc(_) | FormatArg::EscC(_))
    }

    /// Printable length of this argument when rendered as `s`. Plain values
    /// are measured by their rendered form; escape-aware values by their
    /// `len()` (escapes excluded).
    fn printable_len(&self) -> usize {
        match self {
            FormatArg::Str(s) => s.chars().count(),
            FormatArg::Int(i) => i.to_string().chars().count(),
            FormatArg::Float(f) => f.to_string().chars().count(),
            FormatArg::Esc(e) => e.len(),
            FormatArg::EscC(c) => c.len(),
        }
    }

    fn render_plain(&self) -> String {
        match self {
            FormatArg::Str(s) => (*s).to_string(),
            FormatArg::Int(i) => i.to_string(),
            FormatArg::Float(f) => f.to_string(),
            FormatArg::Esc(e) => e.to_wire_string(),
            FormatArg::EscC(c) => c.to_wire_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    LeftAlign,
    ZeroPad,
    PlusWidth,
}

struct Directive {
    flags: Vec<Flag>,
    width: Option<usize>,
    conversion: char,
}

/// Count the number of `%`-directives in `s` (a literal `%%` does not count).
#[must_use]
pub fn directive_count(s: &str) -> usize {
    parse_directives(s).map(|v| v.len()).unwrap_or(0)
}

fn parse_directives(s: &str) -> Result<Vec<Directive>, FormatError> {
    let mut out = Vec::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            continue;
        }
        let mut flags = Vec::new();
        loop {
            match chars.peek() {
                Some('-') => {
                    flags.push(Flag::LeftAlign);
                    chars.next();
                }
                Some('0') if flags.is_empty() || !flags.contains(&Flag::ZeroPad) => {
                    // Only treat a leading '0' as a flag, not as the start of a width.
                    let mut lookahead = chars.clone();
                    lookahead.next();
                    if matches!(lookahead.peek(), Some('0'..='9')) {
                        flags.push(Flag::ZeroPad);
                        chars.next();
                    } else {
                        break;
                    }
                }
                Some('+') => {
                    flags.push(Flag::PlusWidth);
                    chars.next();
                }
                _ => break,
            }
        }
        let mut width_str = String::new();
        while let Some(&d) = chars.peek() {
            if d.is_ascii_digit() {
                width_str.push(d);
                chars.next();
            } else {
                break;
            }
        }
        let width = if width_str.is_empty() {
            None
        } else {
            Some(
                width_str
                    .parse()
                    .map_err(|_| FormatError::MalformedSpec(s.to_string()))?,
            )
        };
        let conversion = chars
            .next()
            .ok_or_else(|| FormatError::MalformedSpec(s.to_string()))?;
        out.push(Directive {
            flags,
            width,
            conversion,
        });
    }
    Ok(out)
}

/// Substitute every `%`-directive in `template` with the corresponding entry
/// of `args`, in order.
///
/// # Errors
///
/// Returns [`FormatError::MalformedSpec`] for a dangling `%` or bad width,
/// [`FormatError::UnsupportedConversion`]/[`FormatError::UnsupportedFlag`]
/// when an `EscSegment`/`EscContainer` argument is paired with anything
/// other than the `s` conversion and `-`/`+` flags, and
/// [`FormatError::TooFewArgs`]/[`FormatError::TooManyArgs`] on a count
/// mismatch.
pub fn apply(template: &str, args: &[FormatArg<'_>]) -> Result<String, FormatError> {
    let directives = parse_directives(template)?;
    if directives.len() < args.len() {
        return Err(FormatError::TooManyArgs {
            needed: directives.len(),
            got: args.len(),
        });
    }
    if directives.len() > args.len() {
        return Err(FormatError::TooFewArgs {
            needed: directives.len(),
            got: args.len(),
        });
    }

    let mut out = String::with_capacity(template.len());
    let mut arg_idx = 0usize;
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }
        let directive = &directives[arg_idx];
        let arg = &args[arg_idx];
        arg_idx += 1;

        if arg.is_escape_aware() {
            if directive.conversion != 's' {
                return Err(FormatError::UnsupportedConversion(directive.conversion));
            }
            for flag in &directive.flags {
                if !matches!(flag, Flag::LeftAlign | Flag::PlusWidth) {
                    return Err(FormatError::UnsupportedFlag(match flag {
                        Flag::ZeroPad => '0',
                        _ => unreachable!(),
                    }));
                }
            }
        }

        let rendered = render_directive(directive, arg)?;
        out.push_str(&rendered);

        // Advance the raw-template cursor past this directive's own chars.
        let mut skip = directive.flags.len() + directive.width.map_or(0, |w| w.to_string().len());
        skip += 1; // conversion char
        for _ in 0..skip {
            chars.next();
        }
    }
    Ok(out)
}

fn render_directive(directive: &Directive, arg: &FormatArg<'_>) -> Result<String, FormatError> {
    let content = match (directive.conversion, arg) {
        ('s', _) => arg.render_plain(),
        ('d', FormatArg::Int(i)) => i.to_string(),
        ('d', FormatArg::Float(f)) => (*f as i64).to_string(),
        ('f', FormatArg::Float(f)) => format!("{f:.6}"),
        ('f', FormatArg::Int(i)) => format!("{:.6}", *i as f64),
        ('x', FormatArg::Int(i)) => format!("{i:x}"),
        ('X', FormatArg::Int(i)) => format!("{i:X}"),
        (conv, _) => return Err(FormatError::UnsupportedConversion(conv)),
    };

    let Some(width) = directive.width else {
        return Ok(content);
    };

    // For escape-aware args, the declared width targets printable width;
    // widen the padded field by the argument's own escape weight so the
    // visible result still measures `width` once escapes are stripped.
    let effective_width = if arg.is_escape_aware() || directive.flags.contains(&Flag::PlusWidth) {
        width + arg_esc_len(arg)
    } else {
        width
    };

    let content_printable_len = if arg.is_escape_aware() {
        arg.printable_len()
    } else {
        content.chars().count()
    };
    let pad = effective_width.saturating_sub(content_printable_len);
    if pad == 0 {
        return Ok(content);
    }

    let mut buf = String::with_capacity(content.len() + pad);
    let left_align = directive.flags.contains(&Flag::LeftAlign);
    let zero_pad = directive.flags.contains(&Flag::ZeroPad) && !left_align;
    let fill = if zero_pad { '0' } else { ' ' };
    if left_align {
        buf.push_str(&content);
        for _ in 0..pad {
            buf.push(' ');
        }
    } else {
        for _ in 0..pad {
            buf.push(fill);
        }
        buf.push_str(&content);
    }
    Ok(buf)
}

fn arg_esc_len(arg: &FormatArg<'_>) -> usize {
    match arg {
        FormatArg::Esc(e) => e.esc_len(),
        FormatArg::EscC(c) => c.segments().iter().map(EscSegment::esc_len).sum(),
        _ => 0,
    }
}

/// Convenience: format a single value inline, writing into an existing buffer.
pub fn write_plain(buf: &mut String, arg: &FormatArg<'_>) {
    let _ = write!(buf, "{}", arg.render_plain());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string_substitution() {
        let out = apply("hello %s!", &[FormatArg::Str("world")]).unwrap();
        assert_eq!(out, "hello world!");
    }

    #[test]
    fn width_padding_plain() {
        let out = apply("[%5s]", &[FormatArg::Str("ab")]).unwrap();
        assert_eq!(out, "[   ab]");
    }

    #[test]
    fn left_align_plain() {
        let out = apply("[%-5s]", &[FormatArg::Str("ab")]).unwrap();
        assert_eq!(out, "[ab   ]");
    }

    #[test]
    fn escape_aware_width_counts_only_printable_chars() {
        let seg = EscSegment::new("\x1b[31m", "ab", "\x1b[0m");
        let out = apply("[%5s]", &[FormatArg::Esc(&seg)]).unwrap();
        // 3 spaces of padding plus the segment's own 9-byte escape wrapper.
        assert_eq!(out, format!("[   {}]", seg.to_wire_string()));
    }

    #[test]
    fn escape_aware_rejects_non_s_conversion() {
        let seg = EscSegment::new("\x1b[31m", "ab", "\x1b[0m");
        let err = apply("%d", &[FormatArg::Esc(&seg)]).unwrap_err();
        assert!(matches!(err, FormatError::UnsupportedConversion('d')));
    }

    #[test]
    fn too_few_args_is_an_error() {
        let err = apply("%s %s", &[FormatArg::Str("a")]).unwrap_err();
        assert!(matches!(err, FormatError::TooFewArgs { needed: 2, got: 1 }));
    }

    #[test]
    fn literal_percent_is_not_a_directive() {
        let out = apply("100%% done", &[]).unwrap();
        assert_eq!(out, "100% done");
    }
}
