//! X11 named-color table lookup and color-value resolution.
//!
//! [`Color`] is the resolved value every `vtseq` color factory (`name`,
//! `rgb`, `hex`, `b256`, `get`) produces; this crate owns parsing those four
//! spellings into a single `Rgb`/`Indexed` representation plus the
//! perfect-hash named-color table generated from `rgb.txt` at build time.

pub mod error;

mod named_colors {
    include!(concat!(env!("OUT_DIR"), "/named_colors.rs"));
}

pub use error::ColorError;
pub use named_colors::NAMED_COLOR_COUNT;

/// A resolved terminal color: either a 24-bit RGB triple or an 8-bit
/// indexed/256-color palette slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    Indexed(u8),
}

impl Color {
    /// Look up an X11 color name (case-insensitive, spaces ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::LookupError`] if `name` is not in the table.
    pub fn name(name: &str) -> Result<Self, ColorError> {
        named_colors::lookup_named_color(name)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .ok_or_else(|| ColorError::LookupError(name.to_string()))
    }

    /// Validate and build an RGB color from three `0..=255` components.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::ComponentOutOfRange`] if any component is
    /// outside `0..=255`.
    pub fn rgb(r: i32, g: i32, b: i32) -> Result<Self, ColorError> {
        let check = |component, value: i32| -> Result<u8, ColorError> {
            u8::try_from(value).map_err(|_| ColorError::ComponentOutOfRange { component, value })
        };
        Ok(Color::Rgb(
            check("red", r)?,
            check("green", g)?,
            check("blue", b)?,
        ))
    }

    /// Parse a bare 6-digit hex triple, e.g. `"1a2b3c"`. A leading `#` is
    /// rejected -- callers that hold a `#RRGGBB` string must strip it first.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::LeadingHash`], [`ColorError::InvalidHexLength`],
    /// or [`ColorError::InvalidHexDigit`].
    pub fn hex(spec: &str) -> Result<Self, ColorError> {
        if let Some(stripped) = spec.strip_prefix('#') {
            let _ = stripped;
            return Err(ColorError::LeadingHash);
        }
        if spec.len() != 6 {
            return Err(ColorError::InvalidHexLength(spec.len()));
        }
        let mut bytes = [0u8; 3];
        for (i, chunk) in spec.as_bytes().chunks(2).enumerate() {
            let s = std::str::from_utf8(chunk).unwrap();
            bytes[i] = u8::from_str_radix(s, 16).map_err(|_| {
                let bad = s.chars().find(|c| !c.is_ascii_hexdigit()).unwrap_or('?');
                ColorError::InvalidHexDigit(bad)
            })?;
        }
        Ok(Color::Rgb(bytes[0], bytes[1], bytes[2]))
    }

    /// Build an 8-bit indexed/256-color palette slot. Every `u8` value is valid.
    #[must_use]
    pub fn b256(index: u8) -> Self {
        Color::Indexed(index)
    }

    /// Identity factory: pass an already-resolved [`Color`] through unchanged.
    /// Exists so color-factory call sites can be written uniformly
    /// (`name`/`rgb`/`hex`/`b256`/`get` all produce a `Color`).
    #[must_use]
    pub fn get(color: Color) -> Self {
        color
    }

    /// The eight standard ANSI base colors, in SGR parameter order
    /// (30..=37 / 40..=47 foreground/background base, 90..=97 / 100..=107 bright).
    #[must_use]
    pub fn ansi_base(base: AnsiBase, bright: bool) -> Self {
        Color::Indexed(base as u8 + if bright { 8 } else { 0 })
    }
}

/// The eight standard ANSI colors, used by the `*_rel` palette-relative
/// color factories (`Fore.black_rel` .. `Fore.white_rel`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnsiBase {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_is_case_and_space_insensitive() {
        assert_eq!(Color::name("Dark Slate Gray").unwrap(), Color::Rgb(47, 79, 79));
        assert_eq!(Color::name("darkslategray").unwrap(), Color::Rgb(47, 79, 79));
    }

    #[test]
    fn unknown_name_is_a_lookup_error() {
        assert!(matches!(
            Color::name("not-a-real-color"),
            Err(ColorError::LookupError(_))
        ));
    }

    #[test]
    fn hex_rejects_leading_hash() {
        assert_eq!(Color::hex("#ff0000"), Err(ColorError::LeadingHash));
    }

    #[test]
    fn hex_parses_bare_digits() {
        assert_eq!(Color::hex("ff0000").unwrap(), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn rgb_validates_range() {
        assert!(Color::rgb(0, 0, 256).is_err());
        assert_eq!(Color::rgb(1, 2, 3).unwrap(), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn b256_accepts_full_u8_range() {
        assert_eq!(Color::b256(255), Color::Indexed(255));
    }

    #[test]
    fn ansi_base_bright_offsets_by_eight() {
        assert_eq!(Color::ansi_base(AnsiBase::Red, false), Color::Indexed(1));
        assert_eq!(Color::ansi_base(AnsiBase::Red, true), Color::Indexed(9));
    }
}
