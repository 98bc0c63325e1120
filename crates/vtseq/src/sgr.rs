//! Select Graphic Rendition: parameters, sequences, reset, wrapping, and the
//! `Fore`/`Ground`/underline color factories.

use smallvec::SmallVec;
use vtcolor::Color;
use vtesc::{EscContainer, EscSegment};

use crate::gate::STYLE_GATE;
use crate::intro::csi;

/// A tuple of SGR integer parameters, e.g. `(38, 2, r, g, b)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SGRParams(pub SmallVec<[u16; 5]>);

impl SGRParams {
    #[must_use]
    pub fn new(params: &[u16]) -> Self {
        Self(SmallVec::from_slice(params))
    }

    #[must_use]
    pub fn concat(mut self, other: SGRParams) -> Self {
        self.0.extend(other.0);
        self
    }
}

impl FromIterator<u16> for SGRParams {
    fn from_iter<T: IntoIterator<Item = u16>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// `CSI p;...;p m`. Returns an empty segment while [`STYLE_GATE`] is disabled.
#[must_use]
pub fn sgr_seqs(params: &[SGRParams]) -> EscSegment {
    if !STYLE_GATE.is_enabled() {
        return EscSegment::empty();
    }
    let mut joined = String::new();
    for p in params {
        for v in &p.0 {
            let mut buf = itoa::Buffer::new();
            joined.push_str(buf.format(*v));
            joined.push(';');
        }
    }
    joined.pop();
    csi(&joined, "m")
}

/// `CSI m` -- reset all graphic rendition. Gated like [`sgr_seqs`].
#[must_use]
pub fn sgr_reset() -> EscSegment {
    if !STYLE_GATE.is_enabled() {
        return EscSegment::empty();
    }
    csi("", "m")
}

/// One substitutable payload for [`sgr_wrap`]: a bare string, or an
/// already-escape-aware value that should be wrapped via its own
/// `wrap`/cellular-wrap contract instead of plain concatenation.
pub enum Wrappable<'a> {
    Str(&'a str),
    Segment(&'a EscSegment),
    Container(&'a EscContainer),
}

/// Wraps `string` in `SGRSeqs(params) .. SGRReset()`. For an
/// [`EscSegment`]/[`EscContainer`] payload, dispatches to its `wrap` method
/// (honoring `inner`/`cellular`) rather than plain string concatenation.
#[must_use]
pub fn sgr_wrap(string: Wrappable<'_>, params: &[SGRParams], inner: bool, cellular: bool) -> EscContainer {
    let open = sgr_seqs(params);
    let close = sgr_reset();
    match string {
        Wrappable::Str(s) => {
            let mut segs = vec![open];
            segs.push(EscSegment::new("", s, ""));
            segs.push(close);
            EscContainer::from_segments(segs)
        }
        Wrappable::Segment(seg) => EscContainer::from_segment(seg.clone())
            .wrap(&open.to_wire_string(), &close.to_wire_string(), inner, cellular),
        Wrappable::Container(c) => c.wrap(&open.to_wire_string(), &close.to_wire_string(), inner, cellular),
    }
}

pub mod style {
    use super::SGRParams;

    pub fn purge_sgr() -> SGRParams {
        SGRParams::new(&[0])
    }
    pub fn bold() -> SGRParams {
        SGRParams::new(&[1])
    }
    pub fn dim() -> SGRParams {
        SGRParams::new(&[2])
    }
    pub fn italic() -> SGRParams {
        SGRParams::new(&[3])
    }
    pub fn underline() -> SGRParams {
        SGRParams::new(&[4])
    }
    pub fn blink() -> SGRParams {
        SGRParams::new(&[5])
    }
    pub fn blink_rapid() -> SGRParams {
        SGRParams::new(&[6])
    }
    pub fn invert() -> SGRParams {
        SGRParams::new(&[7])
    }
    pub fn hide() -> SGRParams {
        SGRParams::new(&[8])
    }
    pub fn strike() -> SGRParams {
        SGRParams::new(&[9])
    }
    pub fn underline_doubly() -> SGRParams {
        SGRParams::new(&[21])
    }

    pub fn not_bold() -> SGRParams {
        SGRParams::new(&[22])
    }
    pub fn not_italic() -> SGRParams {
        SGRParams::new(&[23])
    }
    pub fn not_underlined() -> SGRParams {
        SGRParams::new(&[24])
    }
    pub fn not_blink() -> SGRParams {
        SGRParams::new(&[25])
    }
    pub fn not_invert() -> SGRParams {
        SGRParams::new(&[27])
    }
    pub fn not_hide() -> SGRParams {
        SGRParams::new(&[28])
    }
    pub fn not_strike() -> SGRParams {
        SGRParams::new(&[29])
    }

    /// Every `not_*` reset concatenated, matching the original's `StyleResets.any`.
    pub fn any_reset() -> SGRParams {
        not_bold()
            .concat(not_italic())
            .concat(not_underlined())
            .concat(not_blink())
            .concat(not_invert())
            .concat(not_hide())
            .concat(not_strike())
    }

    pub fn proportional_spacing() -> SGRParams {
        SGRParams::new(&[26])
    }
    pub fn not_proportional_spacing() -> SGRParams {
        SGRParams::new(&[50])
    }
    pub fn overlined() -> SGRParams {
        SGRParams::new(&[53])
    }
    pub fn not_overlined() -> SGRParams {
        SGRParams::new(&[55])
    }
}

fn color_triplet(tag: u16, color: Color) -> SGRParams {
    match color {
        Color::Rgb(r, g, b) => SGRParams::new(&[tag, 2, r as u16, g as u16, b as u16]),
        Color::Indexed(i) => SGRParams::new(&[tag, 5, i as u16]),
    }
}

macro_rules! color_factory {
    ($name:ident, $tag:expr, $rel_base:expr) => {
        pub struct $name;

        impl $name {
            pub fn name(color: &str) -> Result<SGRParams, vtcolor::ColorError> {
                Ok(color_triplet($tag, Color::name(color)?))
            }

            #[must_use]
            pub fn b256(index: u8) -> SGRParams {
                color_triplet($tag, Color::b256(index))
            }

            pub fn rgb(r: i32, g: i32, b: i32) -> Result<SGRParams, vtcolor::ColorError> {
                Ok(color_triplet($tag, Color::rgb(r, g, b)?))
            }

            pub fn hex(spec: &str) -> Result<SGRParams, vtcolor::ColorError> {
                Ok(color_triplet($tag, Color::hex(spec)?))
            }

            /// Dispatches on the spelling of `spec`: a `#`-prefixed string is
            /// hex, any other string is a name lookup, and this overload set
            /// otherwise falls back to `b256`/`rgb` via the other associated
            /// functions -- callers with a numeric or RGB triple should call
            /// those directly instead of threading them through `get`.
            pub fn get(spec: &str) -> Result<SGRParams, vtcolor::ColorError> {
                if let Some(hex) = spec.strip_prefix('#') {
                    Self::hex(hex)
                } else {
                    Self::name(spec)
                }
            }
        }
    };
}

color_factory!(Fore, 38, 30);
color_factory!(Ground, 48, 40);
color_factory!(ColoredUnderline, 58, 0);

impl Fore {
    pub const RESET: [u16; 1] = [39];
    pub const BLACK_REL: [u16; 1] = [30];
    pub const RED_REL: [u16; 1] = [31];
    pub const GREEN_REL: [u16; 1] = [32];
    pub const YELLOW_REL: [u16; 1] = [33];
    pub const BLUE_REL: [u16; 1] = [34];
    pub const MAGENTA_REL: [u16; 1] = [35];
    pub const CYAN_REL: [u16; 1] = [36];
    pub const WHITE_REL: [u16; 1] = [37];
}

impl Ground {
    pub const RESET: [u16; 1] = [49];
    pub const BLACK_REL: [u16; 1] = [40];
    pub const RED_REL: [u16; 1] = [41];
    pub const GREEN_REL: [u16; 1] = [42];
    pub const YELLOW_REL: [u16; 1] = [43];
    pub const BLUE_REL: [u16; 1] = [44];
    pub const MAGENTA_REL: [u16; 1] = [45];
    pub const CYAN_REL: [u16; 1] = [46];
    pub const WHITE_REL: [u16; 1] = [47];
}

impl ColoredUnderline {
    pub const RESET: [u16; 1] = [59];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sgr_seqs_joins_params_with_semicolons() {
        let p = SGRParams::new(&[1, 31]);
        assert_eq!(sgr_seqs(&[p]).to_wire_string(), "\x1b[1;31m");
    }

    #[test]
    fn sgr_reset_is_csi_m() {
        assert_eq!(sgr_reset().to_wire_string(), "\x1b[m");
    }

    #[test]
    fn fore_rgb_produces_38_2_triplet() {
        let p = Fore::rgb(255, 0, 0).unwrap();
        assert_eq!(p.0.as_slice(), &[38, 2, 255, 0, 0]);
    }

    #[test]
    fn ground_b256_produces_48_5_pair() {
        let p = Ground::b256(200);
        assert_eq!(p.0.as_slice(), &[48, 5, 200]);
    }

    #[test]
    fn fore_get_dispatches_hex_vs_name() {
        let hex = Fore::get("#ff0000").unwrap();
        assert_eq!(hex.0.as_slice(), &[38, 2, 255, 0, 0]);
    }

    #[test]
    fn sgr_wrap_lifts_string_printable_length() {
        let wrapped = sgr_wrap(Wrappable::Str("hi"), &[SGRParams::new(&[31])], false, false);
        assert_eq!(wrapped.printable(), "hi");
    }
}
