//! Operating-system commands: C1 control-byte width, window manipulation
//! (XTWINOPS, title), and palette/environment/cursor/highlight/pointer color
//! control.

use vtcolor::{Color, ColorError};
use vtesc::{EscContainer, EscSegment};

use crate::gate::STYLE_GATE;
use crate::intro::{fe, osc};

pub struct CtrlByteConversion;

impl CtrlByteConversion {
    /// `ESC SP G` (8-bit C1, default) or `ESC SP F` (7-bit).
    #[must_use]
    pub fn conversion(eight_bit: bool) -> EscSegment {
        fe(if eight_bit { " G" } else { " F" })
    }
}

pub struct WindowManipulation;

impl WindowManipulation {
    /// `CSI 8;y;x t` -- resize the textarea, in characters.
    #[must_use]
    pub fn resize(x: u32, y: u32) -> EscSegment {
        crate::intro::csi(&format!("8;{y};{x}"), "t")
    }

    /// `CSI n t` (DECSLPP) -- resize to `n` lines. `n` must be at least 24.
    #[must_use]
    pub fn resizeln(n: u32) -> EscSegment {
        debug_assert!(n >= 24, "24 is the minimum line count for DECSLPP");
        crate::intro::csi(&n.to_string(), "t")
    }

    #[must_use]
    pub fn change_ico_n_title(title: &str) -> EscSegment {
        osc("0;", title)
    }

    #[must_use]
    pub fn change_title(title: &str) -> EscSegment {
        osc("2;", title)
    }
}

/// A color argument accepted by the `OSColorControl` setters: a name lookup,
/// a bare hex triple, or numeric RGB components.
pub enum ColorArg<'a> {
    Name(&'a str),
    Hex(&'a str),
    Rgb(i32, i32, i32),
}

impl ColorArg<'_> {
    fn resolve(&self) -> Result<Color, ColorError> {
        match self {
            ColorArg::Name(n) => Color::name(n),
            ColorArg::Hex(h) => Color::hex(h),
            ColorArg::Rgb(r, g, b) => Color::rgb(*r, *g, *b),
        }
    }

    fn to_xcolor_spec(&self) -> Result<String, ColorError> {
        match self.resolve()? {
            Color::Rgb(r, g, b) => Ok(format!("rgb:{r:02x}/{g:02x}/{b:02x}")),
            Color::Indexed(i) => Ok(format!("rgb:{i:02x}/{i:02x}/{i:02x}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnsiColorSlot {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiColorSlot {
    fn numbers(self) -> (u8, u8) {
        match self {
            AnsiColorSlot::Black => (0, 8),
            AnsiColorSlot::Red => (1, 9),
            AnsiColorSlot::Green => (2, 10),
            AnsiColorSlot::Yellow => (3, 11),
            AnsiColorSlot::Blue => (4, 12),
            AnsiColorSlot::Magenta => (5, 13),
            AnsiColorSlot::Cyan => (6, 14),
            AnsiColorSlot::White => (7, 15),
        }
    }
}

/// Either one of the eight named ANSI slots or a raw 256-table index.
pub enum ColorSlot {
    Named(AnsiColorSlot),
    Indexed(u8),
}

pub struct OSColorControl;

impl OSColorControl {
    /// `OSC 4 ; slot ; rgb:RR/GG/BB ST`. Gated like the SGR constructors --
    /// piping output shouldn't reprogram the terminal's palette either.
    pub fn set_rel_color(slot: ColorSlot, color: &ColorArg<'_>, bright_version: bool) -> Result<EscSegment, ColorError> {
        if !STYLE_GATE.is_enabled() {
            return Ok(EscSegment::empty());
        }
        let rgb = color.to_xcolor_spec()?;
        let slot_num = match slot {
            ColorSlot::Indexed(n) => n as u16,
            ColorSlot::Named(n) => {
                let (base, bright) = n.numbers();
                if bright_version { bright as u16 } else { base as u16 }
            }
        };
        Ok(osc("4;", &format!("{slot_num};{rgb}")))
    }

    /// `OSC 104 [; slot] ST` -- reset one color slot, or every slot when
    /// `slot` is `None`.
    #[must_use]
    pub fn reset_rel_color(slot: Option<ColorSlot>, bright_version: bool) -> EscSegment {
        if !STYLE_GATE.is_enabled() {
            return EscSegment::empty();
        }
        match slot {
            None => osc("104", ""),
            Some(ColorSlot::Indexed(n)) => osc("104;", &n.to_string()),
            Some(ColorSlot::Named(n)) => {
                let (base, bright) = n.numbers();
                let n = if bright_version { bright } else { base };
                osc("104;", &n.to_string())
            }
        }
    }

    /// `OSC {10|11|15|16} ; rgb ST` -- text foreground and/or background.
    pub fn set_environment_color(
        fore: Option<&ColorArg<'_>>,
        back: Option<&ColorArg<'_>>,
        tektronix: bool,
    ) -> Result<EscContainer, ColorError> {
        if !STYLE_GATE.is_enabled() {
            return Ok(EscContainer::empty());
        }
        let fore_tag = if tektronix { "15;" } else { "10;" };
        let back_tag = if tektronix { "16;" } else { "11;" };
        let mut segs = Vec::new();
        if let Some(c) = fore {
            segs.push(osc(fore_tag, &c.to_xcolor_spec()?));
        }
        if let Some(c) = back {
            segs.push(osc(back_tag, &c.to_xcolor_spec()?));
        }
        Ok(EscContainer::from_segments(segs))
    }

    /// `OSC {110|111|115|116} ST` -- reset foreground and/or background (both if neither flag set).
    #[must_use]
    pub fn reset_environment_color(fore: bool, back: bool, tektronix: bool) -> EscContainer {
        if !STYLE_GATE.is_enabled() {
            return EscContainer::empty();
        }
        let fore_tag = if tektronix { "115" } else { "110" };
        let back_tag = if tektronix { "116" } else { "111" };
        let mut segs = Vec::new();
        if fore || !back {
            segs.push(osc(fore_tag, ""));
        }
        if back || !fore {
            segs.push(osc(back_tag, ""));
        }
        EscContainer::from_segments(segs)
    }

    pub fn set_cursor_color(color: &ColorArg<'_>, tektronix: bool) -> Result<EscSegment, ColorError> {
        if !STYLE_GATE.is_enabled() {
            return Ok(EscSegment::empty());
        }
        Ok(osc(if tektronix { "18;" } else { "12;" }, &color.to_xcolor_spec()?))
    }

    #[must_use]
    pub fn reset_cursor_color(tektronix: bool) -> EscSegment {
        if !STYLE_GATE.is_enabled() {
            return EscSegment::empty();
        }
        osc(if tektronix { "118" } else { "112" }, "")
    }

    pub fn set_highlight_color(
        fore: Option<&ColorArg<'_>>,
        back: Option<&ColorArg<'_>>,
    ) -> Result<EscContainer, ColorError> {
        if !STYLE_GATE.is_enabled() {
            return Ok(EscContainer::empty());
        }
        let mut segs = Vec::new();
        if let Some(c) = fore {
            segs.push(osc("19;", &c.to_xcolor_spec()?));
        }
        if let Some(c) = back {
            segs.push(osc("17;", &c.to_xcolor_spec()?));
        }
        Ok(EscContainer::from_segments(segs))
    }

    #[must_use]
    pub fn reset_highlight_color(fore: bool, back: bool) -> EscContainer {
        if !STYLE_GATE.is_enabled() {
            return EscContainer::empty();
        }
        let mut segs = Vec::new();
        if fore || !back {
            segs.push(osc("119", ""));
        }
        if back || !fore {
            segs.push(osc("117", ""));
        }
        EscContainer::from_segments(segs)
    }

    pub fn set_pointer_color(
        fore: Option<&ColorArg<'_>>,
        back: Option<&ColorArg<'_>>,
    ) -> Result<EscContainer, ColorError> {
        if !STYLE_GATE.is_enabled() {
            return Ok(EscContainer::empty());
        }
        let mut segs = Vec::new();
        if let Some(c) = fore {
            segs.push(osc("13;", &c.to_xcolor_spec()?));
        }
        if let Some(c) = back {
            segs.push(osc("14;", &c.to_xcolor_spec()?));
        }
        Ok(EscContainer::from_segments(segs))
    }

    #[must_use]
    pub fn reset_pointer_color(fore: bool, back: bool) -> EscContainer {
        if !STYLE_GATE.is_enabled() {
            return EscContainer::empty();
        }
        let mut segs = Vec::new();
        if fore || !back {
            segs.push(osc("113", ""));
        }
        if back || !fore {
            segs.push(osc("114", ""));
        }
        EscContainer::from_segments(segs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_title_uses_osc_2() {
        assert_eq!(WindowManipulation::change_title("x").to_wire_string(), "\x1b]2;x\x1b\\");
    }

    #[test]
    fn set_rel_color_formats_rgb_spec() {
        let seg = OSColorControl::set_rel_color(
            ColorSlot::Named(AnsiColorSlot::Red),
            &ColorArg::Rgb(255, 0, 0),
            false,
        )
        .unwrap();
        assert_eq!(seg.to_wire_string(), "\x1b]4;1;rgb:ff/00/00\x1b\\");
    }

    #[test]
    fn set_rel_color_bright_version_uses_bright_slot_number() {
        let seg = OSColorControl::set_rel_color(
            ColorSlot::Named(AnsiColorSlot::Red),
            &ColorArg::Rgb(255, 0, 0),
            true,
        )
        .unwrap();
        assert_eq!(seg.to_wire_string(), "\x1b]4;9;rgb:ff/00/00\x1b\\");
    }
}
