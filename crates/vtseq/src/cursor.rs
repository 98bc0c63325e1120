//! Cursor save/restore, style (DECSCUSR), navigation, and scrolling.

use vtesc::EscSegment;

use crate::gate::STYLE_GATE;
use crate::intro::{csi, fe};

pub struct CursorSave;

impl CursorSave {
    /// `ESC 7` (DECSC) when `fp` is set, else `CSI s` (SCOSC).
    #[must_use]
    pub fn save(fp: bool) -> EscSegment {
        if fp { fe("7") } else { csi("", "s") }
    }

    /// `ESC 8` (DECRC) when `fp` is set, else `CSI u` (SCORC).
    #[must_use]
    pub fn restore(fp: bool) -> EscSegment {
        if fp { fe("8") } else { csi("", "u") }
    }
}

pub struct CursorStyle;

macro_rules! cursor_style {
    ($name:ident, $code:literal) => {
        #[must_use]
        pub fn $name() -> EscSegment {
            if !STYLE_GATE.is_enabled() {
                return EscSegment::empty();
            }
            csi(concat!($code, " "), "q")
        }
    };
}

impl CursorStyle {
    cursor_style!(blinking_block, "0");
    cursor_style!(default, "1");
    cursor_style!(steady_block, "2");
    cursor_style!(blinking_underline, "3");
    cursor_style!(steady_underline, "4");
    cursor_style!(blinking_bar, "5");
    cursor_style!(steady_bar, "6");
}

pub struct CursorNavigate;

impl CursorNavigate {
    #[must_use]
    pub fn up(n: u32) -> EscSegment {
        csi(&n.to_string(), "A")
    }
    #[must_use]
    pub fn down(n: u32) -> EscSegment {
        csi(&n.to_string(), "B")
    }
    #[must_use]
    pub fn forward(n: u32) -> EscSegment {
        csi(&n.to_string(), "C")
    }
    #[must_use]
    pub fn back(n: u32) -> EscSegment {
        csi(&n.to_string(), "D")
    }
    #[must_use]
    pub fn nextline(n: u32) -> EscSegment {
        csi(&n.to_string(), "E")
    }
    #[must_use]
    pub fn preline(n: u32) -> EscSegment {
        csi(&n.to_string(), "F")
    }
    #[must_use]
    pub fn column(n: u32) -> EscSegment {
        csi(&n.to_string(), "G")
    }
    /// CUP: `CSI y;x H` (both 1-based, default 1).
    #[must_use]
    pub fn position(x: u32, y: u32) -> EscSegment {
        csi(&format!("{y};{x}"), "H")
    }
    #[must_use]
    pub fn tab_stop_set() -> EscSegment {
        fe("H")
    }
    #[must_use]
    pub fn tab_column_clear() -> EscSegment {
        csi("0", "g")
    }
    #[must_use]
    pub fn tab_all_clear() -> EscSegment {
        csi("3", "g")
    }
    #[must_use]
    pub fn tab_forward(n: u32) -> EscSegment {
        csi(&n.to_string(), "I")
    }
    #[must_use]
    pub fn tab_back(n: u32) -> EscSegment {
        csi(&n.to_string(), "Z")
    }
    #[must_use]
    pub fn line_absolute(n: u32) -> EscSegment {
        csi(&n.to_string(), "d")
    }
    #[must_use]
    pub fn line_relative(n: u32) -> EscSegment {
        csi(&n.to_string(), "e")
    }
    /// HVP: `CSI y;x f`.
    #[must_use]
    pub fn positionf(x: u32, y: u32) -> EscSegment {
        csi(&format!("{y};{x}"), "f")
    }
    #[must_use]
    pub fn reverse_index() -> EscSegment {
        fe("M")
    }
    #[must_use]
    pub fn next_index() -> EscSegment {
        fe("D")
    }
}

pub struct Scroll;

impl Scroll {
    #[must_use]
    pub fn up(n: u32) -> EscSegment {
        csi(&n.to_string(), "S")
    }
    #[must_use]
    pub fn down(n: u32) -> EscSegment {
        csi(&n.to_string(), "T")
    }
    /// DECSTBM: `CSI top;bottom r` (0/0 means full window).
    #[must_use]
    pub fn set_region(top: u32, bottom: u32) -> EscSegment {
        csi(&format!("{top};{bottom}"), "r")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_defaults_to_one_one() {
        assert_eq!(CursorNavigate::position(1, 1).to_wire_string(), "\x1b[1;1H");
    }

    #[test]
    fn save_restore_fp_vs_csi_forms() {
        assert_eq!(CursorSave::save(true).to_wire_string(), "\x1b7");
        assert_eq!(CursorSave::save(false).to_wire_string(), "\x1b[s");
    }

    #[test]
    fn scroll_region_formats_both_bounds() {
        assert_eq!(Scroll::set_region(5, 20).to_wire_string(), "\x1b[5;20r");
    }
}
