//! Erase (ED/EL + DECSED/DECSEL), character-position editing, and
//! character-set select/designate/invoke.

use vtesc::EscSegment;

use crate::intro::{csi, fe};

pub struct Erase;

impl Erase {
    #[must_use]
    pub fn display_below(vt100: bool) -> EscSegment {
        csi(if vt100 { "" } else { "?" }, "0J")
    }
    #[must_use]
    pub fn display_above(vt100: bool) -> EscSegment {
        csi(if vt100 { "" } else { "?" }, "1J")
    }
    #[must_use]
    pub fn display(vt100: bool) -> EscSegment {
        csi(if vt100 { "" } else { "?" }, "2J")
    }
    #[must_use]
    pub fn display_lines(vt100: bool) -> EscSegment {
        csi(if vt100 { "" } else { "?" }, "3J")
    }
    #[must_use]
    pub fn line_right(vt100: bool) -> EscSegment {
        csi(if vt100 { "" } else { "?" }, "0K")
    }
    #[must_use]
    pub fn line_left(vt100: bool) -> EscSegment {
        csi(if vt100 { "" } else { "?" }, "1K")
    }
    #[must_use]
    pub fn line(vt100: bool) -> EscSegment {
        csi(if vt100 { "" } else { "?" }, "2K")
    }
    /// `ESC c` (RIS) when `vt100`, else `CSI ! p` (DECSTR).
    #[must_use]
    pub fn terminal(vt100: bool) -> EscSegment {
        if vt100 { fe("c") } else { csi("!", "p") }
    }
}

pub struct TextModification;

impl TextModification {
    #[must_use]
    pub fn chr_pos_rel(n: u32) -> EscSegment {
        csi(&n.to_string(), "a")
    }
    #[must_use]
    pub fn chr_pos_abs(n: u32) -> EscSegment {
        csi(&n.to_string(), "`")
    }
    #[must_use]
    pub fn ins_chr(n: u32) -> EscSegment {
        csi(&n.to_string(), "@")
    }
    #[must_use]
    pub fn del_chr(n: u32) -> EscSegment {
        csi(&n.to_string(), "P")
    }
    #[must_use]
    pub fn erase_chr(n: u32) -> EscSegment {
        csi(&n.to_string(), "X")
    }
    #[must_use]
    pub fn ins_ln(n: u32) -> EscSegment {
        csi(&n.to_string(), "L")
    }
    #[must_use]
    pub fn del_ln(n: u32) -> EscSegment {
        csi(&n.to_string(), "M")
    }
}

pub struct CharSet;

impl CharSet {
    /// `ESC n|o|\||}|~` -- invoke a previously designated character set.
    #[must_use]
    pub fn invoke(param: char) -> EscSegment {
        fe(&param.to_string())
    }

    /// `ESC %G` (UTF-8) or `ESC %@` (default/ISO 8859-1).
    #[must_use]
    pub fn select(utf8: bool) -> EscSegment {
        fe(if utf8 { "%G" } else { "%@" })
    }

    #[must_use]
    pub fn designate_g0_vt100(param: &str) -> EscSegment {
        fe(&format!("({param}"))
    }
    #[must_use]
    pub fn designate_g1_vt100(param: &str) -> EscSegment {
        fe(&format!("){param}"))
    }
    #[must_use]
    pub fn designate_g2_vt220(param: &str) -> EscSegment {
        fe(&format!("*{param}"))
    }
    #[must_use]
    pub fn designate_g3_vt220(param: &str) -> EscSegment {
        fe(&format!("+{param}"))
    }
    #[must_use]
    pub fn designate_g1_vt300(param: &str) -> EscSegment {
        fe(&format!("-{param}"))
    }
    #[must_use]
    pub fn designate_g2_vt300(param: &str) -> EscSegment {
        fe(&format!(".{param}"))
    }
    #[must_use]
    pub fn designate_g3_vt300(param: &str) -> EscSegment {
        fe(&format!("\\{param}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erase_display_selects_vt100_vs_dec_selective() {
        assert_eq!(Erase::display(true).to_wire_string(), "\x1b[2J");
        assert_eq!(Erase::display(false).to_wire_string(), "\x1b[?2J");
    }

    #[test]
    fn terminal_reset_selects_ris_vs_decstr() {
        assert_eq!(Erase::terminal(true).to_wire_string(), "\x1bc");
        assert_eq!(Erase::terminal(false).to_wire_string(), "\x1b[!p");
    }

    #[test]
    fn charset_select_toggles_utf8() {
        assert_eq!(CharSet::select(true).to_wire_string(), "\x1b%G");
        assert_eq!(CharSet::select(false).to_wire_string(), "\x1b%@");
    }
}
