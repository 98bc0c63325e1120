//! Request constructors: device attributes, geometry, DEC private mode
//! status, and palette color queries. Each pairs with a decoder in the
//! reply-parsing half of `vtinput`.

use vtesc::EscSegment;

use crate::intro::{csi, osc};
use crate::os::{AnsiColorSlot, ColorSlot};

pub struct RequestDevice;

impl RequestDevice {
    /// Primary DA: `CSI 0 c` -> `ReplyDA`.
    #[must_use]
    pub fn termattr_da() -> EscSegment {
        csi("0", "c")
    }
    /// Secondary DA: `CSI > 0 c` -> `ReplyTIC`.
    #[must_use]
    pub fn termid_tic() -> EscSegment {
        csi(">0", "c")
    }
    /// Tertiary DA: `CSI = 0 c` -> `ReplyTID`.
    #[must_use]
    pub fn termuid_tid() -> EscSegment {
        csi("=0", "c")
    }
    /// DECCKSR: `CSI ? 63 [; id] n` -> `ReplyCKS`.
    #[must_use]
    pub fn checksum_cks(id: Option<u32>) -> EscSegment {
        match id {
            Some(id) => csi(&format!("?63;{id}"), "n"),
            None => csi("?63", "n"),
        }
    }
}

pub struct RequestGeo;

impl RequestGeo {
    /// CPR (`CSI 6 n`) or DECXCPR (`CSI ? 6 n`) -> `ReplyCP`.
    #[must_use]
    pub fn cursorpos_cp(cpr: bool) -> EscSegment {
        csi(if cpr { "" } else { "?" }, "6n")
    }

    /// XTWINOPS geometry query; `param` is one of `14|15|16|18|19`.
    #[must_use]
    pub fn window(param: u32) -> EscSegment {
        csi(&param.to_string(), "t")
    }
}

pub struct RequestDecpm;

impl RequestDecpm {
    /// DECRQM: `CSI ? mode $ p` -> `ReplyDECPM`.
    #[must_use]
    pub fn privmode_decpm(mode: u16) -> EscSegment {
        csi(&format!("?{mode}$"), "p")
    }
}

pub struct RequestOsColor;

impl RequestOsColor {
    /// `OSC 4 ; slot ; ? ST` -> `ReplyOSColor`.
    #[must_use]
    pub fn rel(slot: ColorSlot, bright_version: bool) -> EscSegment {
        let slot_num = match slot {
            ColorSlot::Indexed(n) => n as u16,
            ColorSlot::Named(n) => {
                let numbers = match n {
                    AnsiColorSlot::Black => (0u16, 8u16),
                    AnsiColorSlot::Red => (1, 9),
                    AnsiColorSlot::Green => (2, 10),
                    AnsiColorSlot::Yellow => (3, 11),
                    AnsiColorSlot::Blue => (4, 12),
                    AnsiColorSlot::Magenta => (5, 13),
                    AnsiColorSlot::Cyan => (6, 14),
                    AnsiColorSlot::White => (7, 15),
                };
                if bright_version { numbers.1 } else { numbers.0 }
            }
        };
        osc("4;", &format!("{slot_num};?"))
    }

    #[must_use]
    pub fn environment(fore: bool, tektronix: bool) -> EscSegment {
        let tag = if fore {
            if tektronix { "15;" } else { "10;" }
        } else if tektronix {
            "16;"
        } else {
            "11;"
        };
        osc(tag, "?")
    }

    #[must_use]
    pub fn cursor(tektronix: bool) -> EscSegment {
        osc(if tektronix { "18;" } else { "12;" }, "?")
    }

    #[must_use]
    pub fn highlight(fore: bool) -> EscSegment {
        osc(if fore { "19;" } else { "17;" }, "?")
    }

    #[must_use]
    pub fn pointer(fore: bool) -> EscSegment {
        osc(if fore { "13;" } else { "14;" }, "?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn termattr_da_matches_csi_0c() {
        assert_eq!(RequestDevice::termattr_da().to_wire_string(), "\x1b[0c");
    }

    #[test]
    fn privmode_decpm_formats_mode_and_dollar_p() {
        assert_eq!(RequestDecpm::privmode_decpm(1006).to_wire_string(), "\x1b[?1006$p");
    }

    #[test]
    fn os_color_rel_query_ends_in_question_mark() {
        assert_eq!(
            RequestOsColor::rel(ColorSlot::Named(AnsiColorSlot::Blue), false).to_wire_string(),
            "\x1b]4;4;?\x1b\\"
        );
    }
}
