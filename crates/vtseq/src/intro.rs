//! Fe/Fs/Fp/nF/CSI/SS3/DCS/OSC/APP introducer constructors.
//!
//! These build the raw [`EscSegment`]s every other module in this crate
//! wraps a payload in. None of them are gated themselves -- gating happens
//! one layer up, at the SGR/DECPM constructors that decide whether to call
//! through to these at all.

use vtesc::EscSegment;

const ESC: char = '\x1b';
const ST: &str = "\x1b\\";

/// `ESC` followed directly by `params` -- the generic Fe/Fs/Fp/nF shape used
/// by cursor save/restore, character-set designation, and other two/three
/// byte introducers that carry no payload of their own.
#[must_use]
pub fn fe(params: &str) -> EscSegment {
    EscSegment::new(format!("{ESC}{params}"), "", "")
}

/// `CSI params final` -- e.g. `csi("31", "m")` for an SGR set-foreground.
#[must_use]
pub fn csi(params: &str, finalizer: &str) -> EscSegment {
    EscSegment::new(format!("{ESC}[{params}{finalizer}"), "", "")
}

/// `SS3 final`.
#[must_use]
pub fn ss3(finalizer: &str) -> EscSegment {
    EscSegment::new(format!("{ESC}O{finalizer}"), "", "")
}

/// `DCS params payload ST` -- the payload is opaque (pure segment).
#[must_use]
pub fn dcs(params: &str, payload: &str) -> EscSegment {
    EscSegment::new_pure(format!("{ESC}P{params}"), payload, ST)
}

/// `OSC params ; payload ST` -- payload is opaque (pure segment).
#[must_use]
pub fn osc(params: &str, payload: &str) -> EscSegment {
    EscSegment::new_pure(format!("{ESC}]{params}"), payload, ST)
}

/// `APP payload ST` (application program command).
#[must_use]
pub fn app(payload: &str) -> EscSegment {
    EscSegment::new_pure(format!("{ESC}_"), payload, ST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csi_builds_canonical_byte_form() {
        let s = csi("31", "m");
        assert_eq!(s.to_wire_string(), "\x1b[31m");
    }

    #[test]
    fn osc_is_pure_and_st_terminated() {
        let s = osc("0;", "title");
        assert_eq!(s.to_wire_string(), "\x1b]0;title\x1b\\");
        assert_eq!(s.len(), 0);
    }
}
