//! Input event types: keys, mouse reports, and the top-level interpreter
//! output sum type.
//!
//! Every event type here doubles as a reference pattern: constructed with
//! `None` fields it matches any concrete event of the same variant, and a
//! reference compares equal to a concrete event iff every field it *does*
//! set agrees (see [`modifier::opt_matches`]).

use crate::modifier::{self, key as keymod};

/// `NavKey.K.*` constants: arrow keys, Home/End/Begin, Page Up/Down, Shift-Tab.
pub mod nav_key {
    pub const A_RIGHT: i32 = 1;
    pub const A_LEFT: i32 = -1;
    pub const A_UP: i32 = -2;
    pub const A_DOWN: i32 = 2;
    pub const C_HOME: i32 = -3;
    pub const C_END: i32 = 3;
    pub const C_BEGIN: i32 = -4;
    pub const P_DOWN: i32 = 6;
    pub const P_UP: i32 = -6;
    pub const SHIFT_TAB: i32 = 9;
}

/// `KeyPad.K.*` constants for the four PF function keys; printable keypad
/// symbols (`0-9`, `+`, `-`, `*`, `/`, `=`, `.`, `,`) are carried as-is.
pub mod keypad_key {
    pub const PF1: i32 = -1;
    pub const PF2: i32 = -2;
    pub const PF3: i32 = -3;
    pub const PF4: i32 = -4;
}

/// `DelIns.K.*` constants.
pub mod del_ins_key {
    pub const INSERT: i32 = 1;
    pub const BACKSPACE: i32 = 0;
    pub const DELETE: i32 = -1;
    pub const HP_CLEAR: i32 = -11;
}

/// Arrow/navigation keys (Home, End, Page Up/Down, Shift-Tab).
#[derive(Debug, Clone, Copy, Default)]
pub struct NavKey {
    pub key: Option<i32>,
    pub modifier: Option<i32>,
}

impl NavKey {
    #[must_use]
    pub fn new(key: Option<i32>, modifier: Option<i32>) -> Self {
        Self { key, modifier }
    }
}

impl PartialEq for NavKey {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.key, other.key) && modifier::opt_matches(self.modifier, other.modifier)
    }
}

/// Function keys F1-F20.
#[derive(Debug, Clone, Copy, Default)]
pub struct FKey {
    pub key: Option<i32>,
    pub modifier: Option<i32>,
}

impl PartialEq for FKey {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.key, other.key) && modifier::opt_matches(self.modifier, other.modifier)
    }
}

/// "Modify Other Keys" (xterm `CSI 27 ; mod ; code ~`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ModKey {
    pub key: Option<i32>,
    pub modifier: Option<i32>,
}

impl PartialEq for ModKey {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.key, other.key) && modifier::opt_matches(self.modifier, other.modifier)
    }
}

/// Keypad function keys and printable keypad symbols. Carries no modifier --
/// the original notes it as untested and unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPad {
    pub key: Option<i32>,
}

impl PartialEq for KeyPad {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.key, other.key)
    }
}

/// Insert, Delete, Backspace, and the HP-style clear key.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelIns {
    pub key: Option<i32>,
    pub modifier: Option<i32>,
}

impl PartialEq for DelIns {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.key, other.key) && modifier::opt_matches(self.modifier, other.modifier)
    }
}

/// An ASCII control character (`Ctrl+A`..`Ctrl+Z` and the punctuation
/// variants), stored as the shifted-by-64 letter/symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ctrl {
    pub key: Option<char>,
}

impl Ctrl {
    /// Build from the raw control byte (`0x00..0x20`), mapping it to the
    /// shifted uppercase letter/symbol the way the original keys off of.
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        Self { key: Some(char::from((byte + 64) as u8 as u32 as u8)) }
    }
}

impl PartialEq for Ctrl {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.key, other.key)
    }
}

/// An Alt/Meta-modified character: the byte following an ESC intro that was
/// decided not to start a sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Meta {
    pub key: Option<char>,
}

impl PartialEq for Meta {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.key, other.key)
    }
}

/// ESC pressed twice (or a handful of `Ctrl+Alt+punct` combos on Unix that
/// resolve to the same byte sequence).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EscEsc;

/// Sum type over every key-family event. A `None` field anywhere inside a
/// variant's payload acts as a wildcard when used as a match reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    Nav(NavKey),
    FKey(FKey),
    Mod(ModKey),
    Pad(KeyPad),
    DelIns(DelIns),
    Ctrl(Ctrl),
    Meta(Meta),
    EscEsc,
}

impl Key {
    /// Combine modifier components the way `NavKey`/`FKey`/`ModKey`/`DelIns`
    /// do: sum and subtract the identity for each extra modifier.
    #[must_use]
    pub fn combine_modifiers(values: &[i32]) -> i32 {
        keymod::combine_all(values)
    }
}

/// One of `L_PRESS/M_PRESS/R_PRESS/RELEASE/L_MOVE/M_MOVE/R_MOVE/MOVE/
/// U_WHEEL/D_WHEEL`, or an arbitrary "other button" value for buttons beyond
/// the table (button number plus modifier sum, reported MOD == -1).
pub mod mouse_button {
    pub const L_PRESS: i32 = 0;
    pub const M_PRESS: i32 = 1;
    pub const R_PRESS: i32 = 2;
    pub const RELEASE: i32 = 3;
    pub const L_MOVE: i32 = 32;
    pub const M_MOVE: i32 = 33;
    pub const R_MOVE: i32 = 34;
    pub const MOVE: i32 = 35;
    pub const U_WHEEL: i32 = 64;
    pub const D_WHEEL: i32 = 65;
}

/// A pointer coordinate comparison: skip, an exact value, a half-open range,
/// or (highlight-tracking mode only) a `(start, end, mouse)` triple compared
/// component-wise against another triple.
#[derive(Debug, Clone, PartialEq)]
pub enum PosComponent {
    Skip,
    Exact(i32),
    Range(i32, i32),
    Highlight(Box<PosComponent>, Box<PosComponent>, Box<PosComponent>),
}

impl Default for PosComponent {
    fn default() -> Self {
        PosComponent::Skip
    }
}

impl PosComponent {
    fn matches(reference: &PosComponent, concrete: &PosComponent) -> bool {
        match (reference, concrete) {
            (PosComponent::Skip, _) | (_, PosComponent::Skip) => true,
            (PosComponent::Highlight(rs, re, rm), PosComponent::Highlight(cs, ce, cm)) => {
                Self::matches(rs, cs) && Self::matches(re, ce) && Self::matches(rm, cm)
            }
            (PosComponent::Highlight(..), _) | (_, PosComponent::Highlight(..)) => false,
            (r, c) => {
                let (lo, hi) = match r {
                    PosComponent::Exact(v) => (*v, *v),
                    PosComponent::Range(a, b) => (*a, *b),
                    _ => unreachable!(),
                };
                let v = match c {
                    PosComponent::Exact(v) => *v,
                    PosComponent::Range(a, _) => *a,
                    _ => unreachable!(),
                };
                (lo..=hi).contains(&v)
            }
        }
    }
}

/// A mouse report: button, modifier sum, and `(x, y)` position.
#[derive(Debug, Clone, Default)]
pub struct Mouse {
    pub button: Option<i32>,
    pub modifier: Option<i32>,
    pub x: PosComponent,
    pub y: PosComponent,
}

impl Mouse {
    #[must_use]
    pub fn at(button: i32, modifier: i32, x: i32, y: i32) -> Self {
        Self {
            button: Some(button),
            modifier: Some(modifier),
            x: PosComponent::Exact(x),
            y: PosComponent::Exact(y),
        }
    }
}

impl PartialEq for Mouse {
    fn eq(&self, other: &Self) -> bool {
        modifier::opt_matches(self.button, other.button)
            && modifier::opt_matches(self.modifier, other.modifier)
            && PosComponent::matches(&self.x, &other.x)
            && PosComponent::matches(&self.y, &other.y)
    }
}

/// A raw escape sequence with no higher-level interpretation, kept for
/// fall-through cases and for sequences the reply decoder doesn't claim.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSeq {
    Fe(char),
    Csi { params: String, intermediates: String, finalizer: char },
    Ss3(char),
    Dcs { params: String, payload: String },
    Osc { params: String, payload: String },
    SosPmApc { kind: char, payload: String },
    FsFpNf(String),
    UnknownEsc(u8),
}

/// The top-level event the byte interpreter hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// `0x21..0x7e`.
    Ascii(char),
    /// A configured space-class byte (default just `0x20`).
    Space(char),
    /// A decoded multi-byte UTF-8 codepoint.
    Utf8(char),
    /// Any key-family event (`Ctrl`, `Meta`, `EscEsc`, nav/function/modify/
    /// keypad/del-ins keys).
    Key(Key),
    Mouse(Mouse),
    /// `ESC [ 200~ ... ESC [ 201~` bracketed-paste payload.
    Pasted(String),
    /// A bare ESC collected under manual supervision with no sequence ever
    /// completing before the typing timeout or a terminating final byte.
    ManualEsc(Vec<u8>),
    Reply(crate::reply::Reply),
    Raw(RawSeq),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navkey_reference_matches_wildcard_modifier() {
        let reference = NavKey::new(Some(nav_key::A_UP), None);
        let concrete = NavKey::new(Some(nav_key::A_UP), Some(keymod::SHIFT));
        assert_eq!(reference, concrete);
    }

    #[test]
    fn navkey_mismatched_key_does_not_match() {
        let reference = NavKey::new(Some(nav_key::A_UP), None);
        let concrete = NavKey::new(Some(nav_key::A_DOWN), None);
        assert_ne!(reference, concrete);
    }

    #[test]
    fn ctrl_from_byte_shifts_by_64() {
        assert_eq!(Ctrl::from_byte(1).key, Some('A'));
        assert_eq!(Ctrl::from_byte(26).key, Some('Z'));
    }

    #[test]
    fn mouse_range_position_matches_within_bounds() {
        let reference = Mouse { button: None, modifier: None, x: PosComponent::Range(10, 20), y: PosComponent::Skip };
        let concrete = Mouse::at(mouse_button::L_PRESS, 0, 15, 3);
        assert_eq!(reference, concrete);
    }

    #[test]
    fn mouse_exact_position_rejects_out_of_bounds() {
        let reference = Mouse { button: None, modifier: None, x: PosComponent::Exact(5), y: PosComponent::Skip };
        let concrete = Mouse::at(mouse_button::L_PRESS, 0, 6, 0);
        assert_ne!(reference, concrete);
    }
}
