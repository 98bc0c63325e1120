//! Typed constructors for VT/xterm escape sequences: SGR, color, cursor, DEC
//! private mode, text editing, and OS commands.
//!
//! Every constructor returns a [`vtesc::EscSegment`] or
//! [`vtesc::EscContainer`]; style- and DEC-private-mode-affecting
//! constructors additionally check the process-wide [`gate::STYLE_GATE`] /
//! [`gate::DECPM_GATE`] and fall back to an empty segment while disabled.

pub mod cursor;
pub mod decpm;
pub mod gate;
pub mod intro;
pub mod os;
pub mod requests;
pub mod sgr;
pub mod textctrl;

pub use cursor::{CursorNavigate, CursorSave, CursorStyle, Scroll};
pub use decpm::{DecPrivateMode, DecPrivateModeId, DecpmHandler};
pub use gate::{DECPM_GATE, STYLE_GATE};
pub use os::{AnsiColorSlot, ColorArg, ColorSlot, CtrlByteConversion, OSColorControl, WindowManipulation};
pub use requests::{RequestDecpm, RequestDevice, RequestGeo, RequestOsColor};
pub use sgr::{ColoredUnderline, Fore, Ground, SGRParams, Wrappable, sgr_reset, sgr_seqs, sgr_wrap};
pub use textctrl::{CharSet, Erase, TextModification};
