//! DEC private modes (DECSET/DECRST) and the process-global DECRQM reply cache.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use vtesc::EscSegment;

use crate::gate::DECPM_GATE;
use crate::intro::csi;

/// DEC private mode numbers in common use, named as in the ECMA-48/xterm
/// control sequence references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum DecPrivateModeId {
    ApplicationCursorKeys = 1,
    DesignateUsAscii = 2,
    Column132Mode = 3,
    SmoothScroll = 4,
    ReverseVideo = 5,
    OriginMode = 6,
    AutoWrapMode = 7,
    AutoRepeatKeys = 8,
    SendMousePressX10 = 9,
    ShowToolbar = 10,
    StartBlinkingCursor = 12,
    ShowCursor = 25,
    ShowScrollbar = 30,
    AllowWideMode = 40,
    ApplicationKeypad = 66,
    BackarrowKeySendsBackspace = 67,
    EnableLrMargin = 69,
    SendMousePressX11 = 1000,
    HighlightMouseTracking = 1001,
    CellMotionMouseTracking = 1002,
    AllMotionMouseTracking = 1003,
    SendFocusInFocusOut = 1004,
    Utf8MouseMode = 1005,
    SgrMouseMode = 1006,
    AlternateScrollMode = 1007,
    SgrMousePixelMode = 1016,
    AlternateScreenBuffer = 1047,
    SaveCursor = 1048,
    SaveCursorAlternateScreenBuffer = 1049,
    BracketedPasteMode = 2004,
}

/// Process-global memory for DECRQM replies, keyed by mode number.
static REPLY_CACHE: LazyLock<Mutex<HashMap<u16, u16>>> = LazyLock::new(|| Mutex::new(HashMap::new()));

/// Record a decoded DECRQM reply value for later lookup by `reply_cache`.
pub fn record_reply(mode: u16, value: u16) {
    REPLY_CACHE.lock().unwrap().insert(mode, value);
}

/// Look up the last known DECRQM reply value for `mode`, if any.
#[must_use]
pub fn reply_cache(mode: u16) -> Option<u16> {
    REPLY_CACHE.lock().unwrap().get(&mode).copied()
}

pub struct DecPrivateMode;

impl DecPrivateMode {
    /// `CSI ? mode h` (DECSET). Empty while [`DECPM_GATE`] is disabled.
    #[must_use]
    pub fn high(mode: u16) -> EscSegment {
        if !DECPM_GATE.is_enabled() {
            return EscSegment::empty();
        }
        csi(&format!("?{mode}"), "h")
    }

    /// `CSI ? mode l` (DECRST). Empty while [`DECPM_GATE`] is disabled.
    #[must_use]
    pub fn low(mode: u16) -> EscSegment {
        if !DECPM_GATE.is_enabled() {
            return EscSegment::empty();
        }
        csi(&format!("?{mode}"), "l")
    }
}

/// Bundles a DEC private mode with its enable/disable sequences so a widget
/// can set it on entry and know what to emit to restore the prior state on
/// exit.
pub struct DecpmHandler {
    pub mode: u16,
    pub highout: EscSegment,
    pub lowout: EscSegment,
    /// What to emit when a process-exit reset is requested: `'h'`, `'l'`, or
    /// nothing (`None`) if the mode should be left as-is.
    pub atexit: Option<char>,
}

impl DecpmHandler {
    #[must_use]
    pub fn new(mode: DecPrivateModeId, atexit: Option<char>) -> Self {
        let mode = mode as u16;
        Self {
            mode,
            highout: DecPrivateMode::high(mode),
            lowout: DecPrivateMode::low(mode),
            atexit,
        }
    }

    /// The sequence to emit at process exit, per `atexit` (`'h'`/`'l'`/none).
    #[must_use]
    pub fn exit_sequence(&self) -> Option<&EscSegment> {
        match self.atexit {
            Some('h') => Some(&self.highout),
            Some('l') => Some(&self.lowout),
            _ => None,
        }
    }
}

pub fn mouse_send_press(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::SendMousePressX11, atexit.or(Some('l')))
}

pub fn mouse_highlight_tracking(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::HighlightMouseTracking, atexit.or(Some('l')))
}

pub fn mouse_cell_motion_tracking(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::CellMotionMouseTracking, atexit.or(Some('l')))
}

pub fn mouse_all_tracking(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::AllMotionMouseTracking, atexit.or(Some('l')))
}

pub fn screen_reverse_video(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::ReverseVideo, atexit.or(Some('l')))
}

pub fn screen_alternate_buffer(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::AlternateScreenBuffer, atexit.or(Some('l')))
}

pub fn cursor_autowrap_mode(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::AutoWrapMode, atexit.or(Some('h')))
}

pub fn cursor_blinking(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::StartBlinkingCursor, atexit.or(Some('h')))
}

pub fn cursor_show(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::ShowCursor, atexit.or(Some('h')))
}

pub fn application_cursor_keys(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::ApplicationCursorKeys, atexit.or(Some('l')))
}

pub fn bracketed_paste_mode(atexit: Option<char>) -> DecpmHandler {
    DecpmHandler::new(DecPrivateModeId::BracketedPasteMode, atexit.or(Some('l')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_low_format_mode_number() {
        assert_eq!(
            DecPrivateMode::high(DecPrivateModeId::BracketedPasteMode as u16).to_wire_string(),
            "\x1b[?2004h"
        );
        assert_eq!(
            DecPrivateMode::low(DecPrivateModeId::BracketedPasteMode as u16).to_wire_string(),
            "\x1b[?2004l"
        );
    }

    #[test]
    fn reply_cache_round_trips() {
        record_reply(1006, 1);
        assert_eq!(reply_cache(1006), Some(1));
        assert_eq!(reply_cache(9999), None);
    }

    #[test]
    fn handler_exit_sequence_follows_atexit_char() {
        let h = bracketed_paste_mode(None);
        assert_eq!(h.exit_sequence().unwrap().to_wire_string(), h.lowout.to_wire_string());
    }
}
