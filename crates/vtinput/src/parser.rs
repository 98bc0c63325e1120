//! The byte interpreter: a small state machine that turns a raw input byte
//! stream into [`Event`]s one byte at a time.

use std::time::{Duration, Instant};

use smallvec::SmallVec;

use crate::classify::{self, DEFAULT_PROTECTED_INTROS, FS_FP_NF_INTROS};
use crate::error::ParseError;
use crate::event::{Ctrl, DelIns, Event, Key, Meta, Mouse, PosComponent, RawSeq, del_ins_key, mouse_button};
use crate::keytables;
use crate::modifier::key as keymod;
use crate::reply;

/// Runtime-configurable byte classes the interpreter consults at its
/// top-level decision and its ESC-introducer dispatch.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    space_bytes: Vec<u8>,
    meta_bytes: Option<Vec<u8>>,
    protected_intros: Vec<u8>,
    manual_esc_timeout: Duration,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            space_bytes: vec![0x20],
            meta_bytes: None,
            protected_intros: DEFAULT_PROTECTED_INTROS.to_vec(),
            manual_esc_timeout: Duration::ZERO,
        }
    }
}

impl InterpreterConfig {
    /// Replace the space-class byte set (default just `0x20`; commonly
    /// extended with `0x09`/`0x0a`/`0x0d`).
    pub fn with_space_bytes(mut self, bytes: &[u8]) -> Result<Self, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::EmptyByteSet("space_bytes"));
        }
        self.space_bytes = bytes.to_vec();
        Ok(self)
    }

    /// Restrict which ESC introducers resolve to `Meta(introducer)` instead
    /// of falling through to `UnknownESC`. `None` (the default) accepts any
    /// non-protected introducer.
    #[must_use]
    pub fn with_meta_bytes(mut self, bytes: Option<&[u8]>) -> Self {
        self.meta_bytes = bytes.map(<[u8]>::to_vec);
        self
    }

    /// Introducers that can never resolve to `Meta`, because they start a
    /// real sub-parser (default `O P [ ]`).
    pub fn with_protected_introducers(mut self, bytes: &[u8]) -> Result<Self, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::EmptyByteSet("protected_intros"));
        }
        self.protected_intros = bytes.to_vec();
        Ok(self)
    }

    #[must_use]
    pub fn with_manual_esc_timeout(mut self, timeout: Duration) -> Self {
        self.manual_esc_timeout = timeout;
        self
    }

    fn is_space(&self, byte: u8) -> bool {
        self.space_bytes.contains(&byte)
    }

    fn is_meta_acceptable(&self, byte: u8) -> bool {
        self.meta_bytes.as_ref().is_none_or(|set| set.contains(&byte))
    }

    fn is_protected(&self, byte: u8) -> bool {
        self.protected_intros.contains(&byte)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MouseMode {
    /// `M` -- X10 compatibility, 3 trailing bytes (button, x, y).
    X10,
    /// `t`/`T` -- highlight tracking, 2/6 trailing bytes.
    Highlight2,
    Highlight6,
    /// `<` -- SGR mode, semicolon-separated decimals terminated by `m`/`M`.
    Sgr,
}

#[derive(Debug, Clone)]
enum State {
    Ground,
    Esc,
    /// Accumulating an Fe/Fs/Fp/nF sequence (non-CSI, non-SS3) after its
    /// introducer byte, or a CSI parameter/intermediate run.
    Csi { buf: String },
    Ss2,
    Ss3,
    /// DCS/OSC/SOS/PM/APC accumulate until ST (`ESC \`); `kind` distinguishes
    /// which one so the right payload split / reply decode runs at the end.
    StringTerminated { kind: char, buf: String, saw_esc: bool },
    FsFpNf { intro: u8, buf: String },
    Utf8 { remaining: usize, bytes: SmallVec<[u8; 4]> },
    Mouse { mode: MouseMode, countdown: u8, buf: SmallVec<[u8; 6]> },
    /// Bracketed paste: collect verbatim until the literal byte sequence
    /// `ESC [ 201 ~` (`"\x1b[201~"`) appears.
    Paste { buf: String, match_pos: usize },
    ManualEsc { buf: Vec<u8>, deadline: Option<Instant> },
}

/// The byte-at-a-time interpreter. `feed` returns `Some(event)` once a
/// complete event resolves, `None` while still mid-sequence.
#[derive(Debug, Clone)]
pub struct Interpreter {
    config: InterpreterConfig,
    state: State,
}

const PASTE_END: &[u8] = b"\x1b[201~";

impl Interpreter {
    #[must_use]
    pub fn new(config: InterpreterConfig) -> Self {
        Self { config, state: State::Ground }
    }

    #[must_use]
    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Enter manual-ESC supervision: a bare ESC is collected verbatim until a
    /// terminating final byte arrives or [`Self::poll_manual_esc_timeout`]
    /// reports the typing timeout has elapsed.
    pub fn begin_manual_esc(&mut self, now: Instant) {
        let deadline = if self.config.manual_esc_timeout.is_zero() {
            None
        } else {
            Some(now + self.config.manual_esc_timeout)
        };
        self.state = State::ManualEsc { buf: vec![0x1b], deadline };
    }

    /// While in manual-ESC supervision, check whether the typing timeout has
    /// elapsed without further bytes; if so, finalize to `ManualEsc`.
    pub fn poll_manual_esc_timeout(&mut self, now: Instant) -> Option<Event> {
        if let State::ManualEsc { deadline: Some(deadline), .. } = &self.state {
            if now >= *deadline {
                let State::ManualEsc { buf, .. } = std::mem::replace(&mut self.state, State::Ground) else {
                    unreachable!()
                };
                return Some(Event::ManualEsc(buf));
            }
        }
        None
    }

    /// Feed one byte; returns a completed event, if any.
    pub fn feed(&mut self, byte: u8) -> Option<Event> {
        match std::mem::replace(&mut self.state, State::Ground) {
            State::Ground => self.feed_ground(byte),
            State::Esc => self.feed_esc(byte),
            State::Csi { buf } => self.feed_csi(buf, byte),
            State::Ss2 => Some(Event::Raw(RawSeq::Fe(byte as char))),
            State::Ss3 => self.feed_ss3(byte),
            State::StringTerminated { kind, buf, saw_esc } => self.feed_string_terminated(kind, buf, saw_esc, byte),
            State::FsFpNf { intro, buf } => self.feed_fs_fp_nf(intro, buf, byte),
            State::Utf8 { remaining, bytes } => self.feed_utf8(remaining, bytes, byte),
            State::Mouse { mode, countdown, buf } => self.feed_mouse(mode, countdown, buf, byte),
            State::Paste { buf, match_pos } => self.feed_paste(buf, match_pos, byte),
            State::ManualEsc { mut buf, deadline } => {
                buf.push(byte);
                if byte == b'\n' || byte == b'\r' || byte == 0x1b {
                    Some(Event::ManualEsc(buf))
                } else {
                    self.state = State::ManualEsc { buf, deadline };
                    None
                }
            }
        }
    }

    fn feed_ground(&mut self, byte: u8) -> Option<Event> {
        if classify::is_ascii_printable(byte) {
            return Some(Event::Ascii(byte as char));
        }
        if classify::is_del_or_backspace(byte) {
            let modifier = if byte == 0x08 { keymod::CTRL } else { 0 };
            return Some(Event::Key(Key::DelIns(DelIns { key: Some(del_ins_key::BACKSPACE), modifier: Some(modifier) })));
        }
        if self.config.is_space(byte) {
            return Some(Event::Space(classify::normalize_space_char(byte)));
        }
        if classify::is_utf8_lead(byte) {
            self.state = State::Utf8 { remaining: classify::utf8_continuation_len(byte), bytes: SmallVec::from_slice(&[byte]) };
            return None;
        }
        if byte == 0x1b {
            self.state = State::Esc;
            return None;
        }
        if byte == 0x00 {
            return Some(Event::Key(Key::Ctrl(Ctrl::from_byte(b'Z' - 64))));
        }
        if classify::is_c0_control(byte) {
            return Some(Event::Key(Key::Ctrl(Ctrl::from_byte(byte))));
        }
        Some(Event::Raw(RawSeq::UnknownEsc(byte)))
    }

    fn feed_esc(&mut self, intro: u8) -> Option<Event> {
        if intro == 0x1b {
            return Some(Event::Key(Key::EscEsc));
        }
        match intro {
            b'N' => {
                self.state = State::Ss2;
                return None;
            }
            b'O' => {
                self.state = State::Ss3;
                return None;
            }
            b'P' => {
                self.state = State::StringTerminated { kind: 'P', buf: String::new(), saw_esc: false };
                return None;
            }
            b'X' | b'^' | b'_' => {
                self.state = State::StringTerminated { kind: intro as char, buf: String::new(), saw_esc: false };
                return None;
            }
            b']' => {
                self.state = State::StringTerminated { kind: ']', buf: String::new(), saw_esc: false };
                return None;
            }
            b'[' => {
                self.state = State::Csi { buf: String::new() };
                return None;
            }
            _ => {}
        }
        if classify::is_fs_fp_nf_intro(intro, FS_FP_NF_INTROS) {
            self.state = State::FsFpNf { intro, buf: String::new() };
            return None;
        }
        if !self.config.is_protected(intro) && self.config.is_meta_acceptable(intro) {
            if classify::is_del_or_backspace(intro) {
                let modifier = if intro == 0x08 { keymod::combine(keymod::CTRL, keymod::ALT) } else { keymod::ALT };
                return Some(Event::Key(Key::DelIns(DelIns { key: Some(del_ins_key::BACKSPACE), modifier: Some(modifier) })));
            }
            if classify::is_utf8_lead(intro) {
                self.state = State::Utf8 { remaining: classify::utf8_continuation_len(intro), bytes: SmallVec::from_slice(&[intro]) };
                return None;
            }
            return Some(Event::Key(Key::Meta(Meta { key: Some(intro as char) })));
        }
        if let Some(key) = keytables::hp_vt52_single_byte_key(intro) {
            return Some(Event::Key(key));
        }
        Some(Event::Raw(RawSeq::UnknownEsc(intro)))
    }

    fn feed_ss3(&mut self, byte: u8) -> Option<Event> {
        if classify::is_csi_final(byte) {
            if let Some(key) = keytables::ss3_final_key(byte, 0) {
                return Some(Event::Key(key));
            }
            return Some(Event::Raw(RawSeq::Ss3(byte as char)));
        }
        // Non-final bytes in an SS3 sequence aren't modeled (no parameterized
        // SS3 sequences are emitted by real terminals); fall through raw.
        Some(Event::Raw(RawSeq::Ss3(byte as char)))
    }

    fn feed_csi(&mut self, mut buf: String, byte: u8) -> Option<Event> {
        if buf.is_empty() && matches!(byte, b'M' | b't' | b'T' | b'<') {
            let mode = match byte {
                b'M' => MouseMode::X10,
                b't' => MouseMode::Highlight2,
                b'T' => MouseMode::Highlight6,
                b'<' => MouseMode::Sgr,
                _ => unreachable!(),
            };
            let countdown = match mode {
                MouseMode::X10 => 3,
                MouseMode::Highlight2 => 2,
                MouseMode::Highlight6 => 6,
                MouseMode::Sgr => 0,
            };
            self.state = State::Mouse { mode, countdown, buf: SmallVec::new() };
            return None;
        }
        buf.push(byte as char);
        if buf == "200~" {
            self.state = State::Paste { buf: String::new(), match_pos: 0 };
            return None;
        }
        if classify::is_csi_final(byte) {
            return Some(self.finalize_csi(&buf));
        }
        self.state = State::Csi { buf };
        None
    }

    fn finalize_csi(&self, buf: &str) -> Event {
        let final_byte = buf.as_bytes()[buf.len() - 1];
        let body = &buf[..buf.len() - 1];
        let (prefix, params) = if let Some(rest) = body.strip_prefix('?') {
            ("?", rest)
        } else if let Some(rest) = body.strip_prefix('>') {
            (">", rest)
        } else if let Some(rest) = body.strip_prefix('=') {
            ("=", rest)
        } else {
            ("", body)
        };

        if prefix.is_empty() {
            if let Some(key) = self.decode_function_key(params, final_byte) {
                return Event::Key(key);
            }
        }
        if let Some(reply) = reply::decode_csi(prefix, params, final_byte as char) {
            return Event::Reply(reply);
        }
        Event::Raw(RawSeq::Csi { params: body.to_string(), intermediates: String::new(), finalizer: final_byte as char })
    }

    fn decode_function_key(&self, params: &str, final_byte: u8) -> Option<Key> {
        let parts: Vec<&str> = if params.is_empty() { vec![] } else { params.split(';').collect() };
        match final_byte {
            b'~' | b'z' => {
                if parts.len() == 3 && parts[0] == "27" {
                    let modifier: i32 = parts[1].parse().ok()?;
                    let code: i32 = parts[2].parse().ok()?;
                    return Some(Key::Mod(crate::event::ModKey { key: Some(code), modifier: Some(modifier) }));
                }
                let code: u32 = parts.first()?.parse().ok()?;
                let modifier = parts.get(1).and_then(|s| s.parse::<i32>().ok()).unwrap_or(0);
                keytables::tilde_param_key(code, modifier)
            }
            b'A'..=b'I' | b'L' | b'Z' => {
                if parts.len() >= 2 {
                    let modifier: i32 = parts[1].parse().ok()?;
                    keytables::csi_final_key(final_byte, modifier)
                } else {
                    keytables::csi_final_key(final_byte, 0)
                }
            }
            _ => None,
        }
    }

    fn feed_string_terminated(&mut self, kind: char, mut buf: String, saw_esc: bool, byte: u8) -> Option<Event> {
        if saw_esc {
            if byte == b'\\' {
                return Some(self.finalize_string_terminated(kind, &buf));
            }
            buf.push(0x1b as char);
            buf.push(byte as char);
            self.state = State::StringTerminated { kind, buf, saw_esc: false };
            return None;
        }
        if byte == 0x1b {
            self.state = State::StringTerminated { kind, buf, saw_esc: true };
            return None;
        }
        buf.push(byte as char);
        self.state = State::StringTerminated { kind, buf, saw_esc: false };
        None
    }

    fn finalize_string_terminated(&self, kind: char, buf: &str) -> Event {
        match kind {
            'P' => {
                let (params, payload) = split_dcs(buf);
                if let Some(reply) = reply::decode_dcs(params, payload) {
                    return Event::Reply(reply);
                }
                Event::Raw(RawSeq::Dcs { params: params.to_string(), payload: payload.to_string() })
            }
            ']' => {
                let (params, payload) = buf.split_once(';').unwrap_or((buf, ""));
                if let Some(reply) = reply::decode_osc(params, payload) {
                    return Event::Reply(reply);
                }
                Event::Raw(RawSeq::Osc { params: params.to_string(), payload: payload.to_string() })
            }
            k => Event::Raw(RawSeq::SosPmApc { kind: k, payload: buf.to_string() }),
        }
    }

    fn feed_fs_fp_nf(&mut self, intro: u8, mut buf: String, byte: u8) -> Option<Event> {
        if (0x30..=0x7e).contains(&byte) {
            buf.push(byte as char);
            return Some(Event::Raw(RawSeq::FsFpNf(format!("{}{}", intro as char, buf))));
        }
        buf.push(byte as char);
        self.state = State::FsFpNf { intro, buf };
        None
    }

    fn feed_utf8(&mut self, remaining: usize, mut bytes: SmallVec<[u8; 4]>, byte: u8) -> Option<Event> {
        bytes.push(byte);
        if remaining <= 1 {
            return Some(match std::str::from_utf8(&bytes) {
                Ok(s) => Event::Utf8(s.chars().next().unwrap_or('\u{fffd}')),
                Err(_) => Event::Utf8('\u{fffd}'),
            });
        }
        self.state = State::Utf8 { remaining: remaining - 1, bytes };
        None
    }

    fn feed_mouse(&mut self, mode: MouseMode, countdown: u8, mut buf: SmallVec<[u8; 6]>, byte: u8) -> Option<Event> {
        if mode == MouseMode::Sgr {
            if byte == b'm' || byte == b'M' {
                return Some(finalize_sgr_mouse(&buf, byte == b'm'));
            }
            buf.push(byte);
            self.state = State::Mouse { mode, countdown, buf };
            return None;
        }
        buf.push(byte);
        let remaining = countdown.saturating_sub(1);
        if remaining == 0 {
            return Some(finalize_legacy_mouse(mode, &buf));
        }
        self.state = State::Mouse { mode, countdown: remaining, buf };
        None
    }

    fn feed_paste(&mut self, mut buf: String, mut match_pos: usize, byte: u8) -> Option<Event> {
        if byte == PASTE_END[match_pos] {
            match_pos += 1;
            if match_pos == PASTE_END.len() {
                return Some(Event::Pasted(buf));
            }
            self.state = State::Paste { buf, match_pos };
            return None;
        }
        if match_pos > 0 {
            for &b in &PASTE_END[..match_pos] {
                buf.push(b as char);
            }
            match_pos = 0;
        }
        buf.push(byte as char);
        self.state = State::Paste { buf, match_pos };
        None
    }
}

fn split_dcs(buf: &str) -> (&str, &str) {
    buf.find(|c: char| c.is_ascii_alphabetic() || c == '~').map_or((buf, ""), |i| {
        if buf[i..].starts_with('|') { buf.split_at(i + 1) } else { (buf, "") }
    })
}

fn finalize_legacy_mouse(mode: MouseMode, buf: &[u8]) -> Event {
    if buf.len() < 3 {
        return Event::Raw(RawSeq::UnknownEsc(0));
    }
    let cb = buf[0].wrapping_sub(32);
    let x = i32::from(buf[1].wrapping_sub(32));
    let y = i32::from(buf[2].wrapping_sub(32));
    let (button, modifier) = decode_legacy_button(cb);
    let highlight = matches!(mode, MouseMode::Highlight2 | MouseMode::Highlight6);
    let (xc, yc) = if highlight && buf.len() >= 6 {
        (
            PosComponent::Highlight(
                Box::new(PosComponent::Exact(i32::from(buf[1]))),
                Box::new(PosComponent::Exact(i32::from(buf[3]))),
                Box::new(PosComponent::Exact(i32::from(buf[5]))),
            ),
            PosComponent::Exact(y),
        )
    } else {
        (PosComponent::Exact(x), PosComponent::Exact(y))
    };
    Event::Mouse(Mouse { button: Some(button), modifier: Some(modifier), x: xc, y: yc })
}

fn finalize_sgr_mouse(buf: &[u8], is_release: bool) -> Event {
    let text = String::from_utf8_lossy(buf);
    let mut parts = text.split(';');
    let Some(cb) = parts.next().and_then(|s| s.parse::<i32>().ok()) else {
        return Event::Raw(RawSeq::UnknownEsc(0));
    };
    let Some(x) = parts.next().and_then(|s| s.parse::<i32>().ok()) else {
        return Event::Raw(RawSeq::UnknownEsc(0));
    };
    let Some(y) = parts.next().and_then(|s| s.parse::<i32>().ok()) else {
        return Event::Raw(RawSeq::UnknownEsc(0));
    };
    let (mut button, modifier) = decode_legacy_button(cb as u8 & 0x3f | (cb as u8 & 0xc0));
    if is_release && button != mouse_button::MOVE {
        button = mouse_button::RELEASE;
    }
    Event::Mouse(Mouse { button: Some(button), modifier: Some(modifier), x: PosComponent::Exact(x), y: PosComponent::Exact(y) })
}

fn decode_legacy_button(cb: u8) -> (i32, i32) {
    let base = i32::from(cb & 0b0100_0011);
    let wheel = cb & 0x40 != 0;
    let motion = cb & 0x20 != 0;
    let mut modifier = 0;
    if cb & 0x04 != 0 {
        modifier = if modifier == 0 { keymod::SHIFT } else { keymod::combine(modifier, keymod::SHIFT) };
    }
    if cb & 0x08 != 0 {
        modifier = if modifier == 0 { keymod::ALT } else { keymod::combine(modifier, keymod::ALT) };
    }
    if cb & 0x10 != 0 {
        modifier = if modifier == 0 { keymod::CTRL } else { keymod::combine(modifier, keymod::CTRL) };
    }
    let button = if wheel {
        if base & 1 == 0 { mouse_button::U_WHEEL } else { mouse_button::D_WHEEL }
    } else if motion {
        match base & 0b11 {
            0 => mouse_button::L_MOVE,
            1 => mouse_button::M_MOVE,
            2 => mouse_button::R_MOVE,
            _ => mouse_button::MOVE,
        }
    } else {
        match base & 0b11 {
            0 => mouse_button::L_PRESS,
            1 => mouse_button::M_PRESS,
            2 => mouse_button::R_PRESS,
            _ => mouse_button::RELEASE,
        }
    };
    (button, modifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(interp: &mut Interpreter, bytes: &[u8]) -> Vec<Event> {
        bytes.iter().filter_map(|&b| interp.feed(b)).collect()
    }

    #[test]
    fn ascii_byte_emits_ascii_event() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        assert_eq!(interp.feed(b'a'), Some(Event::Ascii('a')));
    }

    #[test]
    fn ctrl_byte_below_0x20_emits_ctrl_key() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        assert_eq!(interp.feed(1), Some(Event::Key(Key::Ctrl(Ctrl::from_byte(1)))));
    }

    #[test]
    fn esc_esc_emits_escesc() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        assert_eq!(interp.feed(0x1b), None);
        assert_eq!(interp.feed(0x1b), Some(Event::Key(Key::EscEsc)));
    }

    #[test]
    fn csi_arrow_up_emits_navkey() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1b[A");
        assert_eq!(events, vec![Event::Key(Key::Nav(crate::event::NavKey::new(Some(crate::event::nav_key::A_UP), Some(0))))]);
    }

    #[test]
    fn csi_tilde_delete_key_with_modifier() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1b[3;5~");
        assert_eq!(
            events,
            vec![Event::Key(Key::DelIns(DelIns { key: Some(del_ins_key::DELETE), modifier: Some(keymod::CTRL) }))]
        );
    }

    #[test]
    fn bracketed_paste_collects_until_terminator() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1b[200~hello\x1b[201~");
        assert_eq!(events, vec![Event::Pasted("hello".to_string())]);
    }

    #[test]
    fn sgr_mouse_press_decodes_position() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1b[<0;10;20M");
        let Some(Event::Mouse(m)) = events.into_iter().next() else { panic!("expected mouse event") };
        assert_eq!(m.button, Some(mouse_button::L_PRESS));
        assert_eq!(m.x, PosComponent::Exact(10));
        assert_eq!(m.y, PosComponent::Exact(20));
    }

    #[test]
    fn sgr_mouse_release_decodes_lowercase_m() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1b[<0;10;20m");
        let Some(Event::Mouse(m)) = events.into_iter().next() else { panic!("expected mouse event") };
        assert_eq!(m.button, Some(mouse_button::RELEASE));
    }

    #[test]
    fn ss2_introducer_emits_fe_distinct_from_ss3() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1bNa");
        assert_eq!(events, vec![Event::Raw(RawSeq::Fe('a'))]);
    }

    #[test]
    fn modify_other_keys_three_param_form_emits_modkey() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1b[27;3;97~");
        assert_eq!(
            events,
            vec![Event::Key(Key::Mod(crate::event::ModKey { key: Some(97), modifier: Some(keymod::ALT) }))]
        );
    }

    #[test]
    fn meta_event_for_unprotected_introducer() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, b"\x1ba");
        assert_eq!(events, vec![Event::Key(Key::Meta(Meta { key: Some('a') }))]);
    }

    #[test]
    fn utf8_two_byte_sequence_decodes() {
        let mut interp = Interpreter::new(InterpreterConfig::default());
        let events = feed_all(&mut interp, "é".as_bytes());
        assert_eq!(events, vec![Event::Utf8('é')]);
    }

    #[test]
    fn manual_esc_times_out_with_no_following_bytes() {
        let mut interp = Interpreter::new(InterpreterConfig::default().with_manual_esc_timeout(Duration::from_millis(1)));
        let now = Instant::now();
        interp.begin_manual_esc(now);
        assert_eq!(interp.poll_manual_esc_timeout(now + Duration::from_millis(2)), Some(Event::ManualEsc(vec![0x1b])));
    }
}
