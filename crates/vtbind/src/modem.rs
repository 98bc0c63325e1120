//! [`Modem`]: reads bytes, feeds the [`vtinput::Interpreter`], runs completed
//! events through a [`crate::spam`] policy, and forwards survivors to a
//! [`crate::binder::Binder`].
//!
//! The platform stdin handle itself (non-blocking mode, raw mode, the
//! Windows virtual-terminal dance) is an external collaborator (`spec.md`
//! §1 Out-of-scope); a modem only needs *a* source of bytes, modeled here as
//! [`ByteSource`] so the loop is testable without a real tty.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use vtinput::{Event, Interpreter};

use crate::binder::Binder;
use crate::spam::SpamPolicy;

/// A source of input bytes plus a cheap "is more already buffered" check,
/// used by spam policies that distinguish a bursty pipe from an idle one.
pub trait ByteSource {
    /// Pull the next byte, if any is currently available without blocking
    /// past whatever the implementation considers its own read boundary.
    fn next_byte(&mut self) -> Option<u8>;
    /// Whether bytes are already buffered beyond the one just returned.
    fn pipe_non_empty(&self) -> bool;
}

/// An in-memory [`ByteSource`] over a fixed buffer, for tests and for
/// replaying captured sessions.
#[derive(Debug, Clone)]
pub struct BufferSource {
    bytes: Vec<u8>,
    cursor: usize,
}

impl BufferSource {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into(), cursor: 0 }
    }
}

impl ByteSource for BufferSource {
    fn next_byte(&mut self) -> Option<u8> {
        let b = self.bytes.get(self.cursor).copied();
        if b.is_some() {
            self.cursor += 1;
        }
        b
    }

    fn pipe_non_empty(&self) -> bool {
        self.cursor < self.bytes.len()
    }
}

/// Reads from one [`ByteSource`], interprets, filters, and dispatches.
pub struct Modem<S: ByteSource> {
    source: S,
    interpreter: Interpreter,
    spam: Box<dyn SpamPolicy>,
    binder: Binder,
    stop: Arc<AtomicBool>,
}

impl<S: ByteSource> Modem<S> {
    pub fn new(source: S, interpreter: Interpreter, spam: Box<dyn SpamPolicy>, binder: Binder) -> Self {
        Self {
            source,
            interpreter,
            spam,
            binder,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A handle that, when set, causes the next [`Modem::run_until_stopped`]
    /// iteration to return `None` instead of blocking on another byte.
    /// Cooperative: a callback mid-dispatch is never preempted.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    /// Pull bytes until one full event resolves (or the source is
    /// exhausted), run it through the spam filter, and dispatch survivors.
    /// Returns `None` both when the source is exhausted and when the spam
    /// filter dropped the event -- callers distinguish via [`ByteSource`]
    /// exhaustion if needed.
    pub fn step(&mut self) -> Option<Event> {
        loop {
            if self.stop.load(Ordering::Relaxed) {
                return None;
            }
            let byte = self.source.next_byte()?;
            if let Some(event) = self.interpreter.feed(byte) {
                let pipe_non_empty = self.source.pipe_non_empty();
                if let Some(admitted) = self.spam.feed(event, pipe_non_empty) {
                    self.binder.dispatch(&admitted);
                    return Some(admitted);
                }
                // Dropped by the spam filter: keep reading for the next event.
                continue;
            }
        }
    }

    /// Drive `step` until the source is exhausted or `stop_handle` is set.
    pub fn run_until_stopped(&mut self) {
        while !self.stop.load(Ordering::Relaxed) {
            if self.step().is_none() && !self.source.pipe_non_empty() && self.source.next_byte().is_none() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::TypeRegistry;
    use crate::spam::One;
    use vtinput::InterpreterConfig;

    #[test]
    fn step_decodes_one_ascii_event_per_call() {
        let source = BufferSource::new(b"AB".to_vec());
        let interpreter = Interpreter::new(InterpreterConfig::default());
        let binder = Binder::new(TypeRegistry::new());
        let mut modem = Modem::new(source, interpreter, Box::new(One::default()), binder);
        assert_eq!(modem.step(), Some(Event::Ascii('A')));
        assert_eq!(modem.step(), Some(Event::Ascii('B')));
        assert_eq!(modem.step(), None);
    }

    #[test]
    fn stop_handle_halts_the_loop() {
        let source = BufferSource::new(b"AAAA".to_vec());
        let interpreter = Interpreter::new(InterpreterConfig::default());
        let binder = Binder::new(TypeRegistry::new());
        let mut modem = Modem::new(source, interpreter, Box::new(One::default()), binder);
        let stop = modem.stop_handle();
        stop.store(true, Ordering::Relaxed);
        assert_eq!(modem.step(), None);
    }
}
