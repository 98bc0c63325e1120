//! [`Router`]: a table of `(key, modem)` pairs with a current selection that
//! focus changes can switch. A switch issued mid-dispatch is guaranteed to
//! take effect on the *next* `dispatch`, never the in-flight one
//! (`spec.md` §5 Ordering).

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use vtinput::Event;

use crate::modem::{ByteSource, Modem};

/// Holds every registered modem and the currently selected key. `switch_to`
/// records the requested key but does not apply it until the next
/// `dispatch_next` call, so a switch issued from inside a callback cannot
/// retroactively redirect the event currently being processed.
pub struct Router<K, S: ByteSource> {
    modems: HashMap<K, Modem<S>>,
    current: Mutex<K>,
    pending: Mutex<Option<K>>,
    generation: AtomicU64,
}

impl<K: Eq + Hash + Clone, S: ByteSource> Router<K, S> {
    #[must_use]
    pub fn new(initial_key: K, initial_modem: Modem<S>) -> Self {
        let mut modems = HashMap::new();
        modems.insert(initial_key.clone(), initial_modem);
        Self {
            modems,
            current: Mutex::new(initial_key),
            pending: Mutex::new(None),
            generation: AtomicU64::new(0),
        }
    }

    pub fn register(&mut self, key: K, modem: Modem<S>) {
        self.modems.insert(key, modem);
    }

    #[must_use]
    pub fn current_key(&self) -> K {
        self.current.lock().unwrap().clone()
    }

    /// Queue a focus change. Takes effect starting with the next
    /// `dispatch_next` call.
    pub fn switch_gate(&self, key: K) {
        *self.pending.lock().unwrap() = Some(key);
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Apply any pending switch, then step the now-current modem once.
    pub fn dispatch_next(&mut self) -> Option<Event> {
        if let Some(key) = self.pending.lock().unwrap().take() {
            *self.current.lock().unwrap() = key;
        }
        let current = self.current.lock().unwrap().clone();
        self.modems.get_mut(&current).and_then(Modem::step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binder::{Binder, TypeRegistry};
    use crate::modem::BufferSource;
    use crate::spam::One;
    use vtinput::{Interpreter, InterpreterConfig};

    fn modem(bytes: &[u8]) -> Modem<BufferSource> {
        Modem::new(
            BufferSource::new(bytes.to_vec()),
            Interpreter::new(InterpreterConfig::default()),
            Box::new(One::default()),
            Binder::new(TypeRegistry::new()),
        )
    }

    #[test]
    fn switch_applies_to_next_dispatch_only() {
        let mut router = Router::new("a", modem(b"A"));
        router.register("b", modem(b"B"));

        // Switch queued mid-"dispatch" conceptually -- here simply before
        // the call, since there's no re-entrant callback in this harness.
        assert_eq!(router.dispatch_next(), Some(Event::Ascii('A')));
        router.switch_gate("b");
        assert_eq!(router.current_key(), "a");
        assert_eq!(router.dispatch_next(), Some(Event::Ascii('B')));
        assert_eq!(router.current_key(), "b");
    }
}
