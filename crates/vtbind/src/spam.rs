//! Spam handlers: small state machines the [`crate::modem::Modem`] loop runs
//! every completed event through before forwarding it to a [`crate::binder::Binder`].
//!
//! Never reorders events -- a policy may only drop.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use vtinput::Event;

use crate::cache::event_tag;

/// `feed` receives the event and whether the modem's input pipe is currently
/// non-empty (more bytes already buffered, i.e. events are arriving faster
/// than they're consumed); returns `Some(event)` to admit it, `None` to drop.
pub trait SpamPolicy: Send {
    fn feed(&mut self, event: Event, pipe_non_empty: bool) -> Option<Event>;
}

/// After a configurable dwell since the last distinct event, drop up to `N`
/// identical repeats of the same event.
pub struct Basic {
    dwell: Duration,
    max_repeats: usize,
    last: Option<(Event, Instant)>,
    repeats: usize,
}

impl Basic {
    #[must_use]
    pub fn new(dwell: Duration, max_repeats: usize) -> Self {
        Self {
            dwell,
            max_repeats,
            last: None,
            repeats: 0,
        }
    }
}

impl SpamPolicy for Basic {
    fn feed(&mut self, event: Event, _pipe_non_empty: bool) -> Option<Event> {
        let now = Instant::now();
        match &self.last {
            Some((prev, at)) if prev == &event => {
                if now.duration_since(*at) < self.dwell {
                    self.last = Some((event.clone(), now));
                    self.repeats = 0;
                    return Some(event);
                }
                self.repeats += 1;
                self.last = Some((event, now));
                if self.repeats > self.max_repeats {
                    None
                } else {
                    self.last.as_ref().map(|(e, _)| e.clone())
                }
            }
            _ => {
                self.last = Some((event.clone(), now));
                self.repeats = 0;
                Some(event)
            }
        }
    }
}

/// Always drops repeats of configured event tags while the pipe is
/// non-empty; once the pipe drains, the next repeat is always delivered.
pub struct Nicer {
    watched_tags: HashSet<u8>,
    last: Option<Event>,
}

impl Nicer {
    #[must_use]
    pub fn new(watched_tags: HashSet<u8>) -> Self {
        Self { watched_tags, last: None }
    }
}

impl SpamPolicy for Nicer {
    fn feed(&mut self, event: Event, pipe_non_empty: bool) -> Option<Event> {
        let is_repeat = self.last.as_ref() == Some(&event);
        self.last = Some(event.clone());
        if pipe_non_empty && is_repeat && self.watched_tags.contains(&event_tag(&event)) {
            None
        } else {
            Some(event)
        }
    }
}

/// Only admits configured event tags when the pipe is empty; while the pipe
/// is non-empty every event is admitted.
pub struct Restrictive {
    admitted_tags: HashSet<u8>,
}

impl Restrictive {
    #[must_use]
    pub fn new(admitted_tags: HashSet<u8>) -> Self {
        Self { admitted_tags }
    }
}

impl SpamPolicy for Restrictive {
    fn feed(&mut self, event: Event, pipe_non_empty: bool) -> Option<Event> {
        if pipe_non_empty || self.admitted_tags.contains(&event_tag(&event)) {
            Some(event)
        } else {
            None
        }
    }
}

/// Admits one event at a time; drops every further event until the pipe
/// drains, then admits the next one.
#[derive(Default)]
pub struct One {
    admitted_since_drain: bool,
}

impl SpamPolicy for One {
    fn feed(&mut self, event: Event, pipe_non_empty: bool) -> Option<Event> {
        if !pipe_non_empty {
            self.admitted_since_drain = false;
        }
        if self.admitted_since_drain {
            None
        } else {
            self.admitted_since_drain = true;
            Some(event)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii(c: char) -> Event {
        Event::Ascii(c)
    }

    #[test]
    fn basic_drops_beyond_max_repeats_once_dwell_elapsed() {
        let mut policy = Basic::new(Duration::from_secs(0), 1);
        assert_eq!(policy.feed(ascii('a'), false), Some(ascii('a')));
        assert_eq!(policy.feed(ascii('a'), false), Some(ascii('a')));
        assert_eq!(policy.feed(ascii('a'), false), None);
    }

    #[test]
    fn nicer_drops_only_while_pipe_non_empty() {
        let mut tags = HashSet::new();
        tags.insert(event_tag(&ascii('a')));
        let mut policy = Nicer::new(tags);
        policy.feed(ascii('a'), false);
        assert_eq!(policy.feed(ascii('a'), true), None);
        assert_eq!(policy.feed(ascii('a'), false), Some(ascii('a')));
    }

    #[test]
    fn restrictive_admits_configured_types_when_empty() {
        let mut tags = HashSet::new();
        tags.insert(event_tag(&ascii('a')));
        let mut policy = Restrictive::new(tags);
        assert_eq!(policy.feed(ascii('a'), false), Some(ascii('a')));
        assert_eq!(policy.feed(Event::Space(' '), false), None);
        assert_eq!(policy.feed(Event::Space(' '), true), Some(Event::Space(' ')));
    }

    #[test]
    fn one_admits_single_event_until_drain() {
        let mut policy = One::default();
        assert_eq!(policy.feed(ascii('a'), true), Some(ascii('a')));
        assert_eq!(policy.feed(ascii('b'), true), None);
        assert_eq!(policy.feed(ascii('c'), false), Some(ascii('c')));
    }
}
