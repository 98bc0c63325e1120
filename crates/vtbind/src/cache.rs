//! A small bounded LRU cache accelerating repeated-event binding lookup.
//!
//! Keys on the event's `__vtdtid__` tag plus a cheap hash of its defining
//! fields (key code, mouse button/position, ...) rather than the full event,
//! so two structurally different concrete events of the same tag never alias.

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use vtinput::event::PosComponent;
use vtinput::{Event, Key, Mouse};

/// The coarse event-family discriminant (`spec.md`'s `__vtdtid__`):
/// `0 = Char, 1 = raw/sequence, 2 = Key, 3 = Mouse, 4 = Reply`.
#[must_use]
pub fn event_tag(event: &Event) -> u8 {
    match event {
        Event::Ascii(_) | Event::Space(_) | Event::Utf8(_) => 0,
        Event::Pasted(_) | Event::ManualEsc(_) | Event::Raw(_) => 1,
        Event::Key(_) => 2,
        Event::Mouse(_) => 3,
        Event::Reply(_) => 4,
    }
}

/// A cheap, non-cryptographic hash of a concrete event's identifying fields.
/// Two events with the same tag and the same defining fields hash equal;
/// it is not required to be collision-free, only cheap and well-distributed
/// enough to bucket the LRU cache.
#[must_use]
pub fn field_hash(event: &Event) -> u64 {
    struct H(u64);
    impl Hasher for H {
        fn finish(&self) -> u64 {
            self.0
        }
        fn write(&mut self, bytes: &[u8]) {
            for &b in bytes {
                self.0 = self.0.wrapping_mul(1_099_511_628_211).wrapping_add(u64::from(b));
            }
        }
    }
    let mut h = H(0xcbf2_9ce4_8422_2325);
    match event {
        Event::Ascii(c) | Event::Space(c) | Event::Utf8(c) => c.hash(&mut h),
        Event::Pasted(s) => s.hash(&mut h),
        Event::ManualEsc(bytes) => bytes.hash(&mut h),
        Event::Raw(raw) => format!("{raw:?}").hash(&mut h),
        Event::Key(key) => hash_key(key, &mut h),
        Event::Mouse(Mouse { button, modifier, x, y }) => {
            button.hash(&mut h);
            modifier.hash(&mut h);
            hash_pos(x, &mut h);
            hash_pos(y, &mut h);
        }
        Event::Reply(reply) => format!("{reply:?}").hash(&mut h),
    }
    h.finish()
}

fn hash_key(key: &Key, h: &mut impl Hasher) {
    match key {
        Key::Nav(k) => {
            0u8.hash(h);
            k.key.hash(h);
            k.modifier.hash(h);
        }
        Key::FKey(k) => {
            1u8.hash(h);
            k.key.hash(h);
            k.modifier.hash(h);
        }
        Key::Mod(k) => {
            2u8.hash(h);
            k.key.hash(h);
            k.modifier.hash(h);
        }
        Key::Pad(k) => {
            3u8.hash(h);
            k.key.hash(h);
        }
        Key::DelIns(k) => {
            4u8.hash(h);
            k.key.hash(h);
            k.modifier.hash(h);
        }
        Key::Ctrl(k) => {
            5u8.hash(h);
            k.key.hash(h);
        }
        Key::Meta(k) => {
            6u8.hash(h);
            k.key.hash(h);
        }
        Key::EscEsc => 7u8.hash(h),
    }
}

fn hash_pos(pos: &PosComponent, h: &mut impl Hasher) {
    match pos {
        PosComponent::Skip => 0u8.hash(h),
        PosComponent::Exact(v) => {
            1u8.hash(h);
            v.hash(h);
        }
        PosComponent::Range(a, b) => {
            2u8.hash(h);
            a.hash(h);
            b.hash(h);
        }
        PosComponent::Highlight(a, b, c) => {
            3u8.hash(h);
            hash_pos(a, h);
            hash_pos(b, h);
            hash_pos(c, h);
        }
    }
}

/// A cache key: the event's tag plus a field hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub tag: u8,
    pub fields: u64,
}

impl CacheKey {
    #[must_use]
    pub fn of(event: &Event) -> Self {
        Self {
            tag: event_tag(event),
            fields: field_hash(event),
        }
    }
}

/// A bounded most-recently-used cache, `~20` entries by default, as
/// `binder.py`'s lookup cache is sized.
pub struct LruCache<V> {
    capacity: usize,
    entries: VecDeque<(CacheKey, V)>,
}

impl<V: Clone> LruCache<V> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        if let Some(pos) = self.entries.iter().position(|(k, _)| k == key) {
            let (k, v) = self.entries.remove(pos).unwrap();
            self.entries.push_front((k, v.clone()));
            Some(v)
        } else {
            None
        }
    }

    pub fn put(&mut self, key: CacheKey, value: V) {
        self.entries.retain(|(k, _)| k != &key);
        self.entries.push_front((key, value));
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }
}

impl<V: Clone> Default for LruCache<V> {
    fn default() -> Self {
        Self::new(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_concrete_events_of_same_tag_hash_differently() {
        let a = Event::Mouse(Mouse::at(0, 0, 1, 1));
        let b = Event::Mouse(Mouse::at(0, 0, 2, 2));
        assert_eq!(event_tag(&a), event_tag(&b));
        assert_ne!(field_hash(&a), field_hash(&b));
    }

    #[test]
    fn lru_evicts_oldest_beyond_capacity() {
        let mut cache: LruCache<i32> = LruCache::new(2);
        let k1 = CacheKey { tag: 0, fields: 1 };
        let k2 = CacheKey { tag: 0, fields: 2 };
        let k3 = CacheKey { tag: 0, fields: 3 };
        cache.put(k1, 1);
        cache.put(k2, 2);
        cache.put(k3, 3);
        assert!(cache.get(&k1).is_none());
        assert_eq!(cache.get(&k2), Some(2));
        assert_eq!(cache.get(&k3), Some(3));
    }

    #[test]
    fn get_promotes_to_front() {
        let mut cache: LruCache<i32> = LruCache::new(2);
        let k1 = CacheKey { tag: 0, fields: 1 };
        let k2 = CacheKey { tag: 0, fields: 2 };
        let k3 = CacheKey { tag: 0, fields: 3 };
        cache.put(k1, 1);
        cache.put(k2, 2);
        cache.get(&k1);
        cache.put(k3, 3);
        assert_eq!(cache.get(&k1), Some(1));
        assert!(cache.get(&k2).is_none());
    }
}
