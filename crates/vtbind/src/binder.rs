//! [`Binder`]: a two-level dispatch table mapping concrete events to
//! callback chains.
//!
//! One cache holds bindings registered on a specific *instance* (this
//! binder); a second, shared cache holds bindings registered on a *type*
//! (shared across every binder that opts in, e.g. "every widget reacts to
//! Ctrl+C"). Both are keyed by the event's `__vtdtid__` tag.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use vtinput::Event;

use crate::binding::{Binding, ChainValue};
use crate::cache::{CacheKey, LruCache, event_tag};

/// Whether dispatch stops at the first matching binding or runs every one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    FirstMatch,
    AllMatches,
}

/// Which binding sources participate, and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopePolicy {
    InstanceOnly,
    InstanceThenType,
    TypeThenInstance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPolicy {
    pub matches: MatchPolicy,
    pub scope: ScopePolicy,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            matches: MatchPolicy::AllMatches,
            scope: ScopePolicy::InstanceThenType,
        }
    }
}

/// A process-wide (or otherwise shared) registry of bindings registered on
/// an event *type* rather than a particular binder instance.
#[derive(Clone, Default)]
pub struct TypeRegistry(Arc<Mutex<HashMap<u8, Vec<Binding>>>>);

impl TypeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, binding: Binding) {
        let tag = event_tag(binding.reference());
        self.0.lock().unwrap().entry(tag).or_default().push(binding);
    }

    fn dispatch_tag(&self, tag: u8, event: &Event, policy: MatchPolicy, out: &mut Vec<ChainValue>) {
        let mut registry = self.0.lock().unwrap();
        let Some(bindings) = registry.get_mut(&tag) else { return };
        for binding in bindings.iter_mut().filter(|b| b.matches(event)) {
            out.push(binding.dispatch(event));
            if policy == MatchPolicy::FirstMatch {
                return;
            }
        }
    }
}

/// Per-modem dispatch table: instance bindings plus a view onto a shared
/// [`TypeRegistry`], an [`LruCache`] accelerating repeated-event lookup, and
/// a configurable [`DispatchPolicy`].
pub struct Binder {
    instance: HashMap<u8, Vec<Binding>>,
    types: TypeRegistry,
    policy: DispatchPolicy,
    cache: LruCache<()>,
}

impl Binder {
    #[must_use]
    pub fn new(types: TypeRegistry) -> Self {
        Self {
            instance: HashMap::new(),
            types,
            policy: DispatchPolicy::default(),
            cache: LruCache::new(20),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn bind(&mut self, binding: Binding) {
        let tag = event_tag(binding.reference());
        self.instance.entry(tag).or_default().push(binding);
    }

    /// Dispatch `event` to every matching binding per the configured
    /// [`ScopePolicy`]/[`MatchPolicy`], returning each fired callback chain's
    /// final [`ChainValue`] in firing order.
    pub fn dispatch(&mut self, event: &Event) -> Vec<ChainValue> {
        // The LRU only records "this event tag+fields was looked up
        // recently" -- instance bindings can change between calls (append/
        // insert/replace), so the cache is a lookup accelerant, not a result
        // cache: a hit just means we can skip re-hashing the key.
        self.cache.put(CacheKey::of(event), ());

        let mut out = Vec::new();
        let tag = event_tag(event);
        let run_instance = |out: &mut Vec<ChainValue>, this: &mut Self| {
            if let Some(bindings) = this.instance.get_mut(&tag) {
                for binding in bindings.iter_mut().filter(|b| b.matches(event)) {
                    out.push(binding.dispatch(event));
                    if this.policy.matches == MatchPolicy::FirstMatch {
                        return true;
                    }
                }
            }
            false
        };

        match self.policy.scope {
            ScopePolicy::InstanceOnly => {
                run_instance(&mut out, self);
            }
            ScopePolicy::InstanceThenType => {
                let stop = run_instance(&mut out, self);
                if !(stop && self.policy.matches == MatchPolicy::FirstMatch) {
                    self.types.dispatch_tag(tag, event, self.policy.matches, &mut out);
                }
            }
            ScopePolicy::TypeThenInstance => {
                self.types.dispatch_tag(tag, event, self.policy.matches, &mut out);
                let already_matched = !out.is_empty();
                if !(already_matched && self.policy.matches == MatchPolicy::FirstMatch) {
                    run_instance(&mut out, self);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtinput::event::{NavKey, nav_key};

    fn nav(key: i32) -> Event {
        Event::Key(vtinput::Key::Nav(NavKey::new(Some(key), None)))
    }

    #[test]
    fn instance_and_type_both_fire_by_default() {
        let types = TypeRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let mut type_binding = Binding::new(nav(nav_key::A_UP));
        let s1 = seen.clone();
        type_binding
            .append(Box::new(move |_, v| {
                s1.lock().unwrap().push("type");
                v
            }))
            .unwrap();
        types.bind(type_binding);

        let mut binder = Binder::new(types);
        let mut instance_binding = Binding::new(nav(nav_key::A_UP));
        let s2 = seen.clone();
        instance_binding
            .append(Box::new(move |_, v| {
                s2.lock().unwrap().push("instance");
                v
            }))
            .unwrap();
        binder.bind(instance_binding);

        binder.dispatch(&nav(nav_key::A_UP));
        assert_eq!(*seen.lock().unwrap(), vec!["instance", "type"]);
    }

    #[test]
    fn first_match_stops_after_one_binding() {
        let mut binder = Binder::new(TypeRegistry::new()).with_policy(DispatchPolicy {
            matches: MatchPolicy::FirstMatch,
            scope: ScopePolicy::InstanceOnly,
        });
        let mut b1 = Binding::new(nav(nav_key::A_UP));
        b1.append(Box::new(|_, _| Some(Box::new(1i32) as Box<dyn std::any::Any + Send>)))
            .unwrap();
        let mut b2 = Binding::new(nav(nav_key::A_UP));
        b2.append(Box::new(|_, _| Some(Box::new(2i32) as Box<dyn std::any::Any + Send>)))
            .unwrap();
        binder.bind(b1);
        binder.bind(b2);
        let results = binder.dispatch(&nav(nav_key::A_UP));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn instance_only_scope_skips_type_registry() {
        let types = TypeRegistry::new();
        let mut type_binding = Binding::new(nav(nav_key::A_UP));
        type_binding.append(Box::new(|_, v| v)).unwrap();
        types.bind(type_binding);

        let mut binder = Binder::new(types).with_policy(DispatchPolicy {
            matches: MatchPolicy::AllMatches,
            scope: ScopePolicy::InstanceOnly,
        });
        let results = binder.dispatch(&nav(nav_key::A_UP));
        assert!(results.is_empty());
    }
}
