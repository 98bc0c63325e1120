//! A [`Binding`] pairs a reference [`vtinput::Event`] with the callback chain
//! run when a concrete event matches it.

use std::any::Any;

use vtinput::Event;

use crate::error::FrozenBindingError;

/// Opaque value threaded between chained callbacks: each callback receives
/// the previous callback's return value and may hand back its own.
pub type ChainValue = Option<Box<dyn Any + Send>>;

/// A single dispatch callback. Receives the concrete event and the previous
/// callback's [`ChainValue`]; returns its own.
pub type Callback = Box<dyn FnMut(&Event, ChainValue) -> ChainValue + Send>;

/// Either a freely mutable callback list or one frozen by the resource-saving
/// mode -- frozen lists reject every mutating operation.
enum CallbackList {
    Mutable(Vec<Callback>),
    Frozen(Vec<Callback>),
}

impl CallbackList {
    fn as_slice_mut(&mut self) -> &mut [Callback] {
        match self {
            CallbackList::Mutable(v) | CallbackList::Frozen(v) => v,
        }
    }
}

/// `(reference_event, ordered_callbacks, protected_prefix_callbacks)`.
///
/// Dispatch runs the protected preamble first, in insertion order, then the
/// ordered list in its configured order; each callback sees the previous
/// callback's return value.
pub struct Binding {
    reference: Event,
    protected: Vec<Callback>,
    list: CallbackList,
}

impl Binding {
    #[must_use]
    pub fn new(reference: Event) -> Self {
        Self {
            reference,
            protected: Vec::new(),
            list: CallbackList::Mutable(Vec::new()),
        }
    }

    #[must_use]
    pub fn reference(&self) -> &Event {
        &self.reference
    }

    /// Whether `concrete` matches this binding's reference event. Delegates
    /// to [`Event`]'s wildcard-aware `PartialEq`.
    #[must_use]
    pub fn matches(&self, concrete: &Event) -> bool {
        &self.reference == concrete
    }

    /// Protected callbacks always run, in insertion order, ahead of the
    /// ordered list, and are immune to `set_exclusive`.
    pub fn add_protected(&mut self, callback: Callback) {
        self.protected.push(callback);
    }

    pub fn append(&mut self, callback: Callback) -> Result<(), FrozenBindingError> {
        match &mut self.list {
            CallbackList::Mutable(v) => {
                v.push(callback);
                Ok(())
            }
            CallbackList::Frozen(_) => Err(FrozenBindingError),
        }
    }

    pub fn insert(&mut self, index: usize, callback: Callback) -> Result<(), FrozenBindingError> {
        match &mut self.list {
            CallbackList::Mutable(v) => {
                let at = index.min(v.len());
                v.insert(at, callback);
                Ok(())
            }
            CallbackList::Frozen(_) => Err(FrozenBindingError),
        }
    }

    pub fn replace(&mut self, index: usize, callback: Callback) -> Result<(), FrozenBindingError> {
        match &mut self.list {
            CallbackList::Mutable(v) => {
                if let Some(slot) = v.get_mut(index) {
                    *slot = callback;
                }
                Ok(())
            }
            CallbackList::Frozen(_) => Err(FrozenBindingError),
        }
    }

    /// Clear the ordered list and set it to hold exactly `callback`.
    pub fn set_exclusive(&mut self, callback: Callback) -> Result<(), FrozenBindingError> {
        match &mut self.list {
            CallbackList::Mutable(v) => {
                v.clear();
                v.push(callback);
                Ok(())
            }
            CallbackList::Frozen(_) => Err(FrozenBindingError),
        }
    }

    /// Resource-saving mode: freeze the ordered list into its current
    /// contents. Subsequent mutation calls return [`FrozenBindingError`].
    pub fn freeze(&mut self) {
        if let CallbackList::Mutable(v) = &mut self.list {
            let taken = std::mem::take(v);
            self.list = CallbackList::Frozen(taken);
        }
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        matches!(self.list, CallbackList::Frozen(_))
    }

    /// Run the protected preamble then the ordered list against `event`,
    /// threading the chain value through every callback.
    pub fn dispatch(&mut self, event: &Event) -> ChainValue {
        let mut value: ChainValue = None;
        for cb in &mut self.protected {
            value = cb(event, value);
        }
        for cb in self.list.as_slice_mut() {
            value = cb(event, value);
        }
        value
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
    fn protected_runs_before_ordered() {
        let mut binding = Binding::new(nav(nav_key::A_UP));
        let order = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let o1 = order.clone();
        binding.add_protected(Box::new(move |_, v| {
            o1.lock().unwrap().push("protected");
            v
        }));
        let o2 = order.clone();
        binding
            .append(Box::new(move |_, v| {
                o2.lock().unwrap().push("ordered");
                v
            }))
            .unwrap();
        binding.dispatch(&nav(nav_key::A_UP));
        assert_eq!(*order.lock().unwrap(), vec!["protected", "ordered"]);
    }

    #[test]
    fn frozen_rejects_mutation() {
        let mut binding = Binding::new(nav(nav_key::A_UP));
        binding.append(Box::new(|_, v| v)).unwrap();
        binding.freeze();
        assert!(binding.append(Box::new(|_, v| v)).is_err());
        assert!(binding.is_frozen());
    }

    #[test]
    fn set_exclusive_replaces_whole_list() {
        let mut binding = Binding::new(nav(nav_key::A_UP));
        binding.append(Box::new(|_, v| v)).unwrap();
        binding.append(Box::new(|_, v| v)).unwrap();
        binding.set_exclusive(Box::new(|_, v| v)).unwrap();
        match &binding.list {
            CallbackList::Mutable(v) => assert_eq!(v.len(), 1),
            CallbackList::Frozen(_) => panic!("should still be mutable"),
        }
    }

    #[test]
    fn wildcard_reference_matches_any_modifier() {
        let binding = Binding::new(Event::Key(vtinput::Key::Nav(NavKey::new(Some(nav_key::A_UP), None))));
        assert!(binding.matches(&nav(nav_key::A_UP)));
        assert!(!binding.matches(&nav(nav_key::A_DOWN)));
    }
}
