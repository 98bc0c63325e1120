//! Dispatch layer on top of `vtinput`: bindings, a binder, spam filtering,
//! and a router switching focus between modems.

pub mod binder;
pub mod binding;
pub mod cache;
pub mod error;
pub mod modem;
pub mod router;
pub mod spam;

pub use binder::{Binder, DispatchPolicy, MatchPolicy, ScopePolicy, TypeRegistry};
pub use binding::{Binding, Callback, ChainValue};
pub use error::FrozenBindingError;
pub use modem::{BufferSource, ByteSource, Modem};
pub use router::Router;
pub use spam::{Basic, Nicer, One, Restrictive, SpamPolicy};
