//! Terminal input: event types, the byte-at-a-time interpreter, and the
//! reply decoder for `vtseq::requests` queries.

pub mod classify;
pub mod error;
pub mod event;
pub mod keytables;
pub mod modifier;
pub mod parser;
pub mod reply;

pub use error::ParseError;
pub use event::{Ctrl, DelIns, Event, FKey, Key, KeyPad, Meta, ModKey, Mouse, NavKey, PosComponent, RawSeq};
pub use parser::{Interpreter, InterpreterConfig};
pub use reply::Reply;
