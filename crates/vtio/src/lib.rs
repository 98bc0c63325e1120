#![warn(clippy::pedantic)]

//! Single-dependency facade over the workspace: escape-sequence values,
//! color resolution, typed VT/xterm constructors, input parsing and
//! dispatch, and widget layout, re-exported under one crate.

pub use vtbind::{
    Basic, Binder, Binding, BufferSource, ByteSource, Callback, ChainValue, DispatchPolicy, FrozenBindingError,
    MatchPolicy, Modem, Nicer, One, Restrictive, Router, ScopePolicy, SpamPolicy, TypeRegistry,
};
pub use vtcolor::{AnsiBase, Color, ColorError};
pub use vtesc::{EscContainer, EscSegment, FormatArg, FormatError};
pub use vtinput::{
    Ctrl, DelIns, Event, FKey, Interpreter, InterpreterConfig, Key, KeyPad, Meta, ModKey, Mouse, NavKey, ParseError,
    PosComponent, RawSeq, Reply,
};
pub use vtlayout::{
    get_visualtarget, Action, BaseSpec, Cell, CellId, Direction, Frame, GeoCalculator, GeometryError, Grid,
    GridConfigurationError, Mutability, Neighbors, Node, Occupant, Orientation, PadSpec, Position, Predicate,
    RangeRule, Rect, RelativeTarget, RemainCompareRule, Size, VisualTarget, Widget,
};
pub use vtseq::{
    AnsiColorSlot, ColorArg, ColorSlot, ColoredUnderline, CtrlByteConversion, CursorNavigate, CursorSave, CursorStyle,
    CharSet, DecPrivateMode, DecPrivateModeId, DecpmHandler, Erase, Fore, Ground, OSColorControl, RequestDecpm,
    RequestDevice, RequestGeo, RequestOsColor, SGRParams, Scroll, TextModification, Wrappable, WindowManipulation,
    DECPM_GATE, STYLE_GATE, sgr_reset, sgr_seqs, sgr_wrap,
};
