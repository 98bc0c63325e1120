//! Sizing and layout: calculators for one axis position, framed widget
//! cells, grids that arrange them, and coordinate tracing back from a
//! window point to the cell underneath it.

pub mod cell;
pub mod error;
pub mod frame;
pub mod geocalc;
pub mod geometry;
pub mod grid;
pub mod target;
pub mod widget;

pub use cell::{Cell, CellId};
pub use error::{GeometryError, GridConfigurationError};
pub use frame::{Frame, Mutability, Orientation, PadSpec};
pub use geocalc::{Action, BaseSpec, GeoCalculator, Predicate, RangeRule, RemainCompareRule};
pub use geometry::{Position, Rect, Size};
pub use grid::{Direction, Grid, Neighbors, Node, Occupant};
pub use target::{get_visualtarget, RelativeTarget, VisualTarget};
pub use widget::{BlankWidget, Widget};
