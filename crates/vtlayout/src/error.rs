//! Errors raised by sizing and placement operations.

use core::fmt;

/// Raised when a [`crate::frame::Frame`] cannot fit the remaining space and
/// is not mutable, or when an axis's calculators sum past `axis_total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// An axis's priority-ordered calculators summed past the axis total.
    AxisOverflow { axis_total: i64, summed: i64 },
    /// A frame's padding bands cannot shrink to fit and the frame is not
    /// mutable (`in`-side mutability policy).
    FrameCannotFit { needed: (i64, i64), available: (i64, i64) },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::AxisOverflow { axis_total, summed } => {
                write!(f, "axis calculators summed to {summed}, exceeding the axis total {axis_total}")
            }
            GeometryError::FrameCannotFit { needed, available } => write!(
                f,
                "frame needs {}x{} but only {}x{} is available and the frame is not mutable",
                needed.0, needed.1, available.0, available.1
            ),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Raised by [`crate::grid::Grid`] placement/erasure operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridConfigurationError {
    /// A placement would overlap an already-occupied coordinate.
    Occupied { row: usize, col: usize },
    /// An erase-row/erase-column call would split a cell that spans the
    /// boundary.
    WouldSplitCell { row: usize, col: usize },
    /// The grid has only one remaining row or column on this axis; erasing
    /// it would leave the grid with zero rows/columns.
    LastAxisLine,
    /// A coordinate (row, column, or span) is out of the grid's bounds.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridConfigurationError::Occupied { row, col } => {
                write!(f, "position ({row}, {col}) is already occupied")
            }
            GridConfigurationError::WouldSplitCell { row, col } => {
                write!(f, "erasing through ({row}, {col}) would split a spanning cell")
            }
            GridConfigurationError::LastAxisLine => {
                write!(f, "cannot erase the last remaining row or column")
            }
            GridConfigurationError::OutOfBounds { row, col } => {
                write!(f, "({row}, {col}) is out of the grid's bounds")
            }
        }
    }
}

impl std::error::Error for GridConfigurationError {}
