//! Coordinate tracing: translating a window `(x, y)` point down through
//! nested grids to the cell under it, and from there to a position relative
//! to that cell's widget area.

use std::collections::HashMap;

use crate::cell::CellId;
use crate::frame::Orientation;
use crate::geometry::{Position, Rect};
use crate::grid::{Grid, Node, Occupant};

/// A point's position relative to a cell's widget area: `None` means
/// inside the widget (`coord` is then widget-local); `Some(orientation)`
/// names the outer quarter the point falls into and `coord` is the signed
/// offset from the widget's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTarget {
    pub outer_quarter: Option<Orientation>,
    pub coord: (i64, i64),
}

impl RelativeTarget {
    /// The spec string form: `""`, `"N"`, `"O"`, `"S"`, `"E"`, or one of the
    /// four corner combinations.
    #[must_use]
    pub fn outer_quarter_str(&self) -> &'static str {
        match self.outer_quarter {
            None => "",
            Some(Orientation::N) => "N",
            Some(Orientation::O) => "O",
            Some(Orientation::S) => "S",
            Some(Orientation::E) => "E",
            Some(Orientation::No) => "NO",
            Some(Orientation::Ne) => "NE",
            Some(Orientation::So) => "SO",
            Some(Orientation::Se) => "SE",
        }
    }
}

fn classify(local: Position, widget_rect: Rect) -> RelativeTarget {
    let left = widget_rect.origin.x;
    let top = widget_rect.origin.y;
    let right = left + widget_rect.size.w;
    let bottom = top + widget_rect.size.h;

    let vert = if local.y < top {
        Some('N')
    } else if local.y >= bottom {
        Some('S')
    } else {
        None
    };
    let horiz = if local.x < left {
        Some('E')
    } else if local.x >= right {
        Some('O')
    } else {
        None
    };
    let outer_quarter = match (vert, horiz) {
        (None, None) => None,
        (Some('N'), None) => Some(Orientation::N),
        (Some('S'), None) => Some(Orientation::S),
        (None, Some('E')) => Some(Orientation::E),
        (None, Some('O')) => Some(Orientation::O),
        (Some('N'), Some('O')) => Some(Orientation::No),
        (Some('N'), Some('E')) => Some(Orientation::Ne),
        (Some('S'), Some('O')) => Some(Orientation::So),
        (Some('S'), Some('E')) => Some(Orientation::Se),
        _ => None,
    };
    RelativeTarget { outer_quarter, coord: (local.x - left, local.y - top) }
}

/// The result of tracing a window coordinate through a grid tree.
///
/// `cell_trace` records `(cell, relative_coord)` for every grid level
/// traversed, ending at either a leaf cell or, if the point didn't land on
/// any occupant, wherever tracing stopped.
pub struct VisualTarget {
    origin: (i64, i64),
    traceable: bool,
    cell_trace: Vec<(CellId, (i64, i64))>,
    memo: HashMap<(CellId, (i64, i64)), RelativeTarget>,
}

impl VisualTarget {
    #[must_use]
    pub fn origin(&self) -> (i64, i64) {
        self.origin
    }

    #[must_use]
    pub fn traceable(&self) -> bool {
        self.traceable
    }

    #[must_use]
    pub fn cell_trace(&self) -> &[(CellId, (i64, i64))] {
        &self.cell_trace
    }

    /// The position of this trace's coordinate at `cell_id` relative to
    /// that cell's widget area, if `cell_id` named a leaf cell somewhere in
    /// the trace. Reads straight from the memo filled in during tracing --
    /// a leaf's relative target is only ever computed once per query, by
    /// the grid level that actually owns it.
    #[must_use]
    pub fn real_target_relative_to_cell(&self, cell_id: CellId) -> Option<RelativeTarget> {
        let origin_coord = self.cell_trace.iter().find(|(id, _)| *id == cell_id).map(|(_, c)| *c)?;
        self.memo.get(&(cell_id, origin_coord)).copied()
    }

    /// Shorthand for `real_target_relative_to_cell` against the trace's
    /// deepest (last-traversed) cell.
    #[must_use]
    pub fn real_target_from_trace(&self) -> Option<RelativeTarget> {
        let &(id, _) = self.cell_trace.last()?;
        self.real_target_relative_to_cell(id)
    }
}

/// Each grid level resolves its own occupant's rectangles, so a leaf
/// nested several grids deep is classified using the local coordinate
/// frame its own grid placed it in, never its ancestors'.
fn trace_into(grid: &Grid, x: i64, y: i64, target: &mut VisualTarget) {
    let Some(rect) = grid.rect_in_window() else { return };
    if !rect.contains(Position::new(x, y)) {
        return;
    }
    let local_x = x - rect.origin.x;
    let local_y = y - rect.origin.y;
    let (Some(col), Some(row)) = (grid.find_col(local_x), grid.find_row(local_y)) else {
        return;
    };
    if let Some(Occupant::Cell(id)) = grid.occupant_at(row, col) {
        target.cell_trace.push((id, (local_x, local_y)));
        match grid.node(id) {
            Node::Leaf(cell) => {
                target.traceable = true;
                if let (Some(cell_rect), Some(widget_rect)) = (cell.rect_in_grid(), cell.rect_in_cell()) {
                    let local = Position::new(local_x - cell_rect.origin.x, local_y - cell_rect.origin.y);
                    target.memo.insert((id, (local_x, local_y)), classify(local, widget_rect));
                }
            }
            Node::Grid(inner) => trace_into(inner, x, y, target),
        }
    }
}

/// Translate window coordinates `(x, y)` into a [`VisualTarget`] by walking
/// down through `grid` (and any grids nested inside it) to the occupant
/// cell under the point.
#[must_use]
pub fn get_visualtarget(grid: &Grid, x: i64, y: i64) -> VisualTarget {
    let mut target = VisualTarget { origin: (x, y), traceable: false, cell_trace: Vec::new(), memo: HashMap::new() };
    trace_into(grid, x, y, &mut target);
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::frame::Frame;
    use crate::geocalc::GeoCalculator;
    use crate::geometry::Size;
    use crate::widget::BlankWidget;

    fn leaf() -> Node {
        let frame = Frame::new(GeoCalculator::remaining(), GeoCalculator::remaining(), ' ');
        Node::Leaf(Cell::new(frame, ' ', Box::new(BlankWidget { null_char: ' ' })))
    }

    fn two_column_grid() -> Grid {
        let rows = vec![GeoCalculator::remaining()];
        let cols = vec![GeoCalculator::fixed(5), GeoCalculator::remaining()];
        let mut g = Grid::new(rows, cols, ' ');
        g.place_cell(0..1, 0..1, leaf()).unwrap();
        g.place_cell(0..1, 1..2, leaf()).unwrap();
        g.resize(Size::new(10, 4)).unwrap();
        g.place_at(Position::new(0, 0), Position::new(0, 0));
        g
    }

    #[test]
    fn point_inside_widget_traces_to_the_leaf_with_no_outer_quarter() {
        let g = two_column_grid();
        let t = get_visualtarget(&g, 7, 1);
        assert!(t.traceable());
        assert_eq!(t.cell_trace().len(), 1);
        let rel = t.real_target_from_trace().unwrap();
        assert_eq!(rel.outer_quarter_str(), "");
    }

    #[test]
    fn point_outside_the_grid_is_not_traceable() {
        let g = two_column_grid();
        let t = get_visualtarget(&g, 50, 50);
        assert!(!t.traceable());
        assert!(t.cell_trace().is_empty());
        assert_eq!(t.origin(), (50, 50));
    }

    #[test]
    fn nested_grid_produces_a_two_level_trace() {
        let inner_rows = vec![GeoCalculator::remaining()];
        let inner_cols = vec![GeoCalculator::remaining()];
        let mut inner = Grid::new(inner_rows, inner_cols, ' ');
        inner.place_cell(0..1, 0..1, leaf()).unwrap();

        let outer_rows = vec![GeoCalculator::remaining()];
        let outer_cols = vec![GeoCalculator::remaining()];
        let mut outer = Grid::new(outer_rows, outer_cols, ' ');
        outer.place_cell(0..1, 0..1, Node::Grid(Box::new(inner))).unwrap();
        outer.resize(Size::new(10, 4)).unwrap();
        outer.place_at(Position::new(0, 0), Position::new(0, 0));

        let t = get_visualtarget(&outer, 3, 2);
        assert!(t.traceable());
        assert_eq!(t.cell_trace().len(), 2);
        let rel = t.real_target_from_trace().unwrap();
        assert_eq!(rel.outer_quarter_str(), "");
    }
}
