//! [`Grid`]: an arena of [`Cell`]s (and nested grids) addressed by row/column
//! lines, each governed by a [`GeoCalculator`] and evaluated in a
//! caller-chosen priority order before being stamped into spatial order.
//!
//! Cells and nested grids live in a private [`Arena`] and are referenced by
//! [`CellId`] handles rather than by `Rc`, so a grid containing grids never
//! needs cyclic reference counting.

use std::collections::HashMap;
use std::io::{self, Write};
use std::ops::Range;

use crate::cell::{Cell, CellId};
use crate::error::{GeometryError, GridConfigurationError};
use crate::geocalc::GeoCalculator;
use crate::geometry::{Position, Rect, Size};

/// What occupies one matrix position: either nothing, or a handle to a
/// placed [`Cell`]/nested [`Grid`]. A `NullCell` still participates in
/// neighbor wiring -- it is a real occupant, just an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    NullCell,
    Cell(CellId),
}

/// A node owned by a grid's [`Arena`]: either a leaf widget cell or a
/// nested grid.
pub enum Node {
    Leaf(Cell),
    Grid(Box<Grid>),
}

#[derive(Default)]
struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    fn insert(&mut self, node: Node) -> CellId {
        let id = CellId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn get(&self, id: CellId) -> &Node {
        &self.nodes[id.0]
    }

    fn get_mut(&mut self, id: CellId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

/// The cardinal direction of a boundary-neighbor link or a partial erase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    O,
    S,
    E,
}

/// The boundary neighbors wired for one placed cell by [`Grid::make_grid`].
/// Only directions with an actual neighbor are present -- a missing
/// direction is omitted rather than recorded as `None`.
#[derive(Debug, Clone, Default)]
pub struct Neighbors(pub Vec<(Direction, Occupant)>);

/// `calcs` is in spatial order with contiguous, gap-free stamped ranges
/// (guaranteed by [`evaluate_axis`]'s second pass), so the line containing
/// `coord` is found by the first index whose range end exceeds it.
fn find_axis_line(calcs: &[GeoCalculator], coord: i64) -> Option<usize> {
    let idx = calcs.partition_point(|c| c.grid_char_range().is_some_and(|(_, end)| end <= coord));
    let (start, end) = calcs.get(idx)?.grid_char_range()?;
    (coord >= start && coord < end).then_some(idx)
}

fn evaluate_axis(calcs: &mut [GeoCalculator], priority: &[usize], axis_total: i64) -> Result<Vec<i64>, GeometryError> {
    let mut sizes = vec![0i64; calcs.len()];
    let mut remaining = axis_total;
    for &idx in priority {
        let v = calcs[idx].call(axis_total, remaining);
        sizes[idx] = v;
        remaining -= v;
    }
    let summed: i64 = sizes.iter().sum();
    if summed > axis_total {
        return Err(GeometryError::AxisOverflow { axis_total, summed });
    }
    let mut start = 0i64;
    for (idx, calc) in calcs.iter_mut().enumerate() {
        let v = sizes[idx];
        calc.stamp_range(start, start + v);
        start += v;
    }
    Ok(sizes)
}

/// A rectangular arrangement of [`Cell`]s (and nested grids) addressed by
/// row/column index.
pub struct Grid {
    rows: Vec<GeoCalculator>,
    cols: Vec<GeoCalculator>,
    row_priority: Vec<usize>,
    col_priority: Vec<usize>,
    matrix: Vec<Vec<Occupant>>,
    arena: Arena,
    spans: HashMap<CellId, (Range<usize>, Range<usize>)>,
    neighbors: HashMap<CellId, Neighbors>,
    pub null_char: char,
    cell_size: Option<Size>,
    rect_in_grid: Option<Rect>,
    rect_in_window: Option<Rect>,
}

impl Grid {
    /// Build an empty grid with one [`GeoCalculator`] per row and per
    /// column line, evaluated in declaration order by default.
    #[must_use]
    pub fn new(rows: Vec<GeoCalculator>, cols: Vec<GeoCalculator>, null_char: char) -> Self {
        let (nrows, ncols) = (rows.len(), cols.len());
        Self {
            row_priority: (0..nrows).collect(),
            col_priority: (0..ncols).collect(),
            matrix: vec![vec![Occupant::NullCell; ncols]; nrows],
            rows,
            cols,
            arena: Arena::default(),
            spans: HashMap::new(),
            neighbors: HashMap::new(),
            null_char,
            cell_size: None,
            rect_in_grid: None,
            rect_in_window: None,
        }
    }

    #[must_use]
    pub fn with_row_priority(mut self, order: Vec<usize>) -> Self {
        self.row_priority = order;
        self
    }

    #[must_use]
    pub fn with_col_priority(mut self, order: Vec<usize>) -> Self {
        self.col_priority = order;
        self
    }

    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    #[must_use]
    pub fn cell_size(&self) -> Option<Size> {
        self.cell_size
    }

    #[must_use]
    pub fn rect_in_window(&self) -> Option<Rect> {
        self.rect_in_window
    }

    #[must_use]
    pub fn rect_in_grid(&self) -> Option<Rect> {
        self.rect_in_grid
    }

    #[must_use]
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<Occupant> {
        self.matrix.get(row).and_then(|r| r.get(col)).copied()
    }

    #[must_use]
    pub fn neighbors_of(&self, id: CellId) -> Option<&Neighbors> {
        self.neighbors.get(&id)
    }

    #[must_use]
    pub fn leaf(&self, id: CellId) -> Option<&Cell> {
        match self.arena.get(id) {
            Node::Leaf(cell) => Some(cell),
            Node::Grid(_) => None,
        }
    }

    pub(crate) fn node(&self, id: CellId) -> &Node {
        self.arena.get(id)
    }

    /// Binary-search the column axis by `grid_char_range().end` for the
    /// line whose stamped range contains `local_x`.
    #[must_use]
    pub fn find_col(&self, local_x: i64) -> Option<usize> {
        find_axis_line(&self.cols, local_x)
    }

    /// Binary-search the row axis by `grid_char_range().end` for the line
    /// whose stamped range contains `local_y`.
    #[must_use]
    pub fn find_row(&self, local_y: i64) -> Option<usize> {
        find_axis_line(&self.rows, local_y)
    }

    fn bounds_check(&self, row: usize, col: usize) -> Result<(), GridConfigurationError> {
        if row >= self.rows.len() || col >= self.cols.len() {
            return Err(GridConfigurationError::OutOfBounds { row, col });
        }
        Ok(())
    }

    /// Place `node` into the rectangle `rows x cols`, which must be
    /// entirely [`Occupant::NullCell`].
    ///
    /// # Errors
    ///
    /// Returns [`GridConfigurationError::OutOfBounds`] if the rectangle
    /// exceeds the grid's axes, or [`GridConfigurationError::Occupied`] if
    /// any position in it already holds a cell.
    pub fn place_cell(&mut self, rows: Range<usize>, cols: Range<usize>, node: Node) -> Result<CellId, GridConfigurationError> {
        if rows.start >= rows.end || cols.start >= cols.end || rows.end > self.rows.len() || cols.end > self.cols.len() {
            return Err(GridConfigurationError::OutOfBounds { row: rows.start, col: cols.start });
        }
        for r in rows.clone() {
            for c in cols.clone() {
                if matches!(self.matrix[r][c], Occupant::Cell(_)) {
                    return Err(GridConfigurationError::Occupied { row: r, col: c });
                }
            }
        }
        let id = self.arena.insert(node);
        for r in rows.clone() {
            for c in cols.clone() {
                self.matrix[r][c] = Occupant::Cell(id);
            }
        }
        self.spans.insert(id, (rows, cols));
        Ok(id)
    }

    /// Null out the cell occupying `(row, col)` entirely, or, when
    /// `direction` is given, only the run of cells from `(row, col)` up to
    /// the grid's edge in that direction. Partial erasure operates on raw
    /// matrix coordinates and does not retract a still-spanning cell's
    /// bookkeeping in [`Grid::spans`]-equivalent state; call
    /// [`Grid::make_grid`] again afterward to refresh neighbor wiring.
    ///
    /// # Errors
    ///
    /// Returns [`GridConfigurationError::OutOfBounds`] if `(row, col)` is
    /// outside the grid.
    pub fn erase_cell(&mut self, row: usize, col: usize, direction: Option<Direction>) -> Result<(), GridConfigurationError> {
        self.bounds_check(row, col)?;
        match direction {
            None => {
                if let Occupant::Cell(id) = self.matrix[row][col] {
                    if let Some((rows, cols)) = self.spans.remove(&id) {
                        for r in rows {
                            for c in cols.clone() {
                                self.matrix[r][c] = Occupant::NullCell;
                            }
                        }
                    }
                    self.neighbors.remove(&id);
                }
            }
            Some(dir) => {
                let coords: Vec<(usize, usize)> = match dir {
                    Direction::N => (0..=row).rev().map(|r| (r, col)).collect(),
                    Direction::S => (row..self.rows.len()).map(|r| (r, col)).collect(),
                    Direction::E => (0..=col).rev().map(|c| (row, c)).collect(),
                    Direction::O => (col..self.cols.len()).map(|c| (row, c)).collect(),
                };
                for (r, c) in coords {
                    self.matrix[r][c] = Occupant::NullCell;
                }
            }
        }
        Ok(())
    }

    /// Remove row `row` entirely, shifting every later row down by one.
    ///
    /// # Errors
    ///
    /// Returns [`GridConfigurationError::LastAxisLine`] if this is the
    /// grid's only row, [`GridConfigurationError::OutOfBounds`] if `row`
    /// doesn't exist, or [`GridConfigurationError::WouldSplitCell`] if a
    /// placed cell spans more than this one row and would be torn in half.
    pub fn erase_row(&mut self, row: usize) -> Result<(), GridConfigurationError> {
        if self.rows.len() <= 1 {
            return Err(GridConfigurationError::LastAxisLine);
        }
        if row >= self.rows.len() {
            return Err(GridConfigurationError::OutOfBounds { row, col: 0 });
        }
        for (rows, cols) in self.spans.values() {
            if rows.contains(&row) && rows.len() > 1 {
                return Err(GridConfigurationError::WouldSplitCell { row, col: cols.start });
            }
        }
        self.rows.remove(row);
        self.matrix.remove(row);
        self.spans = self
            .spans
            .iter()
            .filter(|(_, (rows, _))| !(rows.len() == 1 && rows.start == row))
            .map(|(&id, (rows, cols))| {
                let shifted = if rows.start > row { (rows.start - 1)..(rows.end - 1) } else { rows.clone() };
                (id, (shifted, cols.clone()))
            })
            .collect();
        if let Some(pos) = self.row_priority.iter().position(|&r| r == row) {
            self.row_priority.remove(pos);
        }
        for p in &mut self.row_priority {
            if *p > row {
                *p -= 1;
            }
        }
        Ok(())
    }

    /// Remove column `col` entirely, shifting every later column left by one.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::erase_row`], transposed onto columns.
    pub fn erase_column(&mut self, col: usize) -> Result<(), GridConfigurationError> {
        if self.cols.len() <= 1 {
            return Err(GridConfigurationError::LastAxisLine);
        }
        if col >= self.cols.len() {
            return Err(GridConfigurationError::OutOfBounds { row: 0, col });
        }
        for (rows, cols) in self.spans.values() {
            if cols.contains(&col) && cols.len() > 1 {
                return Err(GridConfigurationError::WouldSplitCell { row: rows.start, col });
            }
        }
        self.cols.remove(col);
        for row in &mut self.matrix {
            row.remove(col);
        }
        self.spans = self
            .spans
            .iter()
            .filter(|(_, (_, cols))| !(cols.len() == 1 && cols.start == col))
            .map(|(&id, (rows, cols))| {
                let shifted = if cols.start > col { (cols.start - 1)..(cols.end - 1) } else { cols.clone() };
                (id, (rows.clone(), shifted))
            })
            .collect();
        if let Some(pos) = self.col_priority.iter().position(|&c| c == col) {
            self.col_priority.remove(pos);
        }
        for p in &mut self.col_priority {
            if *p > col {
                *p -= 1;
            }
        }
        Ok(())
    }

    /// Wire the boundary-neighbor map for every placed cell. A 1x1 grid
    /// gets no neighbors; a 1xN or Nx1 grid only gets the chain along its
    /// one non-degenerate axis; larger grids get all four directions on
    /// interior cells. Call this again after any structural edit
    /// ([`Grid::place_cell`], [`Grid::erase_cell`], [`Grid::erase_row`],
    /// [`Grid::erase_column`]) that should be reflected in neighbor lookups.
    pub fn make_grid(&mut self) {
        self.neighbors.clear();
        let spans: Vec<(CellId, Range<usize>, Range<usize>)> =
            self.spans.iter().map(|(&id, (r, c))| (id, r.clone(), c.clone())).collect();
        for (id, rows, cols) in spans {
            let mut list = Vec::new();
            if rows.start > 0 {
                if let Some(occ) = self.occupant_at(rows.start - 1, cols.start) {
                    list.push((Direction::N, occ));
                }
            }
            if rows.end < self.matrix.len() {
                if let Some(occ) = self.occupant_at(rows.end, cols.start) {
                    list.push((Direction::S, occ));
                }
            }
            if cols.start > 0 {
                if let Some(occ) = self.occupant_at(rows.start, cols.start - 1) {
                    list.push((Direction::E, occ));
                }
            }
            let row_len = self.matrix.get(rows.start).map_or(0, Vec::len);
            if cols.end < row_len {
                if let Some(occ) = self.occupant_at(rows.start, cols.end) {
                    list.push((Direction::O, occ));
                }
            }
            self.neighbors.insert(id, Neighbors(list));
        }
    }

    fn span_rect(&self, rows: &Range<usize>, cols: &Range<usize>) -> Rect {
        let col_start = self.cols[cols.start].grid_char_range().map_or(0, |r| r.0);
        let col_end = self.cols[cols.end - 1].grid_char_range().map_or(0, |r| r.1);
        let row_start = self.rows[rows.start].grid_char_range().map_or(0, |r| r.0);
        let row_end = self.rows[rows.end - 1].grid_char_range().map_or(0, |r| r.1);
        Rect::new(Position::new(col_start, row_start), Size::new(col_end - col_start, row_end - row_start))
    }

    fn placed_spans(&self) -> Vec<(CellId, Range<usize>, Range<usize>)> {
        self.spans.iter().map(|(&id, (r, c))| (id, r.clone(), c.clone())).collect()
    }

    /// Evaluate both axes against `size` (priority order for sizing, then
    /// spatial order for range stamping) and recursively resize every
    /// placed cell and nested grid to its span's rectangle.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from either axis's evaluation or from a
    /// child's own `resize`.
    pub fn resize(&mut self, size: Size) -> Result<(), GeometryError> {
        evaluate_axis(&mut self.cols, &self.col_priority, size.w)?;
        evaluate_axis(&mut self.rows, &self.row_priority, size.h)?;
        self.cell_size = Some(size);
        for (id, rows, cols) in self.placed_spans() {
            let rect = self.span_rect(&rows, &cols);
            match self.arena.get_mut(id) {
                Node::Leaf(cell) => cell.resize(rect.size)?,
                Node::Grid(g) => g.resize(rect.size)?,
            }
        }
        Ok(())
    }

    /// Stamp this grid's own window placement, then recurse into every
    /// placed cell/nested grid with its span's origin translated through
    /// `grid_origin`/`window_origin`.
    pub fn place_at(&mut self, grid_origin: Position, window_origin: Position) {
        let Some(size) = self.cell_size else { return };
        self.rect_in_grid = Some(Rect::new(grid_origin, size));
        let abs = Position::new(window_origin.x + grid_origin.x, window_origin.y + grid_origin.y);
        self.rect_in_window = Some(Rect::new(abs, size));
        for (id, rows, cols) in self.placed_spans() {
            let rect = self.span_rect(&rows, &cols);
            match self.arena.get_mut(id) {
                Node::Leaf(cell) => {
                    cell.place_at(rect.origin, abs);
                    cell.new_display();
                    cell.new_cursor();
                }
                Node::Grid(g) => g.place_at(rect.origin, abs),
            }
        }
    }

    /// Print every placed cell and nested grid in arbitrary order (each
    /// writes its own cursor-navigate preamble, so order doesn't matter).
    ///
    /// # Errors
    ///
    /// Propagates any [`io::Write`] error from the destination.
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        for &id in self.spans.keys() {
            match self.arena.get(id) {
                Node::Leaf(cell) => cell.print(out)?,
                Node::Grid(g) => g.print(out)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;
    use crate::widget::BlankWidget;

    fn leaf() -> Node {
        let frame = Frame::new(GeoCalculator::remaining(), GeoCalculator::remaining(), ' ');
        Node::Leaf(Cell::new(frame, ' ', Box::new(BlankWidget { null_char: ' ' })))
    }

    fn uniform_grid(nrows: usize, ncols: usize) -> Grid {
        let rows = (0..nrows).map(|_| GeoCalculator::remaining()).collect();
        let cols = (0..ncols).map(|_| GeoCalculator::remaining()).collect();
        Grid::new(rows, cols, ' ')
    }

    #[test]
    fn one_by_one_grid_has_no_neighbors() {
        let mut g = uniform_grid(1, 1);
        let id = g.place_cell(0..1, 0..1, leaf()).unwrap();
        g.make_grid();
        assert!(g.neighbors_of(id).unwrap().0.is_empty());
    }

    #[test]
    fn one_by_n_grid_only_chains_east_west() {
        let mut g = uniform_grid(1, 3);
        let a = g.place_cell(0..1, 0..1, leaf()).unwrap();
        let b = g.place_cell(0..1, 1..2, leaf()).unwrap();
        let c = g.place_cell(0..1, 2..3, leaf()).unwrap();
        g.make_grid();
        assert_eq!(g.neighbors_of(a).unwrap().0, vec![(Direction::O, Occupant::Cell(b))]);
        assert_eq!(
            g.neighbors_of(b).unwrap().0,
            vec![(Direction::E, Occupant::Cell(a)), (Direction::O, Occupant::Cell(c))]
        );
        assert_eq!(g.neighbors_of(c).unwrap().0, vec![(Direction::E, Occupant::Cell(b))]);
    }

    #[test]
    fn interior_cell_of_larger_grid_gets_all_four_directions() {
        let mut g = uniform_grid(3, 3);
        let mut ids = vec![vec![CellId(0); 3]; 3];
        for r in 0..3 {
            for c in 0..3 {
                ids[r][c] = g.place_cell(r..r + 1, c..c + 1, leaf()).unwrap();
            }
        }
        g.make_grid();
        let center = g.neighbors_of(ids[1][1]).unwrap();
        let directions: Vec<Direction> = center.0.iter().map(|(d, _)| *d).collect();
        assert_eq!(directions.len(), 4);
        assert!(directions.contains(&Direction::N));
        assert!(directions.contains(&Direction::S));
        assert!(directions.contains(&Direction::E));
        assert!(directions.contains(&Direction::O));
    }

    #[test]
    fn place_cell_rejects_overlap() {
        let mut g = uniform_grid(2, 2);
        g.place_cell(0..1, 0..1, leaf()).unwrap();
        assert!(matches!(
            g.place_cell(0..2, 0..2, leaf()),
            Err(GridConfigurationError::Occupied { row: 0, col: 0 })
        ));
    }

    #[test]
    fn erase_row_rejects_a_spanning_cell() {
        let mut g = uniform_grid(2, 2);
        g.place_cell(0..2, 0..1, leaf()).unwrap();
        assert!(matches!(g.erase_row(0), Err(GridConfigurationError::WouldSplitCell { .. })));
    }

    #[test]
    fn erase_row_last_line_is_rejected() {
        let mut g = uniform_grid(1, 2);
        assert!(matches!(g.erase_row(0), Err(GridConfigurationError::LastAxisLine)));
    }

    #[test]
    fn erase_cell_partial_direction_nulls_from_the_point_onward() {
        let mut g = uniform_grid(1, 4);
        for c in 0..4 {
            g.place_cell(0..1, c..c + 1, leaf()).unwrap();
        }
        g.erase_cell(0, 1, Some(Direction::O)).unwrap();
        assert_eq!(g.occupant_at(0, 0), Some(Occupant::Cell(CellId(0))));
        assert_eq!(g.occupant_at(0, 1), Some(Occupant::NullCell));
        assert_eq!(g.occupant_at(0, 2), Some(Occupant::NullCell));
        assert_eq!(g.occupant_at(0, 3), Some(Occupant::NullCell));
    }

    #[test]
    fn resize_stamps_the_three_column_worked_example() {
        let cols = vec![
            GeoCalculator::fixed(10),
            GeoCalculator::percent(0.5),
            GeoCalculator::remaining(),
        ];
        let mut g = Grid::new(vec![GeoCalculator::fixed(5)], cols, ' ');
        let a = g.place_cell(0..1, 0..1, leaf()).unwrap();
        let b = g.place_cell(0..1, 1..2, leaf()).unwrap();
        let c = g.place_cell(0..1, 2..3, leaf()).unwrap();
        g.resize(Size::new(80, 5)).unwrap();
        g.place_at(Position::new(0, 0), Position::new(0, 0));
        assert_eq!(g.leaf(a).unwrap().rect_in_grid().unwrap().size, Size::new(10, 5));
        assert_eq!(g.leaf(b).unwrap().rect_in_grid().unwrap().size, Size::new(40, 5));
        assert_eq!(g.leaf(c).unwrap().rect_in_grid().unwrap().size, Size::new(30, 5));
        assert_eq!(g.leaf(b).unwrap().rect_in_grid().unwrap().origin, Position::new(10, 0));
        assert_eq!(g.leaf(c).unwrap().rect_in_grid().unwrap().origin, Position::new(50, 0));
    }
}
