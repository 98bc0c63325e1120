//! [`Cell`]: frames a widget, gets sized by its owning [`crate::grid::Grid`],
//! and renders the composed display.

use std::io::{self, Write};

use vtseq::cursor::CursorNavigate;

use crate::error::GeometryError;
use crate::frame::Frame;
use crate::geometry::{Position, Rect, Size};
use crate::widget::Widget;

/// An opaque handle into a [`crate::grid::Grid`]'s arena, identifying a
/// placed [`Cell`] or nested [`crate::grid::Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub(crate) usize);

/// A framed widget placed into a grid.
pub struct Cell {
    pub frame: Frame,
    pub null_char: char,
    widget: Box<dyn Widget>,

    /// Row/column index ranges this cell spans within its owning grid's axes.
    pub(crate) rows: Range<usize>,
    pub(crate) cols: Range<usize>,

    cell_size: Option<Size>,
    widget_size: Option<Size>,
    rect_in_window: Option<Rect>,
    rect_in_grid: Option<Rect>,
    rect_in_cell: Option<Rect>,
    cursor_in_widget: Option<Position>,
    display: Vec<String>,
}

impl Cell {
    #[must_use]
    pub fn new(frame: Frame, null_char: char, widget: Box<dyn Widget>) -> Self {
        Self {
            frame,
            null_char,
            widget,
            rows: 0..0,
            cols: 0..0,
            cell_size: None,
            widget_size: None,
            rect_in_window: None,
            rect_in_grid: None,
            rect_in_cell: None,
            cursor_in_widget: None,
            display: Vec::new(),
        }
    }

    #[must_use]
    pub fn cell_size(&self) -> Option<Size> {
        self.cell_size
    }

    #[must_use]
    pub fn widget_size(&self) -> Option<Size> {
        self.widget_size
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
    pub fn rect_in_cell(&self) -> Option<Rect> {
        self.rect_in_cell
    }

    #[must_use]
    pub fn display(&self) -> &[String] {
        &self.display
    }

    /// Recompute `widget_size` and `rect_in_cell` from `cell_size`. Called
    /// by the owning grid after axis evaluation stamps this cell's span.
    ///
    /// # Errors
    ///
    /// Propagates [`GeometryError`] from [`Frame::resize`].
    pub fn resize(&mut self, cell_size: Size) -> Result<(), GeometryError> {
        self.cell_size = Some(cell_size);
        let (w, h) = self.frame.resize((cell_size.w, cell_size.h))?;
        self.widget_size = Some(Size::new(w, h));
        let (left, top) = self.frame.widget_offset();
        self.rect_in_cell = Some(Rect::new(Position::new(left, top), Size::new(w, h)));
        Ok(())
    }

    /// Stamp `rect_in_grid`/`rect_in_window` once the owning grid knows this
    /// cell's absolute origin.
    pub fn place_at(&mut self, grid_origin: Position, window_origin: Position) {
        if let Some(cell_size) = self.cell_size {
            self.rect_in_grid = Some(Rect::new(grid_origin, cell_size));
            self.rect_in_window = Some(Rect::new(
                Position::new(window_origin.x + grid_origin.x, window_origin.y + grid_origin.y),
                cell_size,
            ));
        }
    }

    /// Rebuild the cached display from the widget and the frame's bands:
    /// `E[i] + widget_row[i] + O[i]` through the widget band, flanked by the
    /// `N`/`S` bands above/below.
    pub fn new_display(&mut self) {
        let Some(widget_size) = self.widget_size else { return };
        let rows = self.widget.get_display((widget_size.w, widget_size.h));
        let Some(bands) = self.frame.bands() else { return };

        let mut out = Vec::with_capacity(bands.top.len() + rows.len() + bands.bottom.len());
        out.extend(bands.top.iter().cloned());
        for (i, row) in rows.iter().enumerate() {
            let left = bands.left.get(i).cloned().unwrap_or_default();
            let right = bands.right.get(i).cloned().unwrap_or_default();
            out.push(format!("{left}{row}{right}"));
        }
        out.extend(bands.bottom.iter().cloned());
        self.display = out;
    }

    /// Cache the widget-reported cursor position, translated into `rect_in_cell`.
    pub fn new_cursor(&mut self) {
        self.cursor_in_widget = self.widget.get_cursor_position().map(|(x, y)| Position::new(x, y));
    }

    #[must_use]
    pub fn cursor_position_in_widget(&self) -> Option<Position> {
        self.cursor_in_widget
    }

    /// The cursor position in window coordinates, if both the widget
    /// reports one and this cell has been placed.
    #[must_use]
    pub fn cursor_position_in_window(&self) -> Option<Position> {
        let local = self.cursor_in_widget?;
        let rect = self.rect_in_window?;
        let widget_offset = self.rect_in_cell?.origin;
        Some(Position::new(
            rect.origin.x + widget_offset.x + local.x,
            rect.origin.y + widget_offset.y + local.y,
        ))
    }

    /// Write the cursor-navigate escape for this cell's window origin
    /// followed by every composed display row.
    ///
    /// # Errors
    ///
    /// Propagates any [`io::Write`] error from the destination.
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        let Some(rect) = self.rect_in_window else { return Ok(()) };
        for (i, row) in self.display.iter().enumerate() {
            let pos = CursorNavigate::position((rect.origin.x + 1) as u32, (rect.origin.y + i as i64 + 1) as u32);
            write!(out, "{pos}{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocalc::GeoCalculator;
    use crate::widget::BlankWidget;

    fn cell() -> Cell {
        let frame = Frame::new(GeoCalculator::fixed(4), GeoCalculator::fixed(2), ' ');
        Cell::new(frame, ' ', Box::new(BlankWidget { null_char: ' ' }))
    }

    #[test]
    fn resize_then_display_produces_cell_sized_rows() {
        let mut c = cell();
        c.resize(Size::new(10, 6)).unwrap();
        c.new_display();
        assert_eq!(c.display().len(), 6);
        assert!(c.display().iter().all(|r| r.chars().count() == 10));
    }

    #[test]
    fn place_at_stamps_window_rect() {
        let mut c = cell();
        c.resize(Size::new(10, 6)).unwrap();
        c.place_at(Position::new(5, 5), Position::new(1, 1));
        let rect = c.rect_in_window().unwrap();
        assert_eq!(rect.origin, Position::new(6, 6));
    }
}
