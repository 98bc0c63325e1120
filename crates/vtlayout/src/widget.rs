//! The minimal contract a cell's content must satisfy to be laid out and
//! rendered. Concrete widgets (text buffers, status lines, ...) are an
//! external collaborator (`spec.md` §1 Out-of-scope); this crate only needs
//! their display/cursor shape.

/// Content hosted inside a [`crate::cell::Cell`]'s widget area.
///
/// `get_display` must return exactly `widget_size.1` rows, each of
/// printable length `widget_size.0` -- the widget is responsible for
/// padding with the cell's `null_char` to the required length, per
/// `spec.md` §4.7 Rendering.
pub trait Widget: Send {
    fn get_display(&self, widget_size: (i64, i64)) -> Vec<String>;

    /// The cursor's position local to the widget area, if the widget wants
    /// the cursor visible right now.
    fn get_cursor_position(&self) -> Option<(i64, i64)> {
        None
    }
}

/// A blank widget filling its area with `null_char`; used by tests and as a
/// stand-in before real content is attached.
pub struct BlankWidget {
    pub null_char: char,
}

impl Widget for BlankWidget {
    fn get_display(&self, widget_size: (i64, i64)) -> Vec<String> {
        let (w, h) = widget_size;
        let row: String = std::iter::repeat(self.null_char).take(w.max(0) as usize).collect();
        (0..h.max(0)).map(|_| row.clone()).collect()
    }
}
