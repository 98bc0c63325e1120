//! [`Frame`]: the up-to-eight directional padding bands surrounding a
//! widget inside a [`crate::cell::Cell`].
//!
//! Band names follow the source's compass letters: `N`orth/`S`outh for the
//! rows above/below the widget, `E`/`O` for the columns to its left/right
//! (so the composed widget row is always `E[i] + widget_row[i] + O[i]`,
//! per `spec.md` §4.7).

use crate::error::GeometryError;
use crate::geocalc::GeoCalculator;

/// A repeating fill pattern plus a single filler character used when the
/// pattern is empty.
#[derive(Debug, Clone)]
pub struct PadSpec {
    pub pattern: String,
    pub filler: char,
}

impl PadSpec {
    #[must_use]
    pub fn new(pattern: impl Into<String>, filler: char) -> Self {
        Self { pattern: pattern.into(), filler }
    }

    #[must_use]
    pub fn blank(filler: char) -> Self {
        Self { pattern: String::new(), filler }
    }

    /// Render exactly `width` printable columns, repeating `pattern`
    /// cyclically or, when `pattern` is empty, repeating `filler`.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        if self.pattern.is_empty() {
            return std::iter::repeat(self.filler).take(width).collect();
        }
        let chars: Vec<char> = self.pattern.chars().collect();
        (0..width).map(|i| chars[i % chars.len()]).collect()
    }
}

/// Which side(s) of the frame are preferred to stay at their natural size;
/// the opposite side(s) absorb surplus space first, and the named side(s)
/// absorb any deficit by shrinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    N,
    O,
    S,
    E,
    No,
    Ne,
    So,
    Se,
}

impl Orientation {
    fn names(self) -> (bool, bool, bool, bool) {
        // (n, o, s, e)
        match self {
            Orientation::N => (true, false, false, false),
            Orientation::O => (false, true, false, false),
            Orientation::S => (false, false, true, false),
            Orientation::E => (false, false, false, true),
            Orientation::No => (true, true, false, false),
            Orientation::Ne => (true, false, false, true),
            Orientation::So => (false, true, true, false),
            Orientation::Se => (false, false, true, true),
        }
    }
}

/// Which side shrinks first when no [`Orientation`] names either member of
/// an axis pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutability {
    /// The first-named side of a pair (`E` of `E`/`O`, `N` of `N`/`S`) shrinks first.
    In,
    /// The second-named side of a pair (`O`, `S`) shrinks first.
    Out,
}

fn split_axis(remainder: i64, first_named: bool, second_named: bool, mutability: Mutability) -> (i64, i64) {
    match (first_named, second_named) {
        (true, false) => (0, remainder),
        (false, true) => (remainder, 0),
        (true, true) => {
            let half = remainder / 2;
            (half, remainder - half)
        }
        (false, false) => match mutability {
            Mutability::In => (0, remainder),
            Mutability::Out => (remainder, 0),
        },
    }
}

/// The four materialized band arrays produced by [`Frame::resize`].
#[derive(Debug, Clone, Default)]
pub struct FrameBands {
    /// Full cell-width rows above the widget, including the `NO`/`NE` corners.
    pub top: Vec<String>,
    /// Full cell-width rows below the widget, including the `SO`/`SE` corners.
    pub bottom: Vec<String>,
    /// One left-pad string per widget row.
    pub left: Vec<String>,
    /// One right-pad string per widget row.
    pub right: Vec<String>,
}

/// The decorative padding around a widget inside a cell.
pub struct Frame {
    pub n: PadSpec,
    pub o: PadSpec,
    pub s: PadSpec,
    pub e: PadSpec,
    pub no: PadSpec,
    pub ne: PadSpec,
    pub so: PadSpec,
    pub se: PadSpec,
    pub orientation: Option<Orientation>,
    pub mutability: Mutability,
    width_calc: GeoCalculator,
    height_calc: GeoCalculator,
    widget_size: Option<(i64, i64)>,
    bands: Option<FrameBands>,
}

impl Frame {
    #[must_use]
    pub fn new(width_calc: GeoCalculator, height_calc: GeoCalculator, null_char: char) -> Self {
        Self {
            n: PadSpec::blank(null_char),
            o: PadSpec::blank(null_char),
            s: PadSpec::blank(null_char),
            e: PadSpec::blank(null_char),
            no: PadSpec::blank(null_char),
            ne: PadSpec::blank(null_char),
            so: PadSpec::blank(null_char),
            se: PadSpec::blank(null_char),
            orientation: None,
            mutability: Mutability::Out,
            width_calc,
            height_calc,
            widget_size: None,
            bands: None,
        }
    }

    #[must_use]
    pub fn widget_size(&self) -> Option<(i64, i64)> {
        self.widget_size
    }

    #[must_use]
    pub fn bands(&self) -> Option<&FrameBands> {
        self.bands.as_ref()
    }

    /// Compute the widget area from `cell_size`, then materialize the eight
    /// padding bands into `N`/`O`/`S`/`E` arrays.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::FrameCannotFit`] when the widget's computed
    /// size alone exceeds `cell_size` (padding can shrink to zero, the
    /// widget area cannot).
    pub fn resize(&mut self, cell_size: (i64, i64)) -> Result<(i64, i64), GeometryError> {
        let (cw, ch) = cell_size;
        let w = self.width_calc.call(cw, cw).clamp(0, cw);
        let h = self.height_calc.call(ch, ch).clamp(0, ch);
        if w > cw || h > ch {
            return Err(GeometryError::FrameCannotFit {
                needed: (w, h),
                available: (cw, ch),
            });
        }
        self.widget_size = Some((w, h));

        let (n_named, o_named, s_named, e_named) =
            self.orientation.map_or((false, false, false, false), Orientation::names);
        let (left_w, right_w) = split_axis(cw - w, e_named, o_named, self.mutability);
        let (top_h, bottom_h) = split_axis(ch - h, n_named, s_named, self.mutability);

        let left_w_u = left_w.max(0) as usize;
        let right_w_u = right_w.max(0) as usize;
        let top_h_u = top_h.max(0) as usize;
        let bottom_h_u = bottom_h.max(0) as usize;

        let left: Vec<String> = (0..h.max(0)).map(|_| self.e.render(left_w_u)).collect();
        let right: Vec<String> = (0..h.max(0)).map(|_| self.o.render(right_w_u)).collect();

        let top: Vec<String> = (0..top_h_u)
            .map(|_| format!("{}{}{}", self.no.render(left_w_u), self.n.render(w.max(0) as usize), self.ne.render(right_w_u)))
            .collect();
        let bottom: Vec<String> = (0..bottom_h_u)
            .map(|_| format!("{}{}{}", self.so.render(left_w_u), self.s.render(w.max(0) as usize), self.se.render(right_w_u)))
            .collect();

        self.bands = Some(FrameBands { top, bottom, left, right });
        Ok((w, h))
    }

    /// `(left_pad_width, top_pad_height)` -- the offset of the widget
    /// origin relative to the cell's own origin, after the last `resize`.
    #[must_use]
    pub fn widget_offset(&self) -> (i64, i64) {
        self.bands.as_ref().map_or((0, 0), |b| {
            (b.left.first().map_or(0, |s| s.chars().count() as i64), b.top.len() as i64)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocalc::GeoCalculator;

    fn frame() -> Frame {
        Frame::new(GeoCalculator::fixed(4), GeoCalculator::fixed(2), ' ')
    }

    #[test]
    fn resize_produces_rectangular_bands() {
        let mut f = frame();
        let (w, h) = f.resize((10, 6)).unwrap();
        assert_eq!((w, h), (4, 2));
        let bands = f.bands().unwrap();
        assert_eq!(bands.left.len(), 2);
        assert_eq!(bands.right.len(), 2);
        let full_width = bands.top[0].chars().count();
        assert_eq!(full_width, 10);
        assert_eq!(bands.left[0].chars().count() + 4 + bands.right[0].chars().count(), 10);
    }

    #[test]
    fn oversized_widget_is_a_geometry_error() {
        let mut f = Frame::new(GeoCalculator::fixed(20), GeoCalculator::fixed(2), ' ');
        assert!(f.resize((10, 6)).is_err());
    }

    #[test]
    fn orientation_named_side_shrinks_first() {
        let mut f = frame();
        f.orientation = Some(Orientation::E);
        f.resize((10, 6)).unwrap();
        let bands = f.bands().unwrap();
        assert_eq!(bands.left[0].chars().count(), 0);
        assert_eq!(bands.right[0].chars().count(), 6);
    }
}
