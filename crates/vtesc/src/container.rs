use std::fmt;
use std::ops::{Add, Range};

use crate::error::FormatError;
use crate::format::{self, FormatArg};
use crate::segment::EscSegment;

/// An ordered sequence of [`EscSegment`]s plus a parallel `print_index` of
/// cumulative printable offsets.
///
/// Invariants: `print_index[0].0 == 0`; `print_index[i].0 == print_index[i-1].1`;
/// `print_index.last().1 == sum(seg.len() for seg in segments)`. An empty
/// container holds one empty segment with range `(0, 0)`.
#[derive(Clone, PartialEq, Eq)]
pub struct EscContainer {
    segments: Vec<EscSegment>,
    print_index: Vec<(usize, usize)>,
}

impl EscContainer {
    /// The canonical empty container: one empty segment, one `(0, 0)` range.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            segments: vec![EscSegment::empty()],
            print_index: vec![(0, 0)],
        }
    }

    #[must_use]
    pub fn from_segment(segment: EscSegment) -> Self {
        let len = segment.len();
        Self {
            segments: vec![segment],
            print_index: vec![(0, len)],
        }
    }

    /// Build a container from already-constructed segments, recomputing `print_index`.
    #[must_use]
    pub fn from_segments(segments: Vec<EscSegment>) -> Self {
        if segments.is_empty() {
            return Self::empty();
        }
        let mut print_index = Vec::with_capacity(segments.len());
        let mut cursor = 0usize;
        for seg in &segments {
            let start = cursor;
            cursor += seg.len();
            print_index.push((start, cursor));
        }
        Self {
            segments,
            print_index,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[EscSegment] {
        &self.segments
    }

    #[must_use]
    pub fn print_index(&self) -> &[(usize, usize)] {
        &self.print_index
    }

    /// Total printable length: `print_index.last().1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.print_index.last().map_or(0, |r| r.1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The printable string with all escapes stripped.
    #[must_use]
    pub fn printable(&self) -> String {
        self.segments.iter().map(EscSegment::string).collect()
    }

    /// The exact on-wire byte form of every segment concatenated.
    #[must_use]
    pub fn to_wire_string(&self) -> String {
        self.segments.iter().map(EscSegment::to_wire_string).collect()
    }

    /// Iterate `(segment, print_range)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&EscSegment, (usize, usize))> {
        self.segments.iter().zip(self.print_index.iter().copied())
    }

    /// Binary-search `print_index` for the segment containing printable
    /// offset `at` (an end-exclusive `print_index[i].1 == at` matches
    /// segment `i+1` unless `at` is the container's total length, matching
    /// Python's `bisect`-style edge behavior used by the original slicer).
    fn segment_index_for(&self, at: usize) -> usize {
        match self
            .print_index
            .binary_search_by(|&(start, end)| {
                if at < start {
                    std::cmp::Ordering::Greater
                } else if at >= end && end != self.len() {
                    std::cmp::Ordering::Less
                } else if at >= end && end == self.len() && at > end {
                    std::cmp::Ordering::Less
                } else {
                    std::cmp::Ordering::Equal
                }
            }) {
            Ok(idx) => idx,
            Err(idx) => idx.min(self.segments.len().saturating_sub(1)),
        }
    }

    /// Slice by a half-open printable-character range. Edge-trims the first
    /// and last affected segments; interior segments are kept by value.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        let total = self.len();
        let start = range.start.min(total);
        let end = range.end.clamp(start, total);
        if self.segments.is_empty() || start == end {
            if let Some(first) = self.segments.first() {
                return Self::from_segment(first.slice(0, 0));
            }
            return Self::empty();
        }

        let first_idx = self.segment_index_for(start);
        let last_idx = self.segment_index_for(end.saturating_sub(1).max(start));

        let mut out = Vec::with_capacity(last_idx - first_idx + 1);
        for i in first_idx..=last_idx {
            let (seg_start, seg_end) = self.print_index[i];
            let local_start = start.max(seg_start) - seg_start;
            let local_end = end.min(seg_end) - seg_start;
            out.push(self.segments[i].slice(local_start, local_end));
        }
        Self::from_segments(out)
    }

    /// Extend `intro`/`outro` of the first/last segment (or every segment,
    /// when `cellular` is set) with `prefix`/`suffix`.
    #[must_use]
    pub fn wrap(&self, prefix: &str, suffix: &str, inner: bool, cellular: bool) -> Self {
        if cellular {
            let wrapped = self
                .segments
                .iter()
                .map(|s| s.wrap(prefix, suffix, inner))
                .collect();
            return Self::from_segments(wrapped);
        }
        if self.segments.len() == 1 {
            return Self::from_segment(self.segments[0].wrap(prefix, suffix, inner));
        }
        let mut segs = self.segments.clone();
        if let Some(first) = segs.first_mut() {
            *first = first.wrap(prefix, "", inner);
        }
        if let Some(last) = segs.last_mut() {
            *last = last.wrap("", suffix, inner);
        }
        Self::from_segments(segs)
    }

    /// Attempt to fuse adjacent segments at every mergeable boundary while
    /// appending `other`. Reduces segment-count bloat from repeated
    /// concatenation; purely an optimization, never observable through
    /// `printable()`/`to_wire_string()`.
    #[must_use]
    pub fn assimilate(&self, other: impl Into<EscContainer>) -> Self {
        let other = other.into();
        let mut segs = self.segments.clone();
        for seg in other.segments {
            let mergeable = segs.last().is_some_and(|last| {
                (last.outro().is_empty() && seg.intro().is_empty())
                    || (last.intro() == seg.intro() && last.outro() == seg.outro())
            });
            if mergeable {
                let last = segs.last().expect("mergeable implies a last segment");
                let merged = last.assimilate(&seg).segments()[0].clone();
                *segs.last_mut().unwrap() = merged;
            } else {
                segs.push(seg);
            }
        }
        Self::from_segments(segs)
    }

    /// Printf-style substitution across every segment's `string`, in
    /// segment order, consuming from a single shared argument list.
    ///
    /// # Errors
    ///
    /// See [`EscSegment::formatting`].
    pub fn formatting(&self, args: &[FormatArg<'_>]) -> Result<Self, FormatError> {
        let mut cursor = 0usize;
        let mut out = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            let consumed = format::directive_count(seg.string());
            if cursor + consumed > args.len() {
                return Err(FormatError::TooFewArgs {
                    needed: cursor + consumed,
                    got: args.len(),
                });
            }
            let slice = &args[cursor..cursor + consumed];
            out.push(seg.formatting(slice)?);
            cursor += consumed;
        }
        if cursor != args.len() {
            return Err(FormatError::TooManyArgs {
                needed: cursor,
                got: args.len(),
            });
        }
        Ok(Self::from_segments(out))
    }
}

impl From<EscSegment> for EscContainer {
    fn from(seg: EscSegment) -> Self {
        Self::from_segment(seg)
    }
}

impl Default for EscContainer {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for EscContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EscContainer")
            .field("segments", &self.segments)
            .field("print_index", &self.print_index)
            .finish()
    }
}

impl fmt::Display for EscContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            fmt::Display::fmt(seg, f)?;
        }
        Ok(())
    }
}

impl Add<&EscContainer> for &EscContainer {
    type Output = EscContainer;
    fn add(self, rhs: &EscContainer) -> EscContainer {
        let mut segs = self.segments.clone();
        segs.extend(rhs.segments.iter().cloned());
        EscContainer::from_segments(segs)
    }
}

impl Add<&EscSegment> for &EscContainer {
    type Output = EscContainer;
    fn add(self, rhs: &EscSegment) -> EscContainer {
        let mut segs = self.segments.clone();
        segs.push(rhs.clone());
        EscContainer::from_segments(segs)
    }
}

impl Add<&str> for &EscContainer {
    type Output = EscContainer;
    fn add(self, rhs: &str) -> EscContainer {
        let mut segs = self.segments.clone();
        segs.push(EscSegment::new("", rhs, ""));
        EscContainer::from_segments(segs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EscContainer {
        EscContainer::from_segments(vec![
            EscSegment::new("\x1b[31m", "red ", "\x1b[0m"),
            EscSegment::new("\x1b[32m", "green", "\x1b[0m"),
        ])
    }

    #[test]
    fn print_index_invariants_hold() {
        let c = sample();
        assert_eq!(c.print_index()[0].0, 0);
        for w in c.print_index().windows(2) {
            assert_eq!(w[0].1, w[1].0);
        }
        assert_eq!(c.print_index().last().unwrap().1, c.len());
    }

    #[test]
    fn empty_container_has_one_empty_segment() {
        let c = EscContainer::empty();
        assert_eq!(c.segments().len(), 1);
        assert_eq!(c.print_index(), &[(0, 0)]);
    }

    #[test]
    fn slice_round_trip_matches_printable_slice() {
        let c = sample();
        let plain = c.printable();
        for a in 0..=c.len() {
            for b in a..=c.len() {
                let sliced = c.slice(a..b);
                assert_eq!(sliced.printable(), plain[a..b]);
            }
        }
    }

    #[test]
    fn slice_preserves_escapes_at_edges() {
        let c = sample();
        let sliced = c.slice(2..7);
        assert_eq!(sliced.printable(), "d gr");
        assert!(sliced.segments()[0].intro().contains("31m"));
    }
}
