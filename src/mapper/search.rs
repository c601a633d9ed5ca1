use tracing::trace;

use super::hint::{Direction, Hint};
use super::Sample;

/// Which coordinate of a [`Sample`] a lookup runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    ArcLen,
}

impl Axis {
    pub(crate) fn of(self, sample: &Sample) -> f64 {
        match self {
            Axis::X => sample.x,
            Axis::ArcLen => sample.arc_len,
        }
    }
}

/// Returns whether `segment` covers `value` on `axis`.
///
/// Segments are half-open, `[start, end)`, so on a non-decreasing axis at
/// most one segment matches any value. Zero-length segments match nothing.
pub(crate) fn segment_contains(samples: &[Sample], axis: Axis, segment: usize, value: f64) -> bool {
    let (Some(start), Some(end)) = (samples.get(segment), samples.get(segment + 1)) else {
        return false;
    };
    axis.of(start) <= value && value < axis.of(end)
}

/// Tries the hinted segment, then its neighbour in the recorded direction.
///
/// While the hint has no direction yet both neighbours are tried.
pub(crate) fn probe_hint(samples: &[Sample], axis: Axis, value: f64, hint: &Hint) -> Option<usize> {
    let last = hint.last_segment()?;
    if segment_contains(samples, axis, last, value) {
        return Some(last);
    }
    let neighbours = match hint.direction() {
        Direction::Forward => [last.checked_add(1), None],
        Direction::Backward => [last.checked_sub(1), None],
        Direction::Neutral => [last.checked_add(1), last.checked_sub(1)],
    };
    neighbours
        .into_iter()
        .flatten()
        .find(|&segment| segment_contains(samples, axis, segment, value))
}

/// Binary search for the segment covering `value`.
///
/// Requires `first <= value < last` on `axis`, which places the result in
/// `0..samples.len() - 1`. Unordered samples still yield a valid segment.
pub(crate) fn bisect(samples: &[Sample], axis: Axis, value: f64) -> usize {
    samples
        .partition_point(|sample| axis.of(sample) <= value)
        .saturating_sub(1)
        .min(samples.len().saturating_sub(2))
}

/// Finds the segment covering `value` and records it in `hint`.
///
/// Same precondition as [`bisect`].
pub(crate) fn locate_segment(samples: &[Sample], axis: Axis, value: f64, hint: &mut Hint) -> usize {
    let segment = probe_hint(samples, axis, value, hint).unwrap_or_else(|| {
        trace!(?axis, value, last = ?hint.last_segment(), "hint missed, bisecting");
        bisect(samples, axis, value)
    });
    hint.update(segment);
    segment
}
