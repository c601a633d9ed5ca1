use std::cmp::Ordering;

/// Trend of consecutive lookups along the sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Direction {
    /// No trend observed yet.
    #[default]
    Neutral,
    /// Lookups are moving towards higher segment indices.
    Forward,
    /// Lookups are moving towards lower segment indices.
    Backward,
}

/// Caller-held cursor that speeds up consecutive lookups on one
/// [`ArcLengthMapper`](super::ArcLengthMapper).
///
/// Pass the same hint to a run of related queries, such as walking a curve
/// at uniform steps, and the segment search resolves in constant time for
/// most of them. A hint only affects how the segment is found, never the
/// returned value.
///
/// A hint must only be used with the mapper that produced its lookups.
/// Using it with another mapper does not panic or change results, but the
/// recorded position is meaningless there and the probes are wasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hint {
    last_segment: Option<usize>,
    direction: Direction,
}

impl Hint {
    /// Creates a hint with no prior lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn last_segment(&self) -> Option<usize> {
        self.last_segment
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Records the segment the latest lookup landed in.
    ///
    /// Landing in the same segment again keeps the current direction.
    pub(crate) fn update(&mut self, new_segment: usize) {
        if let Some(last) = self.last_segment {
            match new_segment.cmp(&last) {
                Ordering::Greater => self.direction = Direction::Forward,
                Ordering::Less => self.direction = Direction::Backward,
                Ordering::Equal => {}
            }
        }
        self.last_segment = Some(new_segment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_hint_is_empty() {
        let hint = Hint::new();
        assert_eq!(hint.last_segment(), None);
        assert_eq!(hint.direction(), Direction::Neutral);
        assert_eq!(hint, Hint::default());
    }

    #[test]
    fn first_update_sets_segment_only() {
        let mut hint = Hint::new();
        hint.update(4);
        assert_eq!(hint.last_segment(), Some(4));
        assert_eq!(hint.direction(), Direction::Neutral);
    }

    #[test]
    fn update_tracks_direction() {
        let mut hint = Hint::new();
        hint.update(2);
        hint.update(3);
        assert_eq!(hint.direction(), Direction::Forward);
        hint.update(1);
        assert_eq!(hint.direction(), Direction::Backward);
        assert_eq!(hint.last_segment(), Some(1));
    }

    #[test]
    fn same_segment_keeps_direction() {
        let mut hint = Hint::new();
        hint.update(0);
        hint.update(5);
        hint.update(5);
        assert_eq!(hint.direction(), Direction::Forward);
        assert_eq!(hint.last_segment(), Some(5));
    }
}
