mod hint;
mod search;

pub use hint::Hint;

use tracing::debug;

use crate::error::{RangeError, Result, SampleError};
use crate::math::segment_2d::{chord_length, lerp};

use search::{locate_segment, Axis};

/// One recorded argument together with the cumulative arc length up to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    x: f64,
    arc_len: f64,
}

impl Sample {
    /// Returns the function argument of this sample.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the arc length from the first sample up to this one.
    #[must_use]
    pub fn arc_len(&self) -> f64 {
        self.arc_len
    }
}

/// Maps from `x` to the arc length of the graph of `f` and back.
///
/// `f` is only known at a set of sampled arguments. Adjacent samples are
/// considered connected by straight chords, so arc length grows linearly in
/// `x` across each segment and both mappings are linear interpolations.
///
/// The mapper is built once with [`add_sample`](Self::add_sample), optionally
/// rescaled with [`normalize_range`](Self::normalize_range) and then queried.
/// Queries take `&self`, so a built mapper may be shared between threads as
/// long as each thread uses its own [`Hint`].
#[derive(Debug, Clone, Default)]
pub struct ArcLengthMapper {
    samples: Vec<Sample>,
    prev_fx: f64,
}

impl ArcLengthMapper {
    /// Creates an empty mapper.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an `x -> f(x)` sample.
    ///
    /// `x` must be greater than the argument of every previously added
    /// sample. This is only checked in debug builds; violating it in release
    /// builds yields unspecified (but never panicking) query results. Use
    /// [`try_add_sample`](Self::try_add_sample) for a checked variant.
    pub fn add_sample(&mut self, x: f64, fx: f64) {
        let arc_len = match self.samples.last() {
            None => 0.0,
            Some(prev) => {
                debug_assert!(x > prev.x, "sample argument {x} does not follow {}", prev.x);
                prev.arc_len + chord_length(prev.x, self.prev_fx, x, fx)
            }
        };
        self.samples.push(Sample { x, arc_len });
        self.prev_fx = fx;
    }

    /// Adds an `x -> f(x)` sample after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` or `fx` is not finite, or if `x` is not
    /// greater than the argument of the last sample. The mapper is left
    /// unchanged in that case.
    pub fn try_add_sample(&mut self, x: f64, fx: f64) -> Result<()> {
        if !x.is_finite() || !fx.is_finite() {
            return Err(SampleError::NonFinite { x, fx }.into());
        }
        if let Some(prev) = self.samples.last() {
            if x <= prev.x {
                return Err(SampleError::NonIncreasing { x, previous: prev.x }.into());
            }
        }
        self.add_sample(x, fx);
        Ok(())
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns whether no samples have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the samples in insertion order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the arguments of the first and last samples.
    #[must_use]
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((self.samples.first()?.x, self.samples.last()?.x))
    }

    /// Returns the total arc length from the first to the last sample.
    #[must_use]
    pub fn total_arc_length(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.arc_len)
    }

    /// Scales arc lengths at every sample so that the total arc length
    /// becomes `total_arc_len`.
    ///
    /// Call this after all samples have been added. With fewer than two
    /// samples, or a current total of zero, there is nothing to scale and
    /// this does nothing. A zero or negative target is not rejected: it
    /// collapses or flips the arc lengths, after which queries still return
    /// clamped values. Use [`try_normalize_range`](Self::try_normalize_range)
    /// to reject such targets.
    #[allow(clippy::float_cmp)]
    pub fn normalize_range(&mut self, total_arc_len: f64) {
        let old_total = self.total_arc_length();
        if self.samples.len() < 2 || old_total == 0.0 {
            debug!(samples = self.samples.len(), old_total, "nothing to normalize");
            return;
        }
        let scale = total_arc_len / old_total;
        for sample in &mut self.samples {
            sample.arc_len *= scale;
        }
        debug!(samples = self.samples.len(), old_total, total_arc_len, "arc length range normalized");
    }

    /// Checked variant of [`normalize_range`](Self::normalize_range).
    ///
    /// # Errors
    ///
    /// Returns an error if `total_arc_len` is not finite and positive, or if
    /// the mapper has no positive arc length to scale.
    pub fn try_normalize_range(&mut self, total_arc_len: f64) -> Result<()> {
        if !total_arc_len.is_finite() || total_arc_len <= 0.0 {
            return Err(RangeError::InvalidTotal(total_arc_len).into());
        }
        if self.samples.len() < 2 || self.total_arc_length() <= 0.0 {
            return Err(RangeError::Degenerate {
                samples: self.samples.len(),
            }
            .into());
        }
        self.normalize_range(total_arc_len);
        Ok(())
    }

    /// Maps an arc length to the corresponding function argument.
    ///
    /// Arc lengths before the first sample map to the first argument, those
    /// beyond the last sample map to the last argument. With a single sample
    /// its argument is returned; with none, zero. Passing the same `hint` on
    /// consecutive calls makes nearby lookups cheaper.
    #[must_use]
    pub fn arc_len_to_x(&self, arc_len: f64, hint: &mut Hint) -> f64 {
        let (first, last) = match self.samples.as_slice() {
            [] => return 0.0,
            [only] => return only.x,
            [first, .., last] => (first, last),
        };
        if arc_len <= first.arc_len {
            return first.x;
        }
        if arc_len >= last.arc_len {
            return last.x;
        }
        let segment = locate_segment(&self.samples, Axis::ArcLen, arc_len, hint);
        let (start, end) = (&self.samples[segment], &self.samples[segment + 1]);
        lerp(start.arc_len, start.x, end.arc_len, end.x, arc_len)
    }

    /// Maps a function argument to the corresponding arc length.
    ///
    /// Arguments before the first sample map to the first arc length (zero),
    /// those beyond the last sample map to the total arc length. With fewer
    /// than two samples zero is returned. Passing the same `hint` on
    /// consecutive calls makes nearby lookups cheaper.
    #[must_use]
    pub fn x_to_arc_len(&self, x: f64, hint: &mut Hint) -> f64 {
        let [first, .., last] = self.samples.as_slice() else {
            return 0.0;
        };
        if x <= first.x {
            return first.arc_len;
        }
        if x >= last.x {
            return last.arc_len;
        }
        let segment = locate_segment(&self.samples, Axis::X, x, hint);
        let (start, end) = (&self.samples[segment], &self.samples[segment + 1]);
        lerp(start.x, start.arc_len, end.x, end.arc_len, x)
    }
}

impl Extend<(f64, f64)> for ArcLengthMapper {
    fn extend<I: IntoIterator<Item = (f64, f64)>>(&mut self, iter: I) {
        for (x, fx) in iter {
            self.add_sample(x, fx);
        }
    }
}

impl FromIterator<(f64, f64)> for ArcLengthMapper {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut mapper = Self::new();
        mapper.extend(iter);
        mapper
    }
}
