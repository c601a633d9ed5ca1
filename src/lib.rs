//! Arc-length parameterization of discretely sampled monotonic functions.
//!
//! An [`ArcLengthMapper`] is built from `(x, f(x))` samples taken at strictly
//! increasing arguments and then answers `x -> arc length` and
//! `arc length -> x` queries. Adjacent samples are treated as connected by
//! straight chords, so both directions are linear interpolations.
//!
//! ```
//! use arcmap::{ArcLengthMapper, Hint};
//!
//! let mut mapper = ArcLengthMapper::new();
//! mapper.add_sample(0.0, 0.0);
//! mapper.add_sample(3.0, 4.0);
//! mapper.add_sample(6.0, 4.0);
//! assert_eq!(mapper.total_arc_length(), 8.0);
//!
//! let mut hint = Hint::new();
//! assert_eq!(mapper.x_to_arc_len(3.0, &mut hint), 5.0);
//! assert_eq!(mapper.arc_len_to_x(8.0, &mut hint), 6.0);
//! ```

pub mod error;
pub mod mapper;
pub mod math;

pub use error::{ArcmapError, RangeError, Result, SampleError};
pub use mapper::{ArcLengthMapper, Hint, Sample};
