use thiserror::Error;

/// Top-level error type for the checked `arcmap` entry points.
#[derive(Debug, Error)]
pub enum ArcmapError {
    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Errors raised while ingesting samples.
#[derive(Debug, Error, PartialEq)]
pub enum SampleError {
    #[error("sample ({x}, {fx}) is not finite")]
    NonFinite { x: f64, fx: f64 },

    #[error("sample argument {x} is not greater than the previous argument {previous}")]
    NonIncreasing { x: f64, previous: f64 },
}

/// Errors raised while rescaling the arc-length range.
#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("target arc length {0} must be finite and positive")]
    InvalidTotal(f64),

    #[error("cannot rescale a zero-length range over {samples} sample(s)")]
    Degenerate { samples: usize },
}

/// Convenience type alias for results using [`ArcmapError`].
pub type Result<T> = std::result::Result<T, ArcmapError>;
