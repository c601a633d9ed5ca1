use super::Point2;

/// Returns the length of the straight chord from `(x0, y0)` to `(x1, y1)`.
#[must_use]
pub fn chord_length(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    nalgebra::distance(&Point2::new(x0, y0), &Point2::new(x1, y1))
}

/// Linearly maps `t` from the span `[t0, t1]` onto `[v0, v1]`.
///
/// `t` equal to `t0` maps to `v0` exactly. Callers must ensure `t0 != t1`.
#[must_use]
pub fn lerp(t0: f64, v0: f64, t1: f64, v1: f64, t: f64) -> f64 {
    v0 + (t - t0) * (v1 - v0) / (t1 - t0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn chord_3_4_5() {
        assert_abs_diff_eq!(chord_length(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn chord_is_symmetric() {
        let a = chord_length(1.0, -2.0, 4.5, 7.0);
        let b = chord_length(4.5, 7.0, 1.0, -2.0);
        assert_abs_diff_eq!(a, b);
    }

    #[test]
    fn chord_degenerate() {
        assert_abs_diff_eq!(chord_length(2.0, 2.0, 2.0, 2.0), 0.0);
    }

    #[test]
    fn lerp_hits_endpoints() {
        assert_abs_diff_eq!(lerp(1.0, 10.0, 3.0, 20.0, 1.0), 10.0);
        assert_abs_diff_eq!(lerp(1.0, 10.0, 3.0, 20.0, 3.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn lerp_midpoint() {
        // Halfway along [1, 3] lands halfway along [10, 20].
        assert_abs_diff_eq!(lerp(1.0, 10.0, 3.0, 20.0, 2.0), 15.0, epsilon = 1e-12);
    }

    #[test]
    fn lerp_decreasing_target() {
        assert_abs_diff_eq!(lerp(0.0, 4.0, 2.0, 0.0, 0.5), 3.0, epsilon = 1e-12);
    }
}
