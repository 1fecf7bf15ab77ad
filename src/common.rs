//! Common mathematical operations

/// Linearly remap `value` from the range `[in_min, in_max]` to the range
/// `[out_min, out_max]`.
///
/// The mapping is exact at the range edges:
///
/// ```
/// use autograph::remap;
///
/// assert_eq!(remap(0.0, 0.0, 800.0, 0.0, 4.9), 0.0);
/// assert_eq!(remap(800.0, 0.0, 800.0, 0.0, 4.9), 4.9);
/// ```
#[inline]
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn remap_edges_exact() {
        for (w, w_out) in [(1.0, 7.0), (640.0, 4.9), (1080.0, 6.9), (3.5, 3.5)] {
            assert_eq!(remap(0.0, 0.0, w, 0.0, w_out), 0.0);
            assert_eq!(remap(w, 0.0, w, 0.0, w_out), w_out);
        }
    }

    #[test]
    fn remap_interior() {
        assert!((remap(5.0, 0.0, 10.0, 0.0, 100.0) - 50.0).abs() < 1e-12);
        assert!((remap(1.0, 1.0, 3.0, 10.0, 20.0) - 10.0).abs() < 1e-12);
        assert!((remap(2.0, 1.0, 3.0, 10.0, 20.0) - 15.0).abs() < 1e-12);
    }
}
