// Copyright 2018 the Autograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catmull-Rom segments.

use crate::{CubicBez, ParamCurve, Point, Vec2};

/// A Catmull-Rom segment over a four-point window.
///
/// The segment interpolates `p1` → `p2`; `p0` and `p3` are neighbor points
/// that only shape the tangents at the endpoints. The tangents are
/// distance-parametrized: inter-point distances are raised to the `alpha`
/// exponent, so unevenly spaced input does not produce loops or cusps. With
/// `alpha` 1.0 (the value used by stroke fitting in this crate) the
/// parametrization is uniform in chord length.
///
/// Clamped windows, where a neighbor coincides with its span endpoint
/// (`p0 == p1` or `p2 == p3`), are well-defined: the vanishing tangent term
/// drops out rather than dividing zero by zero. A coincident *span*
/// (`p1 == p2`) is not meaningful; [`fit_catmull_rom`] collapses consecutive
/// coincident input points before windowing so the span is never degenerate,
/// and other callers must uphold the same precondition.
///
/// [`fit_catmull_rom`]: crate::fit_catmull_rom
#[derive(Clone, Copy, Debug)]
pub struct CatmullRom {
    /// The leading neighbor point.
    pub p0: Point,
    /// The start point of the interpolated span.
    pub p1: Point,
    /// The end point of the interpolated span.
    pub p2: Point,
    /// The trailing neighbor point.
    pub p3: Point,
    /// Exponent applied to inter-point distances for parametrization.
    pub alpha: f64,
    // Cubic polynomial coefficients, Horner order.
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
}

impl CatmullRom {
    /// Create a new Catmull-Rom segment from a four-point window.
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P, alpha: f64) -> CatmullRom {
        let p0 = p0.into();
        let p1 = p1.into();
        let p2 = p2.into();
        let p3 = p3.into();

        let t01 = p0.distance(p1).powf(alpha);
        let t12 = p1.distance(p2).powf(alpha);
        let t23 = p2.distance(p3).powf(alpha);

        // A clamped neighbor has a zero numerator as well; substituting a
        // unit distance keeps the vanished term finite.
        let t01_div = if t01 == 0.0 { 1.0 } else { t01 };
        let t23_div = if t23 == 0.0 { 1.0 } else { t23 };

        let m1 = (p2 - p1) + ((p1 - p0) / t01_div - (p2 - p0) / (t01 + t12)) * t12;
        let m2 = (p2 - p1) + ((p3 - p2) / t23_div - (p3 - p1) / (t12 + t23)) * t12;

        let a = (p1 - p2) * 2.0 + m1 + m2;
        let b = (p2 - p1) * 3.0 - m1 * 2.0 - m2;
        let c = m1;
        let d = p1.to_vec2();

        CatmullRom {
            p0,
            p1,
            p2,
            p3,
            alpha,
            a,
            b,
            c,
            d,
        }
    }

    /// Convert to the equivalent cubic Bézier segment.
    ///
    /// The control points follow from the Hermite basis: the segment runs
    /// `p1` → `p2` with inner control points `p1 + (p2 - p0)/(6*alpha)` and
    /// `p2 - (p3 - p1)/(6*alpha)`.
    pub fn to_cubic(self) -> CubicBez {
        let d = 6.0 * self.alpha;
        CubicBez::new(
            self.p1,
            self.p1 + (self.p2 - self.p0) / d,
            self.p2 - (self.p3 - self.p1) / d,
            self.p2,
        )
    }
}

impl ParamCurve for CatmullRom {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        (((self.a * t + self.b) * t + self.c) * t + self.d).to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p1
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn interpolates_endpoints() {
        let cr = CatmullRom::new((0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0), 1.0);
        assert_near(cr.eval(0.0), Point::new(1.0, 2.0));
        assert_near(cr.eval(1.0), Point::new(3.0, 2.0));
    }

    #[test]
    fn uniform_window_matches_cubic() {
        // For an evenly spaced window the tangent polynomial and the
        // converted Bézier trace the same curve.
        let cr = CatmullRom::new((0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), 1.0);
        let bez = cr.to_cubic();
        let n = 16;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            assert_near(cr.eval(t), bez.eval(t));
        }
    }

    #[test]
    fn clamped_window_is_finite() {
        // boundary windows reuse a span endpoint as its own neighbor
        let cr = CatmullRom::new((0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (2.0, 0.0), 1.0);
        for i in 0..=8 {
            let p = cr.eval((i as f64) / 8.0);
            assert!(p.x.is_finite() && p.y.is_finite(), "NaN at {i}");
        }
        assert_near(cr.eval(0.0), Point::new(0.0, 0.0));
        assert_near(cr.eval(1.0), Point::new(1.0, 1.0));
    }

    #[test]
    fn collinear_window_stays_on_line() {
        let cr = CatmullRom::new((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0), 1.0);
        for i in 0..=8 {
            let p = cr.eval((i as f64) / 8.0);
            assert!((p.y - p.x).abs() < 1e-9, "left the line at {p:?}");
        }
    }
}
