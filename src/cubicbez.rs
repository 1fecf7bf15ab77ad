//! Cubic Bézier segments.

use std::ops::Mul;

use crate::{Affine, CatmullRom, ParamCurve, Point};

/// A single cubic Bézier segment.
///
/// Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Convert to the uniform Catmull-Rom segment that interpolates
    /// `p0` → `p3` along this curve.
    ///
    /// This is the inverse of [`CatmullRom::to_cubic`] for `alpha` 1.0:
    /// the synthesized outer guide points are placed so that the resulting
    /// segment's Bézier control points land back on `p1` and `p2`.
    pub fn to_catmull_rom(self) -> CatmullRom {
        let cr0 = self.p3 + (self.p0 - self.p1) * 6.0;
        let cr3 = self.p0 + (self.p3 - self.p2) * 6.0;
        CatmullRom::new(cr0, self.p0, self.p3, cr3, 1.0)
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl Mul<CubicBez> for Affine {
    type Output = CubicBez;

    #[inline]
    fn mul(self, c: CubicBez) -> CubicBez {
        CubicBez {
            p0: self * c.p0,
            p1: self * c.p1,
            p2: self * c.p2,
            p3: self * c.p3,
        }
    }
}
