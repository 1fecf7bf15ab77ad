//! A trait for curves parametrized by a scalar.

use crate::Point;

/// A curve parametrized by a scalar in the range `[0..1]`.
pub trait ParamCurve {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}
