//! Path segments and path drawing elements.

use std::ops::Mul;

use arrayvec::ArrayVec;

use crate::{Affine, CubicBez, Line, ParamCurve, Point};

/// A segment of a fitted stroke path.
///
/// Stroke fitting produces cubic Bézier chains for three or more distinct
/// input points; shorter inputs degenerate to a single line or a zero-length
/// point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSeg {
    /// A zero-length point marker.
    Dot(Point),
    /// A straight line segment.
    Line(Line),
    /// A cubic Bézier segment.
    Cubic(CubicBez),
}

/// A single path drawing command.
///
/// This is the vocabulary consumed by rendering and export collaborators:
/// a move, a line continuation, or a cubic curve continuation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a cubic Bézier from the current location to the last point,
    /// using the first two points as control points.
    CurveTo(Point, Point, Point),
}

impl PathSeg {
    /// The path elements drawing this segment.
    ///
    /// The first segment of a path emits a leading [`PathEl::MoveTo`];
    /// subsequent segments continue from the previous segment's endpoint.
    /// A leading `Dot` additionally emits a zero-length `LineTo` so the
    /// mark survives round stroke caps.
    pub fn to_els(&self, first: bool) -> ArrayVec<PathEl, 2> {
        let mut els = ArrayVec::new();
        if first {
            els.push(PathEl::MoveTo(self.start()));
        }
        match *self {
            PathSeg::Dot(p) => els.push(PathEl::LineTo(p)),
            PathSeg::Line(line) => els.push(PathEl::LineTo(line.p1)),
            PathSeg::Cubic(c) => els.push(PathEl::CurveTo(c.p1, c.p2, c.p3)),
        }
        els
    }
}

impl ParamCurve for PathSeg {
    fn eval(&self, t: f64) -> Point {
        match *self {
            PathSeg::Dot(p) => p,
            PathSeg::Line(line) => line.eval(t),
            PathSeg::Cubic(c) => c.eval(t),
        }
    }

    fn start(&self) -> Point {
        match *self {
            PathSeg::Dot(p) => p,
            PathSeg::Line(line) => line.p0,
            PathSeg::Cubic(c) => c.p0,
        }
    }

    fn end(&self) -> Point {
        match *self {
            PathSeg::Dot(p) => p,
            PathSeg::Line(line) => line.p1,
            PathSeg::Cubic(c) => c.p3,
        }
    }
}

impl PathEl {
    /// Apply a point mapping to every point of the element.
    pub fn map_points(self, f: impl Fn(Point) -> Point) -> PathEl {
        match self {
            PathEl::MoveTo(p) => PathEl::MoveTo(f(p)),
            PathEl::LineTo(p) => PathEl::LineTo(f(p)),
            PathEl::CurveTo(p1, p2, p3) => PathEl::CurveTo(f(p1), f(p2), f(p3)),
        }
    }
}

impl Mul<PathSeg> for Affine {
    type Output = PathSeg;

    fn mul(self, seg: PathSeg) -> PathSeg {
        match seg {
            PathSeg::Dot(p) => PathSeg::Dot(self * p),
            PathSeg::Line(line) => PathSeg::Line(self * line),
            PathSeg::Cubic(c) => PathSeg::Cubic(self * c),
        }
    }
}
