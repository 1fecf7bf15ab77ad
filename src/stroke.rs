// Copyright 2023 the Autograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A captured brush stroke and its derived curve representations.

use std::error::Error;
use std::fmt;

use crate::{fit_catmull_rom, simplify_mask, PathEl, PathSeg, Point, Tolerance};

/// The absolute simplification tolerance applied when a stroke finishes,
/// in local coordinate units.
const SIMPLIFY_TOLERANCE: f64 = 0.5;

/// Misuse of the stroke lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrokeError {
    /// The stroke was already finished; it no longer accepts points and
    /// cannot be finished again.
    Finished,
}

impl fmt::Display for StrokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeError::Finished => write!(f, "stroke is already finished"),
        }
    }
}

impl Error for StrokeError {}

/// One continuous drawing gesture, from pointer-down to pointer-up.
///
/// A stroke is created empty and accumulates brush positions while the
/// gesture is active. [`finish`] derives the remaining representations in
/// one pass — the full-resolution fitted spline, the simplified position
/// subset, and the spline fitted over that subset — after which the stroke
/// is immutable.
///
/// [`finish`]: Stroke::finish
#[derive(Clone, Debug, Default)]
pub struct Stroke {
    positions: Vec<Point>,
    spline: Vec<PathSeg>,
    simple_positions: Vec<Point>,
    simple_spline: Vec<PathSeg>,
    finished: bool,
}

impl Stroke {
    /// Create a new, empty stroke.
    pub fn new() -> Stroke {
        Stroke::default()
    }

    /// Append a brush position to the raw sequence.
    ///
    /// Points must arrive in gesture order. Appending to a finished stroke
    /// is a programmer error and is rejected.
    pub fn add_point(&mut self, point: Point) -> Result<(), StrokeError> {
        if self.finished {
            return Err(StrokeError::Finished);
        }
        self.positions.push(point);
        Ok(())
    }

    /// Whether [`finish`](Stroke::finish) has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The raw brush positions, in capture order.
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// The full-resolution fitted spline. Empty until finished.
    pub fn spline(&self) -> &[PathSeg] {
        &self.spline
    }

    /// The simplified subset of the raw positions. Empty until finished.
    pub fn simple_positions(&self) -> &[Point] {
        &self.simple_positions
    }

    /// The spline fitted over the simplified positions. Empty until
    /// finished.
    pub fn simple_spline(&self) -> &[PathSeg] {
        &self.simple_spline
    }

    /// Derive the fitted and simplified representations.
    ///
    /// Runs exactly once, at the end of the gesture: fits the raw positions,
    /// reduces them with an absolute tolerance of 0.5 units, then fits the
    /// reduced subset. A second call is a programmer error and is rejected.
    pub fn finish(&mut self) -> Result<(), StrokeError> {
        if self.finished {
            return Err(StrokeError::Finished);
        }
        self.finished = true;

        self.spline = fit_catmull_rom(&self.positions);

        let keep = simplify_mask(&self.positions, Tolerance::Absolute(SIMPLIFY_TOLERANCE));
        self.simple_positions = self
            .positions
            .iter()
            .zip(&keep)
            .filter_map(|(&p, &k)| k.then_some(p))
            .collect();

        self.simple_spline = fit_catmull_rom(&self.simple_positions);
        Ok(())
    }

    /// The path elements of the simplified spline, in stroke-local
    /// coordinates.
    ///
    /// The reduced representation is the exported geometry: a move to the
    /// first segment's start, then line or cubic-curve continuations. Empty
    /// until finished.
    pub fn path_els(&self) -> Vec<PathEl> {
        let mut els = Vec::new();
        for (i, seg) in self.simple_spline.iter().enumerate() {
            els.extend(seg.to_els(i == 0));
        }
        els
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamCurve;

    #[test]
    fn lifecycle_errors() {
        let mut stroke = Stroke::new();
        stroke.add_point(Point::new(0.0, 0.0)).unwrap();
        stroke.finish().unwrap();
        assert_eq!(stroke.finish().unwrap_err(), StrokeError::Finished);
        assert_eq!(
            stroke.add_point(Point::new(1.0, 1.0)).unwrap_err(),
            StrokeError::Finished
        );
    }

    #[test]
    fn corner_stroke_end_to_end() {
        // A sharp corner: the mid point deviates from the chord by far more
        // than the simplification tolerance, so it must survive.
        let mut stroke = Stroke::new();
        for p in [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ] {
            stroke.add_point(p).unwrap();
        }
        stroke.finish().unwrap();

        assert_eq!(stroke.positions().len(), 3);
        assert_eq!(stroke.spline().len(), 2, "one cubic per consecutive pair");
        assert_eq!(stroke.simple_positions(), stroke.positions());
        assert_eq!(stroke.simple_spline().len(), 2);

        let els = stroke.path_els();
        assert_eq!(els.len(), 3, "move plus two curve continuations");
        assert!(matches!(els[0], PathEl::MoveTo(p) if p == Point::new(0.0, 0.0)));
        assert!(matches!(els[1], PathEl::CurveTo(..)));
        assert!(matches!(els[2], PathEl::CurveTo(..)));
    }

    #[test]
    fn straight_run_simplifies_to_line() {
        let mut stroke = Stroke::new();
        for i in 0..20 {
            stroke.add_point(Point::new(i as f64, 0.0)).unwrap();
        }
        stroke.finish().unwrap();

        assert_eq!(stroke.spline().len(), 19);
        assert_eq!(stroke.simple_positions().len(), 2, "endpoints only");
        assert_eq!(stroke.simple_spline().len(), 1);
        assert!(matches!(stroke.simple_spline()[0], PathSeg::Line(_)));
    }

    #[test]
    fn single_point_stroke_is_a_dot() {
        let mut stroke = Stroke::new();
        stroke.add_point(Point::new(4.0, 4.0)).unwrap();
        stroke.finish().unwrap();

        assert!(matches!(stroke.spline(), [PathSeg::Dot(p)] if *p == Point::new(4.0, 4.0)));
        assert!(matches!(stroke.simple_spline(), [PathSeg::Dot(_)]));
        assert_eq!(
            stroke.path_els(),
            vec![
                PathEl::MoveTo(Point::new(4.0, 4.0)),
                PathEl::LineTo(Point::new(4.0, 4.0)),
            ]
        );
    }

    #[test]
    fn spline_joints_continuous() {
        let mut stroke = Stroke::new();
        for p in [
            Point::new(0.0, 0.0),
            Point::new(5.0, 2.0),
            Point::new(9.0, 7.0),
            Point::new(11.0, 14.0),
            Point::new(10.0, 20.0),
        ] {
            stroke.add_point(p).unwrap();
        }
        stroke.finish().unwrap();

        for w in stroke.spline().windows(2) {
            assert_eq!(w[0].end(), w[1].start(), "joint not shared");
        }
    }

    #[test]
    fn empty_stroke_finishes_empty() {
        let mut stroke = Stroke::new();
        stroke.finish().unwrap();
        assert!(stroke.spline().is_empty());
        assert!(stroke.simple_spline().is_empty());
        assert!(stroke.path_els().is_empty());
    }
}
