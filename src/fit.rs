// Copyright 2022 the Autograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting a point sequence with a chain of curve segments.

use crate::{CatmullRom, Line, PathSeg, Point};

/// Exponent for the Catmull-Rom distance parametrization used by stroke
/// fitting; 1.0 is uniform in chord length.
const ALPHA: f64 = 1.0;

/// Fit an ordered point sequence with a chain of path segments.
///
/// For three or more distinct points this produces one cubic Bézier per
/// consecutive pair, each derived from a Catmull-Rom segment over the
/// four-point neighbor window (with boundary clamping, see [`window`]).
/// Adjacent cubics share their joint point exactly.
///
/// Degenerate inputs take a defined fallback instead of erroring:
/// consecutive coincident points are collapsed first, so a sequence that
/// collapses to a single point yields one [`PathSeg::Dot`], and one that
/// collapses to two points yields one [`PathSeg::Line`]. An empty input
/// yields an empty chain.
pub fn fit_catmull_rom(points: &[Point]) -> Vec<PathSeg> {
    let points = dedup_points(points);
    match points.len() {
        0 => Vec::new(),
        1 => vec![PathSeg::Dot(points[0])],
        2 => vec![PathSeg::Line(Line::new(points[0], points[1]))],
        n => {
            let mut segs = Vec::with_capacity(n - 1);
            for i in 1..n {
                let [p0, p1, p2, p3] = window(&points, i);
                segs.push(PathSeg::Cubic(
                    CatmullRom::new(p0, p1, p2, p3, ALPHA).to_cubic(),
                ));
            }
            segs
        }
    }
}

/// The four-point neighbor window for the segment ending at index `i`.
///
/// Out-of-range neighbors clamp to the nearest in-range point: the first
/// segment reuses its start point as the leading neighbor, the last segment
/// reuses its end point as the trailing neighbor.
fn window(points: &[Point], i: usize) -> [Point; 4] {
    let p1 = points[i - 1];
    let p2 = points[i];
    let p0 = if i >= 2 { points[i - 2] } else { p1 };
    let p3 = if i + 1 < points.len() {
        points[i + 1]
    } else {
        p2
    };
    [p0, p1, p2, p3]
}

/// Collapse runs of consecutive coincident points.
///
/// The Catmull-Rom tangent formulas divide by inter-point distances, so
/// coincident neighbors must never reach them.
fn dedup_points(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    out
}
