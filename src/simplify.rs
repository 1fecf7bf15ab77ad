// Copyright 2022 the Autograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simplification of a point sequence.
//!
//! This is the Ramer-Douglas-Peucker algorithm, phrased as a keep-mask over
//! the input rather than an output sequence, so callers can correlate the
//! surviving points with other per-index data. The range worklist is explicit
//! rather than recursive; long freehand strokes can otherwise exceed stack
//! depth.

use smallvec::SmallVec;

use crate::Point;

/// The tolerance for simplification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tolerance {
    /// A fixed perpendicular-distance threshold.
    Absolute(f64),
    /// A threshold scaled by the chord length of the range under
    /// consideration, so tolerance grows with segment length.
    Relative(f64),
}

/// Compute the Ramer-Douglas-Peucker keep-mask for a point sequence.
///
/// The result has one flag per input point; a point whose flag is false can
/// be dropped while keeping every surviving point within the tolerance of
/// the chord it was folded into. The first and last points are always kept.
///
/// For each range the maximum perpendicular distance is sought among the
/// currently-kept interior points only, so already-folded points do not
/// force further subdivision. A negative tolerance behaves like a zero
/// tolerance: only exactly-on-chord points fold.
pub fn simplify_mask(points: &[Point], tolerance: Tolerance) -> Vec<bool> {
    let n = points.len();
    let mut keep = vec![true; n];
    if n < 3 {
        return keep;
    }

    let mut ranges: SmallVec<[(usize, usize); 32]> = SmallVec::new();
    ranges.push((0, n - 1));

    while let Some((start, end)) = ranges.pop() {
        let mut max_distance = 0.0;
        let mut max_index = start;
        for i in (start + 1)..end {
            if keep[i] {
                let distance = perpendicular_distance(points[i], points[start], points[end]);
                if distance > max_distance {
                    max_distance = distance;
                    max_index = i;
                }
            }
        }

        let thresh = match tolerance {
            Tolerance::Absolute(t) => t,
            Tolerance::Relative(t) => t * points[start].distance(points[end]),
        };

        // max_index == start means no interior candidate; subdividing
        // there would re-queue the range unchanged (a negative threshold
        // would otherwise never be satisfied)
        if max_distance > thresh && max_index != start {
            ranges.push((start, max_index));
            ranges.push((max_index, end));
        } else {
            // everything between the endpoints is within tolerance
            for flag in &mut keep[start + 1..end] {
                *flag = false;
            }
        }
    }

    keep
}

/// Simplify a point sequence, returning the surviving points in their
/// original order.
pub fn simplify(points: &[Point], tolerance: Tolerance) -> Vec<Point> {
    let keep = simplify_mask(points, tolerance);
    points
        .iter()
        .zip(&keep)
        .filter_map(|(&p, &k)| k.then_some(p))
        .collect()
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// When the chord is zero-length the quotient degenerates; the distance from
/// `p` to the coincident chord point is used instead.
fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len = ab.hypot();
    if len == 0.0 {
        return p.distance(a);
    }
    (p - a).cross(ab).abs() / len
}
