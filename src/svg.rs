//! SVG path and document emission.

use std::io::Write;

use crate::{remap, PathEl, Point, Size, Stroke, StrokeHistory};

impl Stroke {
    /// The SVG path data (`d` attribute) of the simplified spline, remapped
    /// from the `src` coordinate frame to the `dst` frame.
    ///
    /// Each axis is remapped independently from `(0, 0)-(src.width,
    /// src.height)` to `(0, 0)-(dst.width, dst.height)`. Coordinates are
    /// written with 3 decimal digits; this costs round-trip precision, not
    /// geometry.
    pub fn svg_path_data(&self, src: Size, dst: Size) -> String {
        let map = |p: Point| {
            Point::new(
                remap(p.x, 0.0, src.width, 0.0, dst.width),
                remap(p.y, 0.0, src.height, 0.0, dst.height),
            )
        };
        let mut result = Vec::new();
        for el in self.path_els() {
            match el.map_points(map) {
                PathEl::MoveTo(p) => write!(result, "M{:.3},{:.3}", p.x, p.y).unwrap(),
                PathEl::LineTo(p) => write!(result, "L{:.3},{:.3}", p.x, p.y).unwrap(),
                PathEl::CurveTo(p1, p2, p3) => write!(
                    result,
                    "C{:.3},{:.3} {:.3},{:.3} {:.3},{:.3}",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                )
                .unwrap(),
            }
        }
        String::from_utf8(result).unwrap()
    }
}

impl StrokeHistory {
    /// Assemble the visible strokes into a standalone SVG document.
    ///
    /// The document declares its size in inches with a view box matching
    /// `dst`, and contains one `<path>` per visible stroke, oldest first,
    /// drawn as an unfilled black line with round caps and joins.
    pub fn to_svg(&self, src: Size, dst: Size) -> String {
        let mut result = Vec::new();
        write!(
            result,
            "<svg width=\"{}in\" height=\"{}in\" viewBox=\"0 0 {} {}\" version=\"1.1\" \
             xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" \
             style=\"fill-rule:evenodd;clip-rule:evenodd;stroke-linecap:round;stroke-linejoin:round;\">",
            dst.width, dst.height, dst.width, dst.height
        )
        .unwrap();
        for stroke in self.strokes() {
            write!(
                result,
                "<path d=\"{}\" style=\"fill:none;fill-rule:nonzero;stroke:#000;stroke-width:{}px;\"/>",
                stroke.svg_path_data(src, dst),
                dst.width / 100.0
            )
            .unwrap();
        }
        write!(result, "</svg>").unwrap();
        String::from_utf8(result).unwrap()
    }
}
