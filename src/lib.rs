// Copyright 2018 the Autograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Freehand stroke geometry, with a focus on pen-plotter-quality output.
//!
//! The autograph library turns a stream of raw pointer samples into compact,
//! re-renderable vector curves. It contains the full capture-to-export
//! pipeline: motion smoothing and deadzone stabilization ([`Brush`]),
//! Catmull-Rom curve fitting into cubic Bézier chains ([`fit_catmull_rom`]),
//! Ramer-Douglas-Peucker path simplification ([`simplify_mask`]), a stroke
//! lifecycle tying the three together ([`Stroke`]), and an undo/redo history
//! with SVG document export ([`StrokeHistory`]). Event capture, rendering
//! and UI are left to the embedding application; this crate only deals in
//! geometry.
//!
//! # Examples
//!
//! Capturing a gesture and exporting it:
//! ```
//! use autograph::{Brush, Point, Size, Smoothing, Stroke, StrokeHistory};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut brush = Brush::new(Smoothing::gaussian(10.0)?);
//! let mut stroke = Stroke::new();
//!
//! // pointer-down snaps the brush to the first sample
//! if brush.update(Point::new(0.0, 0.0), true, None) {
//!     stroke.add_point(brush.brush_position())?;
//! }
//! // pointer-move events feed the smoothing filter
//! for sample in [Point::new(40.0, 2.0), Point::new(80.0, 45.0)] {
//!     if brush.update(sample, false, None) {
//!         stroke.add_point(brush.brush_position())?;
//!     }
//! }
//! // pointer-up finishes the stroke and records it
//! stroke.finish()?;
//!
//! let mut history = StrokeHistory::new();
//! history.add_stroke(stroke);
//! let svg = history.to_svg(Size::new(800.0, 600.0), Size::new(4.9, 6.9));
//! assert!(svg.starts_with("<svg"));
//! # Ok(())
//! # }
//! ```
//!
//! Fitting a polyline directly:
//! ```
//! use autograph::{fit_catmull_rom, ParamCurve, Point};
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//! ];
//! let spline = fit_catmull_rom(&points);
//! assert_eq!(spline.len(), 2);
//! assert_eq!(spline[0].end(), spline[1].start());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::many_single_char_names)]

mod affine;
mod brush;
mod catmull_rom;
mod common;
mod cubicbez;
mod fit;
mod history;
mod line;
mod param_curve;
mod path;
mod point;
mod simplify;
mod size;
mod smoothing;
mod stroke;
mod svg;
mod vec2;

pub use crate::affine::*;
pub use crate::brush::*;
pub use crate::catmull_rom::*;
pub use crate::common::*;
pub use crate::cubicbez::*;
pub use crate::fit::*;
pub use crate::history::*;
pub use crate::line::*;
pub use crate::param_curve::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::simplify::*;
pub use crate::size::*;
pub use crate::smoothing::*;
pub use crate::stroke::*;
pub use crate::vec2::*;
