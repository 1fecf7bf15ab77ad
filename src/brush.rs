// Copyright 2022 the Autograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stabilized brush position derived from raw pointer samples.

use crate::{ConfigError, Point, Smoothing};

/// The default deadzone radius, in local coordinate units.
pub const DEADZONE_RADIUS_DEFAULT: f64 = 2.5;

// Hysteresis at the deadzone boundary, so jitter straddling the radius does
// not flicker the brush.
const DEADZONE_EPSILON: f64 = 1e-2;

/// A brush that chases the pointer through a smoothing filter and an
/// optional deadzone.
///
/// The brush decouples two stabilization mechanisms: the owned [`Smoothing`]
/// filter damps sensor noise in the raw samples, while the deadzone/lag
/// policy keeps the *rendered* brush position still until the smoothed
/// pointer has moved far enough, then lets it catch up, optionally eased.
///
/// The brush position only ever changes through [`update`]; it is the
/// position a rendering collaborator should draw.
///
/// [`update`]: Brush::update
#[derive(Clone, Debug)]
pub struct Brush {
    pointer: Point,
    brush: Point,
    deadzone_radius: f64,
    deadzone: bool,
    smoothing: Smoothing,
}

/// The ease-out curve applied to lagged catch-up steps.
///
/// Near `x = 0` the slope is flat, so a lag factor near 1 produces small
/// steps; near `x = 1` the step approaches full catch-up.
fn ease(x: f64) -> f64 {
    1.0 - (1.0 - x * x).sqrt()
}

impl Brush {
    /// Create a brush with the given smoothing strategy, starting at the
    /// origin with the deadzone disabled.
    pub fn new(smoothing: Smoothing) -> Brush {
        Brush {
            pointer: Point::ZERO,
            brush: Point::ZERO,
            deadzone_radius: DEADZONE_RADIUS_DEFAULT,
            deadzone: false,
            smoothing,
        }
    }

    /// Builder-style: start both the pointer and brush position at `point`.
    pub fn with_start(mut self, point: Point) -> Brush {
        self.pointer = point;
        self.brush = point;
        self
    }

    /// Builder-style: enable the deadzone with the given radius.
    pub fn with_deadzone(mut self, radius: f64) -> Result<Brush, ConfigError> {
        self.set_deadzone_radius(radius)?;
        self.deadzone = true;
        Ok(self)
    }

    /// The brush position, i.e. the position to render.
    pub fn brush_position(&self) -> Point {
        self.brush
    }

    /// The smoothed pointer position.
    pub fn pointer_position(&self) -> Point {
        self.pointer
    }

    /// Returns `true` if the deadzone is enabled.
    pub fn deadzone_enabled(&self) -> bool {
        self.deadzone
    }

    /// Enables the deadzone.
    pub fn enable_deadzone(&mut self) {
        self.deadzone = true;
    }

    /// Disables the deadzone.
    pub fn disable_deadzone(&mut self) {
        self.deadzone = false;
    }

    /// The current deadzone radius.
    pub fn deadzone_radius(&self) -> f64 {
        self.deadzone_radius
    }

    /// Updates the deadzone radius.
    ///
    /// The radius must be strictly positive.
    pub fn set_deadzone_radius(&mut self, radius: f64) -> Result<(), ConfigError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::InvalidRadius);
        }
        self.deadzone_radius = radius;
        Ok(())
    }

    /// Feed a raw pointer sample and recompute the brush position.
    ///
    /// Returns `true` if the brush position changed.
    ///
    /// A sample equal to the current smoothed pointer is a no-op unless
    /// `snap` or a valid lag factor is given. With `snap`, the brush jumps
    /// directly to the sample and the smoothing filter is cleared; this
    /// avoids a visible crawl from the filter warming up at stroke start.
    ///
    /// Otherwise the sample runs through the smoothing filter. With the
    /// deadzone disabled the brush adopts the smoothed value. With it
    /// enabled, the brush moves only when the smoothed pointer is outside
    /// the deadzone radius, advancing by the full difference or, given a
    /// lag factor in `(0, 1)`, by the eased fraction `ease(1 - lag)` of it.
    pub fn update(&mut self, pointer: Point, snap: bool, lag: Option<f64>) -> bool {
        let lag = lag.filter(|l| *l > 0.0 && *l < 1.0);

        if self.pointer == pointer && !snap && lag.is_none() {
            return false;
        }

        if snap {
            // the pointer field tracks the filter output only, so it is
            // left as-is until the next filtered sample
            self.brush = pointer;
            self.smoothing.clear();
            return true;
        }

        self.smoothing.push(pointer);
        self.pointer = self.smoothing.value();

        if !self.deadzone {
            self.brush = self.pointer;
            return true;
        }

        let diff = self.pointer - self.brush;
        let outside = diff.hypot() - self.deadzone_radius > DEADZONE_EPSILON;
        if outside {
            match lag {
                Some(l) => self.brush += diff * ease(1.0 - l),
                None => self.brush += diff,
            }
            return true;
        }

        false
    }
}

impl Default for Brush {
    fn default() -> Brush {
        Brush::new(Smoothing::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_jumps_and_clears_filter() {
        let mut brush = Brush::new(Smoothing::average(4).unwrap());
        brush.update(Point::new(100.0, 100.0), false, None);
        assert!(brush.update(Point::new(0.0, 0.0), true, None));
        assert_eq!(brush.brush_position(), Point::new(0.0, 0.0));

        // the cleared filter seeds from scratch, so the next sample is not
        // averaged with pre-snap history
        brush.update(Point::new(10.0, 0.0), false, None);
        assert_eq!(brush.brush_position(), Point::new(10.0, 0.0));
    }

    #[test]
    fn identical_sample_is_noop() {
        let mut brush = Brush::default().with_start(Point::new(5.0, 5.0));
        assert!(!brush.update(Point::new(5.0, 5.0), false, None));
        assert_eq!(brush.brush_position(), Point::new(5.0, 5.0));
    }

    #[test]
    fn no_deadzone_tracks_smoothed_pointer() {
        let mut brush = Brush::default();
        assert!(brush.update(Point::new(3.0, 4.0), false, None));
        assert_eq!(brush.brush_position(), Point::new(3.0, 4.0));
        assert_eq!(brush.pointer_position(), Point::new(3.0, 4.0));
    }

    #[test]
    fn deadzone_containment() {
        let mut brush = Brush::new(Smoothing::none())
            .with_deadzone(5.0)
            .unwrap();

        // inside the radius the brush holds still
        assert!(!brush.update(Point::new(3.0, 0.0), false, None));
        assert_eq!(brush.brush_position(), Point::ZERO);
        assert!(!brush.update(Point::new(0.0, 4.9), false, None));
        assert_eq!(brush.brush_position(), Point::ZERO);

        // beyond the radius it catches up fully
        assert!(brush.update(Point::new(8.0, 0.0), false, None));
        assert_eq!(brush.brush_position(), Point::new(8.0, 0.0));
    }

    #[test]
    fn lag_dampens_catchup() {
        let mut brush = Brush::new(Smoothing::none())
            .with_deadzone(1.0)
            .unwrap();

        assert!(brush.update(Point::new(10.0, 0.0), false, Some(0.8)));
        let stepped = brush.brush_position();
        assert!(stepped.x > 0.0, "brush should advance, got {stepped:?}");
        assert!(stepped.x < 10.0, "lag should dampen, got {stepped:?}");

        // ease(0.2) of the 10-unit difference
        let expected = 10.0 * ease(0.2);
        assert!((stepped.x - expected).abs() < 1e-12, "got {stepped:?}");
    }

    #[test]
    fn invalid_lag_ignored() {
        let mut brush = Brush::new(Smoothing::none())
            .with_deadzone(1.0)
            .unwrap();
        // lag of 1.0 is out of range; full catch-up applies
        assert!(brush.update(Point::new(10.0, 0.0), false, Some(1.0)));
        assert_eq!(brush.brush_position(), Point::new(10.0, 0.0));
    }

    #[test]
    fn radius_must_be_positive() {
        let mut brush = Brush::default();
        assert_eq!(
            brush.set_deadzone_radius(0.0).unwrap_err(),
            ConfigError::InvalidRadius
        );
        assert_eq!(
            brush.set_deadzone_radius(-2.0).unwrap_err(),
            ConfigError::InvalidRadius
        );
        assert!(brush.set_deadzone_radius(4.0).is_ok());
        assert_eq!(brush.deadzone_radius(), 4.0);
    }
}
