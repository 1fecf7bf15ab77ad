// Copyright 2022 the Autograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothing filters for raw pointer samples.
//!
//! A filter consumes a serial stream of sampled positions through `push` and
//! exposes a smoothed position through `value`. The set of strategies is
//! closed: a [`Brush`] picks one [`Smoothing`] variant at construction and
//! never swaps it mid-session. Each filter exclusively owns its buffers; the
//! brush only ever reads `value()`.
//!
//! [`Brush`]: crate::Brush

use std::error::Error;
use std::f64::consts::PI;
use std::fmt;

use crate::Point;

/// An invalid filter or brush parameter, rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A moving-average capacity of zero samples.
    ZeroCapacity,
    /// An exponential blend factor that is NaN or infinite.
    NonFiniteAlpha,
    /// A Gaussian sigma that is not strictly positive and finite.
    InvalidSigma,
    /// A deadzone radius that is not strictly positive.
    InvalidRadius,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "moving-average capacity must be at least 1"),
            ConfigError::NonFiniteAlpha => write!(f, "exponential alpha must be finite"),
            ConfigError::InvalidSigma => write!(f, "sigma must be positive and finite"),
            ConfigError::InvalidRadius => write!(f, "deadzone radius must be positive"),
        }
    }
}

impl Error for ConfigError {}

/// A pass-through filter; `value()` is the last pushed sample verbatim.
#[derive(Clone, Debug, Default)]
pub struct NoSmoothing {
    value: Point,
}

impl NoSmoothing {
    /// Create a new pass-through filter.
    pub fn new() -> NoSmoothing {
        NoSmoothing::default()
    }

    /// Record a sample.
    pub fn push(&mut self, value: Point) {
        self.value = value;
    }

    /// The last pushed sample.
    pub fn value(&self) -> Point {
        self.value
    }

    /// Reset to the pre-any-push state.
    pub fn clear(&mut self) {
        self.value = Point::ZERO;
    }
}

/// A simple moving average. Samples are given equal weight.
///
/// A fixed-capacity ring buffer backs the filter; the running mean is
/// updated incrementally, with weight `1/count` while the buffer fills and
/// `(new - old)/capacity` once it is full.
#[derive(Clone, Debug)]
pub struct MovingAverage {
    capacity: usize,
    samples: Vec<Point>,
    count: usize,
    mean: Point,
}

impl MovingAverage {
    /// Create a moving-average filter over the last `capacity` samples.
    pub fn new(capacity: usize) -> Result<MovingAverage, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(MovingAverage {
            capacity,
            samples: Vec::with_capacity(capacity),
            count: 0,
            mean: Point::ZERO,
        })
    }

    /// Record a sample.
    pub fn push(&mut self, value: Point) {
        let i = self.count % self.capacity;
        self.count += 1;
        if self.count <= self.capacity {
            self.samples.push(value);
            self.mean.x += (value.x - self.mean.x) / self.count as f64;
            self.mean.y += (value.y - self.mean.y) / self.count as f64;
        } else {
            let removed = self.samples[i];
            self.samples[i] = value;
            self.mean.x += (value.x - removed.x) / self.capacity as f64;
            self.mean.y += (value.y - removed.y) / self.capacity as f64;
        }
    }

    /// The mean of the retained samples.
    pub fn value(&self) -> Point {
        self.mean
    }

    /// Reset to the pre-any-push state.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.count = 0;
        self.mean = Point::ZERO;
    }
}

/// An exponential smoothing filter. More recent samples are given higher
/// weight.
///
/// The first pushed sample seeds the smoothed value; each later sample
/// blends in with weight `alpha` per component.
#[derive(Clone, Debug)]
pub struct ExpSmoothing {
    alpha: f64,
    smoothed: Point,
    count: usize,
}

impl ExpSmoothing {
    /// Create an exponential filter with the given blend factor.
    ///
    /// `alpha` is clamped to `[0, 1]`; non-finite values are rejected.
    pub fn new(alpha: f64) -> Result<ExpSmoothing, ConfigError> {
        if !alpha.is_finite() {
            return Err(ConfigError::NonFiniteAlpha);
        }
        Ok(ExpSmoothing {
            alpha: alpha.clamp(0.0, 1.0),
            smoothed: Point::ZERO,
            count: 0,
        })
    }

    /// Record a sample.
    pub fn push(&mut self, value: Point) {
        self.count += 1;
        if self.count == 1 {
            self.smoothed = value;
        } else {
            self.smoothed.x = self.smoothed.x * (1.0 - self.alpha) + value.x * self.alpha;
            self.smoothed.y = self.smoothed.y * (1.0 - self.alpha) + value.y * self.alpha;
        }
    }

    /// The smoothed value.
    pub fn value(&self) -> Point {
        self.smoothed
    }

    /// Reset to the pre-any-push state.
    pub fn clear(&mut self) {
        self.smoothed = Point::ZERO;
        self.count = 0;
    }
}

/// A distance-weighted Gaussian filter.
///
/// Samples are weighed by the path distance traveled from the newest sample
/// back to them, using the normal-distribution PDF, so the effective window
/// adapts to drawing speed: slow, dense samples average over many points
/// while a fast flick is barely damped. The backward walk stops once the
/// cumulative distance exceeds `3*sigma`, where the weight has decayed to
/// roughly 1e-4 of the peak.
///
/// The sample and delta history grows for the lifetime of a stroke; the
/// truncation bound, not a fixed buffer, controls the effective window.
#[derive(Clone, Debug)]
pub struct GaussianSmoothing {
    sigma: f64,
    samples: Vec<Point>,
    deltas: Vec<f64>,
    mean: Point,
}

impl GaussianSmoothing {
    /// Create a distance-weighted Gaussian filter.
    ///
    /// `sigma` must be strictly positive and finite.
    pub fn new(sigma: f64) -> Result<GaussianSmoothing, ConfigError> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ConfigError::InvalidSigma);
        }
        Ok(GaussianSmoothing {
            sigma,
            samples: Vec::new(),
            deltas: Vec::new(),
            mean: Point::ZERO,
        })
    }

    /// Record a sample and recompute the weighted mean.
    pub fn push(&mut self, value: Point) {
        let max_weight = 1.0 / ((2.0 * PI).sqrt() * self.sigma);
        let sigma3 = 3.0 * self.sigma;
        let sigma_sq = self.sigma * self.sigma;

        let mut weight_sum = max_weight;
        self.mean.x = max_weight * value.x;
        self.mean.y = max_weight * value.y;

        if let Some(&last) = self.samples.last() {
            self.deltas.push(value.distance(last));
        }
        self.samples.push(value);

        let mut distance = 0.0;
        for i in (0..self.deltas.len()).rev() {
            distance += self.deltas[i];
            if distance > sigma3 {
                break;
            }
            let weight = max_weight * (-0.5 * distance * distance / sigma_sq).exp();
            weight_sum += weight;
            self.mean.x += weight * self.samples[i].x;
            self.mean.y += weight * self.samples[i].y;
        }

        self.mean.x /= weight_sum;
        self.mean.y /= weight_sum;
    }

    /// The weighted mean over the trailing window.
    pub fn value(&self) -> Point {
        self.mean
    }

    /// Reset to the pre-any-push state.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.deltas.clear();
        self.mean = Point::ZERO;
    }
}

/// A smoothing strategy, chosen once at brush construction.
#[derive(Clone, Debug)]
pub enum Smoothing {
    /// No smoothing; samples pass through verbatim.
    None(NoSmoothing),
    /// Equal-weight moving average.
    Average(MovingAverage),
    /// Exponential blend.
    Exp(ExpSmoothing),
    /// Distance-weighted Gaussian.
    Gaussian(GaussianSmoothing),
}

impl Smoothing {
    /// A pass-through strategy.
    pub fn none() -> Smoothing {
        Smoothing::None(NoSmoothing::new())
    }

    /// A moving average over the last `capacity` samples.
    pub fn average(capacity: usize) -> Result<Smoothing, ConfigError> {
        Ok(Smoothing::Average(MovingAverage::new(capacity)?))
    }

    /// An exponential blend with the given factor.
    pub fn exp(alpha: f64) -> Result<Smoothing, ConfigError> {
        Ok(Smoothing::Exp(ExpSmoothing::new(alpha)?))
    }

    /// A distance-weighted Gaussian with the given sigma.
    pub fn gaussian(sigma: f64) -> Result<Smoothing, ConfigError> {
        Ok(Smoothing::Gaussian(GaussianSmoothing::new(sigma)?))
    }

    /// Record a sample.
    pub fn push(&mut self, value: Point) {
        match self {
            Smoothing::None(f) => f.push(value),
            Smoothing::Average(f) => f.push(value),
            Smoothing::Exp(f) => f.push(value),
            Smoothing::Gaussian(f) => f.push(value),
        }
    }

    /// The smoothed position.
    pub fn value(&self) -> Point {
        match self {
            Smoothing::None(f) => f.value(),
            Smoothing::Average(f) => f.value(),
            Smoothing::Exp(f) => f.value(),
            Smoothing::Gaussian(f) => f.value(),
        }
    }

    /// Reset to the pre-any-push state.
    pub fn clear(&mut self) {
        match self {
            Smoothing::None(f) => f.clear(),
            Smoothing::Average(f) => f.clear(),
            Smoothing::Exp(f) => f.clear(),
            Smoothing::Gaussian(f) => f.clear(),
        }
    }
}

impl Default for Smoothing {
    fn default() -> Smoothing {
        Smoothing::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn invalid_parameters_rejected() {
        assert_eq!(MovingAverage::new(0).unwrap_err(), ConfigError::ZeroCapacity);
        assert_eq!(
            ExpSmoothing::new(f64::NAN).unwrap_err(),
            ConfigError::NonFiniteAlpha
        );
        assert_eq!(
            GaussianSmoothing::new(0.0).unwrap_err(),
            ConfigError::InvalidSigma
        );
        assert_eq!(
            GaussianSmoothing::new(-1.0).unwrap_err(),
            ConfigError::InvalidSigma
        );
        // out-of-range but finite alpha clamps rather than errors
        assert!(ExpSmoothing::new(1.5).is_ok());
    }

    #[test]
    fn identical_samples_converge() {
        let p = Point::new(7.0, -3.0);

        let mut avg = MovingAverage::new(4).unwrap();
        for _ in 0..10 {
            avg.push(p);
        }
        assert_near(avg.value(), p);

        let mut exp = ExpSmoothing::new(0.3).unwrap();
        for _ in 0..10 {
            exp.push(p);
        }
        assert_near(exp.value(), p);
    }

    #[test]
    fn moving_average_window() {
        let mut avg = MovingAverage::new(3).unwrap();
        let samples = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(6.0, 3.0),
            Point::new(9.0, 6.0),
            Point::new(12.0, 9.0),
        ];
        for (i, &s) in samples.iter().enumerate() {
            avg.push(s);
            // mean of the last min(i+1, 3) samples
            let lo = (i + 1).saturating_sub(3);
            let window = &samples[lo..=i];
            let mut mx = 0.0;
            let mut my = 0.0;
            for w in window {
                mx += w.x;
                my += w.y;
            }
            let n = window.len() as f64;
            assert_near(avg.value(), Point::new(mx / n, my / n));
        }
    }

    #[test]
    fn exp_first_sample_seeds() {
        let mut exp = ExpSmoothing::new(0.25).unwrap();
        exp.push(Point::new(10.0, 20.0));
        assert_near(exp.value(), Point::new(10.0, 20.0));
        exp.push(Point::new(20.0, 20.0));
        assert_near(exp.value(), Point::new(12.5, 20.0));
    }

    #[test]
    fn gaussian_truncates_beyond_three_sigma() {
        let mut g = GaussianSmoothing::new(1.0).unwrap();
        g.push(Point::new(0.0, 0.0));
        // the previous sample is 100 units away, far beyond 3 sigma, so the
        // new value is exactly the new sample
        g.push(Point::new(100.0, 0.0));
        assert_near(g.value(), Point::new(100.0, 0.0));
    }

    #[test]
    fn gaussian_weights_decrease_with_distance() {
        // closely spaced samples pull the mean back toward the path;
        // the nearest older sample contributes more than the farthest
        let mut g = GaussianSmoothing::new(2.0).unwrap();
        g.push(Point::new(0.0, 0.0));
        g.push(Point::new(1.0, 0.0));
        g.push(Point::new(2.0, 0.0));
        let v = g.value();
        // mean lies strictly behind the newest sample, ahead of the oldest
        assert!(v.x < 2.0 && v.x > 0.0, "mean {v:?} outside the path");
        // weight ordering: mean is closer to the newest than to the oldest
        assert!(
            (2.0 - v.x) < (v.x - 0.0),
            "newest sample should dominate, got {v:?}"
        );
    }

    #[test]
    fn clear_resets_state() {
        let mut avg = MovingAverage::new(2).unwrap();
        avg.push(Point::new(5.0, 5.0));
        avg.clear();
        avg.push(Point::new(1.0, 1.0));
        assert_near(avg.value(), Point::new(1.0, 1.0));

        let mut exp = ExpSmoothing::new(0.5).unwrap();
        exp.push(Point::new(5.0, 5.0));
        exp.clear();
        exp.push(Point::new(1.0, 1.0));
        // first push after clear re-seeds
        assert_near(exp.value(), Point::new(1.0, 1.0));

        let mut g = GaussianSmoothing::new(1.0).unwrap();
        g.push(Point::new(5.0, 5.0));
        g.clear();
        g.push(Point::new(1.0, 1.0));
        assert_near(g.value(), Point::new(1.0, 1.0));
    }
}
