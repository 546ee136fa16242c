//! Discrete sampling of a variable's numeric domain

use crate::error::{FuzzyError, Result};

/// Tolerance used when deciding whether `max` lands on the sampling grid
const GRID_EPSILON: f64 = 1e-9;

/// Upper bound on samples per universe
pub const MAX_POINTS: usize = 1_000_000;

/// Ordered, evenly spaced samples of the interval `[min, max]`
///
/// Samples start at `min` and advance by `step`. The last sample is `max`
/// itself whenever the interval width is a whole multiple of the step.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    min: f64,
    max: f64,
    step: f64,
    points: Vec<f64>,
}

impl Universe {
    /// Sample `[min, max]` every `step` units
    ///
    /// Fails with [`FuzzyError::Configuration`] for non-finite bounds,
    /// `min > max`, a step that is not strictly positive, or a grid with
    /// more than [`MAX_POINTS`] samples.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(FuzzyError::Configuration(format!(
                "universe bounds must be finite (got [{}, {}])",
                min, max
            )));
        }
        if min > max {
            return Err(FuzzyError::Configuration(format!(
                "universe minimum {} exceeds maximum {}",
                min, max
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(FuzzyError::Configuration(format!(
                "universe step must be positive (got {})",
                step
            )));
        }

        let intervals = ((max - min) / step + GRID_EPSILON).floor();
        if !intervals.is_finite() || intervals >= MAX_POINTS as f64 {
            return Err(FuzzyError::Configuration(format!(
                "universe [{}, {}] at step {} exceeds {} samples",
                min, max, step, MAX_POINTS
            )));
        }
        let intervals = intervals as usize;
        let points = (0..=intervals)
            .map(|i| (min + step * i as f64).min(max))
            .collect();

        Ok(Self {
            min,
            max,
            step,
            points,
        })
    }

    /// Lower bound of the domain
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the domain
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sampling step
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample points in ascending order
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed universe; present for API symmetry
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Clamp a crisp value into the declared domain
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_grid_includes_max() {
        let universe = Universe::new(0.0, 80.0, 1.0).unwrap();
        assert_eq!(universe.len(), 81);
        assert_eq!(universe.points()[0], 0.0);
        assert_eq!(universe.points()[80], 80.0);
    }

    #[test]
    fn test_offset_grid() {
        let universe = Universe::new(1.0, 10.0, 1.0).unwrap();
        assert_eq!(universe.len(), 10);
        assert_eq!(universe.points().first(), Some(&1.0));
        assert_eq!(universe.points().last(), Some(&10.0));
    }

    #[test]
    fn test_fractional_step_stops_before_max() {
        let universe = Universe::new(0.0, 10.0, 3.0).unwrap();
        assert_eq!(universe.points(), &[0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_half_step() {
        let universe = Universe::new(1.0, 10.0, 0.5).unwrap();
        assert_eq!(universe.len(), 19);
        assert_eq!(universe.points().last(), Some(&10.0));
    }

    #[test]
    fn test_single_point_universe() {
        let universe = Universe::new(5.0, 5.0, 1.0).unwrap();
        assert_eq!(universe.points(), &[5.0]);
    }

    #[test]
    fn test_invalid_universes() {
        assert!(Universe::new(10.0, 0.0, 1.0).is_err());
        assert!(Universe::new(0.0, 10.0, 0.0).is_err());
        assert!(Universe::new(0.0, 10.0, -1.0).is_err());
        assert!(Universe::new(f64::NAN, 10.0, 1.0).is_err());
        assert!(Universe::new(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_sample_count_is_capped() {
        assert!(matches!(
            Universe::new(0.0, 100.0, 1e-12),
            Err(FuzzyError::Configuration(_))
        ));
        assert!(matches!(
            Universe::new(0.0, 1e300, f64::MIN_POSITIVE),
            Err(FuzzyError::Configuration(_))
        ));
        let largest = Universe::new(0.0, (MAX_POINTS - 1) as f64, 1.0).unwrap();
        assert_eq!(largest.len(), MAX_POINTS);
    }

    #[test]
    fn test_clamp() {
        let universe = Universe::new(1.0, 10.0, 1.0).unwrap();
        assert_eq!(universe.clamp(0.0), 1.0);
        assert_eq!(universe.clamp(11.0), 10.0);
        assert_eq!(universe.clamp(4.5), 4.5);
    }
}
