//! Closed-form linear estimate used when fuzzy inference fails

use crate::linguistic::{HOURS_RANGE, PERCENT_RANGE, PRIORITY_RANGE, SCALE_RANGE};

/// Weight of normalized hours in the stress estimate
pub const HOURS_WEIGHT: f64 = 0.375;
/// Weight of poor sleep in the stress estimate
pub const SLEEP_WEIGHT: f64 = 0.30;
/// Weight of mental load in the stress estimate
pub const LOAD_WEIGHT: f64 = 0.30;
/// Weight of dissatisfaction in the stress estimate
pub const SATISFACTION_WEIGHT: f64 = 0.10;

/// Productivity bonus added on top of `100 - stress`
const PRODUCTIVITY_OFFSET: f64 = 15.0;

/// Position of `x` within `[lo, hi]`; NaN maps to the lower bound
fn frac(x: f64, (lo, hi): (f64, f64)) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    (x - lo) / (hi - lo)
}

/// Linear stress, productivity and priority scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEstimate {
    /// Stress, 0-100
    pub nivel_estres: f64,
    /// Productivity, 0-100
    pub productividad: f64,
    /// Action priority, 1-10
    pub prioridad_accion: f64,
}

/// Estimate the three scores from already clamped inputs
pub fn estimate(horas: f64, sueno: f64, carga: f64, satisf: f64) -> LinearEstimate {
    let raw = HOURS_WEIGHT * frac(horas, HOURS_RANGE)
        + SLEEP_WEIGHT * (1.0 - frac(sueno, SCALE_RANGE))
        + LOAD_WEIGHT * frac(carga, SCALE_RANGE)
        + SATISFACTION_WEIGHT * (1.0 - frac(satisf, SCALE_RANGE));

    let nivel_estres = (raw * 100.0).clamp(PERCENT_RANGE.0, PERCENT_RANGE.1);
    let productividad = (100.0 - nivel_estres + PRODUCTIVITY_OFFSET).clamp(PERCENT_RANGE.0, PERCENT_RANGE.1);
    let prioridad_accion = (nivel_estres / 100.0 * 8.0 + 2.0).clamp(PRIORITY_RANGE.0, PRIORITY_RANGE.1);

    LinearEstimate {
        nivel_estres,
        productividad,
        prioridad_accion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_case() {
        let est = estimate(0.0, 10.0, 1.0, 10.0);
        assert_eq!(est.nivel_estres, 0.0);
        assert_eq!(est.productividad, 100.0);
        assert_eq!(est.prioridad_accion, 2.0);
    }

    #[test]
    fn test_worst_case_saturates() {
        // raw weights sum to 1.075, so stress clamps at 100
        let est = estimate(80.0, 1.0, 10.0, 1.0);
        assert_eq!(est.nivel_estres, 100.0);
        assert_eq!(est.productividad, 15.0);
        assert_eq!(est.prioridad_accion, 10.0);
    }

    #[test]
    fn test_midpoint_profile() {
        let est = estimate(50.0, 10.0, 5.0, 5.0);
        let expected = 100.0 * (0.375 * 0.625 + 0.30 * 4.0 / 9.0 + 0.10 * 5.0 / 9.0);
        assert!((est.nivel_estres - expected).abs() < 1e-9);
        assert!((est.productividad - (115.0 - expected)).abs() < 1e-9);
        assert!((est.prioridad_accion - (expected / 100.0 * 8.0 + 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_nan_treated_as_minimum() {
        let est = estimate(f64::NAN, 10.0, 1.0, 10.0);
        assert_eq!(est.nivel_estres, 0.0);
        assert!(est.productividad.is_finite());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: more hours never lower the stress estimate
        #[test]
        fn test_monotonic_in_hours(
            h1 in 0.0f64..=80.0,
            h2 in 0.0f64..=80.0,
            sueno in 1.0f64..=10.0,
            carga in 1.0f64..=10.0,
            satisf in 1.0f64..=10.0,
        ) {
            let (lo, hi) = if h1 <= h2 { (h1, h2) } else { (h2, h1) };
            let a = estimate(lo, sueno, carga, satisf);
            let b = estimate(hi, sueno, carga, satisf);
            prop_assert!(b.nivel_estres >= a.nivel_estres);
        }

        /// Property: every score stays in its declared range
        #[test]
        fn test_scores_in_range(
            horas in 0.0f64..=80.0,
            sueno in 1.0f64..=10.0,
            carga in 1.0f64..=10.0,
            satisf in 1.0f64..=10.0,
        ) {
            let est = estimate(horas, sueno, carga, satisf);
            prop_assert!((0.0..=100.0).contains(&est.nivel_estres));
            prop_assert!((0.0..=100.0).contains(&est.productividad));
            prop_assert!((1.0..=10.0).contains(&est.prioridad_accion));
        }
    }
}
