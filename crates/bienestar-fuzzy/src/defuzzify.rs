//! Centroid defuzzification

use crate::error::{FuzzyError, Result};
use crate::universe::Universe;

/// Reduce an aggregated curve to its centroid
///
/// `Σ(u·μ(u)) / Σ(μ(u))` over the sampled universe. A uniformly zero
/// curve has no centroid and yields [`FuzzyError::Defuzzification`].
pub fn centroid(variable: &str, universe: &Universe, curve: &[f64]) -> Result<f64> {
    if curve.len() != universe.len() {
        return Err(FuzzyError::Inference(format!(
            "curve for '{}' has {} samples, universe has {}",
            variable,
            curve.len(),
            universe.len()
        )));
    }

    let (numerator, denominator) = universe
        .points()
        .iter()
        .zip(curve)
        .fold((0.0, 0.0), |(num, den), (u, mu)| (num + u * mu, den + mu));

    if denominator <= 0.0 {
        return Err(FuzzyError::Defuzzification {
            variable: variable.to_string(),
        });
    }

    let crisp = numerator / denominator;
    if !crisp.is_finite() {
        return Err(FuzzyError::Inference(format!(
            "centroid of '{}' is not finite",
            variable
        )));
    }

    Ok(crisp)
}
