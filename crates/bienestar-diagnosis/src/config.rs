//! Configuration for the diagnosis system
//!
//! Controls output sampling resolution and the recommendation thresholds.

use crate::error::DiagnosisError;
use serde::{Deserialize, Serialize};

/// Settings for the fuzzy inference pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Sampling step of the output universes
    /// Default: 1.0 (integer grid)
    #[serde(default = "default_output_step")]
    pub output_step: f64,
}

fn default_output_step() -> f64 {
    1.0
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            output_step: default_output_step(),
        }
    }
}

/// Score thresholds used by the recommendation generator
///
/// Stress and priority bands are exclusive at the threshold (`> value`),
/// productivity-low is `< value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Stress above this is critical
    pub stress_critical: f64,

    /// Stress above this (and not critical) needs attention
    pub stress_moderate: f64,

    /// Productivity below this is low
    pub productivity_low: f64,

    /// Productivity above this risks burnout
    pub productivity_high: f64,

    /// Priority above this requires immediate action
    pub priority_urgent: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            stress_critical: 70.0,
            stress_moderate: 40.0,
            productivity_low: 50.0,
            productivity_high: 80.0,
            priority_urgent: 7.0,
        }
    }
}

/// Top-level configuration
///
/// # Examples
///
/// ```
/// use bienestar_diagnosis::DiagnosisConfig;
///
/// let config = DiagnosisConfig::default();
/// assert_eq!(config.inference.output_step, 1.0);
/// assert_eq!(config.thresholds.stress_critical, 70.0);
///
/// let config = DiagnosisConfig::fine_grained();
/// assert_eq!(config.inference.output_step, 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagnosisConfig {
    /// Inference settings
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Recommendation thresholds
    #[serde(default)]
    pub thresholds: RecommendationThresholds,
}

/// Narrowest consequent range (prioridad_accion spans 1..=10)
const NARROWEST_OUTPUT_RANGE: f64 = 9.0;

/// Smallest accepted output step; 10 001 samples on a 0-100 universe
pub const MIN_OUTPUT_STEP: f64 = 0.01;

impl DiagnosisConfig {
    /// Finer output sampling; smoother centroids at higher cost
    pub fn fine_grained() -> Self {
        Self {
            inference: InferenceConfig { output_step: 0.5 },
            thresholds: RecommendationThresholds::default(),
        }
    }

    /// Coarse output sampling for cheap batch runs
    pub fn coarse() -> Self {
        Self {
            inference: InferenceConfig { output_step: 3.0 },
            thresholds: RecommendationThresholds::default(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DiagnosisError> {
        let step = self.inference.output_step;
        if !step.is_finite() || step <= 0.0 {
            return Err(DiagnosisError::Config(format!(
                "output_step must be positive (got {})",
                step
            )));
        }
        if step < MIN_OUTPUT_STEP {
            return Err(DiagnosisError::Config(format!(
                "output_step {} is below the minimum {}",
                step, MIN_OUTPUT_STEP
            )));
        }
        if step > NARROWEST_OUTPUT_RANGE {
            return Err(DiagnosisError::Config(format!(
                "output_step {} exceeds the narrowest output range {}",
                step, NARROWEST_OUTPUT_RANGE
            )));
        }

        let t = &self.thresholds;
        let values = [
            t.stress_critical,
            t.stress_moderate,
            t.productivity_low,
            t.productivity_high,
            t.priority_urgent,
        ];
        if !values.iter().all(|v| v.is_finite()) {
            return Err(DiagnosisError::Config("thresholds must be finite".to_string()));
        }
        if t.stress_moderate >= t.stress_critical {
            return Err(DiagnosisError::Config(format!(
                "stress_moderate {} must be below stress_critical {}",
                t.stress_moderate, t.stress_critical
            )));
        }
        if t.productivity_low > t.productivity_high {
            return Err(DiagnosisError::Config(format!(
                "productivity_low {} cannot exceed productivity_high {}",
                t.productivity_low, t.productivity_high
            )));
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, DiagnosisError> {
        toml::from_str(toml_str)
            .map_err(|e| DiagnosisError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, DiagnosisError> {
        toml::to_string_pretty(self)
            .map_err(|e| DiagnosisError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
