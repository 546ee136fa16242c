//! Diagnosis orchestration: clamp, infer, fall back, recommend

use crate::config::DiagnosisConfig;
use crate::error::DiagnosisError;
use crate::fallback;
use crate::linguistic::{
    self, CALIDAD_SUENO, CARGA_MENTAL, HORAS_TRABAJO, HOURS_RANGE, NIVEL_ESTRES, PERCENT_RANGE,
    PRIORIDAD_ACCION, PRIORITY_RANGE, PRODUCTIVIDAD, SATISFACCION, SCALE_RANGE,
};
use crate::recommendation::{self, Recommendation};
use bienestar_fuzzy::{FuzzyError, FuzzySystem, Outputs};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Prefix of the advisory attached to fallback results
pub const FALLBACK_ADVISORY: &str = "Sistema difuso temporalmente no disponible.";

/// Coarse colour band of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertLevel {
    /// Needs action
    High,
    /// Worth watching
    Medium,
    /// Healthy
    Low,
}

impl AlertLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::High => "high",
            AlertLevel::Medium => "medium",
            AlertLevel::Low => "low",
        }
    }
}

/// Outcome of one diagnosis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisResult {
    /// Stress level, 0-100
    pub nivel_estres: f64,
    /// Estimated productivity, 0-100
    pub productividad: f64,
    /// Action priority, 1-10
    pub prioridad_accion: f64,
    /// Ordered advisory items
    pub recomendaciones: Vec<Recommendation>,
    /// Present only when the linear fallback produced the scores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertencia: Option<String>,
}

impl DiagnosisResult {
    /// Whether the scores come from the linear fallback
    pub fn is_fallback(&self) -> bool {
        self.advertencia.is_some()
    }

    /// Stress band: high above 70, medium above 40
    pub fn stress_alert(&self) -> AlertLevel {
        if self.nivel_estres > 70.0 {
            AlertLevel::High
        } else if self.nivel_estres > 40.0 {
            AlertLevel::Medium
        } else {
            AlertLevel::Low
        }
    }

    /// Productivity band: high alert below 50
    pub fn productivity_alert(&self) -> AlertLevel {
        if self.productividad < 50.0 {
            AlertLevel::High
        } else {
            AlertLevel::Low
        }
    }

    /// Priority band: high above 7, medium above 5
    pub fn priority_alert(&self) -> AlertLevel {
        if self.prioridad_accion > 7.0 {
            AlertLevel::High
        } else if self.prioridad_accion > 5.0 {
            AlertLevel::Medium
        } else {
            AlertLevel::Low
        }
    }
}

/// The four self-reported inputs, clamped into their domains
#[derive(Debug, Clone, Copy, PartialEq)]
struct ClampedInput {
    horas: f64,
    sueno: f64,
    carga: f64,
    satisf: f64,
}

impl ClampedInput {
    fn new(horas: f64, sueno: f64, carga: f64, satisf: f64) -> Self {
        let (h_lo, h_hi) = HOURS_RANGE;
        let (s_lo, s_hi) = SCALE_RANGE;
        Self {
            horas: horas.clamp(h_lo, h_hi),
            sueno: sueno.clamp(s_lo, s_hi),
            carga: carga.clamp(s_lo, s_hi),
            satisf: satisf.clamp(s_lo, s_hi),
        }
    }

    fn as_inputs(&self) -> [(&'static str, f64); 4] {
        [
            (HORAS_TRABAJO, self.horas),
            (CALIDAD_SUENO, self.sueno),
            (CARGA_MENTAL, self.carga),
            (SATISFACCION, self.satisf),
        ]
    }
}

/// Wellbeing diagnosis system: canonical fuzzy system plus thresholds
///
/// Immutable after construction; share it by reference.
#[derive(Debug, Clone)]
pub struct WellbeingSystem {
    engine: FuzzySystem,
    config: DiagnosisConfig,
}

impl WellbeingSystem {
    /// Validate `config` and build the canonical fuzzy system
    pub fn new(config: DiagnosisConfig) -> Result<Self, DiagnosisError> {
        config.validate()?;
        let engine = linguistic::build_system(&config.inference)?;
        Ok(Self { engine, config })
    }

    /// Create a system with default configuration
    pub fn default_config() -> Result<Self, DiagnosisError> {
        Self::new(DiagnosisConfig::default())
    }

    /// Underlying fuzzy system
    pub fn engine(&self) -> &FuzzySystem {
        &self.engine
    }

    /// Active configuration
    pub fn config(&self) -> &DiagnosisConfig {
        &self.config
    }

    /// Diagnose one person
    ///
    /// Inputs are clamped (hours to 0-80, the rest to 1-10). If fuzzy
    /// inference fails for any reason the linear fallback is used and the
    /// result carries an `advertencia`.
    pub fn diagnosticar(&self, horas: f64, sueno: f64, carga: f64, satisf: f64) -> DiagnosisResult {
        let input = ClampedInput::new(horas, sueno, carga, satisf);

        match self.infer(&input) {
            Ok((estres, productividad, prioridad)) => {
                debug!(
                    "Diagnosis: estres={:.2} productividad={:.2} prioridad={:.2}",
                    estres, productividad, prioridad
                );
                DiagnosisResult {
                    nivel_estres: estres,
                    productividad,
                    prioridad_accion: prioridad,
                    recomendaciones: recommendation::generate(estres, productividad, prioridad, &self.config.thresholds),
                    advertencia: None,
                }
            }
            Err(e) => {
                warn!("Fuzzy inference failed, using linear fallback: {}", e);
                fallback_result(&input, &e.to_string(), &self.config)
            }
        }
    }

    fn infer(&self, input: &ClampedInput) -> Result<(f64, f64, f64), FuzzyError> {
        let outputs = self.engine.evaluate(&input.as_inputs())?;

        let estres = output(&outputs, NIVEL_ESTRES)?.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1);
        let productividad = output(&outputs, PRODUCTIVIDAD)?.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1);
        let prioridad = output(&outputs, PRIORIDAD_ACCION)?.clamp(PRIORITY_RANGE.0, PRIORITY_RANGE.1);

        Ok((estres, productividad, prioridad))
    }
}

fn output(outputs: &Outputs, name: &str) -> Result<f64, FuzzyError> {
    outputs
        .get(name)
        .copied()
        .ok_or_else(|| FuzzyError::Inference(format!("missing output '{}'", name)))
}

fn fallback_result(input: &ClampedInput, reason: &str, config: &DiagnosisConfig) -> DiagnosisResult {
    let est = fallback::estimate(input.horas, input.sueno, input.carga, input.satisf);
    DiagnosisResult {
        nivel_estres: est.nivel_estres,
        productividad: est.productividad,
        prioridad_accion: est.prioridad_accion,
        recomendaciones: recommendation::generate(
            est.nivel_estres,
            est.productividad,
            est.prioridad_accion,
            &config.thresholds,
        ),
        advertencia: Some(format!("{} {}", FALLBACK_ADVISORY, reason)),
    }
}

static SHARED: OnceLock<Result<WellbeingSystem, DiagnosisError>> = OnceLock::new();

/// Process-wide system with default configuration, built on first use
pub fn shared() -> Result<&'static WellbeingSystem, &'static DiagnosisError> {
    SHARED.get_or_init(WellbeingSystem::default_config).as_ref()
}

/// Diagnose with the process-wide system
///
/// Falls back to the linear estimate if the shared system could not be
/// built, so this never fails for numeric inputs.
pub fn diagnosticar(horas: f64, sueno: f64, carga: f64, satisf: f64) -> DiagnosisResult {
    match shared() {
        Ok(system) => system.diagnosticar(horas, sueno, carga, satisf),
        Err(e) => {
            warn!("Shared diagnosis system unavailable: {}", e);
            let input = ClampedInput::new(horas, sueno, carga, satisf);
            fallback_result(&input, &e.to_string(), &DiagnosisConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationKind;

    fn system() -> WellbeingSystem {
        WellbeingSystem::default_config().unwrap()
    }

    #[test]
    fn test_primary_path_has_no_advisory() {
        let result = system().diagnosticar(40.0, 6.0, 5.0, 7.0);
        assert!(!result.is_fallback());
        assert_eq!(result.stress_alert(), AlertLevel::Medium);
        assert_eq!(result.productivity_alert(), AlertLevel::Low);
        assert_eq!(result.priority_alert(), AlertLevel::Low);
    }

    #[test]
    fn test_sparse_profile_falls_back() {
        let result = system().diagnosticar(50.0, 10.0, 5.0, 5.0);
        let advisory = result.advertencia.as_deref().unwrap();
        assert!(advisory.starts_with(FALLBACK_ADVISORY));
        assert!(advisory.contains("productividad"));

        let expected = fallback::estimate(50.0, 10.0, 5.0, 5.0);
        assert_eq!(result.nivel_estres, expected.nivel_estres);
        assert_eq!(result.productividad, expected.productividad);
        assert_eq!(result.prioridad_accion, expected.prioridad_accion);
        assert_eq!(result.recomendaciones[0].kind, RecommendationKind::Alert);
    }

    #[test]
    fn test_nan_input_falls_back_with_finite_scores() {
        let result = system().diagnosticar(f64::NAN, 6.0, 5.0, 7.0);
        assert!(result.is_fallback());
        assert!(result.advertencia.as_deref().unwrap().contains("NaN"));
        assert!(result.nivel_estres.is_finite());
        assert!(result.productividad.is_finite());
        assert!(result.prioridad_accion.is_finite());
    }

    #[test]
    fn test_infinite_input_is_clamped() {
        let a = system().diagnosticar(f64::INFINITY, 6.0, 5.0, 7.0);
        let b = system().diagnosticar(80.0, 6.0, 5.0, 7.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = DiagnosisConfig::default();
        config.inference.output_step = 0.0;
        assert!(matches!(WellbeingSystem::new(config), Err(DiagnosisError::Config(_))));
    }

    #[test]
    fn test_custom_thresholds_flow_into_recommendations() {
        let mut config = DiagnosisConfig::default();
        config.thresholds.stress_critical = 45.0;
        let result = WellbeingSystem::new(config).unwrap().diagnosticar(40.0, 6.0, 5.0, 7.0);
        assert_eq!(result.recomendaciones[0].kind, RecommendationKind::Critical);
    }

    #[test]
    fn test_shared_system_is_reused() {
        let a = shared().unwrap() as *const WellbeingSystem;
        let b = shared().unwrap() as *const WellbeingSystem;
        assert_eq!(a, b);
    }

    #[test]
    fn test_alert_levels() {
        let mut result = system().diagnosticar(80.0, 1.0, 10.0, 1.0);
        assert_eq!(result.stress_alert(), AlertLevel::High);
        assert_eq!(result.productivity_alert(), AlertLevel::High);
        assert_eq!(result.priority_alert(), AlertLevel::High);

        result.prioridad_accion = 6.0;
        assert_eq!(result.priority_alert(), AlertLevel::Medium);
        assert_eq!(AlertLevel::Medium.as_str(), "medium");
    }
}
