//! Bienestar Diagnosis
//!
//! Workplace wellbeing diagnosis on top of the `bienestar-fuzzy` engine.
//! Four self-reported inputs (weekly hours, sleep quality, mental load and
//! job satisfaction) become a stress level, an estimated productivity, an
//! action priority and a list of recommendations.
//!
//! ## Behaviour
//!
//! - Inputs are clamped to their domains before inference
//! - If fuzzy inference fails, a linear estimate is returned instead and the
//!   result carries an `advertencia`
//! - The process-wide system is built once and shared read-only
//!
//! ## Example
//!
//! ```
//! use bienestar_diagnosis::diagnosticar;
//!
//! let result = diagnosticar(40.0, 6.0, 5.0, 7.0);
//! assert!(result.advertencia.is_none());
//! assert!((result.nivel_estres - 50.0).abs() < 1e-6);
//! assert!(!result.recomendaciones.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod diagnosis;
pub mod error;
pub mod fallback;
pub mod linguistic;
pub mod recommendation;

// Re-exports for convenience
pub use config::{DiagnosisConfig, InferenceConfig, RecommendationThresholds};
pub use diagnosis::{diagnosticar, shared, AlertLevel, DiagnosisResult, WellbeingSystem, FALLBACK_ADVISORY};
pub use error::DiagnosisError;
pub use fallback::LinearEstimate;
pub use recommendation::{Recommendation, RecommendationKind, Severity};
