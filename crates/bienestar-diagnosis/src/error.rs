//! Diagnosis error types

use bienestar_fuzzy::FuzzyError;
use thiserror::Error;

/// Errors that can occur while setting up the diagnosis system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosisError {
    /// The fuzzy engine rejected the linguistic system or failed at runtime
    #[error(transparent)]
    Fuzzy(#[from] FuzzyError),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),
}
