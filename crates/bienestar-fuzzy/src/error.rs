//! Fuzzy engine error types

use thiserror::Error;

/// Errors raised while building or evaluating a fuzzy system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// Malformed variable, set or rule definition
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The aggregated output curve of a variable is uniformly zero
    #[error("Defuzzification error: no rule contributed to output '{variable}'")]
    Defuzzification {
        /// Output variable whose curve is empty
        variable: String,
    },

    /// Numeric or runtime fault during inference
    #[error("Inference error: {0}")]
    Inference(String),
}

/// Result type alias for fuzzy engine operations
pub type Result<T> = std::result::Result<T, FuzzyError>;
