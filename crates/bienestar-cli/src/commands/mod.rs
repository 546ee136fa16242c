//! Command implementations.

pub mod config;
pub mod diagnose;

pub use self::config::execute_config;
pub use self::diagnose::execute_diagnose;
