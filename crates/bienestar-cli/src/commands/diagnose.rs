//! Diagnose command implementation.

use crate::cli::DiagnoseArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use bienestar_diagnosis::{DiagnosisResult, WellbeingSystem};
use tracing::info;

/// Run one diagnosis with the configured system.
pub fn run_diagnosis(args: &DiagnoseArgs, config: &Config) -> Result<DiagnosisResult> {
    let system = WellbeingSystem::new(config.diagnosis.clone())?;
    let result = system.diagnosticar(args.hours, args.sleep, args.load, args.satisfaction);
    if result.is_fallback() {
        info!("Diagnosis produced by linear fallback");
    }
    Ok(result)
}

/// Execute the diagnose command.
pub fn execute_diagnose(args: DiagnoseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let result = run_diagnosis(&args, config)?;
    println!("{}", formatter.format_diagnosis(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(hours: f64, sleep: f64, load: f64, satisfaction: f64) -> DiagnoseArgs {
        DiagnoseArgs {
            hours,
            sleep,
            load,
            satisfaction,
        }
    }

    #[test]
    fn test_default_profile() {
        let result = run_diagnosis(&args(40.0, 6.0, 5.0, 7.0), &Config::default()).unwrap();
        assert!(!result.is_fallback());
        assert!((result.nivel_estres - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_uses_configured_thresholds() {
        let mut config = Config::default();
        config.diagnosis.thresholds.stress_moderate = 60.0;
        let result = run_diagnosis(&args(40.0, 6.0, 5.0, 7.0), &config).unwrap();
        assert_eq!(result.recomendaciones[0].tipo, "✅ ÓPTIMO");
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let mut config = Config::default();
        config.diagnosis.inference.output_step = 0.0;
        assert!(run_diagnosis(&args(40.0, 6.0, 5.0, 7.0), &config).is_err());
    }
}
