//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bienestar CLI - Workplace wellbeing diagnosis.
#[derive(Debug, Parser)]
#[command(name = "bienestar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BIENESTAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log inference details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diagnose one worker from four self-reported inputs
    Diagnose(DiagnoseArgs),

    /// Inspect configuration
    Config(ConfigArgs),
}

/// Arguments for the diagnose command.
#[derive(Debug, Parser)]
pub struct DiagnoseArgs {
    /// Weekly working hours (0-80)
    #[arg(long, default_value = "40", allow_negative_numbers = true)]
    pub hours: f64,

    /// Sleep quality (1-10)
    #[arg(long, default_value = "6", allow_negative_numbers = true)]
    pub sleep: f64,

    /// Mental load (1-10)
    #[arg(long, default_value = "5", allow_negative_numbers = true)]
    pub load: f64,

    /// Job satisfaction (1-10)
    #[arg(long, default_value = "7", allow_negative_numbers = true)]
    pub satisfaction: f64,
}

/// Arguments for configuration inspection.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Print the configuration file location
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnose_defaults() {
        let cli = Cli::parse_from(["bienestar", "diagnose"]);
        match cli.command {
            Command::Diagnose(args) => {
                assert_eq!(args.hours, 40.0);
                assert_eq!(args.sleep, 6.0);
                assert_eq!(args.load, 5.0);
                assert_eq!(args.satisfaction, 7.0);
            }
            _ => panic!("Expected Diagnose command"),
        }
    }

    #[test]
    fn test_diagnose_with_values() {
        let cli = Cli::parse_from([
            "bienestar",
            "diagnose",
            "--hours",
            "55.5",
            "--sleep",
            "3",
            "--load",
            "8",
            "--satisfaction",
            "-2",
        ]);
        match cli.command {
            Command::Diagnose(args) => {
                assert_eq!(args.hours, 55.5);
                assert_eq!(args.satisfaction, -2.0);
            }
            _ => panic!("Expected Diagnose command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "bienestar",
            "diagnose",
            "--format",
            "json",
            "--no-color",
            "--verbose",
            "--config",
            "/tmp/bienestar.toml",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/bienestar.toml")));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["bienestar", "config", "show"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Show })
        ));

        let cli = Cli::parse_from(["bienestar", "config", "path"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Path })
        ));
    }

    #[test]
    fn test_rejects_non_numeric_hours() {
        assert!(Cli::try_parse_from(["bienestar", "diagnose", "--hours", "many"]).is_err());
    }
}
