//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    explicit_path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            let path = match explicit_path {
                Some(path) => path.to_path_buf(),
                None => Config::path()?,
            };
            println!("{}", path.display());
            if !path.exists() {
                println!("{}", formatter.info("File does not exist; defaults are in effect"));
            }
        }
    }
    Ok(())
}
