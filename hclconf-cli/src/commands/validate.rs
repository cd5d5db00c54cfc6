//! Command to validate a configuration file or directory.

use crate::error::CliError;
use crate::utils::{build_loader, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Validate a configuration file or directory.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file or directory to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loader = build_loader(global)?;

        match loader.load_required(&self.config_path, &global.selector) {
            Ok(config) => {
                if config.cache.backend().is_none() && !config.cache.kind.is_empty() {
                    log::warn!("unknown cache type '{}'", config.cache.kind);
                }
                if !global.quiet {
                    println!("Configuration is valid");
                }
                Ok(())
            }
            // Nothing to validate is not the same as an invalid config.
            Err(e) if e.is_not_found() => Err(e.into()),
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
