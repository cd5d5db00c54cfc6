//! Command to print a resolved configuration.

use crate::error::CliError;
use crate::utils::{build_loader, render_config, GlobalOptions, OutputFormat};
use clap::Args;
use std::path::PathBuf;

/// Load a configuration file or directory and print the result.
#[derive(Args)]
pub struct ShowCommand {
    /// Configuration file or directory
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loader = build_loader(global)?;
        let config = loader.load_required(&self.config_path, &global.selector)?;

        log::debug!(
            "resolved {} broker block(s) for '{}'",
            config.brokers.len(),
            global.selector
        );

        println!("{}", render_config(&config, self.format)?.trim_end());
        Ok(())
    }
}
