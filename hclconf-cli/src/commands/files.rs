//! Command to list the files a directory load processes.

use crate::error::CliError;
use crate::utils::{build_loader, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// List configuration files in load order.
///
/// The last file listed is the one whose configuration wins.
#[derive(Args)]
pub struct FilesCommand {
    /// Configuration directory
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,
}

impl FilesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.dir.is_dir() {
            return Err(CliError::InvalidArguments(format!(
                "Not a directory: {}",
                self.dir.display()
            )));
        }

        let loader = build_loader(global)?;
        let files = loader.discover(&self.dir)?;

        if files.is_empty() && !global.quiet {
            eprintln!(
                "No .{} files found in {}",
                loader.options().extension,
                self.dir.display()
            );
        }

        for file in files {
            println!("{}", file.display());
        }
        Ok(())
    }
}
