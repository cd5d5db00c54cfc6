//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "hclconf";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Generating {} completion script", self.shell);
                eprintln!("# {hint}");
                eprintln!();
            }
        }

        generate(self.shell, &mut Cli::command(), BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("Enable with: eval \"$(hclconf completions bash)\""),
        Shell::Zsh => Some("Save to a directory in $fpath, e.g. ~/.zsh/completions/_hclconf"),
        Shell::Fish => Some("Save to ~/.config/fish/completions/hclconf.fish"),
        Shell::PowerShell => {
            Some("Enable with: hclconf completions powershell | Out-String | Invoke-Expression")
        }
        _ => None,
    }
}
