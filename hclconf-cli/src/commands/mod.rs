//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Load a configuration path and print the resolved config
//! - `validate`: Check that a configuration path loads cleanly
//! - `files`: List the files a directory load would process
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod files;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use files::FilesCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
