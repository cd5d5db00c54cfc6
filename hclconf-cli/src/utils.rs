//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! loader construction from global options and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use hclconf::{Config, ConfigLoader, LoaderOptions};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Label selecting which broker blocks are kept.
    pub selector: String,

    /// Override the configuration file extension.
    pub extension: Option<String>,

    /// Override the maximum number of broker blocks per file.
    pub max_brokers: Option<usize>,
}

/// Output format for printed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Build a loader from global options.
///
/// Unset options keep the library defaults.
pub fn build_loader(global: &GlobalOptions) -> Result<ConfigLoader, CliError> {
    let mut options = LoaderOptions::default();

    if let Some(ref extension) = global.extension {
        if extension.trim_start_matches('.').is_empty() {
            return Err(CliError::InvalidArguments(
                "extension must not be empty".to_string(),
            ));
        }
        options = options.with_extension(extension);
    }

    if let Some(max) = global.max_brokers {
        options = options.with_max_labeled_blocks(max);
    }

    Ok(ConfigLoader::with_options(options))
}

/// Render a configuration in the requested format.
pub fn render_config(config: &Config, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).map_err(|e| CliError::Output(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|e| CliError::Output(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global() -> GlobalOptions {
        GlobalOptions {
            quiet: false,
            selector: "master".to_string(),
            extension: None,
            max_brokers: None,
        }
    }

    #[test]
    fn test_build_loader_defaults() {
        let loader = build_loader(&global()).unwrap();
        assert_eq!(loader.options(), &LoaderOptions::default());
    }

    #[test]
    fn test_build_loader_overrides() {
        let options = GlobalOptions {
            extension: Some(".conf".to_string()),
            max_brokers: Some(7),
            ..global()
        };
        let loader = build_loader(&options).unwrap();
        assert_eq!(loader.options().extension, "conf");
        assert_eq!(loader.options().max_labeled_blocks, 7);
    }

    #[test]
    fn test_build_loader_rejects_empty_extension() {
        let options = GlobalOptions {
            extension: Some(".".to_string()),
            ..global()
        };
        assert!(matches!(
            build_loader(&options),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_render_json() {
        let config = Config {
            enable_auth: true,
            ..Default::default()
        };
        let rendered = render_config(&config, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["enable_auth"], true);
        assert!(value["rabbitmq"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_render_yaml() {
        let rendered = render_config(&Config::default(), OutputFormat::Yaml).unwrap();
        assert!(rendered.contains("enable_auth: false"));
    }
}
