//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A complete configuration with brokers for two environments.
#[allow(dead_code)]
pub const BASE_CONFIG: &str = r#"
enable_auth = true

api {
  host = "0.0.0.0"
  port = 8080
}

cache {
  type = "redis"
  redis {
    host = "redis:6379"
  }
}

rabbitmq "master" "primary" {
  consumer_tag = "orders"
  common {
    exchange      = "events"
    exchange_type = "topic"
  }
}

rabbitmq "local" "primary" {
  consumer_tag = "orders-dev"
}
"#;

/// A configuration replacing the cache backend.
#[allow(dead_code)]
pub const OVERRIDE_CONFIG: &str = r#"
cache {
  type = "nutsdb"
  nutsdb {
    path = "/data/cache"
  }
}
"#;

/// Test environment with an isolated configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the hclconf binary.
    ///
    /// Selector-related environment variables are cleared so the host
    /// environment cannot leak into tests.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("hclconf").expect("Failed to find hclconf binary");
        cmd.env_remove("HCLCONF_SELECTOR")
            .env_remove("HCLCONF_EXTENSION")
            .env_remove("HCLCONF_MAX_BROKERS")
            .env_remove("HCLCONF_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the test environment and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run `hclconf show --format json` and parse its output.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid JSON.
    pub fn show_json(&self, path: &Path, selector: &str) -> serde_json::Value {
        let output = self
            .command()
            .arg("--selector")
            .arg(selector)
            .arg("show")
            .arg(path)
            .output()
            .expect("Failed to run show command");

        assert!(
            output.status.success(),
            "Show failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
