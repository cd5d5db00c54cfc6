#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hclconf
//!
//! A library for loading service configuration written in HCL.
//!
//! A configuration path may be a single file or a directory of `.hcl` files.
//! Broker blocks are declared once per deployment environment and the
//! environment to keep is chosen at load time with a selector.
//!
//! ## Core Types
//!
//! - [`Config`] and its blocks: the resolved configuration
//! - [`ConfigLoader`] and [`load_config`]: file, directory and path loading
//! - [`Error`], [`ErrorKind`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use hclconf::parse_config;
//!
//! let source = r#"
//! api {
//!   host = "0.0.0.0"
//!   port = 8080
//! }
//!
//! rabbitmq "master" "primary" {
//!   consumer_tag = "orders"
//! }
//! "#;
//!
//! let config = parse_config(source, "master").unwrap();
//! assert_eq!(config.api.port, 8080);
//! assert_eq!(config.brokers[0].name, "primary");
//! ```

pub mod config;
pub mod error;
pub mod logging;

// Re-export key types at crate root for convenience
pub use config::{load_config, parse_config, Config, ConfigLoader, ConfigParser, LoaderOptions};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
