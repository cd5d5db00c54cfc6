//! Configuration system for hclconf.
//!
//! This module turns HCL sources into a typed [`Config`]:
//! - [`node`]: parse tree produced from the HCL parser
//! - [`decoder`]: mapping of block bodies onto typed structures
//! - [`selector`]: label-based selection among repeated blocks
//! - [`resolver`]: block cardinality rules
//! - [`parser`]: resolution of one source into a `Config`
//! - [`loader`]: file, directory and path loading
//!
//! # Sources
//!
//! ```hcl
//! enable_auth = true
//!
//! api {
//!   host = "0.0.0.0"
//!   port = 8080
//! }
//!
//! cache {
//!   type = "redis"
//!   redis {
//!     host = "localhost:6379"
//!   }
//! }
//!
//! rabbitmq "master" "primary" {
//!   consumer_tag = "orders"
//!   common {
//!     exchange      = "events"
//!     exchange_type = "topic"
//!   }
//! }
//! ```
//!
//! `api` and `cache` may appear at most once per file. `rabbitmq` may appear
//! several times; only the blocks whose first label equals the selector
//! passed to the loader are kept.
//!
//! # Directories
//!
//! Loading a directory processes its `.hcl` files in name order. Each file
//! is resolved on its own and the last one replaces everything loaded before
//! it:
//!
//! ```no_run
//! use hclconf::config::ConfigLoader;
//! use std::path::Path;
//!
//! let config = ConfigLoader::new()
//!     .load_required(Path::new("conf.d"), "master")
//!     .unwrap();
//! ```

pub mod decoder;
pub mod loader;
pub mod node;
pub mod parser;
pub mod resolver;
pub mod schema;
pub mod selector;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use loader::{load_config, ConfigLoader, LoaderOptions, DEFAULT_EXTENSION};
pub use parser::{parse_config, ConfigParser};
pub use resolver::{BlockResolver, Cardinality};
pub use schema::{
    ApiConfig, BrokerConfig, CacheBackend, CacheConfig, CommonConfig, Config, NutsDbConfig,
    RedisConfig,
};
pub use selector::{select_by_label, Labeled};
