//! Resolution of one configuration source into a [`Config`].

use crate::config::decoder::decode_attributes;
use crate::config::node::{Body, ROOT_BLOCK};
use crate::config::resolver::{BlockResolver, FromLabeledBlock};
use crate::config::schema::{BrokerConfig, Config};
use crate::error::Result;

/// Name of the API listener block.
pub const API_BLOCK: &str = "api";

/// Name of the cache block.
pub const CACHE_BLOCK: &str = "cache";

/// Name of the labeled broker block.
pub const BROKER_BLOCK: &str = "rabbitmq";

/// Default maximum number of broker blocks in one source.
pub const DEFAULT_MAX_LABELED_BLOCKS: usize = 3;

const KNOWN_BLOCKS: [&str; 3] = [API_BLOCK, CACHE_BLOCK, BROKER_BLOCK];

impl FromLabeledBlock for BrokerConfig {
    const MAX_LABELS: usize = 2;

    fn apply_labels(&mut self, labels: &[String]) {
        let mut labels = labels.iter();
        self.kind = labels.next().cloned().unwrap_or_default();
        self.name = labels.next().cloned().unwrap_or_default();
    }
}

/// Parses configuration sources.
///
/// # Examples
///
/// ```
/// use hclconf::config::ConfigParser;
///
/// let source = r#"
/// enable_auth = true
///
/// api {
///   host = "0.0.0.0"
///   port = 8080
/// }
///
/// rabbitmq "master" "primary" {
///   consumer_tag = "api"
/// }
///
/// rabbitmq "local" "primary" {
///   consumer_tag = "api-dev"
/// }
/// "#;
///
/// let config = ConfigParser::default().parse(source, "master").unwrap();
/// assert!(config.enable_auth);
/// assert_eq!(config.api.port, 8080);
/// assert_eq!(config.brokers.len(), 1);
/// assert_eq!(config.brokers[0].consumer_tag, "api");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigParser {
    max_labeled_blocks: usize,
}

impl Default for ConfigParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LABELED_BLOCKS)
    }
}

impl ConfigParser {
    /// Create a parser permitting up to `max_labeled_blocks` broker blocks.
    #[must_use]
    pub const fn new(max_labeled_blocks: usize) -> Self {
        Self { max_labeled_blocks }
    }

    /// Parse `content`, keeping the broker blocks whose type label equals
    /// `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Syntax`] for malformed sources,
    /// [`crate::Error::Cardinality`] for repeated `api`/`cache` blocks or
    /// too many broker blocks, [`crate::Error::LabelNotFound`] when broker
    /// blocks exist but none carries `selector`, and
    /// [`crate::Error::Decode`] for values that do not fit the schema.
    pub fn parse(&self, content: &str, selector: &str) -> Result<Config> {
        let body = Body::parse(content)?;

        let mut config: Config = decode_attributes(ROOT_BLOCK, &body)?;

        let resolver = BlockResolver::new(&body);
        resolver.resolve_single(API_BLOCK, &mut config.api)?;
        resolver.resolve_single(CACHE_BLOCK, &mut config.cache)?;
        config.brokers = resolver.resolve_labeled(BROKER_BLOCK, selector, self.max_labeled_blocks)?;

        for block in &body.blocks {
            if !KNOWN_BLOCKS.contains(&block.name.as_str()) {
                log::debug!("ignoring unknown '{}' block", block.name);
            }
        }

        Ok(config)
    }
}

/// Parse `content` with the default limits.
///
/// # Errors
///
/// See [`ConfigParser::parse`].
pub fn parse_config(content: &str, selector: &str) -> Result<Config> {
    ConfigParser::default().parse(content, selector)
}
