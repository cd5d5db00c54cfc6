//! Configuration schema definitions.
//!
//! This module defines the typed structure a resolved configuration is
//! decoded into: the API listener, the cache backend and the broker
//! connections.
//!
//! Every struct carries `#[serde(default)]`, so a field missing from the
//! source keeps its zero value, and none of them deny unknown fields, so
//! newer sources still load with older binaries.

use serde::{Deserialize, Serialize};

/// Cache discriminator selecting the Redis backend.
pub const CACHE_TYPE_REDIS: &str = "redis";

/// Cache discriminator selecting the embedded NutsDB backend.
pub const CACHE_TYPE_NUTSDB: &str = "nutsdb";

/// Complete configuration structure.
///
/// Built fresh by every load and owned by the caller afterwards.
///
/// # Examples
///
/// ```
/// use hclconf::config::{ApiConfig, Config};
///
/// let config = Config {
///     api: ApiConfig {
///         host: "0.0.0.0".to_string(),
///         port: 8080,
///     },
///     ..Default::default()
/// };
/// assert!(config.brokers.is_empty());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// API listener settings.
    pub api: ApiConfig,

    /// Whether request authentication is enabled.
    pub enable_auth: bool,

    /// Cache backend settings.
    pub cache: CacheConfig,

    /// Broker connections whose type label matched the selector.
    #[serde(rename = "rabbitmq")]
    pub brokers: Vec<BrokerConfig>,
}

/// API listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Address to bind.
    pub host: String,

    /// Port to bind.
    pub port: i64,
}

/// Cache configuration.
///
/// Both backend sub-configs are always present; only the one named by
/// `kind` is meant to be used. See [`CacheConfig::backend`].
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    /// Backend discriminator (`redis` or `nutsdb`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Redis backend settings.
    pub redis: RedisConfig,

    /// Embedded NutsDB backend settings.
    pub nutsdb: NutsDbConfig,
}

/// Redis cache backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RedisConfig {
    /// Run against a local development instance.
    pub dev_mode: bool,

    /// Authentication password.
    pub password: String,

    /// Server address.
    pub host: String,
}

/// Embedded NutsDB cache backend.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NutsDbConfig {
    /// Data directory.
    pub path: String,

    /// Segment size in bytes.
    pub segment_size: i64,
}

/// The active cache backend, borrowed from a [`CacheConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend<'a> {
    /// Redis was selected.
    Redis(&'a RedisConfig),
    /// NutsDB was selected.
    NutsDb(&'a NutsDbConfig),
}

impl CacheConfig {
    /// Returns the backend selected by the `type` discriminator.
    ///
    /// Returns `None` when the discriminator names neither backend, which
    /// includes a cache block that was never configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use hclconf::config::{CacheBackend, CacheConfig};
    ///
    /// let cache = CacheConfig {
    ///     kind: "redis".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(matches!(cache.backend(), Some(CacheBackend::Redis(_))));
    /// assert_eq!(CacheConfig::default().backend(), None);
    /// ```
    #[must_use]
    pub fn backend(&self) -> Option<CacheBackend<'_>> {
        match self.kind.as_str() {
            CACHE_TYPE_REDIS => Some(CacheBackend::Redis(&self.redis)),
            CACHE_TYPE_NUTSDB => Some(CacheBackend::NutsDb(&self.nutsdb)),
            _ => None,
        }
    }
}

/// Exchange settings shared by every broker connection.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CommonConfig {
    /// Exchange name.
    pub exchange: String,

    /// Exchange type (`direct`, `fanout`, `topic`, ...).
    pub exchange_type: String,
}

/// A RabbitMQ connection.
///
/// `kind` and `name` come from the block labels, as in
/// `rabbitmq "master" "primary" { ... }`. The selector is matched against
/// `kind`; `name` only tells apart several connections of the same kind.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BrokerConfig {
    /// Type label (usually the deployment environment).
    #[serde(rename = "type")]
    pub kind: String,

    /// Name label.
    pub name: String,

    /// Broker address.
    pub host: String,

    /// Login user.
    pub user: String,

    /// Login password.
    pub password: String,

    /// Consumer tag announced to the broker.
    pub consumer_tag: String,

    /// Exchange settings.
    pub common: CommonConfig,
}
