//! Property-based tests for configuration resolution.

use super::parser::parse_config;
use super::schema::{ApiConfig, CacheConfig, NutsDbConfig, RedisConfig};
use super::selector::{select_by_label, Labeled};
use crate::error::ErrorKind;
use proptest::prelude::*;

struct Labels(Vec<String>);

impl Labeled for Labels {
    fn labels(&self) -> &[String] {
        &self.0
    }
}

// Strategy for strings that need no escaping inside an HCL string literal
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./:-]{0,24}"
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn api_strategy() -> impl Strategy<Value = ApiConfig> {
    (text_strategy(), 0i64..=65_535).prop_map(|(host, port)| ApiConfig { host, port })
}

fn cache_strategy() -> impl Strategy<Value = CacheConfig> {
    (
        prop_oneof![Just("redis".to_string()), Just("nutsdb".to_string())],
        any::<bool>(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        0i64..=i64::MAX,
    )
        .prop_map(
            |(kind, dev_mode, password, host, path, segment_size)| CacheConfig {
                kind,
                redis: RedisConfig {
                    dev_mode,
                    password,
                    host,
                },
                nutsdb: NutsDbConfig { path, segment_size },
            },
        )
}

fn render(api: &ApiConfig, cache: &CacheConfig) -> String {
    format!(
        r#"
api {{
  host = "{}"
  port = {}
}}

cache {{
  type = "{}"
  redis {{
    dev_mode = {}
    password = "{}"
    host     = "{}"
  }}
  nutsdb {{
    path         = "{}"
    segment_size = {}
  }}
}}
"#,
        api.host,
        api.port,
        cache.kind,
        cache.redis.dev_mode,
        cache.redis.password,
        cache.redis.host,
        cache.nutsdb.path,
        cache.nutsdb.segment_size,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Rendering known values and loading them reproduces those values
    #[test]
    fn single_blocks_reproduce_source_values(
        api in api_strategy(),
        cache in cache_strategy(),
    ) {
        let config = parse_config(&render(&api, &cache), "any").unwrap();
        prop_assert_eq!(config.api, api);
        prop_assert_eq!(config.cache, cache);
        prop_assert!(config.brokers.is_empty());
    }

    // Any repetition of the api block is rejected
    #[test]
    fn repeated_api_blocks_are_rejected(count in 2usize..6) {
        let source = "api {}\n".repeat(count);
        let err = parse_config(&source, "any").unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Cardinality);
    }

    // Selection keeps exactly the occurrences whose first label matches, in order
    #[test]
    fn selection_is_an_ordered_filter(
        occurrences in prop::collection::vec(
            prop::collection::vec(label_strategy(), 0..3),
            0..10,
        ),
        selector in label_strategy(),
    ) {
        let blocks: Vec<Labels> = occurrences.into_iter().map(Labels).collect();
        let selected = select_by_label(&blocks, &selector);

        let expected: Vec<&Labels> = blocks
            .iter()
            .filter(|b| b.0.first() == Some(&selector))
            .collect();

        prop_assert_eq!(selected.len(), expected.len());
        for (got, want) in selected.iter().zip(expected) {
            prop_assert!(std::ptr::eq(*got, want));
        }
    }

    // Broker blocks resolve to the ones labeled with the selector, or fail
    #[test]
    fn broker_selection_matches_type_label(
        kinds in prop::collection::vec(label_strategy(), 1..=3),
        selector in label_strategy(),
    ) {
        let source: String = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| format!("rabbitmq \"{kind}\" \"n{i}\" {{}}\n"))
            .collect();

        let matching = kinds.iter().filter(|k| **k == selector).count();
        match parse_config(&source, &selector) {
            Ok(config) => {
                prop_assert_eq!(config.brokers.len(), matching);
                prop_assert!(config.brokers.iter().all(|b| b.kind == selector));
            }
            Err(err) => {
                prop_assert_eq!(matching, 0);
                prop_assert_eq!(err.kind(), ErrorKind::LabelNotFound);
            }
        }
    }
}
