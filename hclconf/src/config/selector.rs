//! Label-based selection among repeated blocks.
//!
//! Blocks such as `rabbitmq "master" "primary" { ... }` may be declared
//! several times, once per deployment environment. The caller picks the
//! environment with a selector string, which is compared against the first
//! (primary) label of each block.

use crate::config::node::Block;

/// Anything that carries block labels.
pub trait Labeled {
    /// Labels in declaration order.
    fn labels(&self) -> &[String];

    /// The label selectors are compared against.
    fn primary_label(&self) -> Option<&str> {
        self.labels().first().map(String::as_str)
    }
}

impl Labeled for Block {
    fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Keep the occurrences whose primary label equals `selector`.
///
/// The comparison is exact and case-sensitive. Unlabeled occurrences never
/// match. Source order is preserved and an empty result is not an error;
/// deciding what an empty selection means is left to the caller.
///
/// # Examples
///
/// ```
/// use hclconf::config::selector::{select_by_label, Labeled};
///
/// struct Env(Vec<String>);
///
/// impl Labeled for Env {
///     fn labels(&self) -> &[String] {
///         &self.0
///     }
/// }
///
/// let blocks = vec![
///     Env(vec!["master".into(), "primary".into()]),
///     Env(vec!["local".into(), "primary".into()]),
/// ];
///
/// let selected = select_by_label(&blocks, "master");
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].labels()[0], "master");
/// ```
pub fn select_by_label<'a, T, I>(occurrences: I, selector: &str) -> Vec<&'a T>
where
    T: Labeled + 'a,
    I: IntoIterator<Item = &'a T>,
{
    occurrences
        .into_iter()
        .filter(|occurrence| occurrence.primary_label() == Some(selector))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Fake {
        id: u8,
        labels: Vec<String>,
    }

    impl Labeled for Fake {
        fn labels(&self) -> &[String] {
            &self.labels
        }
    }

    fn fake(id: u8, labels: &[&str]) -> Fake {
        Fake {
            id,
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
        }
    }

    #[test]
    fn test_selects_on_primary_label_only() {
        let blocks = vec![
            fake(1, &["master", "primary"]),
            fake(2, &["local", "primary"]),
            fake(3, &["local", "master"]),
        ];

        let ids: Vec<u8> = select_by_label(&blocks, "master")
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_keeps_every_match_in_order() {
        let blocks = vec![
            fake(1, &["master", "primary"]),
            fake(2, &["local", "primary"]),
            fake(3, &["master", "secondary"]),
        ];

        let ids: Vec<u8> = select_by_label(&blocks, "master")
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let blocks = vec![fake(1, &["master"])];
        assert!(select_by_label(&blocks, "staging").is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let blocks = vec![fake(1, &["Master"])];
        assert!(select_by_label(&blocks, "master").is_empty());
    }

    #[test]
    fn test_unlabeled_never_matches() {
        let blocks = vec![fake(1, &[])];
        assert!(select_by_label(&blocks, "").is_empty());
    }

    #[test]
    fn test_selects_parse_tree_blocks() {
        let body =
            crate::config::node::Body::parse("rabbitmq \"master\" {}\nrabbitmq \"local\" {}\n")
                .unwrap();
        let selected = select_by_label(body.blocks_named("rabbitmq"), "local");
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].labels, vec!["local"]);
    }
}
