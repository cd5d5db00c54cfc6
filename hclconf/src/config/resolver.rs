//! Block cardinality rules.
//!
//! The resolver looks up every occurrence of a named top-level block,
//! checks the occurrence count against the block's cardinality and decodes
//! the surviving occurrences into their typed structures.

use crate::config::decoder::decode;
use crate::config::node::{Block, Body};
use crate::config::selector::select_by_label;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// How often a block may occur in one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Zero or one occurrence.
    Single,
    /// Up to `max` occurrences, told apart by their labels.
    Labeled {
        /// Maximum number of occurrences.
        max: usize,
    },
}

impl Cardinality {
    /// Largest permitted number of occurrences.
    #[must_use]
    pub const fn max(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Labeled { max } => max,
        }
    }
}

/// A structure decoded from a labeled block that keeps its labels.
pub trait FromLabeledBlock: DeserializeOwned {
    /// Most labels a block of this kind may carry.
    const MAX_LABELS: usize;

    /// Store the block labels on the decoded value.
    fn apply_labels(&mut self, labels: &[String]);
}

/// Resolves the blocks of one parsed body.
///
/// # Examples
///
/// ```
/// use hclconf::config::node::Body;
/// use hclconf::config::resolver::BlockResolver;
/// use hclconf::config::ApiConfig;
///
/// let body = Body::parse("api {\n  port = 8080\n}\n").unwrap();
/// let mut api = ApiConfig::default();
///
/// let found = BlockResolver::new(&body).resolve_single("api", &mut api).unwrap();
/// assert!(found);
/// assert_eq!(api.port, 8080);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlockResolver<'a> {
    body: &'a Body,
}

impl<'a> BlockResolver<'a> {
    /// Create a resolver over a parsed body.
    #[must_use]
    pub const fn new(body: &'a Body) -> Self {
        Self { body }
    }

    /// All occurrences of the named block, checked against `cardinality`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cardinality`] when the block occurs more often than
    /// permitted.
    pub fn occurrences(&self, name: &str, cardinality: Cardinality) -> Result<Vec<&'a Block>> {
        let occurrences: Vec<&'a Block> = self.body.blocks_named(name).collect();
        let max = cardinality.max();
        if occurrences.len() > max {
            return Err(Error::Cardinality {
                block: name.to_owned(),
                found: occurrences.len(),
                max,
            });
        }
        Ok(occurrences)
    }

    /// Decode the single occurrence of `name` into `target`.
    ///
    /// An absent block leaves `target` untouched and returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cardinality`] when the block occurs more than once,
    /// or [`Error::Decode`] when its contents do not fit `T`.
    pub fn resolve_single<T: DeserializeOwned>(&self, name: &str, target: &mut T) -> Result<bool> {
        let Some(block) = self.occurrences(name, Cardinality::Single)?.pop() else {
            log::trace!("no '{name}' block present");
            return Ok(false);
        };

        *target = decode(name, &block.body)?;
        log::debug!("resolved '{name}' block");
        Ok(true)
    }

    /// Decode every occurrence of `name` whose primary label is `selector`.
    ///
    /// No occurrence at all yields an empty list. Occurrences that exist
    /// but none of which match the selector are an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cardinality`] when more than `max` blocks are
    /// declared, [`Error::LabelNotFound`] when none matches `selector`, and
    /// [`Error::Decode`] when a matching block carries too many labels or
    /// does not fit `T`. Blocks the selector does not pick are never
    /// inspected.
    pub fn resolve_labeled<T: FromLabeledBlock>(
        &self,
        name: &str,
        selector: &str,
        max: usize,
    ) -> Result<Vec<T>> {
        let occurrences = self.occurrences(name, Cardinality::Labeled { max })?;
        if occurrences.is_empty() {
            log::trace!("no '{name}' blocks present");
            return Ok(Vec::new());
        }

        let selected = select_by_label(occurrences, selector);
        if selected.is_empty() {
            return Err(Error::LabelNotFound {
                block: name.to_owned(),
                selector: selector.to_owned(),
            });
        }

        let mut resolved = Vec::with_capacity(selected.len());
        for block in selected {
            check_labels::<T>(name, block)?;
            let mut value: T = decode(name, &block.body)?;
            value.apply_labels(&block.labels);
            resolved.push(value);
        }

        log::debug!(
            "resolved {} of '{name}' block(s) labeled '{selector}'",
            resolved.len()
        );
        Ok(resolved)
    }
}

// Selected blocks always carry their primary label, so only the upper bound
// needs checking.
fn check_labels<T: FromLabeledBlock>(name: &str, block: &Block) -> Result<()> {
    let found = block.labels.len();
    if found <= T::MAX_LABELS {
        return Ok(());
    }

    Err(Error::Decode {
        block: name.to_owned(),
        field: "labels".to_owned(),
        message: format!("expected at most {} labels, found {found}", T::MAX_LABELS),
    })
}
