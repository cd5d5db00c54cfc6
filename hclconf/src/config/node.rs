//! Parse tree handed from the HCL parser to the resolver.
//!
//! The HCL grammar is handled by `hcl-rs`. Its body is converted once into
//! this small owned tree of attributes and labeled blocks, with every
//! attribute already evaluated to a JSON value. The rest of the crate
//! only ever sees these types.

use crate::error::{Error, Result};
use hcl::eval::{Context, Evaluate};
use hcl::Expression;
use serde_json::Value;

/// Block name used in errors raised for top-level attributes.
pub const ROOT_BLOCK: &str = "root";

/// An ordered set of attributes and blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Blocks in source order.
    pub blocks: Vec<Block>,
}

/// A `key = value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name.
    pub key: String,
    /// Literal value.
    pub value: Value,
}

/// A named block with optional labels, e.g. `rabbitmq "master" "primary" { }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Block identifier.
    pub name: String,
    /// Labels in source order.
    pub labels: Vec<String>,
    /// Block contents.
    pub body: Body,
}

impl Body {
    /// Parse an HCL source into a body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] for malformed sources and [`Error::Decode`]
    /// for attributes whose value depends on variables or function calls.
    ///
    /// # Examples
    ///
    /// ```
    /// use hclconf::config::node::Body;
    ///
    /// let body = Body::parse(r#"
    /// enable_auth = true
    /// rabbitmq "master" "primary" {}
    /// "#).unwrap();
    ///
    /// assert_eq!(body.attributes.len(), 1);
    /// assert_eq!(body.blocks[0].labels, vec!["master", "primary"]);
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let body = hcl::parse(source)?;
        Self::from_hcl(ROOT_BLOCK, &body)
    }

    fn from_hcl(block: &str, body: &hcl::Body) -> Result<Self> {
        let attributes = body
            .attributes()
            .map(|attr| {
                Ok(Attribute {
                    key: attr.key().to_owned(),
                    value: expression_to_value(block, attr.key(), attr.expr())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let blocks = body
            .blocks()
            .map(Block::from_hcl)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { attributes, blocks })
    }

    /// Blocks with the given name, in source order.
    pub fn blocks_named<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a Block> + 'n
    where
        'a: 'n,
    {
        self.blocks.iter().filter(move |block| block.name == name)
    }

    /// Value of the named attribute, if present.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.key == key)
            .map(|attr| &attr.value)
    }
}

impl Block {
    fn from_hcl(block: &hcl::Block) -> Result<Self> {
        let name = block.identifier().to_owned();
        let labels = block
            .labels()
            .iter()
            .map(|label| label.as_str().to_owned())
            .collect();
        let body = Body::from_hcl(&name, block.body())?;

        Ok(Self { name, labels, body })
    }
}

// Evaluated without variables or functions, so only self-contained values
// (literals, heredocs, parenthesized and operator expressions) resolve.
fn expression_to_value(block: &str, key: &str, expr: &Expression) -> Result<Value> {
    let value = expr
        .evaluate(&Context::new())
        .map_err(|err| decode_error(block, key, err.to_string()))?;
    serde_json::to_value(value).map_err(|err| decode_error(block, key, err.to_string()))
}

fn decode_error(block: &str, key: &str, message: String) -> Error {
    Error::Decode {
        block: block.to_owned(),
        field: key.to_owned(),
        message,
    }
}
