//! Decoding of parse-tree bodies into typed structures.
//!
//! A body is turned into a JSON object (attributes as keys, nested blocks as
//! nested objects) and deserialized with serde. Unknown keys are skipped and
//! missing keys keep the target's default, provided the target is declared
//! with `#[serde(default)]`. Type mismatches are reported with the dotted
//! path of the offending field.

use crate::config::node::Body;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Decode a whole body, attributes and nested blocks, into `T`.
///
/// `block` only names the body in error messages.
///
/// # Errors
///
/// Returns [`Error::Decode`] when a value does not fit the field it is
/// mapped onto.
///
/// # Examples
///
/// ```
/// use hclconf::config::decoder::decode;
/// use hclconf::config::node::Body;
/// use hclconf::config::ApiConfig;
///
/// let body = Body::parse("host = \"127.0.0.1\"\nport = 9000\nunused = 1\n").unwrap();
/// let api: ApiConfig = decode("api", &body).unwrap();
/// assert_eq!(api.port, 9000);
/// ```
pub fn decode<T: DeserializeOwned>(block: &str, body: &Body) -> Result<T> {
    decode_value(block, body_to_value(body))
}

/// Decode only the attributes of a body into `T`, ignoring its blocks.
///
/// # Errors
///
/// Returns [`Error::Decode`] when an attribute does not fit its field.
pub fn decode_attributes<T: DeserializeOwned>(block: &str, body: &Body) -> Result<T> {
    let map = body
        .attributes
        .iter()
        .map(|attr| (attr.key.clone(), attr.value.clone()))
        .collect::<Map<_, _>>();
    decode_value(block, Value::Object(map))
}

fn decode_value<T: DeserializeOwned>(block: &str, value: Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let field = err.path().to_string();
        Error::Decode {
            block: block.to_owned(),
            field,
            message: err.into_inner().to_string(),
        }
    })
}

/// Convert a body into the JSON object it decodes from.
///
/// A nested block that occurs once becomes an object; one that occurs
/// several times becomes a list of objects. Labels nest the block body under
/// one object level per label, outermost label first.
#[must_use]
pub fn body_to_value(body: &Body) -> Value {
    let mut map = body
        .attributes
        .iter()
        .map(|attr| (attr.key.clone(), attr.value.clone()))
        .collect::<Map<_, _>>();

    let mut nested: BTreeMap<&str, Vec<Value>> = BTreeMap::new();
    for block in &body.blocks {
        let value = block
            .labels
            .iter()
            .rev()
            .fold(body_to_value(&block.body), |inner, label| {
                let mut wrapper = Map::new();
                wrapper.insert(label.clone(), inner);
                Value::Object(wrapper)
            });
        nested.entry(block.name.as_str()).or_default().push(value);
    }

    for (name, mut values) in nested {
        let value = if values.len() == 1 {
            values.remove(0)
        } else {
            Value::Array(values)
        };
        map.insert(name.to_owned(), value);
    }

    Value::Object(map)
}
