//! Tagged input values for tree building.
//!
//! Handlers construct a `Value` and hand it to [`crate::tree::TreeBuilder`].
//! The list-versus-map decision is carried by the tag, not guessed from the
//! shape of the keys.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Nested key-value data fed to the tree builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean scalar; stringified as `true`/`false`.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Float scalar.
    Float(f64),
    /// String scalar.
    Text(String),
    /// Ordered sequence; renders as one sibling element per item, all named
    /// by the enclosing map key.
    List(Vec<Value>),
    /// Named mapping; renders as exactly one child element.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Empty map value, for incremental construction.
    pub fn map() -> Self {
        Value::Map(IndexMap::new())
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Stringified form of a scalar; `None` for lists and maps.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Text(s) => Some(s.clone()),
            Value::List(_) | Value::Map(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}
