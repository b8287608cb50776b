//! Persistent store facade.
//!
//! # Design Decisions
//! - The core only fixes the `execute(query, parameters) → rows` seam;
//!   connection handling, dialects, and retries belong to the collaborator
//! - Store failures propagate unmodified; the core never catches them
//! - `rows_to_value` bridges result sets into the tree builder's input shape

use indexmap::IndexMap;
use thiserror::Error;

use crate::request::ParamValue;
use crate::tree::Value;

/// One result row: column name to scalar value, in column order.
pub type Row = IndexMap<String, Value>;

/// Opaque passthrough failure from the store collaborator.
#[derive(Debug, Error)]
#[error("store failure: {message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

/// Query facade implemented by the persistence collaborator.
pub trait Store: Send + Sync {
    /// Execute `query` with positional bound parameters, returning the
    /// ordered result rows.
    fn execute(&self, query: &str, parameters: &[ParamValue]) -> Result<Vec<Row>, StoreError>;
}

/// Shape a result set the way handlers feed it to the tree builder: a list
/// of maps, so N rows render as N sibling elements.
pub fn rows_to_value(rows: Vec<Row>) -> Value {
    Value::List(rows.into_iter().map(Value::Map).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterChain;
    use crate::tree::TreeBuilder;

    #[test]
    fn test_rows_render_as_siblings() {
        let mut row_a = Row::new();
        row_a.insert("name".into(), Value::from("ann"));
        let mut row_b = Row::new();
        row_b.insert("name".into(), Value::from("bob"));

        let mut data = IndexMap::new();
        data.insert("user".to_string(), rows_to_value(vec![row_a, row_b]));

        let chain = FilterChain::empty();
        let tree = TreeBuilder::new(&chain).build(&Value::Map(data));
        assert_eq!(tree.to_xml(), r#"<user name="ann"/><user name="bob"/>"#);
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::new("connection refused");
        assert_eq!(err.to_string(), "store failure: connection refused");
    }

    struct FixtureStore;

    impl Store for FixtureStore {
        fn execute(&self, query: &str, parameters: &[ParamValue]) -> Result<Vec<Row>, StoreError> {
            if query != "select name from user where id = ?" {
                return Err(StoreError::new(format!("unknown query: {query}")));
            }
            let id = parameters.first().cloned().unwrap_or(ParamValue::Int(0));
            let mut row = Row::new();
            row.insert("name".to_string(), Value::from(format!("user-{id}")));
            Ok(vec![row])
        }
    }

    #[test]
    fn test_store_seam() {
        let store: &dyn Store = &FixtureStore;
        let rows = store
            .execute("select name from user where id = ?", &[ParamValue::Int(7)])
            .unwrap();
        assert_eq!(rows[0].get("name"), Some(&Value::Text("user-7".to_string())));
        assert!(store.execute("drop table user", &[]).is_err());
    }
}
