//! Recursive conversion of tagged values into markup nodes.

use crate::filter::FilterChain;
use crate::tree::node::Node;
use crate::tree::value::Value;

/// Converts a [`Value`] into a [`Node`] tree, passing every scalar leaf
/// through the filter chain exactly once.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    filters: &'a FilterChain,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(filters: &'a FilterChain) -> Self {
        Self { filters }
    }

    /// Build a root fragment from `value`.
    pub fn build(&self, value: &Value) -> Node {
        self.build_node(value, None)
    }

    /// Build a node named `name` (or a fragment when `None`) from `value`.
    ///
    /// Map entries are visited in insertion order. An entry holding a `List`
    /// contributes one sibling element per item, all named by the entry key;
    /// an entry holding a `Map` contributes exactly one child element; a
    /// scalar entry becomes CDATA text when its key is `""` and an attribute
    /// otherwise.
    pub fn build_node(&self, value: &Value, name: Option<&str>) -> Node {
        let mut node = match name {
            Some(n) => Node::element(n),
            None => Node::fragment(),
        };

        match value {
            Value::Map(entries) => {
                for (key, entry) in entries {
                    self.insert_entry(&mut node, key, entry);
                }
            }
            Value::List(items) => {
                // A list in an unkeyed position has no tag to assign; each
                // item is built as a fragment and spliced on serialization.
                for item in items {
                    node.children.push(self.build_node(item, None));
                }
            }
            scalar => {
                node.text = scalar.scalar_text().map(|s| self.filters.apply(&s));
            }
        }

        node
    }

    fn insert_entry(&self, node: &mut Node, key: &str, entry: &Value) {
        match entry {
            Value::List(items) => {
                for item in items {
                    node.children.push(self.build_node(item, Some(key)));
                }
            }
            Value::Map(_) => {
                node.children.push(self.build_node(entry, Some(key)));
            }
            scalar => {
                let Some(text) = scalar.scalar_text() else {
                    return;
                };
                let filtered = self.filters.apply(&text);
                if key.is_empty() {
                    node.text = Some(filtered);
                } else {
                    node.attributes.insert(key.to_string(), filtered);
                }
            }
        }
    }
}
