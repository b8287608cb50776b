//! Markup node: ordered attributes, ordered children, optional CDATA text.

use indexmap::IndexMap;

/// One element of the markup tree. A node without a name is a fragment whose
/// content is spliced into its parent when serialized.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// Element tag; `None` for a root fragment.
    pub name: Option<String>,
    /// Attributes in insertion order.
    pub attributes: IndexMap<String, String>,
    /// Child elements in insertion order.
    pub children: Vec<Node>,
    /// CDATA payload. A leaf never carries both children and text.
    pub text: Option<String>,
}

impl Node {
    /// A named element with no content.
    pub fn element(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// An unnamed fragment.
    pub fn fragment() -> Self {
        Self::default()
    }

    pub fn is_fragment(&self) -> bool {
        self.name.is_none()
    }

    /// Serialize this node (without an XML declaration).
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        super::writer::write_node(self, &mut out);
        out
    }
}
