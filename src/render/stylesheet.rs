//! Stylesheet collaborator traits.
//!
//! The actual transform engine lives outside this crate; the renderer only
//! depends on these seams.

use indexmap::IndexMap;

use crate::tree::Node;

/// Opaque error from a stylesheet collaborator.
pub type StylesheetError = Box<dyn std::error::Error + Send + Sync>;

/// A loaded transform: tree plus string parameters in, string out.
pub trait Stylesheet: Send + Sync {
    fn transform(
        &self,
        tree: &Node,
        parameters: &IndexMap<String, String>,
    ) -> Result<String, StylesheetError>;
}

/// Resolves a template reference to a loaded stylesheet. Called on every
/// render; implementations decide whether to hit the filesystem.
pub trait StylesheetLoader: Send + Sync {
    fn load(&self, reference: &str) -> Result<Box<dyn Stylesheet>, StylesheetError>;
}
