//! Output rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Node tree
//!     → no template: writer::write_document (declaration + canonical XML)
//!     → template reference: StylesheetLoader::load (per call, no caching)
//!         → bind string parameters by name
//!         → Stylesheet::transform
//!     → final string payload
//! ```
//!
//! # Design Decisions
//! - The transform engine is an opaque collaborator behind trait objects;
//!   this module only fixes the parameter-binding contract
//! - Load and transform failures surface as RenderError, never as raw I/O
//! - Templates are loaded on every call; the tree is per-request anyway

pub mod stylesheet;

use indexmap::IndexMap;
use thiserror::Error;

use crate::tree::{writer, Node};

pub use stylesheet::{Stylesheet, StylesheetError, StylesheetLoader};

/// Errors surfaced when producing the final output string.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template reference could not be resolved to a stylesheet.
    #[error("failed to load template {reference:?}: {reason}")]
    Load { reference: String, reason: String },

    /// The stylesheet failed while transforming the tree.
    #[error("template {reference:?} failed to transform: {reason}")]
    Transform { reference: String, reason: String },
}

/// Serializes node trees, optionally through an external stylesheet.
#[derive(Default)]
pub struct Renderer {
    loader: Option<Box<dyn StylesheetLoader>>,
}

impl Renderer {
    /// A renderer that can only serialize trees directly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that resolves template references through `loader`.
    pub fn with_loader(loader: Box<dyn StylesheetLoader>) -> Self {
        Self {
            loader: Some(loader),
        }
    }

    /// Produce the final string for `tree`.
    ///
    /// Without a template the tree is serialized as a standalone XML
    /// document. With one, the stylesheet is loaded, every `parameters`
    /// entry is bound by name, and the transform output is returned.
    pub fn render(
        &self,
        tree: &Node,
        template: Option<&str>,
        parameters: &IndexMap<String, String>,
    ) -> Result<String, RenderError> {
        let Some(reference) = template else {
            return Ok(writer::write_document(tree));
        };

        let loader = self.loader.as_deref().ok_or_else(|| RenderError::Load {
            reference: reference.to_string(),
            reason: "no stylesheet loader configured".to_string(),
        })?;

        let sheet = loader.load(reference).map_err(|e| RenderError::Load {
            reference: reference.to_string(),
            reason: e.to_string(),
        })?;

        sheet
            .transform(tree, parameters)
            .map_err(|e| RenderError::Transform {
                reference: reference.to_string(),
                reason: e.to_string(),
            })
    }
}
