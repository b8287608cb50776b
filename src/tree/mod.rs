//! Data-to-markup tree subsystem.
//!
//! # Data Flow
//! ```text
//! handler output (tagged Value: scalars, List, Map)
//!     → builder.rs (recursive conversion, filters every scalar leaf)
//!     → Node tree (ordered attributes, ordered children, CDATA text)
//!     → writer.rs (canonical XML text)  or  render::Renderer (stylesheet)
//! ```
//!
//! # Design Decisions
//! - Input values are explicitly tagged: a `List` renders as N sibling
//!   elements, a `Map` as a single wrapping element. No key inspection.
//! - The empty key `""` always becomes CDATA text, never an attribute.
//! - Trees are built per render and discarded; nothing is cached.
//! - Building never fails; unknown shapes degrade to stringified text.

pub mod builder;
pub mod node;
pub mod value;
pub mod writer;

pub use builder::TreeBuilder;
pub use node::Node;
pub use value::Value;
