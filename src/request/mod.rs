//! Request input subsystem.
//!
//! # Data Flow
//! ```text
//! transport request
//!     → query string / form body / Cookie header
//!     → RequestSources (three insertion-ordered maps)
//!     → resolve(name, mask, default)
//!         → fixed precedence: query, form, cookie (mask-gated)
//!         → coerce found text to the default's type
//!     → ParamValue
//! ```
//!
//! # Design Decisions
//! - Coercion target is an explicit sum type selected by the caller's
//!   default, not runtime reflection
//! - Parse failure returns the original text, never a silently wrong value
//! - Precedence is fixed; the mask only gates which sources are consulted

pub mod resolver;
pub mod sources;

pub use resolver::ParamValue;
pub use sources::{RequestSources, SourceMask};
