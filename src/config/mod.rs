//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, merge external rules file)
//!     → validation.rs (semantic checks, all errors at once)
//!     → AppConfig (validated, immutable)
//!     → shared with the router, filter chain, and server at startup
//! ```
//!
//! # Design Decisions
//! - Every section has defaults so a minimal (or missing) config works
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is immutable once loaded

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use validation::{validate_config, ValidationError};
