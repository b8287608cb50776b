//! HTTP glue subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum wildcard route, trace + timeout layers)
//!     → extract query / form / cookie sources
//!     → method override (hidden http_method form field)
//!     → routing::Router::dispatch
//!     → handler.rs (registry lookup, RequestContext → Reply)
//!     → pages.rs on NotFound / routing / handler failure
//!     → response
//! ```

pub mod handler;
pub mod pages;
pub mod server;

pub use handler::{HandlerError, HandlerRegistry, Reply, RequestContext};
pub use server::HttpServer;
