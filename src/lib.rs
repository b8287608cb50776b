//! ozark — a small web micro-framework core.
//!
//! Converts nested key-value data into a markup tree with a filter pipeline
//! on every leaf, renders it directly or through an external stylesheet, and
//! dispatches requests through an ordered regex rule table with bounded
//! alias redirection.

// Core subsystems
pub mod filter;
pub mod render;
pub mod routing;
pub mod tree;

// Request plumbing
pub mod http;
pub mod request;
pub mod store;

// Cross-cutting concerns
pub mod config;

pub use config::AppConfig;
pub use filter::FilterChain;
pub use http::HttpServer;
pub use render::Renderer;
pub use request::{ParamValue, RequestSources, SourceMask};
pub use routing::{RouteMatch, Router, RoutingError};
pub use tree::{Node, TreeBuilder, Value};
