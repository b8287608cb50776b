//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! (method, path)
//!     → strip configured mount prefix
//!     → scan rule table top-down (method equality + unanchored regex)
//!     → handler target: RouteMatch { handler, captures }
//!     → alias target (/…): resource := alias, rescan from the top
//!         (bounded hop count, cycle-safe)
//!     → no match: RoutingError::NotFound
//!
//! Table construction (at startup):
//!     rule lines ("method pattern target")
//!     → rule.rs (tokenize, compile regex, classify target)
//!     → freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Rules are ordered; first match wins, so table order is the API
//! - Alias following restarts from the top of the table, never mid-scan
//! - The hop bound is mandatory: two mutually aliasing rules error out
//!   instead of looping forever
//! - Explicit NotFound rather than a silent default handler

pub mod router;
pub mod rule;

pub use router::{RouteMatch, Router, RoutingError};
pub use rule::{RouteRule, RouteTarget, RuleParseError};
