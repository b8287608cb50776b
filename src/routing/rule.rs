//! Route rule parsing.
//!
//! One rule per line, three whitespace-separated tokens: an HTTP method
//! keyword, an unanchored regular expression matched against the
//! mount-stripped path, and a target. A `/`-prefixed target is an alias to
//! another path; anything else names a handler.

use regex::Regex;
use thiserror::Error;

/// What a matching rule resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Final handler identifier.
    Handler(String),
    /// Redirect matching to this path, same method, from the top of the table.
    Alias(String),
}

/// One ordered entry of the dispatch table.
#[derive(Debug, Clone)]
pub struct RouteRule {
    /// Lowercase verb this rule applies to.
    pub method: String,
    /// Unanchored pattern matched against the resource path.
    pub pattern: Regex,
    pub target: RouteTarget,
}

/// A rule line that could not be turned into a [`RouteRule`].
#[derive(Debug, Error)]
pub enum RuleParseError {
    #[error("rule {line:?}: expected three whitespace-separated tokens (method pattern target)")]
    TokenCount { line: String },

    #[error("rule {line:?}: invalid pattern: {source}")]
    Pattern {
        line: String,
        #[source]
        source: Box<regex::Error>,
    },
}

impl RouteRule {
    /// Parse a single rule line.
    pub fn parse(line: &str) -> Result<Self, RuleParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [method, pattern, target] = tokens.as_slice() else {
            return Err(RuleParseError::TokenCount {
                line: line.to_string(),
            });
        };

        let pattern = Regex::new(pattern).map_err(|e| RuleParseError::Pattern {
            line: line.to_string(),
            source: Box::new(e),
        })?;

        let target = if let Some(path) = target.strip_prefix('/') {
            RouteTarget::Alias(format!("/{path}"))
        } else {
            RouteTarget::Handler(target.to_string())
        };

        Ok(Self {
            method: method.to_ascii_lowercase(),
            pattern,
            target,
        })
    }
}

/// Parse a whole table, one rule per line. Blank lines and `#`-comments are
/// skipped; the first bad line aborts with its error.
pub fn parse_table(text: &str) -> Result<Vec<RouteRule>, RuleParseError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(RouteRule::parse)
        .collect()
}
