//! Rule-table dispatch with alias following.

use thiserror::Error;

use super::rule::{RouteRule, RouteTarget, RuleParseError};
use crate::config::schema::RoutingConfig;

/// A resolved dispatch: the handler to invoke and the capture groups of the
/// winning match (groups 1.., empty string for non-participating groups).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub handler: String,
    pub captures: Vec<String>,
}

/// Dispatch failures. NotFound maps to a 404 response; the hop bound maps
/// to a 500, since it means the table itself is misconfigured.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("no route matches the request")]
    NotFound,

    #[error("alias chain exceeded {limit} hops; the route table likely contains a cycle")]
    TooManyAliasHops { limit: usize },
}

/// Immutable dispatch table, constructed once at startup and shared
/// read-only across requests.
#[derive(Debug)]
pub struct Router {
    rules: Vec<RouteRule>,
    mount: String,
    max_alias_hops: usize,
}

impl Router {
    pub fn new(rules: Vec<RouteRule>, mount: impl Into<String>, max_alias_hops: usize) -> Self {
        Self {
            rules,
            mount: mount.into(),
            max_alias_hops,
        }
    }

    /// Compile a validated routing config into an immutable table.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, RuleParseError> {
        let rules = config
            .rules
            .iter()
            .map(|line| RouteRule::parse(line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(
            rules,
            config.mount_path.clone(),
            config.max_alias_hops,
        ))
    }

    /// Resolve `(method, path)` to a handler and its captures.
    ///
    /// The method is normalized to lowercase and the configured mount prefix
    /// is stripped from the path before scanning. An alias target replaces
    /// the resource and restarts the scan from the top of the table, up to
    /// the configured hop bound.
    pub fn dispatch(&self, method: &str, path: &str) -> Result<RouteMatch, RoutingError> {
        let method = method.to_ascii_lowercase();
        let mut resource = self.strip_mount(path).to_string();
        let mut hops = 0;

        loop {
            let Some((rule, captures)) = self.scan(&method, &resource) else {
                return Err(RoutingError::NotFound);
            };

            match &rule.target {
                RouteTarget::Handler(handler) => {
                    tracing::debug!(
                        handler = %handler,
                        pattern = %rule.pattern,
                        resource = %resource,
                        "route matched"
                    );
                    return Ok(RouteMatch {
                        handler: handler.clone(),
                        captures,
                    });
                }
                RouteTarget::Alias(next) => {
                    hops += 1;
                    if hops > self.max_alias_hops {
                        return Err(RoutingError::TooManyAliasHops {
                            limit: self.max_alias_hops,
                        });
                    }
                    tracing::debug!(from = %resource, to = %next, hop = hops, "following route alias");
                    resource = next.clone();
                }
            }
        }
    }

    /// First rule matching method and resource, with its capture groups.
    fn scan(&self, method: &str, resource: &str) -> Option<(&RouteRule, Vec<String>)> {
        self.rules.iter().find_map(|rule| {
            if rule.method != method {
                return None;
            }
            rule.pattern.captures(resource).map(|caps| {
                let groups = (1..caps.len())
                    .map(|i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect();
                (rule, groups)
            })
        })
    }

    fn strip_mount<'p>(&self, path: &'p str) -> &'p str {
        if self.mount.is_empty() {
            return path;
        }
        path.strip_prefix(&self.mount).unwrap_or(path)
    }
}
