//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener settings.
    pub server: ServerConfig,

    /// Dispatch table and mount point.
    pub routing: RoutingConfig,

    /// Leaf-value filter chain.
    pub filters: FilterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Dispatch table configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Prefix stripped from every request path before matching
    /// (empty when the app is mounted at the root).
    pub mount_path: String,

    /// Rule lines: "method pattern target", evaluated top-down.
    pub rules: Vec<String>,

    /// Optional file of additional rule lines, appended after `rules`.
    pub rules_file: Option<PathBuf>,

    /// Upper bound on alias redirections per dispatch.
    pub max_alias_hops: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            mount_path: String::new(),
            rules: vec!["get ^/$ index".to_string()],
            rules_file: None,
            max_alias_hops: 8,
        }
    }
}

/// Filter chain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Filter names in application order.
    pub enabled: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            enabled: vec![
                "typographic".to_string(),
                "initials".to_string(),
                "fractions".to_string(),
            ],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address, "127.0.0.1:8080");
        assert_eq!(config.routing.max_alias_hops, 8);
        assert_eq!(config.filters.enabled.len(), 3);
        assert!(config.routing.mount_path.is_empty());
    }

    #[test]
    fn test_minimal_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [routing]
            rules = ["get ^/users$ listUsers"]
            "#,
        )
        .unwrap();
        assert_eq!(config.routing.rules, ["get ^/users$ listUsers"]);
        // Unspecified sections fall back to defaults.
        assert_eq!(config.server.request_timeout_secs, 30);
    }
}
