//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every rule line must tokenize and its pattern must compile
//! - Filter names must be known; value ranges must make sense
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::filter::Filter;
use crate::routing::{RouteRule, RuleParseError};

/// One semantic problem with a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bind address {0:?} is not a valid socket address")]
    BadBindAddress(String),

    #[error("mount path {0:?} must be empty or start with '/'")]
    BadMountPath(String),

    #[error("max_alias_hops must be at least 1")]
    ZeroAliasHops,

    #[error("unknown filter {0:?}")]
    UnknownFilter(String),

    #[error(transparent)]
    Rule(#[from] RuleParseError),
}

/// Check everything serde cannot, collecting every failure.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BadBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    let mount = &config.routing.mount_path;
    if !mount.is_empty() && !mount.starts_with('/') {
        errors.push(ValidationError::BadMountPath(mount.clone()));
    }

    if config.routing.max_alias_hops == 0 {
        errors.push(ValidationError::ZeroAliasHops);
    }

    for name in &config.filters.enabled {
        if Filter::by_name(name).is_none() {
            errors.push(ValidationError::UnknownFilter(name.clone()));
        }
    }

    for line in &config.routing.rules {
        if let Err(e) = RouteRule::parse(line) {
            errors.push(e.into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let mut config = AppConfig::default();
        config.server.bind_address = "nowhere".to_string();
        config.routing.mount_path = "app".to_string();
        config.routing.max_alias_hops = 0;
        config.filters.enabled.push("smallcaps".to_string());
        config.routing.rules.push("get ^/$".to_string());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_bad_rule_pattern_rejected() {
        let mut config = AppConfig::default();
        config.routing.rules = vec!["get ^/users/( broken".to_string()];
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::Rule(_)));
    }
}
