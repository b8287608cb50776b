//! Typed request-value resolution.
//!
//! The caller's default value selects both the fallback and the type the
//! found text is coerced to. Each variant has an explicit parse; a failed
//! parse returns the original text rather than a wrong value.

use std::fmt;

use super::sources::{RequestSources, SourceMask};

/// A resolved request value, or the typed default it fell back to.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    /// String form, matching how the value would appear on the wire.
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(x) => write!(f, "{x}"),
            ParamValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl RequestSources {
    /// Resolve `name` from the mask-enabled sources.
    ///
    /// Absent everywhere: `default` is returned unchanged (including `None`).
    /// Found with a typed default: the text is coerced to the default's
    /// variant. Found with no default: raw text, untyped.
    pub fn resolve(
        &self,
        name: &str,
        mask: SourceMask,
        default: Option<ParamValue>,
    ) -> Option<ParamValue> {
        let Some(raw) = self.lookup(name, mask) else {
            return default;
        };
        match default {
            None => Some(ParamValue::Text(raw.to_string())),
            Some(like) => Some(coerce(raw, &like)),
        }
    }

    /// The effective request method: a hidden `http_method` form field
    /// overrides the transport verb, letting a plain form submit any verb.
    /// Always lowercase.
    pub fn effective_method(&self, transport_verb: &str) -> String {
        let default = ParamValue::Text(transport_verb.to_string());
        match self.resolve("http_method", SourceMask::POST, Some(default)) {
            Some(value) => value.as_text().to_ascii_lowercase(),
            None => transport_verb.to_ascii_lowercase(),
        }
    }
}

fn coerce(raw: &str, like: &ParamValue) -> ParamValue {
    match like {
        ParamValue::Bool(_) => match parse_bool(raw) {
            Some(b) => ParamValue::Bool(b),
            None => ParamValue::Text(raw.to_string()),
        },
        ParamValue::Int(_) => match raw.trim().parse::<i64>() {
            Ok(i) => ParamValue::Int(i),
            Err(_) => ParamValue::Text(raw.to_string()),
        },
        ParamValue::Float(_) => match raw.trim().parse::<f64>() {
            Ok(x) => ParamValue::Float(x),
            Err(_) => ParamValue::Text(raw.to_string()),
        },
        ParamValue::Text(_) => ParamValue::Text(raw.to_string()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "" | "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
