//! Handler registry and the request/reply types handlers see.

use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::render::RenderError;
use crate::request::RequestSources;
use crate::store::StoreError;

/// Everything a handler gets about one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Effective method, lowercase, after the form-field override.
    pub method: String,
    /// Capture groups from the winning route match.
    pub captures: Vec<String>,
    /// The three request input sources.
    pub sources: RequestSources,
    /// Mount prefix, for building redirect locations.
    pub mount: String,
}

/// A handler's response payload.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self::new(200, "text/html; charset=utf-8", body)
    }

    pub fn xml(body: impl Into<String>) -> Self {
        Self::new(200, "application/xml; charset=utf-8", body)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Failures inside a handler; all surface as a 500 page.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    Other(String),
}

/// A registered request handler.
pub type Handler = Arc<dyn Fn(&RequestContext) -> Result<Reply, HandlerError> + Send + Sync>;

/// Maps route targets to handlers. Built once at startup, immutable after.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: IndexMap<String, Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under the route-target name `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&RequestContext) -> Result<Reply, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let mut registry = HandlerRegistry::new();
        registry.register("hello", |_ctx| Ok(Reply::html("hi")));

        let ctx = RequestContext {
            method: "get".into(),
            captures: vec![],
            sources: RequestSources::new(),
            mount: String::new(),
        };
        let handler = registry.get("hello").expect("registered");
        let reply = handler(&ctx).unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, "hi");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_reply_builders() {
        let reply = Reply::xml("<a/>").with_header("X-Frame", "deny");
        assert_eq!(reply.status, 200);
        assert_eq!(reply.content_type, "application/xml; charset=utf-8");
        assert_eq!(reply.headers, vec![("X-Frame".to_string(), "deny".to_string())]);
    }
}
