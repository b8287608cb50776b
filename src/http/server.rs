//! Axum server adapter.
//!
//! # Responsibilities
//! - Catch every (method, path) through a wildcard route
//! - Extract the three request input sources (query, form body, cookies)
//! - Apply the hidden-field method override before dispatch
//! - Run the route table and the matched handler
//! - Map typed routing/handler failures to 404/500 status pages
//!
//! # Design Decisions
//! - The rule-table router is the real router; Axum only delivers requests
//! - Handlers are synchronous; a dispatch cycle never suspends
//! - Request timeout and tracing are middleware layers, as in any service

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{Body, to_bytes},
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    response::Response,
    routing::any,
    Router as AxumRouter,
};
use indexmap::IndexMap;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::http::handler::{HandlerRegistry, Reply, RequestContext};
use crate::http::pages;
use crate::request::RequestSources;
use crate::routing::{Router, RoutingError};

/// Largest form body the adapter will buffer.
const MAX_FORM_BYTES: usize = 2 * 1024 * 1024;

/// Shared, immutable per-process state.
#[derive(Clone)]
struct AppState {
    router: Arc<Router>,
    handlers: Arc<HandlerRegistry>,
    mount: String,
}

/// HTTP front end wiring the rule-table router to the network.
pub struct HttpServer {
    app: AxumRouter,
}

impl HttpServer {
    pub fn new(config: &AppConfig, router: Router, handlers: HandlerRegistry) -> Self {
        let state = AppState {
            router: Arc::new(router),
            handlers: Arc::new(handlers),
            mount: config.routing.mount_path.clone(),
        };

        let app = AxumRouter::new()
            .route("/{*path}", any(dispatch_request))
            .route("/", any(dispatch_request))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http());

        Self { app }
    }

    /// The underlying Axum router, for in-process testing.
    pub fn into_router(self) -> AxumRouter {
        self.app
    }

    /// Serve until the listener fails.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "http server starting");
        axum::serve(listener, self.app).await
    }
}

async fn dispatch_request(State(state): State<AppState>, req: Request<Body>) -> Response {
    let (parts, body) = req.into_parts();

    let sources = RequestSources {
        query: parse_query(parts.uri.query()),
        form: parse_form(&parts.headers, body).await,
        cookies: parse_cookies(&parts.headers),
    };

    let method = sources.effective_method(parts.method.as_str());
    let path = parts.uri.path();

    let reply = match state.router.dispatch(&method, path) {
        Ok(matched) => match state.handlers.get(&matched.handler) {
            Some(handler) => {
                let ctx = RequestContext {
                    method,
                    captures: matched.captures,
                    sources,
                    mount: state.mount.clone(),
                };
                handler(&ctx).unwrap_or_else(|err| {
                    tracing::error!(handler = %matched.handler, error = %err, "handler failed");
                    pages::internal_error()
                })
            }
            None => {
                tracing::error!(handler = %matched.handler, "route target has no registered handler");
                pages::internal_error()
            }
        },
        Err(RoutingError::NotFound) => pages::not_found(),
        Err(err @ RoutingError::TooManyAliasHops { .. }) => {
            tracing::error!(error = %err, path = %path, "routing failed");
            pages::internal_error()
        }
    };

    into_response(reply)
}

fn into_response(reply: Reply) -> Response {
    let mut builder = Response::builder()
        .status(reply.status)
        .header(header::CONTENT_TYPE, reply.content_type.clone());
    for (name, value) in &reply.headers {
        builder = builder.header(name, value);
    }
    builder.body(Body::from(reply.body)).unwrap_or_else(|err| {
        tracing::error!(error = %err, "reply carried an invalid header");
        Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::empty())
            .expect("static response builds")
    })
}

fn parse_query(query: Option<&str>) -> IndexMap<String, String> {
    url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
        .into_owned()
        .collect()
}

async fn parse_form(headers: &HeaderMap, body: Body) -> IndexMap<String, String> {
    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false);
    if !is_form {
        return IndexMap::new();
    }

    match to_bytes(body, MAX_FORM_BYTES).await {
        Ok(bytes) => url::form_urlencoded::parse(&bytes).into_owned().collect(),
        Err(err) => {
            tracing::warn!(error = %err, "failed to buffer form body");
            IndexMap::new()
        }
    }
}

fn parse_cookies(headers: &HeaderMap) -> IndexMap<String, String> {
    let mut cookies = IndexMap::new();
    let Some(raw) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return cookies;
    };
    for pair in raw.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            cookies.insert(name.trim().to_string(), value.trim().to_string());
        }
    }
    cookies
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_query() {
        let parsed = parse_query(Some("page=5&q=a+b"));
        assert_eq!(parsed.get("page").map(String::as_str), Some("5"));
        assert_eq!(parsed.get("q").map(String::as_str), Some("a b"));
        assert!(parse_query(None).is_empty());
    }

    #[test]
    fn test_parse_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=abc123; theme=dark"),
        );
        let cookies = parse_cookies(&headers);
        assert_eq!(cookies.get("session").map(String::as_str), Some("abc123"));
        assert_eq!(cookies.get("theme").map(String::as_str), Some("dark"));
        assert!(parse_cookies(&HeaderMap::new()).is_empty());
    }

    #[tokio::test]
    async fn test_parse_form_requires_content_type() {
        let body = Body::from("a=1&b=2");
        assert!(parse_form(&HeaderMap::new(), body).await.is_empty());

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        let form = parse_form(&headers, Body::from("a=1&b=2")).await;
        assert_eq!(form.get("a").map(String::as_str), Some("1"));
        assert_eq!(form.get("b").map(String::as_str), Some("2"));
    }
}
