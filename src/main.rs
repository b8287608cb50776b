//! ozark server binary.
//!
//! Loads the TOML configuration (falling back to defaults when the file is
//! absent), builds the immutable filter chain and route table, registers the
//! built-in `index` handler, and serves.

use std::path::PathBuf;

use clap::Parser;
use indexmap::IndexMap;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ozark::config::{load_config, AppConfig};
use ozark::http::{HandlerError, HandlerRegistry, Reply, RequestContext};
use ozark::{FilterChain, HttpServer, Renderer, Router, TreeBuilder, Value};

#[derive(Parser)]
#[command(name = "ozark", about = "Markup-tree micro-framework server")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "ozark.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        AppConfig::default()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.observability.log_level)
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(config = %cli.config.display(), "ozark starting");

    let filters = FilterChain::from_names(config.filters.enabled.iter().map(String::as_str))?;
    let router = Router::from_config(&config.routing)?;

    let mut handlers = HandlerRegistry::new();
    handlers.register("index", move |ctx: &RequestContext| index(ctx, &filters));

    let server = HttpServer::new(&config, router, handlers);
    let listener = TcpListener::bind(&config.server.bind_address).await?;
    server.run(listener).await?;

    Ok(())
}

/// Built-in handler: reflects the request back as a rendered tree.
fn index(ctx: &RequestContext, filters: &FilterChain) -> Result<Reply, HandlerError> {
    let mut request = IndexMap::new();
    request.insert("method".to_string(), Value::from(ctx.method.as_str()));

    if !ctx.captures.is_empty() {
        request.insert(
            "capture".to_string(),
            Value::List(
                ctx.captures
                    .iter()
                    .map(|c| Value::from(c.as_str()))
                    .collect(),
            ),
        );
    }

    if !ctx.sources.query.is_empty() {
        request.insert(
            "query".to_string(),
            Value::Map(
                ctx.sources
                    .query
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
                    .collect(),
            ),
        );
    }

    let mut data = IndexMap::new();
    data.insert("request".to_string(), Value::Map(request));

    let tree = TreeBuilder::new(filters).build(&Value::Map(data));
    let xml = Renderer::new().render(&tree, None, &IndexMap::new())?;
    Ok(Reply::xml(xml))
}
