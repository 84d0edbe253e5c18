//! Shopify Admin MCP server.
//!
//! Serves the Shopify Admin tools over stdio. stdout carries the protocol, so
//! all logging goes to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Serve over stdio (default)
//! shopify-admin-mcp
//!
//! # Print the tool catalogue as JSON
//! shopify-admin-mcp tools
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use shopify_admin_mcp::config::ServerConfig;
use shopify_admin_mcp::mcp::ShopifyToolServer;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "shopify-admin-mcp")]
#[command(author, version, about = "MCP server for the Shopify Admin REST API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve tools over stdio (default)
    Serve,
    /// Print the tool catalogue as JSON and exit
    Tools,
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            send_default_pii: false,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

fn init_tracing(config: &ServerConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopify_admin_mcp=info".into());

    let json_layer = config.json_logs.then(|| {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!config.json_logs).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

async fn serve() -> Result<(), BoxError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Shopify Admin MCP server");

    let handler = ShopifyToolServer::from_env();
    let service = handler.serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("Client disconnected, shutting down");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_tools() -> Result<(), BoxError> {
    let tools = ShopifyToolServer::tool_catalogue();
    println!("{}", serde_json::to_string_pretty(&tools)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    // Reads .env before anything else looks at the environment
    let config = ServerConfig::from_env();

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(&config);
    init_tracing(&config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Tools => print_tools(),
    }
}
