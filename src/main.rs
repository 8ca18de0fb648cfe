//! `path-router` server.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net listener ─▶ axum (trace, timeout) ─▶ SharedRouter
//!                                                                  │
//!                                          first (method, template) match
//!                                                                  │
//!     Client Response                                              ▼
//!     ◀────────────── handler response, or 404 Not Found ◀─── handler
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use path_router::app::demo_router;
use path_router::config::resolve_config;
use path_router::lifecycle::{signals, Shutdown};
use path_router::observability::init_logging;
use path_router::{HttpServer, SharedRouter};

#[derive(Parser)]
#[command(name = "path-router")]
#[command(about = "Serve the bundled route table", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), cli.bind)?;

    init_logging(&config.observability);
    tracing::info!("path-router v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        query_separator = %config.router.query_separator,
        "Configuration loaded"
    );

    let routes = SharedRouter::new(demo_router(&config.router)?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_ctrl_c(&shutdown).await;
    });

    let server = HttpServer::new(&config, routes);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
