//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the route table in an Axum app
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener and serve until shutdown

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::lifecycle::ShutdownSignal;
use crate::routing::SharedRouter;

/// HTTP server dispatching every request through a [`SharedRouter`].
pub struct HttpServer {
    app: Router,
    routes: SharedRouter,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, routes: SharedRouter) -> Self {
        let app = Self::build_app(config, routes.clone());
        Self { app, routes }
    }

    /// The route table is the fallback service, so it sees every request.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, routes: SharedRouter) -> Router {
        Router::new()
            .fallback_service(routes)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.routes.load().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Handle for publishing a new route table while serving.
    pub fn routes(&self) -> &SharedRouter {
        &self.routes
    }
}
