//! Method + path request router.
//!
//! Route templates with `{name}` placeholders are compiled once at
//! registration; each request is dispatched to the first route whose method
//! and path match, with path captures and query parameters merged into one
//! parameter mapping.

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Params, PathPattern, RouteRequest, Router, SharedRouter};
