//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, timeout and trace layers)
//!     → routing::SharedRouter (fallback service)
//!     → matched handler, or 404
//!     → Send to client
//! ```

pub mod server;

pub use server::HttpServer;
