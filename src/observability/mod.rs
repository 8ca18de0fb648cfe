//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, http, lifecycle
//!     → tracing macros (structured log events)
//!     → logging.rs (subscriber: filter + fmt layer)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
