//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (at startup):
//!     (method, template, handler)
//!     → pattern.rs (compile template into anchored matcher)
//!     → router.rs (append to ordered route table)
//!     → shared.rs (publish table to serving tasks)
//!
//! Incoming Request (method, path, query)
//!     → router.rs (first route with equal method and matching path)
//!     → params.rs (path captures, then query parameters on top)
//!     → handler.rs (user callback produces the response)
//!     → or 404 Not Found
//! ```
//!
//! # Design Decisions
//! - Templates compiled once, at registration
//! - Tables immutable after publication (no locks on the request path)
//! - First match wins (ordered by registration)

pub mod handler;
pub mod params;
pub mod pattern;
pub mod router;
pub mod shared;

pub use handler::{Handler, RouteRequest};
pub use params::{Params, DEFAULT_QUERY_SEPARATOR};
pub use pattern::{PathPattern, PatternError};
pub use router::{Resolved, Route, RouteError, Router};
pub use shared::SharedRouter;
