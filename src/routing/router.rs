//! Route table and request dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Select the first route whose method and pattern match
//! - Merge path captures with query parameters
//! - Answer 404 when nothing matches
//!
//! # Design Decisions
//! - Registration is a consuming builder; a bad template or method fails the
//!   call instead of leaving a dead route behind
//! - Linear scan: first match wins, no priority beyond order
//! - Method comparison is exact and case-sensitive

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use thiserror::Error;

use crate::config::RouterConfig;
use crate::routing::handler::{Handler, RouteRequest};
use crate::routing::params::Params;
use crate::routing::pattern::{PathPattern, PatternError};

/// Errors returned while registering a route.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String),

    #[error("invalid route template {template:?}: {source}")]
    Pattern {
        template: String,
        #[source]
        source: PatternError,
    },
}

/// One registered route. Immutable once added.
pub struct Route {
    method: Method,
    pattern: PathPattern,
    handler: Arc<dyn Handler>,
}

impl Route {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("template", &self.pattern.template())
            .finish_non_exhaustive()
    }
}

/// Outcome of a successful lookup.
#[derive(Debug)]
pub struct Resolved<'a> {
    pub route: &'a Route,
    pub params: Params,
}

/// Ordered route table.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    query_separator: String,
    decode_path: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self::from_config(&RouterConfig::default())
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self {
            routes: Vec::new(),
            query_separator: config.query_separator.clone(),
            decode_path: config.decode_path,
        }
    }

    /// Compiles `template` and appends a route. Returns the router so calls
    /// can be chained with `?`.
    pub fn add_route<H>(mut self, method: &str, template: &str, handler: H) -> Result<Self, RouteError>
    where
        H: Handler,
    {
        tracing::info!(verb = %method, path = %template, "Adding route");

        let method = Method::from_bytes(method.as_bytes()).map_err(|_| {
            tracing::error!(verb = %method, path = %template, "Invalid route method");
            RouteError::InvalidMethod(method.to_string())
        })?;

        let pattern = PathPattern::compile(template).map_err(|source| {
            tracing::error!(path = %template, error = %source, "Invalid path template");
            RouteError::Pattern {
                template: template.to_string(),
                source,
            }
        })?;

        self.routes.push(Route {
            method,
            pattern,
            handler: Arc::new(handler),
        });
        Ok(self)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Finds the first route matching `method` and the (already decoded)
    /// `path`, and builds its parameter mapping.
    pub fn resolve(&self, method: &str, path: &str, query: Option<&str>) -> Option<Resolved<'_>> {
        let route = self
            .routes
            .iter()
            .find(|r| r.method.as_str() == method && r.pattern.is_match(path))?;

        let mut params = Params::from_captures(route.pattern.captures(path).unwrap_or_default());
        if let Some(query) = query {
            params.overlay_query(query, &self.query_separator);
        }

        Some(Resolved { route, params })
    }

    /// Dispatches one request: invokes the matched handler or answers 404.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        let resolved = {
            let uri = request.uri();
            let path = self.request_path(uri.path());
            let resolved = self.resolve(request.method().as_str(), &path, uri.query());
            if resolved.is_none() {
                tracing::warn!(path = %path, "Path not found");
            }
            resolved
        };

        match resolved {
            Some(Resolved { route, params }) => {
                let handler = Arc::clone(&route.handler);
                handler.call(RouteRequest::new(request, params)).await
            }
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }

    fn request_path<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.decode_path {
            percent_decode_str(raw).decode_utf8_lossy()
        } else {
            Cow::Borrowed(raw)
        }
    }
}
