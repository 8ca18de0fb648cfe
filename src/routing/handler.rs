//! Route handlers and the request they receive.

use std::future::Future;

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, Uri},
    response::{IntoResponse, Response},
};
use futures_util::future::{BoxFuture, FutureExt};

use crate::routing::params::Params;

/// A callback invoked for a matched route. It owns the whole response.
pub trait Handler: Send + Sync + 'static {
    fn call(&self, request: RouteRequest) -> BoxFuture<'static, Response>;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(RouteRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + 'static,
{
    fn call(&self, request: RouteRequest) -> BoxFuture<'static, Response> {
        self(request).map(IntoResponse::into_response).boxed()
    }
}

/// The original request plus the parameters extracted for it.
///
/// Created once per dispatch and owned by the handler invocation.
#[derive(Debug)]
pub struct RouteRequest {
    request: Request<Body>,
    params: Params,
}

impl RouteRequest {
    pub fn new(request: Request<Body>, params: Params) -> Self {
        Self { request, params }
    }

    pub fn request(&self) -> &Request<Body> {
        &self.request
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Shorthand for `params().get(name)`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn method(&self) -> &Method {
        self.request.method()
    }

    pub fn uri(&self) -> &Uri {
        self.request.uri()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.request.headers()
    }

    pub fn into_parts(self) -> (Request<Body>, Params) {
        (self.request, self.params)
    }
}
