//! Publication of route tables to serving tasks.

use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use arc_swap::ArcSwap;
use axum::{body::Body, http::Request, response::Response};
use futures_util::future::{BoxFuture, FutureExt};
use tower::Service;

use crate::routing::router::Router;

/// A route table shared between the serving tasks.
///
/// Tables are immutable once published; `publish` swaps in a whole new one and
/// requests already in flight finish against the table they started with.
#[derive(Clone)]
pub struct SharedRouter {
    current: Arc<ArcSwap<Router>>,
}

impl SharedRouter {
    pub fn new(router: Router) -> Self {
        Self {
            current: Arc::new(ArcSwap::from_pointee(router)),
        }
    }

    /// Replaces the live table.
    pub fn publish(&self, router: Router) {
        tracing::info!(routes = router.len(), "Publishing route table");
        self.current.store(Arc::new(router));
    }

    /// Snapshot of the live table.
    pub fn load(&self) -> Arc<Router> {
        self.current.load_full()
    }
}

impl From<Router> for SharedRouter {
    fn from(router: Router) -> Self {
        Self::new(router)
    }
}

impl Service<Request<Body>> for SharedRouter {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let router = self.load();
        async move { Ok(router.handle(request).await) }.boxed()
    }
}
