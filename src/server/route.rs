//! Routes and their handlers.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;

use crate::error::Cause;
use crate::http::{normalize, Method};
use crate::server::context::RequestContext;
use crate::server::response::{HttpResponse, StatusCode};

/// What a handler eventually produces.
pub type HandlerResult = Result<HttpResponse, Box<dyn Cause>>;

/// Type alias for a boxed future that resolves to a [`HandlerResult`].
pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send>>;

/// Type alias for a handler function that takes a [`RequestContext`] and returns a [`HandlerFuture`].
pub type HandlerFn = Arc<dyn Fn(RequestContext) -> HandlerFuture + Send + Sync>;

/// A handler registered for one method and one normalized path.
///
/// The path also covers everything below it: `/users` handles `/users/42`
/// unless a more specific route is registered.
#[derive(Clone)]
pub struct Route {
    method: Method,
    path: String,
    handler: HandlerFn,
}

impl Route {
    /// Create a route. `path` is normalized.
    pub fn new<F, Fut>(method: Method, path: impl AsRef<str>, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        let handler: HandlerFn = Arc::new(move |ctx: RequestContext| -> HandlerFuture { Box::pin(handler(ctx)) });

        Self {
            method,
            path: normalize(path.as_ref()),
            handler,
        }
    }

    pub fn get<F, Fut>(path: impl AsRef<str>, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self::new(Method::GET, path, handler)
    }

    pub fn post<F, Fut>(path: impl AsRef<str>, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self::new(Method::POST, path, handler)
    }

    pub fn put<F, Fut>(path: impl AsRef<str>, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self::new(Method::PUT, path, handler)
    }

    pub fn delete<F, Fut>(path: impl AsRef<str>, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self::new(Method::DELETE, path, handler)
    }

    /// A route whose handler produces a value answered as a `200` JSON body.
    pub fn json<F, Fut, T>(method: Method, path: impl AsRef<str>, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, Box<dyn Cause>>> + Send + 'static,
        T: Serialize + 'static,
    {
        Self::new(method, path, move |ctx| {
            let pending = handler(ctx);
            async move {
                let value = pending.await?;
                HttpResponse::json(StatusCode::Ok, &value).map_err(|cause| cause.boxed())
            }
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The same handler mounted below `prefix`.
    pub fn prefixed(&self, prefix: &str) -> Self {
        Self {
            method: self.method,
            path: normalize(&format!("{prefix}/{path}", path = self.path)),
            handler: Arc::clone(&self.handler),
        }
    }

    /// Start the handler for `ctx`.
    pub fn invoke(&self, ctx: RequestContext) -> HandlerFuture {
        (self.handler)(ctx)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Anything that contributes routes to an endpoint table.
pub trait RouteSource {
    fn routes(&self) -> Vec<Route>;

    /// Mount every route of this source below `prefix`.
    fn with_prefix(self, prefix: impl Into<String>) -> Prefixed<Self>
    where
        Self: Sized,
    {
        Prefixed {
            prefix: prefix.into(),
            source: self,
        }
    }
}

impl RouteSource for Route {
    fn routes(&self) -> Vec<Route> {
        vec![self.clone()]
    }
}

impl RouteSource for Vec<Route> {
    fn routes(&self) -> Vec<Route> {
        self.clone()
    }
}

impl<const N: usize> RouteSource for [Route; N] {
    fn routes(&self) -> Vec<Route> {
        self.to_vec()
    }
}

/// A route source mounted below a path prefix.
#[derive(Debug, Clone)]
pub struct Prefixed<S> {
    prefix: String,
    source: S,
}

impl<S: RouteSource> RouteSource for Prefixed<S> {
    fn routes(&self) -> Vec<Route> {
        self.source
            .routes()
            .iter()
            .map(|route| route.prefixed(&self.prefix))
            .collect()
    }
}
