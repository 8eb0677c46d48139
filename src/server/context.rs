//! Per-request context handed to handlers.

use serde::de::DeserializeOwned;

use crate::error::{CompoundCause, WebError};
use crate::http::HttpRequest;
use crate::lang::Maybe;

/// A request bound to the route that matched it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request: HttpRequest,
    path: String,
    route_path: String,
}

impl RequestContext {
    /// Bind `request`, whose normalized path is `path`, to the route registered at `route_path`.
    pub fn new(request: HttpRequest, path: impl Into<String>, route_path: impl Into<String>) -> Self {
        Self {
            request,
            path: path.into(),
            route_path: route_path.into(),
        }
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn into_request(self) -> HttpRequest {
        self.request
    }

    /// The normalized request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path the matched route was registered at.
    pub fn route_path(&self) -> &str {
        &self.route_path
    }

    /// Path segments below the matched route.
    ///
    /// For a route at `/users` and a request for `/users/42/orders` this is
    /// `["42", "orders"]`.
    pub fn remainder(&self) -> Vec<&str> {
        self.path
            .strip_prefix(self.route_path.as_str())
            .unwrap_or_default()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// The remainder segment at `index`.
    pub fn segment(&self, index: usize) -> Maybe<&str> {
        Maybe::option(self.remainder().get(index).copied())
    }

    pub fn header(&self, name: &str) -> Maybe<&str> {
        self.request.header(name)
    }

    pub fn query(&self, name: &str) -> Maybe<&str> {
        self.request.query(name)
    }

    /// Deserialize the JSON body, failing with `422 Unprocessable entity`.
    pub fn body_json<T: DeserializeOwned>(&self) -> Result<T, CompoundCause> {
        self.request
            .json()
            .map_err(|e| CompoundCause::from_error(WebError::UnprocessableEntity, &e))
    }
}
