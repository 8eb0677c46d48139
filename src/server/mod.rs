//! Dispatch and request lifecycle.
//!
//! Routes are collected in an [`EndpointTableBuilder`] and frozen into an
//! [`EndpointTable`] before serving starts. The [`WebServer`] reads each
//! request fully, resolves it through the table and answers with the handler's
//! response, a `404` on a miss, or the status the [`CauseMapper`] assigns to a
//! failure.

mod config;
mod context;
mod error;
mod mapper;
mod response;
mod route;
mod table;
mod web_server;

// Re-export public items
pub use config::{ServerConfig, ADDR_ENV, MAX_CONNECTIONS_ENV};
pub use context::RequestContext;
pub use error::Error;
pub use mapper::{default_cause_mapper, CauseMapper};
pub use response::{HttpResponse, StatusCode};
pub use route::{HandlerFn, HandlerFuture, HandlerResult, Prefixed, Route, RouteSource};
pub use table::{EndpointTable, EndpointTableBuilder};
pub use web_server::{Dispatcher, WebServer};
