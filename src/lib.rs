//! A minimal HTTP dispatch core.
//!
//! This library provides the request-dispatch backbone of a small HTTP
//! service framework: a presence algebra for values that may not exist, a
//! cause hierarchy whose compound causes carry a response status, and an
//! endpoint table resolving `(method, path)` to the most specific registered
//! route.
//!
//! # Features
//!
//! - [`Maybe`](lang::Maybe) with `map`, `flat_map`, `filter`, N-ary `all` and lazy `any`
//! - Status-carrying [`CompoundCause`](error::CompoundCause) with value equality
//! - Prefix routing over sorted path maps, frozen before serving starts
//! - A tokio server answering misses with `404` and mapping failures to statuses
//!
//! # Examples
//!
//! ## Presence algebra
//!
//! ```
//! use microroute::lang::{all, Maybe};
//!
//! let user = Maybe::present("ada");
//! let id = Maybe::option("42".parse::<u32>().ok());
//!
//! let greeting = all((user, id)).map(|name, id| format!("{name}#{id}"));
//! assert_eq!(greeting, Maybe::present("ada#42".to_string()));
//! ```
//!
//! ## Routing
//!
//! ```
//! use microroute::{EndpointTable, HttpResponse, Method, Route, StatusCode};
//!
//! let table = EndpointTable::builder()
//!     .add(Route::get("/users", |_ctx| async {
//!         Ok(HttpResponse::text(StatusCode::Ok, "all users"))
//!     }))
//!     .add(Route::get("/users/active", |_ctx| async {
//!         Ok(HttpResponse::text(StatusCode::Ok, "active users"))
//!     }))
//!     .build();
//!
//! let route = table.find_route(Method::GET, "/users/42").map(|route| route.path());
//! assert_eq!(route.or("none"), "/users");
//! assert!(table.find_route(Method::GET, "/usersX").is_empty());
//! ```
//!
//! ## Error handling
//!
//! ```
//! use microroute::error::{Cause, CompoundCause, StatusHolder, TextCause, WebError};
//! use microroute::StatusCode;
//!
//! let miss = WebError::NotFound.cause();
//! assert_eq!(miss.status(), StatusCode::NotFound);
//! assert_eq!(miss, CompoundCause::from(StatusCode::NotFound, &TextCause::new("Not found")));
//! assert_eq!(miss.message(), "Not found");
//! ```
//!
//! See `demos/basic_server.rs` for a complete server.

// Presence algebra
pub mod lang;

// Cause hierarchy
pub mod error;

// Requests, methods, paths
pub mod http;

// Dispatch table and request lifecycle
pub mod server;

// Re-export commonly used items for convenience
pub use error::{Cause, CompoundCause, StatusHolder, WebError};
pub use http::{parse_request, Error as HttpError, HttpRequest, Method};
pub use lang::Maybe;
pub use server::{
    EndpointTable, EndpointTableBuilder, Error as ServerError, HttpResponse, RequestContext, Route,
    RouteSource, ServerConfig, StatusCode, WebServer,
};
