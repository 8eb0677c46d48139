//! HTTP vocabulary shared by the dispatch table and the transport.
//!
//! Requests are always fully buffered: the transport hands over the complete
//! head and body, and [`parse_request`] turns them into an [`HttpRequest`].

mod content_type;
mod error;
mod method;
mod path;
mod request;
mod tests;

// Re-export public items
pub use content_type::ContentType;
pub use error::Error;
pub use method::Method;
pub use path::normalize;
pub(crate) use path::parent;
pub use request::{head_end, parse_request, HttpRequest, HttpVersion};
