//! Error types for request parsing.

use thiserror::Error;

/// Errors that can occur while turning raw bytes into an [`HttpRequest`](crate::http::HttpRequest).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request target is not an origin-form path.
    #[error("Invalid request target: {0}")]
    InvalidPath(String),

    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    #[error("Invalid header format: {0}")]
    InvalidHeaderFormat(String),

    #[error("Invalid Content-Length: {0}")]
    InvalidContentLength(String),

    /// The input ended before the blank line closing the header section.
    #[error("Incomplete request head")]
    IncompleteHead,

    #[error("Request head exceeds {0} bytes")]
    HeadTooLarge(usize),

    #[error("Empty request")]
    EmptyRequest,

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}
