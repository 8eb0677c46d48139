//! Error types for the transport.

use thiserror::Error;

use crate::http::Error as HttpError;

/// Errors that end a connection.
///
/// Everything a request can fail with after it was read is answered with a
/// response instead; only failures which prevent answering surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Parse error: {0}")]
    ParseError(#[from] HttpError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The declared body exceeds the configured limit.
    #[error("Payload of {0} bytes exceeds the configured limit")]
    PayloadTooLarge(usize),

    /// The peer closed the connection before the request was complete.
    #[error("Connection closed after {0} bytes")]
    ConnectionClosed(usize),
}
