//! Predefined protocol errors.

use thiserror::Error;

use crate::error::cause::Cause;
use crate::error::compound::{CompoundCause, StatusHolder};
use crate::lang::Maybe;
use crate::server::StatusCode;

/// Failures with a fixed status and a fixed description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum WebError {
    #[error("Bad request")]
    BadRequest,

    /// No route matches the request.
    #[error("Not found")]
    NotFound,

    #[error("Payload too large")]
    PayloadTooLarge,

    /// The body could not be converted into the expected value.
    #[error("Unprocessable entity")]
    UnprocessableEntity,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl WebError {
    fn text(&self) -> &'static str {
        match self {
            WebError::BadRequest => "Bad request",
            WebError::NotFound => "Not found",
            WebError::PayloadTooLarge => "Payload too large",
            WebError::UnprocessableEntity => "Unprocessable entity",
            WebError::InternalServerError => "Internal server error",
            WebError::ServiceUnavailable => "Service unavailable",
        }
    }

    /// The canonical compound cause for this error.
    pub fn cause(&self) -> CompoundCause {
        CompoundCause::from(self.status(), self)
    }
}

impl StatusHolder for WebError {
    fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest => StatusCode::BadRequest,
            WebError::NotFound => StatusCode::NotFound,
            WebError::PayloadTooLarge => StatusCode::PayloadTooLarge,
            WebError::UnprocessableEntity => StatusCode::UnprocessableEntity,
            WebError::InternalServerError => StatusCode::InternalServerError,
            WebError::ServiceUnavailable => StatusCode::ServiceUnavailable,
        }
    }
}

impl Cause for WebError {
    fn message(&self) -> &str {
        self.text()
    }

    fn as_status_holder(&self) -> Maybe<&dyn StatusHolder> {
        Maybe::present(self as &dyn StatusHolder)
    }
}
