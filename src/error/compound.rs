//! Causes tagged with a protocol status.

use std::error::Error as StdError;
use std::fmt;

use crate::error::cause::{Cause, ErrorCause};
use crate::error::web_error::WebError;
use crate::lang::Maybe;
use crate::server::StatusCode;

/// Capability of carrying a response status.
pub trait StatusHolder {
    fn status(&self) -> StatusCode;
}

/// A cause explicitly tagged with the status the response must carry.
///
/// Equality and hashing consider only `(status, message)`: two compound causes
/// built from different underlying causes are interchangeable as long as they
/// describe the same status and text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompoundCause {
    status: StatusCode,
    message: String,
}

impl CompoundCause {
    /// Pair `status` with the message of `cause`.
    ///
    /// Anything else about `cause` (its type, its own status) is discarded.
    pub fn from<C: Cause + ?Sized>(status: StatusCode, cause: &C) -> Self {
        Self {
            status,
            message: cause.message().to_string(),
        }
    }

    /// Capture a std error under the status of a predefined error.
    pub fn from_error(error: WebError, failure: &dyn StdError) -> Self {
        Self::from(error.status(), &ErrorCause::from_error(failure))
    }
}

impl StatusHolder for CompoundCause {
    fn status(&self) -> StatusCode {
        self.status
    }
}

impl Cause for CompoundCause {
    fn message(&self) -> &str {
        &self.message
    }

    fn as_status_holder(&self) -> Maybe<&dyn StatusHolder> {
        Maybe::present(self as &dyn StatusHolder)
    }
}

impl fmt::Display for CompoundCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.code(), self.message)
    }
}
