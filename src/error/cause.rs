//! Failure descriptions.

use std::error::Error as StdError;
use std::fmt;

use crate::error::compound::StatusHolder;
use crate::lang::Maybe;

/// A described failure carrying at least a human-readable message.
///
/// Plain causes have no protocol meaning. Causes which dictate a response
/// status expose it through [`Cause::as_status_holder`].
pub trait Cause: fmt::Debug + Send + Sync + 'static {
    /// Human-readable description. Never absent, possibly empty.
    fn message(&self) -> &str;

    /// The status capability of this cause, if it has one.
    fn as_status_holder(&self) -> Maybe<&dyn StatusHolder> {
        Maybe::empty()
    }

    /// Turn this cause into a failed result.
    fn result<T>(self) -> Result<T, Self>
    where
        Self: Sized,
    {
        Err(self)
    }

    fn boxed(self) -> Box<dyn Cause>
    where
        Self: Sized,
    {
        Box::new(self)
    }
}

impl Cause for Box<dyn Cause> {
    fn message(&self) -> &str {
        self.as_ref().message()
    }

    fn as_status_holder(&self) -> Maybe<&dyn StatusHolder> {
        self.as_ref().as_status_holder()
    }
}

impl fmt::Display for dyn Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A cause made of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextCause(String);

impl TextCause {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl Cause for TextCause {
    fn message(&self) -> &str {
        &self.0
    }
}

/// A cause captured from a std error.
///
/// Only the rendered text survives; the error value itself is dropped at the
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCause {
    message: String,
}

impl ErrorCause {
    pub fn from_error(error: &dyn StdError) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

impl Cause for ErrorCause {
    fn message(&self) -> &str {
        &self.message
    }
}
