//! Cause hierarchy.
//!
//! Failures are values. A [`Cause`] describes what went wrong; a
//! [`CompoundCause`] additionally fixes the response status. Std errors are
//! captured once at the boundary with [`ErrorCause::from_error`] or
//! [`CompoundCause::from_error`].

mod cause;
mod compound;
mod web_error;

// Re-export public items
pub use cause::{Cause, ErrorCause, TextCause};
pub use compound::{CompoundCause, StatusHolder};
pub use web_error::WebError;
