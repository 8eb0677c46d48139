//! Translation of handler failures into response statuses.

use std::sync::Arc;

use crate::error::{Cause, CompoundCause};
use crate::server::response::StatusCode;

/// Turns any cause into the compound cause a response is built from.
pub type CauseMapper = Arc<dyn Fn(&dyn Cause) -> CompoundCause + Send + Sync>;

/// Keep the status of causes which carry one; everything else is a 500.
///
/// The message always survives unchanged.
pub fn default_cause_mapper(cause: &dyn Cause) -> CompoundCause {
    let status = cause
        .as_status_holder()
        .map(|holder| holder.status())
        .or(StatusCode::InternalServerError);
    CompoundCause::from(status, cause)
}
