//! Domain service handlers
//!
//! Each handler orchestrates one entity's operations: validate the request,
//! look up related entities, delegate to the injected store, shape the
//! result. Handlers are stateless; the store handle is the only shared
//! resource.

mod account;
mod user;

pub use account::AccountHandler;
pub use user::UserHandler;

use crate::api::requests::ValidationError;
use crate::error::AppError;

/// Pull the required `id` query parameter. The raw string is kept for error
/// messages; a value that does not parse as an id behaves like a lookup
/// miss, not a server error.
fn require_id_param(id: Option<&str>) -> Result<(i64, String), AppError> {
    let raw = match id {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => return Err(ValidationError::missing_param("id", "queryParameter").into()),
    };
    match raw.parse::<i64>() {
        Ok(parsed) => Ok((parsed, raw)),
        Err(_) => Err(AppError::UserNotFound(raw)),
    }
}
