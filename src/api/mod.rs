//! API module
//!
//! Transport-facing pieces: request payload validation, the response
//! envelope and the route definitions.

pub mod requests;
pub mod response;
pub mod routes;

pub use routes::{create_router, AppState};
