//! Success response envelope
//!
//! Every successful operation answers `{"data": <payload>, "message":
//! "operation from handler: <name> successfull"}`. The message wording
//! (including the historical spelling) is part of the wire contract.

use serde::Serialize;

/// Body of a successful response.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
    pub message: String,
}

/// Wrap a payload in the success envelope for the named operation.
pub fn success<T: Serialize>(operation: &str, data: T) -> DataResponse<T> {
    DataResponse {
        data,
        message: format!("operation from handler: {} successfull", operation),
    }
}
