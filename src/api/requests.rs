//! Request payload validation
//!
//! Each inbound payload validates itself before the domain service touches
//! storage. Checks are ordered and short-circuiting: the first violated
//! rule determines the reported field.

use serde::Deserialize;
use validator::ValidateEmail;

use crate::domain::document;

/// Validation failure for an inbound payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("request body is empty or malformed")]
    EmptyBody,

    #[error("param: {name} (type: {kind}) is required")]
    MissingParam {
        name: &'static str,
        kind: &'static str,
    },

    #[error("at least one valid field must be provided")]
    NoFieldsProvided,
}

impl ValidationError {
    pub fn missing_param(name: &'static str, kind: &'static str) -> Self {
        ValidationError::MissingParam { name, kind }
    }
}

fn valid_email_format(email: &str) -> bool {
    email.validate_email()
}

/// Payload for `POST /user`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub email: String,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() && self.document.is_empty() && self.email.is_empty() {
            return Err(ValidationError::EmptyBody);
        }
        if self.name.is_empty() {
            return Err(ValidationError::missing_param("name", "string"));
        }
        if self.document.is_empty() || !document::is_valid(&self.document) {
            return Err(ValidationError::missing_param("document", "string"));
        }
        if self.email.is_empty() || !valid_email_format(&self.email) {
            return Err(ValidationError::missing_param("email", "string"));
        }
        Ok(())
    }
}

/// Payload for `PUT /user`. All fields optional; empty fields leave the
/// stored values untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub document: String,
    #[serde(default)]
    pub email: String,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() && self.document.is_empty() && self.email.is_empty() {
            return Err(ValidationError::NoFieldsProvided);
        }
        // "Parses successfully" is the sense of validity here, same as on
        // create (the update_user tests pin this down).
        if !self.email.is_empty() && !valid_email_format(&self.email) {
            return Err(ValidationError::missing_param("email", "string"));
        }
        if !self.document.is_empty() && !document::is_valid(&self.document) {
            return Err(ValidationError::missing_param("document", "string"));
        }
        Ok(())
    }
}

/// Payload for `POST /account`. `user_id` 0 means unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAccountRequest {
    #[serde(default, rename = "accountBalance")]
    pub balance: f64,
    #[serde(default, rename = "userId")]
    pub user_id: i64,
}

impl CreateAccountRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.balance < 0.0 && self.user_id == 0 {
            return Err(ValidationError::EmptyBody);
        }
        if self.balance < 0.0 {
            return Err(ValidationError::missing_param("balance", "float64"));
        }
        if self.user_id == 0 {
            return Err(ValidationError::missing_param("userId", "uint"));
        }
        Ok(())
    }
}
