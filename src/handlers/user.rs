//! User operations
//!
//! Create, find, list, update and delete. Validation failures short-circuit
//! before any store call; store misses surface as not-found results carrying
//! the requested id.

use std::sync::Arc;

use crate::api::requests::{CreateUserRequest, UpdateUserRequest};
use crate::domain::{NewUser, User};
use crate::error::{AppError, AppResult};
use crate::store::{StoreError, UserStore};

use super::require_id_param;

/// Domain service for users.
#[derive(Clone)]
pub struct UserHandler {
    store: Arc<dyn UserStore>,
}

impl UserHandler {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Create a user. New users start without an account reference.
    pub async fn create(&self, request: CreateUserRequest) -> AppResult<User> {
        request.validate()?;

        let user = NewUser {
            name: request.name,
            document: request.document,
            email: request.email,
            account_id: 0,
        };

        let created = self.store.create(user).await?;
        tracing::info!(user_id = created.id, "user created");
        Ok(created)
    }

    /// Find a user by the `id` query parameter.
    pub async fn find_by_id(&self, id: Option<&str>) -> AppResult<User> {
        let (id, raw) = require_id_param(id)?;
        self.store
            .find_by_id(id)
            .await
            .map_err(|err| not_found_as(err, raw))
    }

    /// List all users. An empty list is a successful result.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.store.list().await?)
    }

    /// Update a user. Only non-empty request fields override the stored
    /// values; the rest are left untouched.
    pub async fn update(&self, id: Option<&str>, request: UpdateUserRequest) -> AppResult<User> {
        request.validate()?;
        let (id, raw) = require_id_param(id)?;

        let mut user = self
            .store
            .find_by_id(id)
            .await
            .map_err(|err| not_found_as(err, raw))?;

        if !request.name.is_empty() {
            user.name = request.name;
        }
        if !request.document.is_empty() {
            user.document = request.document;
        }
        if !request.email.is_empty() {
            user.email = request.email;
        }

        self.store.update(&user).await?;
        tracing::info!(user_id = user.id, "user updated");
        Ok(user)
    }

    /// Soft-delete a user. Returns the id as the confirmation payload.
    pub async fn delete(&self, id: Option<&str>) -> AppResult<String> {
        let (id, raw) = require_id_param(id)?;

        let user = self
            .store
            .find_by_id(id)
            .await
            .map_err(|err| not_found_as(err, raw.clone()))?;

        self.store.delete(&user).await?;
        tracing::info!(user_id = user.id, "user deleted");
        Ok(format!("id: {}", raw))
    }
}

/// A lookup miss becomes a not-found result carrying the requested id.
fn not_found_as(err: StoreError, id: String) -> AppError {
    match err {
        StoreError::NotFound => AppError::UserNotFound(id),
        StoreError::Database(e) => AppError::Database(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    const VALID_DOCUMENT: &str = "11222333000181";

    fn handler() -> UserHandler {
        UserHandler::new(Arc::new(MemoryStore::new()))
    }

    fn create_request() -> CreateUserRequest {
        CreateUserRequest {
            name: "Test".to_string(),
            document: VALID_DOCUMENT.to_string(),
            email: "test@test.com".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_stored_user_with_assigned_id() {
        let handler = handler();
        let user = handler.create(create_request()).await.unwrap();

        assert!(user.id > 0);
        assert_eq!(user.name, "Test");
        assert_eq!(user.document, VALID_DOCUMENT);
        assert_eq!(user.email, "test@test.com");
        assert_eq!(user.account_id, 0);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_before_storage() {
        let handler = handler();
        let err = handler
            .create(CreateUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "request body is empty or malformed");
        assert!(handler.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_by_id_unknown_id_names_the_id() {
        let handler = handler();
        let err = handler.find_by_id(Some("99")).await.unwrap_err();
        assert_eq!(err.to_string(), "user with id: 99 not found");
    }

    #[tokio::test]
    async fn find_by_id_requires_the_parameter() {
        let handler = handler();
        let err = handler.find_by_id(None).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "param: id (type: queryParameter) is required"
        );
    }

    #[tokio::test]
    async fn list_is_empty_then_grows() {
        let handler = handler();
        assert!(handler.list().await.unwrap().is_empty());

        handler.create(create_request()).await.unwrap();
        assert_eq!(handler.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_overrides_only_provided_fields() {
        let handler = handler();
        let user = handler.create(create_request()).await.unwrap();

        let request = UpdateUserRequest {
            name: "New".to_string(),
            document: String::new(),
            email: String::new(),
        };
        let updated = handler
            .update(Some(&user.id.to_string()), request)
            .await
            .unwrap();

        assert_eq!(updated.name, "New");
        assert_eq!(updated.document, VALID_DOCUMENT);
        assert_eq!(updated.email, "test@test.com");

        let stored = handler
            .find_by_id(Some(&user.id.to_string()))
            .await
            .unwrap();
        assert_eq!(stored.name, "New");
        assert_eq!(stored.document, VALID_DOCUMENT);
    }

    #[tokio::test]
    async fn update_unknown_user_is_not_found() {
        let handler = handler();
        let request = UpdateUserRequest {
            name: "New".to_string(),
            ..Default::default()
        };
        let err = handler.update(Some("42"), request).await.unwrap_err();
        assert_eq!(err.to_string(), "user with id: 42 not found");
    }

    #[tokio::test]
    async fn update_with_no_fields_never_reaches_storage() {
        let handler = handler();
        let user = handler.create(create_request()).await.unwrap();

        let err = handler
            .update(Some(&user.id.to_string()), UpdateUserRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "at least one valid field must be provided");
    }

    #[tokio::test]
    async fn delete_confirms_with_the_id_and_hides_the_user() {
        let handler = handler();
        let user = handler.create(create_request()).await.unwrap();
        let id = user.id.to_string();

        let confirmation = handler.delete(Some(&id)).await.unwrap();
        assert_eq!(confirmation, format!("id: {}", id));

        let err = handler.find_by_id(Some(&id)).await.unwrap_err();
        assert_eq!(err.to_string(), format!("user with id: {} not found", id));
    }

    #[tokio::test]
    async fn delete_unknown_user_is_not_found() {
        let handler = handler();
        let err = handler.delete(Some("7")).await.unwrap_err();
        assert_eq!(err.to_string(), "user with id: 7 not found");
    }
}
