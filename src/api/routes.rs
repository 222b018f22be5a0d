//! API Routes
//!
//! HTTP endpoint definitions. Each route constructs the matching domain
//! handler from the injected stores, passes the parsed payload through and
//! wraps the outcome in the response envelope.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::api::requests::{CreateAccountRequest, CreateUserRequest, UpdateUserRequest};
use crate::api::response::{success, DataResponse};
use crate::domain::{Account, User};
use crate::error::AppError;
use crate::handlers::{AccountHandler, UserHandler};
use crate::store::postgres::PgStore;
use crate::store::{AccountStore, UserStore};

/// Shared application state: the injected storage capabilities.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub accounts: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { users, accounts }
    }

    /// Production wiring: both capability sets backed by Postgres.
    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            users: store.clone(),
            accounts: store,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(
            "/user",
            post(create_user)
                .get(find_user_by_id)
                .put(update_user)
                .delete(delete_user),
        )
        .route("/users", get(list_users))
        .route("/account", post(create_account))
}

/// `id` query parameter, required by the single-user operations.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: Option<String>,
}

// =========================================================================
// POST /user
// =========================================================================

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<DataResponse<User>>, AppError> {
    let handler = UserHandler::new(state.users.clone());
    let user = handler.create(request).await?;
    Ok(Json(success("create-user", user)))
}

// =========================================================================
// GET /user?id=
// =========================================================================

async fn find_user_by_id(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<DataResponse<User>>, AppError> {
    let handler = UserHandler::new(state.users.clone());
    let user = handler.find_by_id(query.id.as_deref()).await?;
    Ok(Json(success("find-user-by-id", user)))
}

// =========================================================================
// GET /users
// =========================================================================

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<User>>>, AppError> {
    let handler = UserHandler::new(state.users.clone());
    let users = handler.list().await?;
    Ok(Json(success("list-users", users)))
}

// =========================================================================
// PUT /user?id=
// =========================================================================

async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<DataResponse<User>>, AppError> {
    let handler = UserHandler::new(state.users.clone());
    let user = handler.update(query.id.as_deref(), request).await?;
    Ok(Json(success("update-user", user)))
}

// =========================================================================
// DELETE /user?id=
// =========================================================================

async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<DataResponse<String>>, AppError> {
    let handler = UserHandler::new(state.users.clone());
    let confirmation = handler.delete(query.id.as_deref()).await?;
    Ok(Json(success("delete-user", confirmation)))
}

// =========================================================================
// POST /account
// =========================================================================

async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<DataResponse<Account>>, AppError> {
    let handler = AccountHandler::new(state.accounts.clone(), state.users.clone());
    let account = handler.create(request).await?;
    Ok(Json(success("create-account", account)))
}
