//! Storage capability traits
//!
//! The domain service is written against these traits and receives an
//! implementation at construction, so tests run on [`memory::MemoryStore`]
//! while the binary wires up [`postgres::PgStore`]. Business rejection never
//! happens here: reads that match nothing signal [`StoreError::NotFound`]
//! and failed writes carry the storage cause.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Account, NewAccount, NewUser, User};

/// Storage-layer failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No matching, non-deleted row.
    #[error("record not found")]
    NotFound,

    /// The storage engine failed (constraint violation, connectivity).
    #[error("storage failure: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a non-deleted user by id.
    async fn find_by_id(&self, id: i64) -> StoreResult<User>;

    /// List all non-deleted users. An empty list is a successful result.
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Persist a new user. Storage assigns the id and timestamps.
    async fn create(&self, user: NewUser) -> StoreResult<User>;

    /// Overwrite the mutable fields of an existing user, by id.
    async fn update(&self, user: &User) -> StoreResult<()>;

    /// Soft-delete: mark the deletion timestamp, keep the row.
    async fn delete(&self, user: &User) -> StoreResult<()>;
}

/// Persistence operations for accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account referencing an existing user. The user row is
    /// not re-created; the returned account carries the user snapshot and
    /// an empty transaction list.
    async fn create(&self, account: NewAccount) -> StoreResult<Account>;
}
