//! Postgres-backed stores
//!
//! Raw SQL over a shared [`PgPool`]. Soft deletion is enforced here: every
//! read filters `deleted_at IS NULL` and delete only stamps the column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Account, NewAccount, NewUser, User};

use super::{AccountStore, StoreError, StoreResult, UserStore};

/// Postgres implementation of both capability sets.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<User> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, name, document, email, account_id, created_at, updated_at, deleted_at
            FROM users
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, name, document, email, account_id, created_at, updated_at, deleted_at
            FROM users
            WHERE deleted_at IS NULL
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let created: User = sqlx::query_as(
            r#"
            INSERT INTO users (name, document, email, account_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, name, document, email, account_id, created_at, updated_at, deleted_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.document)
        .bind(&user.email)
        .bind(user.account_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update(&self, user: &User) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $2, document = $3, email = $4, account_id = $5, updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.document)
        .bind(&user.email)
        .bind(user.account_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user: &User) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AccountStore for PgStore {
    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        let (id, created_at, updated_at): (i64, DateTime<Utc>, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO accounts (balance, user_id, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(account.balance)
        .bind(account.user.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Account {
            id,
            balance: account.balance,
            user: account.user,
            transactions: Vec::new(),
            created_at,
            updated_at,
            deleted_at: None,
        })
    }
}
