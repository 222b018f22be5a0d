//! Database module
//!
//! Schema migration and connectivity utilities for the three tables the
//! stores operate on. All tables carry audit timestamps and a nullable
//! `deleted_at` for soft deletion; document and email uniqueness is
//! enforced by partial indexes scoped to non-deleted rows.

use sqlx::PgPool;

/// Simple connectivity check
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Create the schema if it does not exist yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id          BIGSERIAL PRIMARY KEY,
            name        TEXT NOT NULL,
            document    TEXT NOT NULL,
            email       TEXT NOT NULL,
            account_id  BIGINT NOT NULL DEFAULT 0,
            created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at  TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS users_document_active
        ON users (document) WHERE deleted_at IS NULL
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS users_email_active
        ON users (email) WHERE deleted_at IS NULL
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id          BIGSERIAL PRIMARY KEY,
            balance     DOUBLE PRECISION NOT NULL,
            user_id     BIGINT NOT NULL REFERENCES users (id),
            created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at  TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS transactions (
            id          BIGSERIAL PRIMARY KEY,
            kind        TEXT NOT NULL,
            account_id  BIGINT NOT NULL REFERENCES accounts (id),
            created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at  TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            deleted_at  TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("database schema ready");
    Ok(())
}
