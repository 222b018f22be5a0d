//! Domain entities
//!
//! Plain data types shared by the request validators, the domain service
//! and the stores. All three entities carry soft-delete and audit
//! timestamps; a set `deleted_at` means the row is treated as absent by
//! every read path.

pub mod document;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user. `account_id` is 0 until the user is attached to an
/// account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub document: String,
    pub email: String,
    pub account_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields for a user row before storage assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub document: String,
    pub email: String,
    pub account_id: i64,
}

/// An account holding a balance for one user. The `user` field is the
/// by-value snapshot taken at creation time; the user row itself is not
/// duplicated in storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub balance: f64,
    pub user: User,
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Fields for an account row before storage assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub balance: f64,
    pub user: User,
}

/// A transaction recorded against an account. `kind` is free text
/// ("deposit", "withdrawal", ...); the domain layer imposes no enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub account_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}
