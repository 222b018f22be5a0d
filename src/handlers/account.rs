//! Account operations
//!
//! Account creation requires a pre-existing user; the looked-up user is
//! embedded by value in the new account, which starts with an empty
//! transaction list.

use std::sync::Arc;

use crate::api::requests::CreateAccountRequest;
use crate::domain::{Account, NewAccount};
use crate::error::{AppError, AppResult};
use crate::store::{AccountStore, StoreError, UserStore};

/// Domain service for accounts.
#[derive(Clone)]
pub struct AccountHandler {
    accounts: Arc<dyn AccountStore>,
    users: Arc<dyn UserStore>,
}

impl AccountHandler {
    pub fn new(accounts: Arc<dyn AccountStore>, users: Arc<dyn UserStore>) -> Self {
        Self { accounts, users }
    }

    /// Create an account for an existing user. A missing user is a client
    /// error, not a server failure, even though it comes from a store
    /// lookup.
    pub async fn create(&self, request: CreateAccountRequest) -> AppResult<Account> {
        request.validate()?;

        let user = self
            .users
            .find_by_id(request.user_id)
            .await
            .map_err(|err| match err {
                StoreError::NotFound => AppError::InvalidRequest("user not found".to_string()),
                StoreError::Database(e) => AppError::Database(e),
            })?;

        let account = NewAccount {
            balance: request.balance,
            user,
        };

        let created = self.accounts.create(account).await?;
        tracing::info!(
            account_id = created.id,
            user_id = created.user.id,
            "account created"
        );
        Ok(created)
    }
}
