//! In-memory stores
//!
//! Mutex-guarded maps with the same NotFound and soft-delete semantics as
//! the Postgres implementation. Used by the test suites to exercise the
//! domain service and router without a database.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Account, NewAccount, NewUser, User};

use super::{AccountStore, StoreError, StoreResult, UserStore};

#[derive(Debug, Default)]
struct Inner {
    users: BTreeMap<i64, User>,
    accounts: BTreeMap<i64, Account>,
    next_user_id: i64,
    next_account_id: i64,
}

/// In-memory implementation of both capability sets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted, non-deleted accounts. Test helper.
    pub fn account_count(&self) -> usize {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .accounts
            .values()
            .filter(|a| a.deleted_at.is_none())
            .count()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> StoreResult<User> {
        let inner = self.inner.lock().expect("store lock poisoned");
        inner
            .users
            .get(&id)
            .filter(|u| u.deleted_at.is_none())
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let inner = self.inner.lock().expect("store lock poisoned");
        Ok(inner
            .users
            .values()
            .filter(|u| u.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.next_user_id += 1;
        let now = Utc::now();
        let created = User {
            id: inner.next_user_id,
            name: user.name,
            document: user.document,
            email: user.email,
            account_id: user.account_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, user: &User) -> StoreResult<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        match inner.users.get_mut(&user.id) {
            Some(stored) if stored.deleted_at.is_none() => {
                stored.name = user.name.clone();
                stored.document = user.document.clone();
                stored.email = user.email.clone();
                stored.account_id = user.account_id;
                stored.updated_at = Utc::now();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    async fn delete(&self, user: &User) -> StoreResult<()> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        if let Some(stored) = inner.users.get_mut(&user.id) {
            if stored.deleted_at.is_none() {
                let now = Utc::now();
                stored.deleted_at = Some(now);
                stored.updated_at = now;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create(&self, account: NewAccount) -> StoreResult<Account> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.next_account_id += 1;
        let now = Utc::now();
        let created = Account {
            id: inner.next_account_id,
            balance: account.balance,
            user: account.user,
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        inner.accounts.insert(created.id, created.clone());
        Ok(created)
    }
}
