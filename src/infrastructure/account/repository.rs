//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository, PendingAccount};
use crate::domain::DomainError;

/// In-memory implementation of AccountRepository
///
/// Assigns auto-increment ids starting at 1 and enforces case-sensitive
/// username uniqueness.
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<i64, Account>>>,
    /// Index for username -> account id lookup
    username_index: Arc<RwLock<HashMap<String, i64>>>,
    next_id: AtomicI64,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            username_index: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id.as_i64()).cloned())
    }

    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        // Copy the id out and release the index before touching the accounts
        // map; holding both here inverts the lock order the write paths use
        // (accounts before username_index) and can deadlock against them.
        let id = {
            let username_index = self.username_index.read().await;
            username_index.get(username).copied()
        };

        match id {
            Some(id) => {
                let accounts = self.accounts.read().await;
                Ok(accounts.get(&id).cloned())
            }
            None => Ok(None),
        }
    }

    async fn create(&self, pending: PendingAccount) -> Result<Account, DomainError> {
        // Refuses a record whose secret never went through the write hooks
        let secret_hash = pending.secret.hashed()?.to_string();

        let mut accounts = self.accounts.write().await;
        let mut username_index = self.username_index.write().await;

        if username_index.contains_key(&pending.username) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                pending.username
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let account = Account::new(AccountId::new(id), &pending.username, secret_hash);

        username_index.insert(pending.username, id);
        accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn update(&self, account: &Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let mut username_index = self.username_index.write().await;

        let id = account.id().as_i64();

        let existing = accounts
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))?;

        // Username uniqueness (exclude current account)
        let username_taken = username_index
            .get(account.username())
            .is_some_and(|owner| *owner != id);

        if username_taken {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                account.username()
            )));
        }

        if existing.username() != account.username() {
            username_index.remove(existing.username());
            username_index.insert(account.username().to_string(), id);
        }

        accounts.insert(id, account.clone());
        Ok(account.clone())
    }

    async fn delete(&self, id: AccountId) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        let mut username_index = self.username_index.write().await;

        match accounts.remove(&id.as_i64()) {
            Some(account) => {
                username_index.remove(account.username());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<Account>, DomainError> {
        let accounts = self.accounts.read().await;

        let mut result: Vec<Account> = accounts.values().cloned().collect();
        result.sort_by_key(|a| a.id());

        Ok(result)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.len())
    }
}
