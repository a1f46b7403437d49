//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId};
use super::pending::PendingAccount;
use crate::domain::DomainError;

/// Repository trait for account storage
///
/// Implementations assign the auto-increment id on create and must refuse a
/// pending record whose secret is still plaintext.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its id
    async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError>;

    /// Get an account by its username (for login); matching is case-sensitive
    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Insert a new account, assigning its id
    async fn create(&self, pending: PendingAccount) -> Result<Account, DomainError>;

    /// Update an existing account
    async fn update(&self, account: &Account) -> Result<Account, DomainError>;

    /// Delete an account
    async fn delete(&self, id: AccountId) -> Result<bool, DomainError>;

    /// List all accounts
    async fn list(&self) -> Result<Vec<Account>, DomainError>;

    /// Count accounts
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a username exists
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_username(username).await?.is_some())
    }
}
