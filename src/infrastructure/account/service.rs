//! Account service: the explicit write pipeline
//!
//! Wires validation, the pre-persistence hooks, and the repository together
//! so that every create and secret update flows through the hashing hook
//! before anything is written.

use std::sync::Arc;

use crate::domain::account::{
    validate_username, Account, AccountId, AccountRepository, PendingAccount, WriteHook,
};
use crate::domain::DomainError;

use super::hasher::SecretHasher;
use super::hooks::SecretHashHook;

/// Request for creating a new account
#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub username: String,
    pub secret: String,
}

/// Request for updating an account's secret
#[derive(Debug, Clone)]
pub struct UpdateSecretRequest {
    pub current_secret: String,
    pub new_secret: String,
}

/// Account service for credential management and login checks
#[derive(Debug)]
pub struct AccountService<R: AccountRepository, H: SecretHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
    hooks: Vec<Arc<dyn WriteHook>>,
}

impl<R: AccountRepository, H: SecretHasher + 'static> AccountService<R, H> {
    /// Create a new account service with the secret-hashing hook installed
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        let hooks: Vec<Arc<dyn WriteHook>> =
            vec![Arc::new(SecretHashHook::new(Arc::clone(&hasher)))];

        Self {
            repository,
            hasher,
            hooks,
        }
    }

    /// Register an additional write hook, run after the built-in ones
    pub fn register_hook(&mut self, hook: Arc<dyn WriteHook>) {
        self.hooks.push(hook);
    }

    /// Create a new account from a caller-supplied plaintext secret
    pub async fn create(&self, request: CreateAccountRequest) -> Result<Account, DomainError> {
        validate_username(&request.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.username_exists(&request.username).await? {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        let mut pending = PendingAccount::with_plaintext(request.username, request.secret);

        for hook in &self.hooks {
            hook.before_create(&mut pending).await?;
        }

        self.repository.create(pending).await
    }

    /// Authenticate with username and plaintext secret
    ///
    /// Unknown username and mismatched secret are both a normal `None`,
    /// never an error.
    pub async fn authenticate(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<Option<Account>, DomainError> {
        let account = match self.repository.get_by_username(username).await? {
            Some(account) => account,
            None => return Ok(None),
        };

        if !self.verify_secret(secret, account.secret_hash()).await? {
            return Ok(None);
        }

        Ok(Some(account))
    }

    /// Verify a plaintext attempt against a stored hash, off the async runtime
    pub async fn verify_secret(
        &self,
        attempt: &str,
        stored_hash: &str,
    ) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        let attempt = attempt.to_string();
        let stored_hash = stored_hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&attempt, &stored_hash))
            .await
            .map_err(|e| DomainError::internal(format!("Verification task failed: {}", e)))
    }

    /// Get an account by id
    pub async fn get(&self, id: AccountId) -> Result<Option<Account>, DomainError> {
        self.repository.get(id).await
    }

    /// Get an account by username
    pub async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        self.repository.get_by_username(username).await
    }

    /// List all accounts
    pub async fn list(&self) -> Result<Vec<Account>, DomainError> {
        self.repository.list().await
    }

    /// Count accounts
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    /// Update an account's secret
    pub async fn update_secret(
        &self,
        id: AccountId,
        request: UpdateSecretRequest,
    ) -> Result<Account, DomainError> {
        let mut account = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))?;

        if !self
            .verify_secret(&request.current_secret, account.secret_hash())
            .await?
        {
            return Err(DomainError::validation("Current secret is incorrect"));
        }

        let mut pending =
            PendingAccount::with_plaintext(account.username(), request.new_secret);

        for hook in &self.hooks {
            hook.before_update(&mut pending).await?;
        }

        account.set_secret_hash(pending.secret.hashed()?);
        self.repository.update(&account).await
    }

    /// Delete an account
    pub async fn delete(&self, id: AccountId) -> Result<bool, DomainError> {
        self.repository.delete(id).await
    }
}
