//! Pending writes and lifecycle interception
//!
//! A secret travels through exactly two states: plaintext held in memory
//! inside a pending write, and hashed-at-rest. Only the hashed form is ever
//! handed to a repository.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// The secret field of a pending write.
#[derive(Debug, Clone)]
pub enum SecretField {
    /// Plaintext supplied by the caller, not yet transformed. Transient and
    /// in-memory only.
    Plaintext(String),
    /// Output of the hasher, safe to persist.
    Hashed(String),
}

impl SecretField {
    /// The hashed value, or a storage error if the write pipeline let
    /// plaintext through.
    pub fn hashed(&self) -> Result<&str, DomainError> {
        match self {
            Self::Hashed(hash) => Ok(hash),
            Self::Plaintext(_) => Err(DomainError::storage(
                "Refusing to persist a plaintext secret; write hooks did not run",
            )),
        }
    }

    pub fn is_hashed(&self) -> bool {
        matches!(self, Self::Hashed(_))
    }
}

/// An account row on its way to storage.
#[derive(Debug, Clone)]
pub struct PendingAccount {
    pub username: String,
    pub secret: SecretField,
}

impl PendingAccount {
    /// Pending create/update carrying a caller-supplied plaintext secret.
    pub fn with_plaintext(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: SecretField::Plaintext(secret.into()),
        }
    }
}

/// A lifecycle interception point: runs immediately before a pending record
/// is written, with mutable access to it, and aborts the write by returning
/// an error.
#[async_trait]
pub trait WriteHook: Send + Sync + Debug {
    /// Runs before a new account row is inserted.
    async fn before_create(&self, record: &mut PendingAccount) -> Result<(), DomainError>;

    /// Runs before an account update that touches the secret field.
    async fn before_update(&self, record: &mut PendingAccount) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_secret_refuses_persistence() {
        let field = SecretField::Plaintext("pass".to_string());
        assert!(!field.is_hashed());
        assert!(field.hashed().is_err());
    }

    #[test]
    fn test_hashed_secret_is_persistable() {
        let field = SecretField::Hashed("$argon2id$...".to_string());
        assert!(field.is_hashed());
        assert_eq!(field.hashed().unwrap(), "$argon2id$...");
    }

    #[test]
    fn test_pending_account_starts_plaintext() {
        let pending = PendingAccount::with_plaintext("admin", "pass");
        assert_eq!(pending.username, "admin");
        assert!(!pending.secret.is_hashed());
    }
}
