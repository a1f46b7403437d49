//! Pre-persistence write hooks
//!
//! `SecretHashHook` runs before every create and every secret-touching
//! update, replacing the pending plaintext with hasher output. A validation
//! failure aborts the write before anything reaches storage.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::account::{PendingAccount, SecretField, WriteHook};
use crate::domain::DomainError;

use super::hasher::SecretHasher;

/// Write hook that hashes a pending plaintext secret.
#[derive(Debug)]
pub struct SecretHashHook<H: SecretHasher> {
    hasher: Arc<H>,
}

impl<H: SecretHasher + 'static> SecretHashHook<H> {
    pub fn new(hasher: Arc<H>) -> Self {
        Self { hasher }
    }

    async fn hash_pending(&self, record: &mut PendingAccount) -> Result<(), DomainError> {
        let plaintext = match &record.secret {
            SecretField::Plaintext(plaintext) => plaintext.clone(),
            // The caller only routes records through here when the secret
            // field changed with new plaintext; an already-hashed value is
            // left untouched rather than hashed twice.
            SecretField::Hashed(_) => return Ok(()),
        };

        // Argon2 is CPU-bound; run it off the async runtime.
        let hasher = Arc::clone(&self.hasher);
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::internal(format!("Hashing task failed: {}", e)))??;

        record.secret = SecretField::Hashed(hash);
        Ok(())
    }
}

#[async_trait]
impl<H: SecretHasher + 'static> WriteHook for SecretHashHook<H> {
    async fn before_create(&self, record: &mut PendingAccount) -> Result<(), DomainError> {
        self.hash_pending(record).await
    }

    async fn before_update(&self, record: &mut PendingAccount) -> Result<(), DomainError> {
        self.hash_pending(record).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::account::hasher::Argon2Hasher;

    fn create_hook() -> SecretHashHook<Argon2Hasher> {
        SecretHashHook::new(Arc::new(Argon2Hasher::new()))
    }

    #[tokio::test]
    async fn test_before_create_hashes_plaintext() {
        let hook = create_hook();
        let mut pending = PendingAccount::with_plaintext("admin", "pass");

        hook.before_create(&mut pending).await.unwrap();

        assert!(pending.secret.is_hashed());
        let hash = pending.secret.hashed().unwrap();
        assert_ne!(hash, "pass");
        assert!(Argon2Hasher::new().verify("pass", hash));
    }

    #[tokio::test]
    async fn test_before_update_hashes_plaintext() {
        let hook = create_hook();
        let mut pending = PendingAccount::with_plaintext("admin", "word");

        hook.before_update(&mut pending).await.unwrap();

        assert!(pending.secret.is_hashed());
        assert!(Argon2Hasher::new().verify("word", pending.secret.hashed().unwrap()));
    }

    #[tokio::test]
    async fn test_short_secret_aborts_write() {
        let hook = create_hook();
        let mut pending = PendingAccount::with_plaintext("admin", "ab");

        let result = hook.before_create(&mut pending).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        // Nothing was hashed; the record stays unwritable
        assert!(!pending.secret.is_hashed());
    }

    #[tokio::test]
    async fn test_already_hashed_secret_untouched() {
        let hook = create_hook();
        let hash = Argon2Hasher::new().hash("pass").unwrap();
        let mut pending = PendingAccount {
            username: "admin".to_string(),
            secret: SecretField::Hashed(hash.clone()),
        };

        hook.before_update(&mut pending).await.unwrap();

        assert_eq!(pending.secret.hashed().unwrap(), hash);
    }
}
