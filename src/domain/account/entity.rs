//! Account entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account identifier - an auto-increment integer assigned by the
/// persistence layer on create, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account entity for authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the repository
    id: AccountId,
    /// Username for login, unique and case-sensitive
    username: String,
    /// Salted one-way hash of the account secret - never exposed in serialization
    #[serde(skip_serializing)]
    secret_hash: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account. `secret_hash` must already be hasher output;
    /// plaintext never reaches this constructor.
    pub fn new(id: AccountId, username: impl Into<String>, secret_hash: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id,
            username: username.into(),
            secret_hash: secret_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    // Getters

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret_hash(&self) -> &str {
        &self.secret_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Replace the stored secret hash
    pub fn set_secret_hash(&mut self, secret_hash: impl Into<String>) {
        self.secret_hash = secret_hash.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account(id: i64, username: &str) -> Account {
        Account::new(AccountId::new(id), username, "hashed_secret")
    }

    #[test]
    fn test_account_id_display() {
        let id = AccountId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_account_creation() {
        let account = create_test_account(1, "admin");

        assert_eq!(account.id(), AccountId::new(1));
        assert_eq!(account.username(), "admin");
        assert_eq!(account.secret_hash(), "hashed_secret");
    }

    #[test]
    fn test_account_update_secret_hash() {
        let mut account = create_test_account(1, "admin");
        let original_updated = account.updated_at();

        // Small delay to ensure timestamp differs
        std::thread::sleep(std::time::Duration::from_millis(10));

        account.set_secret_hash("new_hash");
        assert_eq!(account.secret_hash(), "new_hash");
        assert!(account.updated_at() > original_updated);
    }

    #[test]
    fn test_account_serialization_excludes_secret() {
        let account = create_test_account(1, "admin");

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("hashed_secret"));
        assert!(!json.contains("secret_hash"));
    }
}
