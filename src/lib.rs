//! Credential Guard
//!
//! Keeps plaintext secrets out of durable storage:
//! - Salted one-way Argon2 hashing with configurable cost parameters
//! - Pre-persistence write hooks that transform a pending plaintext secret
//!   before it reaches the repository
//! - Verification of login attempts against self-describing stored hashes

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    Account, AccountId, AccountRepository, DomainError, PendingAccount, SecretField, WriteHook,
};
pub use infrastructure::account::{
    AccountService, Argon2Hasher, CreateAccountRequest, InMemoryAccountRepository, SecretHashHook,
    SecretHasher, UpdateSecretRequest,
};
