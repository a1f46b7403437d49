//! Domain layer - Core business logic and entities

pub mod account;
pub mod error;

pub use account::{
    Account, AccountId, AccountRepository, PendingAccount, SecretField, WriteHook,
};
pub use error::DomainError;
