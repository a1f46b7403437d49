//! Account domain
//!
//! Domain types and traits for account credentials: the account entity,
//! validation rules, the pending-write/hook seam, and the repository trait.

mod entity;
mod pending;
mod repository;
mod validation;

pub use entity::{Account, AccountId};
pub use pending::{PendingAccount, SecretField, WriteHook};
pub use repository::AccountRepository;
pub use validation::{validate_secret, validate_username, AccountValidationError};
