//! Account infrastructure module
//!
//! Implementations for account credential management: Argon2 secret hashing,
//! the pre-persistence hashing hook, an in-memory repository, and the account
//! service that wires the write pipeline together.

mod hasher;
mod hooks;
mod repository;
mod service;

pub use hasher::{Argon2Hasher, SecretHasher};
pub use hooks::SecretHashHook;
pub use repository::InMemoryAccountRepository;
pub use service::{AccountService, CreateAccountRequest, UpdateSecretRequest};
