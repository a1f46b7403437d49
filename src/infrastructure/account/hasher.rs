//! Secret hashing using Argon2
//!
//! Hashes are self-describing PHC strings (algorithm tag, cost parameters,
//! salt, digest in one field), so verification needs no external metadata.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use std::fmt::Debug;

use crate::config::HashingConfig;
use crate::domain::account::validate_secret;
use crate::domain::DomainError;

/// Trait for secret hashing operations
pub trait SecretHasher: Send + Sync + Debug {
    /// Hash a plaintext secret. Rejects secrets below the minimum length
    /// before any hashing happens. Each call salts freshly, so hashing the
    /// same plaintext twice yields different strings.
    fn hash(&self, plaintext: &str) -> Result<String, DomainError>;

    /// Verify a plaintext attempt against a stored hash. Mismatch is a
    /// normal `false`; a malformed stored hash is logged and treated as a
    /// non-match rather than propagated.
    fn verify(&self, plaintext: &str, stored_hash: &str) -> bool;

    /// Check that a stored hash is well-formed and uses a recognized
    /// algorithm, for callers that want the failure as an error instead of
    /// a silent non-match.
    fn check_stored_format(&self, stored_hash: &str) -> Result<(), DomainError>;
}

/// Argon2-based secret hasher
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with the default cost parameters
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a hasher with cost parameters from configuration
    pub fn with_config(config: &HashingConfig) -> Result<Self, DomainError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| DomainError::configuration(format!("Invalid hashing parameters: {}", e)))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, DomainError> {
        validate_secret(plaintext).map_err(|e| DomainError::validation(e.to_string()))?;

        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash secret: {}", e)))
    }

    fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(stored_hash) {
            Ok(h) => h,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Stored secret hash is malformed; treating as non-match"
                );
                return false;
            }
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }

    fn check_stored_format(&self, stored_hash: &str) -> Result<(), DomainError> {
        let parsed_hash = PasswordHash::new(stored_hash)
            .map_err(|e| DomainError::hash_format(format!("Not a valid PHC string: {}", e)))?;

        match parsed_hash.algorithm.as_str() {
            "argon2id" | "argon2i" | "argon2d" => Ok(()),
            other => Err(DomainError::hash_format(format!(
                "Unrecognized algorithm tag '{}'",
                other
            ))),
        }
    }
}
