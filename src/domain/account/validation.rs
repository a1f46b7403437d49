//! Account validation utilities

use thiserror::Error;

/// Errors that can occur during account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username exceeds maximum length of {0} characters")]
    UsernameTooLong(usize),

    #[error("Secret is too short. Minimum length is {0} characters")]
    SecretTooShort(usize),

    #[error("Secret exceeds maximum length of {0} characters")]
    SecretTooLong(usize),
}

const MAX_USERNAME_LENGTH: usize = 50;
const MIN_SECRET_LENGTH: usize = 4;
const MAX_SECRET_LENGTH: usize = 128;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Maximum 50 characters
/// - Compared case-sensitively everywhere; no case folding happens here
pub fn validate_username(username: &str) -> Result<(), AccountValidationError> {
    if username.is_empty() {
        return Err(AccountValidationError::EmptyUsername);
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(AccountValidationError::UsernameTooLong(MAX_USERNAME_LENGTH));
    }

    Ok(())
}

/// Validate a plaintext secret before it is handed to the hasher
///
/// Rules:
/// - Minimum 4 characters
/// - Maximum 128 characters
pub fn validate_secret(secret: &str) -> Result<(), AccountValidationError> {
    if secret.len() < MIN_SECRET_LENGTH {
        return Err(AccountValidationError::SecretTooShort(MIN_SECRET_LENGTH));
    }

    if secret.len() > MAX_SECRET_LENGTH {
        return Err(AccountValidationError::SecretTooLong(MAX_SECRET_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("user_name").is_ok());
        assert!(validate_username("User123").is_ok());
    }

    #[test]
    fn test_empty_username() {
        assert_eq!(
            validate_username(""),
            Err(AccountValidationError::EmptyUsername)
        );
    }

    #[test]
    fn test_username_too_long() {
        let long_username = "a".repeat(51);
        assert_eq!(
            validate_username(&long_username),
            Err(AccountValidationError::UsernameTooLong(50))
        );
    }

    #[test]
    fn test_valid_secrets() {
        assert!(validate_secret("pass").is_ok());
        assert!(validate_secret("word").is_ok());
        assert!(validate_secret("P@ssw0rd!").is_ok());
    }

    #[test]
    fn test_secret_too_short() {
        assert_eq!(
            validate_secret("ab"),
            Err(AccountValidationError::SecretTooShort(4))
        );
        assert_eq!(
            validate_secret(""),
            Err(AccountValidationError::SecretTooShort(4))
        );
    }

    #[test]
    fn test_secret_at_minimum_length() {
        assert!(validate_secret("abcd").is_ok());
    }

    #[test]
    fn test_secret_too_long() {
        let long_secret = "a".repeat(129);
        assert_eq!(
            validate_secret(&long_secret),
            Err(AccountValidationError::SecretTooLong(128))
        );
    }
}
