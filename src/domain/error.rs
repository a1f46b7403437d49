use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Hash format error: {message}")]
    HashFormat { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn hash_format(message: impl Into<String>) -> Self {
        Self::HashFormat {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Account 'missing' not found");
        assert_eq!(error.to_string(), "Not found: Account 'missing' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Secret is too short");
        assert_eq!(error.to_string(), "Validation error: Secret is too short");
    }

    #[test]
    fn test_hash_format_error() {
        let error = DomainError::hash_format("not a PHC string");
        assert_eq!(error.to_string(), "Hash format error: not a PHC string");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Username already exists");
        assert_eq!(error.to_string(), "Conflict: Username already exists");
    }
}
