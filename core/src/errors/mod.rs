//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors (general purpose)
///
/// Absence of a record is not an error at this layer; lookups express it
/// through `Option` in their return type. These variants cover failures
/// raised beneath the service, which it propagates without translation.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = DomainError::Validation {
            message: "message exceeds 4000 characters".to_string(),
        };
        assert!(error.to_string().contains("Validation error"));
        assert!(error.to_string().contains("4000"));

        let error = DomainError::Repository {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.to_string(), "Repository error: connection refused");
    }
}
