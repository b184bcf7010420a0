//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. The registration
//! workflow reduces expected failures to a closed outcome set before they
//! reach callers; these variants are for everything underneath that boundary.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Malformed input shape: bad email, bad username, unknown role/status,
    // missing required field
    #[error("{0}")]
    Structural(String),

    // Password fails the strength policy
    #[error("{0}")]
    PasswordPolicy(String),

    // Uniqueness conflict reported before or during insert
    #[error("{0} already exists")]
    Conflict(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Collaborator-reported I/O failure, opaque and never retried here
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get machine-readable error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Structural(_) => "STRUCTURAL_ERROR",
            AppError::PasswordPolicy(_) => "PASSWORD_POLICY",
            AppError::Conflict(_) => "CONFLICT",
            AppError::NotFound => "NOT_FOUND",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// True for failures the registration workflow reports as `Invalid(reason)`
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Structural(_) | AppError::PasswordPolicy(_))
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn structural(msg: impl Into<String>) -> Self {
        AppError::Structural(msg.into())
    }

    pub fn policy(msg: impl Into<String>) -> Self {
        AppError::PasswordPolicy(msg.into())
    }

    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_rejection_classification() {
        assert_eq!(AppError::structural("bad field").code(), "STRUCTURAL_ERROR");
        assert_eq!(AppError::policy("too weak").code(), "PASSWORD_POLICY");
        assert_eq!(AppError::conflict("User").code(), "CONFLICT");
        assert_eq!(AppError::storage("down").code(), "STORAGE_ERROR");

        assert!(AppError::structural("bad field").is_rejection());
        assert!(AppError::policy("too weak").is_rejection());
        assert!(!AppError::conflict("User").is_rejection());
        assert!(!AppError::NotFound.is_rejection());
    }

    #[test]
    fn test_conflict_message() {
        assert_eq!(AppError::conflict("User").to_string(), "User already exists");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<i64> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(5).ok_or_not_found().unwrap(), 5);
    }
}
