//! Persisted user record, separate from the domain model.
//!
//! This is the row shape the storage collaborator's schema must support.
//! Reconstructing a `User` from a record is the trusted load path: no
//! validation runs, because the record passed validation when written.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AccountStatus, EmailAddress, Password, User, UserRole};
use crate::errors::{AppError, AppResult};

/// Persisted account record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub birth_date: NaiveDate,
    pub password_hash: String,
    pub avatar: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub verified: bool,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            email: EmailAddress::new(record.email),
            username: record.username,
            birth_date: Some(record.birth_date),
            password: Some(Password::from_hash(record.password_hash)),
            avatar: record.avatar,
            role: record.role,
            status: record.status,
            verified: record.verified,
        }
    }
}

impl TryFrom<&User> for UserRecord {
    type Error = AppError;

    /// Flatten a domain user into its storage shape.
    ///
    /// # Errors
    /// Fails if the user is missing a credential or birth date; callers run
    /// `validate_for_persistence` first, so this is a programmer-error guard.
    fn try_from(user: &User) -> AppResult<Self> {
        let password = user
            .password
            .as_ref()
            .ok_or_else(|| AppError::internal("Cannot persist a user without a credential"))?;
        let birth_date = user
            .birth_date
            .ok_or_else(|| AppError::internal("Cannot persist a user without a birth date"))?;

        Ok(UserRecord {
            id: user.id,
            email: user.email.as_str().to_string(),
            username: user.username.clone(),
            birth_date,
            password_hash: password.as_str().to_string(),
            avatar: user.avatar.clone(),
            role: user.role,
            status: user.status,
            verified: user.verified,
        })
    }
}
