//! Registration workflow - builds, validates, and persists new accounts.
//!
//! Expected failures never escape as errors: the workflow reduces them to
//! the closed [`RegistrationOutcome`] set. Only storage failures propagate,
//! untouched and unretried.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{UserRecord, UserRepository};

/// Everything a caller may learn from a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// Account persisted; carries the storage-assigned identifier
    Created { id: i64 },
    /// The username or email address is already taken
    AlreadyExists,
    /// Input rejected before any write; carries the first failure's reason
    Invalid { reason: String },
}

/// Caller-supplied registration input.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    pub email: String,
    pub username: String,
    pub birth_date: NaiveDate,
    pub password: String,
}

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new account
    async fn register(&self, request: RegistrationRequest) -> AppResult<RegistrationOutcome>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    repo: Arc<dyn UserRepository>,
}

impl Registrar {
    /// Create new registration service instance with a repository handle
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, request: RegistrationRequest) -> AppResult<RegistrationOutcome> {
        // Create mode: structural and policy failures surface here, before
        // any storage interaction.
        let user = match User::create(NewUser {
            email: request.email,
            username: request.username,
            birth_date: request.birth_date,
            password: request.password,
        }) {
            Ok(user) => user,
            Err(e) if e.is_rejection() => {
                tracing::debug!(reason = %e, "registration input rejected");
                return Ok(RegistrationOutcome::Invalid {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        if let Err(e) = user.validate_for_persistence() {
            tracing::debug!(reason = %e, "registration failed persistence checks");
            return Ok(RegistrationOutcome::Invalid {
                reason: e.to_string(),
            });
        }

        // Single duplicate-detection read
        if self
            .repo
            .find_by_username_or_email(&user.username, user.email.as_str())
            .await?
            .is_some()
        {
            return Ok(RegistrationOutcome::AlreadyExists);
        }

        // The read above and this write are not atomic; a conflict reported
        // by storage at insert time is the same outcome as a pre-check hit.
        let record = UserRecord::try_from(&user)?;
        match self.repo.insert(record).await {
            Ok(id) => {
                tracing::info!(id, username = %user.username, "account registered");
                Ok(RegistrationOutcome::Created { id })
            }
            Err(AppError::Conflict(_)) => Ok(RegistrationOutcome::AlreadyExists),
            Err(e) => Err(e),
        }
    }
}
