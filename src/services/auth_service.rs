//! Authentication service - credential verification and login orchestration.
//!
//! Session state is owned by the session collaborator; this service only
//! verifies credentials and signals session start/end.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{verify_credential, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::{SessionGate, UserRepository};

/// Hash verified when the username lookup misses, so a failed login costs
/// the same whether or not the account exists.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate by username and password, starting a session on success
    async fn login(&self, username: &str, password: &str) -> AppResult<User>;

    /// End the current session
    async fn logout(&self) -> AppResult<()>;

    /// Verify a plaintext candidate against a stored credential hash
    fn verify_credential(&self, hash: &str, candidate: &str) -> bool;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    repo: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionGate>,
}

impl Authenticator {
    /// Create new auth service instance with repository and session handles
    pub fn new(repo: Arc<dyn UserRepository>, sessions: Arc<dyn SessionGate>) -> Self {
        Self { repo, sessions }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let record = self.repo.find_by_username(username).await?;

        // Verify against a dummy hash on a miss so response timing does not
        // reveal whether the username exists.
        let (hash, user_exists) = match &record {
            Some(record) => (record.password_hash.as_str(), true),
            None => (DUMMY_HASH, false),
        };

        let password_valid = Password::from_hash(hash.to_string()).verify(password);

        if !user_exists || !password_valid {
            tracing::debug!(username, "login rejected");
            return Err(AppError::InvalidCredentials);
        }

        // Safe: user_exists guarantees the record is present
        let user = User::from(record.unwrap());
        self.sessions.start_session(user.id).await?;
        tracing::info!(id = user.id, username = %user.username, "session started");

        Ok(user)
    }

    async fn logout(&self) -> AppResult<()> {
        self.sessions.end_session().await
    }

    fn verify_credential(&self, hash: &str, candidate: &str) -> bool {
        verify_credential(hash, candidate)
    }
}
