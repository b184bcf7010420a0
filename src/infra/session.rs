//! Session collaborator boundary.
//!
//! Session state itself (cookies, tokens, expiry) lives outside this core;
//! login/logout only signal the collaborator through this trait.

use async_trait::async_trait;

use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Session collaborator trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// Open a session for an authenticated account
    async fn start_session(&self, user_id: i64) -> AppResult<()>;

    /// Close the current session
    async fn end_session(&self) -> AppResult<()>;
}

/// No-op session gate for contexts with no session layer attached
/// (CLI tooling, tests that only exercise registration).
#[derive(Default)]
pub struct NullSessionGate;

#[async_trait]
impl SessionGate for NullSessionGate {
    async fn start_session(&self, _user_id: i64) -> AppResult<()> {
        Ok(())
    }

    async fn end_session(&self) -> AppResult<()> {
        Ok(())
    }
}
