//! User repository boundary and the in-memory reference store.
//!
//! The repository is the storage collaborator's contract: one read
//! (`find_by_username_or_email`) and one write (`insert`) per registration
//! attempt. The read and the write are not atomic with respect to each
//! other, so `insert` must surface a uniqueness conflict of its own; the
//! workflow treats that the same as a pre-check hit.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::entities::UserRecord;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a record by its assigned identifier
    async fn find_by_id(&self, id: i64) -> AppResult<Option<UserRecord>>;

    /// Find a record by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>>;

    /// Find a record matching either the username or the email address.
    /// This is the single duplicate-detection read used by registration.
    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AppResult<Option<UserRecord>>;

    /// Insert a new record and return the assigned identifier.
    /// Must report a username/email uniqueness violation as a conflict.
    async fn insert(&self, record: UserRecord) -> AppResult<i64>;
}

/// In-memory implementation of [`UserRepository`].
///
/// Stands in for the relational store in tests and demos. Uniqueness of
/// username and email is enforced at insert time under the row lock, which
/// is what closes the check-then-insert race the workflow leaves open.
#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<UserRecord>>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_rows(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<UserRecord>>> {
        self.rows
            .lock()
            .map_err(|_| AppError::storage("User store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<UserRecord>> {
        let rows = self.lock_rows()?;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<UserRecord>> {
        let rows = self.lock_rows()?;
        Ok(rows.iter().find(|r| r.username == username).cloned())
    }

    async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> AppResult<Option<UserRecord>> {
        let rows = self.lock_rows()?;
        Ok(rows
            .iter()
            .find(|r| r.username == username || r.email == email)
            .cloned())
    }

    async fn insert(&self, record: UserRecord) -> AppResult<i64> {
        let mut rows = self.lock_rows()?;

        if rows
            .iter()
            .any(|r| r.username == record.username || r.email == record.email)
        {
            return Err(AppError::conflict("User"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        rows.push(UserRecord { id, ..record });
        Ok(id)
    }
}
