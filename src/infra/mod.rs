//! Infrastructure layer - External collaborator boundaries
//!
//! This module holds the contracts this core consumes from the outside:
//! - Storage collaborator (user repository)
//! - Session collaborator
//!
//! The in-memory store is the reference implementation used by tests and
//! the demo flow; a relational implementation lives with its owner.

pub mod repositories;
pub mod session;

pub use repositories::{MemoryUserStore, UserRecord, UserRepository};
pub use session::{NullSessionGate, SessionGate};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use session::MockSessionGate;
