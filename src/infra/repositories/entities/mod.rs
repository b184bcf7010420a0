//! Storage record definitions
//!
//! These are storage-shaped records separate from domain models.

pub mod user;

pub use user::UserRecord;
