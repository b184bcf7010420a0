//! Account Registry - credential policy and registration core
//!
//! This crate validates and secures user credentials for an
//! account-registration flow: it grades password strength, derives a salted
//! one-way credential hash, validates account fields, and orchestrates
//! duplicate detection and persistence through an injected storage
//! collaborator.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Value objects and the user aggregate
//! - **services**: Registration and authentication workflows
//! - **infra**: Collaborator boundaries (storage, sessions)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate an excellent-tier password
//! cargo run -- generate --tier excellent
//!
//! # Grade a password
//! cargo run -- check 'Str0ng!Pass'
//!
//! # Hash and verify
//! cargo run -- hash 'Str0ng!Pass'
//! cargo run -- verify '<hash>' 'Str0ng!Pass'
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{
    classify, generate, verify_credential, EmailAddress, Password, Strength, User, UserRole,
};
pub use errors::{AppError, AppResult};
