//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `generate` - Random policy-compliant passwords
//! - `check` - Strength grading
//! - `hash` - Credential hashing
//! - `verify` - Credential verification

pub mod args;

pub use args::{Cli, Commands};
