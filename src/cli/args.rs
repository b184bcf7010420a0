//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::Strength;

/// Account Registry - credential policy tooling
#[derive(Parser, Debug)]
#[command(name = "account-registry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random policy-compliant passwords
    Generate(GenerateArgs),

    /// Grade a password against the strength policy
    Check(CheckArgs),

    /// Hash a password for storage
    Hash(HashArgs),

    /// Verify a password against a stored hash
    Verify(VerifyArgs),
}

/// Strength tier as a CLI value
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum TierArg {
    Basic,
    Acceptable,
    Excellent,
}

impl From<TierArg> for Strength {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::Basic => Strength::Basic,
            TierArg::Acceptable => Strength::Acceptable,
            TierArg::Excellent => Strength::Excellent,
        }
    }
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Target strength tier
    #[arg(short, long, value_enum, default_value = "acceptable")]
    pub tier: TierArg,

    /// How many passwords to generate
    #[arg(short, long, default_value = "1")]
    pub count: u32,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Password to grade
    pub password: String,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the hash command
#[derive(Parser, Debug)]
pub struct HashArgs {
    /// Password to hash (must pass the strength policy)
    pub password: String,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Stored credential hash
    pub hash: String,

    /// Plaintext candidate to verify
    pub password: String,
}
