//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
};
use crate::domain::HashCost;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Argon2 cost factors used when hashing new credentials
    pub hash_cost: HashCost,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All settings fall back to their defaults when unset or unparsable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            hash_cost: HashCost {
                memory_kib: env_parse("HASH_MEMORY_KIB", DEFAULT_HASH_MEMORY_KIB),
                iterations: env_parse("HASH_ITERATIONS", DEFAULT_HASH_ITERATIONS),
                parallelism: env_parse("HASH_PARALLELISM", DEFAULT_HASH_PARALLELISM),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hash_cost: HashCost::default(),
        }
    }
}

/// Read an environment variable, falling back to a default on absence or
/// parse failure
fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
