//! Hash command - hash a password for storage.

use crate::cli::args::HashArgs;
use crate::config::Config;
use crate::domain::Password;
use crate::errors::AppResult;

/// Execute the hash command
pub async fn execute(args: HashArgs, config: Config) -> AppResult<()> {
    let password = Password::new_with_cost(&args.password, config.hash_cost)?;
    println!("{}", password.as_str());
    Ok(())
}
