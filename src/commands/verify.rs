//! Verify command - check a password against a stored hash.

use crate::cli::args::VerifyArgs;
use crate::domain::verify_credential;
use crate::errors::{AppError, AppResult};

/// Execute the verify command
pub async fn execute(args: VerifyArgs) -> AppResult<()> {
    if verify_credential(&args.hash, &args.password) {
        println!("ok");
        Ok(())
    } else {
        println!("mismatch");
        Err(AppError::InvalidCredentials)
    }
}
