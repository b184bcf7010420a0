//! Check command - grade a password against the strength policy.

use crate::cli::args::CheckArgs;
use crate::domain::classify;
use crate::errors::{AppError, AppResult};

/// Execute the check command
pub async fn execute(args: CheckArgs) -> AppResult<()> {
    let report = classify(&args.password);

    if args.json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::internal(format!("Failed to render report: {}", e)))?;
        println!("{}", rendered);
    } else {
        println!("tier: {}", report.tier);
        println!("valid: {}", report.valid);
    }

    Ok(())
}
