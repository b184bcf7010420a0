//! Generate command - random policy-compliant passwords.

use crate::cli::args::GenerateArgs;
use crate::domain::{classify, generate, Strength};
use crate::errors::AppResult;

/// Execute the generate command
pub async fn execute(args: GenerateArgs) -> AppResult<()> {
    let tier = Strength::from(args.tier);
    tracing::debug!(%tier, count = args.count, "generating passwords");

    for _ in 0..args.count {
        let password = generate(tier)?;
        let report = classify(&password);
        println!("{}  ({}, valid: {})", password, report.tier, report.valid);
    }

    Ok(())
}
