//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Whether a search of `total` combinations needs explicit confirmation
pub fn needs_confirmation(total: u64, threshold: u64, no_confirm: bool) -> bool {
    !no_confirm && total > threshold
}

/// Prompt user to confirm a large combination search
pub fn confirm_large_search(total: u64) -> Result<bool> {
    let message = if total == u64::MAX {
        "The search space exceeds 18 quintillion combinations. Proceed anyway?".to_string()
    } else {
        format!("Evaluate {} combinations? This may take a long time", total)
    };
    confirm_step(&message)
}
