//! Accounts command.
//!
//! Prints the service accounts a backend's secrets are granted to.

use crate::cli::context::Context;
use crate::cli::output;
use crate::core::accounts::resolve_service_accounts;
use crate::error::Result;

/// Print resolved service accounts, one per line.
pub fn execute(ctx: &Context, service_account: Option<String>, json: bool) -> Result<()> {
    let backend = ctx.backend(service_account);
    let number = ctx.project_number_for(&backend)?;
    let accounts = resolve_service_accounts(&number, &backend)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    }

    if accounts.len() == 1 {
        output::dimmed("explicit service account");
    } else {
        output::dimmed("default service accounts");
    }
    for account in &accounts {
        output::list_item(account.email());
    }
    Ok(())
}
