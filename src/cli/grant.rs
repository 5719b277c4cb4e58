//! Grant command.
//!
//! Grants the accessor and viewer roles on a secret.

use crate::cli::context::Context;
use crate::cli::output::Terminal;
use crate::core::accounts::resolve_service_accounts;
use crate::core::domain::Identity;
use crate::core::iam::IamReconciler;
use crate::error::Result;

/// Grant access on `name` to explicit accounts or the backend's accounts.
pub fn execute(ctx: &Context, name: &str, service_accounts: Vec<String>) -> Result<()> {
    let project = ctx.project_id()?;

    let accounts: Vec<Identity> = if service_accounts.is_empty() {
        let backend = ctx.backend(None);
        let number = ctx.project_number_for(&backend)?;
        resolve_service_accounts(&number, &backend)?
    } else {
        service_accounts.into_iter().map(Identity::from).collect()
    };

    let store = ctx.store()?;
    IamReconciler::new(&store, &Terminal).grant_access(&project, name, &accounts)
}
