//! Provision command.
//!
//! Resolves the backend's accounts, ensures the secret and grants access.

use crate::cli::context::Context;
use crate::cli::output::{self, Terminal};
use crate::cli::{ensure, Exit};
use crate::core::provision::{Provisioner, Request};
use crate::error::Result;

/// Provision `name` for the configured backend.
pub fn execute(
    ctx: &Context,
    name: &str,
    location: Option<String>,
    service_account: Option<String>,
) -> Result<Exit> {
    let project_id = ctx.project_id()?;
    let backend = ctx.backend(service_account);
    let project_number = ctx.project_number_for(&backend)?;
    let location = ctx.location(location);
    let store = ctx.store()?;
    let prompt = ctx.prompt();

    let provisioned = Provisioner::new(&store, &store, prompt.as_ref(), &Terminal).provision(
        &Request {
            project_id: &project_id,
            project_number: &project_number,
            secret: name,
            location: location.as_deref(),
            backend: &backend,
        },
    )?;

    let exit = ensure::report(name, provisioned.outcome);
    if !provisioned.granted {
        output::warn("IAM bindings not changed");
    }
    Ok(exit)
}
