//! Ensure command.
//!
//! Creates a secret or validates an existing one.

use crate::cli::context::Context;
use crate::cli::output::{self, Terminal};
use crate::cli::Exit;
use crate::core::domain::EnsureOutcome;
use crate::core::lifecycle::SecretLifecycle;
use crate::error::Result;

/// Ensure `name` exists and is usable.
pub fn execute(ctx: &Context, name: &str, location: Option<String>) -> Result<Exit> {
    let project = ctx.project_id()?;
    let location = ctx.location(location);
    let store = ctx.store()?;
    let prompt = ctx.prompt();

    let outcome = SecretLifecycle::new(&store, prompt.as_ref(), &Terminal).ensure(
        &project,
        name,
        location.as_deref(),
    )?;

    Ok(report(name, outcome))
}

/// Print an ensure outcome and map it to an exit status.
pub(crate) fn report(name: &str, outcome: EnsureOutcome) -> Exit {
    match outcome {
        EnsureOutcome::Created => {
            output::success(&format!("created {}", output::key(name)));
            Exit::Success
        }
        EnsureOutcome::AlreadyExists => {
            output::dimmed(&format!("{} already exists", name));
            Exit::Success
        }
        EnsureOutcome::Aborted => {
            output::warn(&format!("aborted, {} left unchanged", output::key(name)));
            Exit::Aborted
        }
    }
}
