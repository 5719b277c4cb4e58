//! Service account resolution.
//!
//! Decides which identities need access to a backend's secrets. An explicit
//! service account on the backend wins outright; otherwise legacy backends run
//! as the default build and compute accounts of the project.

use tracing::debug;

use crate::core::constants::{CLOUD_BUILD_DOMAIN, COMPUTE_DOMAIN};
use crate::core::domain::{Backend, Identity};
use crate::core::validation::validate_project_number;
use crate::error::Result;

/// Default Cloud Build service account for a project.
pub fn default_build_account(project_number: &str) -> Identity {
    Identity::new(format!("{}@{}", project_number, CLOUD_BUILD_DOMAIN))
}

/// Default Compute Engine service account for a project.
pub fn default_compute_account(project_number: &str) -> Identity {
    Identity::new(format!("{}-compute@{}", project_number, COMPUTE_DOMAIN))
}

/// Find the identities a backend runs as.
///
/// Returns exactly the explicit service account when one is set, otherwise
/// the build account followed by the compute account.
///
/// # Errors
///
/// Returns `ValidationError` if the defaults are needed and `project_number`
/// is malformed.
pub fn resolve_service_accounts(project_number: &str, backend: &Backend) -> Result<Vec<Identity>> {
    if let Some(explicit) = backend.explicit_service_account() {
        debug!(service_account = %explicit, "using explicit service account");
        return Ok(vec![Identity::new(explicit)]);
    }

    validate_project_number(project_number)?;

    let accounts = vec![
        default_build_account(project_number),
        default_compute_account(project_number),
    ];
    debug!(project_number, accounts = accounts.len(), "using default service accounts");
    Ok(accounts)
}
