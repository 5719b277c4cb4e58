//! Secret lifecycle.
//!
//! Creates a secret when absent, otherwise checks that it is compatible with
//! App Hosting:
//!
//! - replication is immutable, so a requested location must match the
//!   existing single-region replica;
//! - Cloud Functions garbage-collects versions server-side of secrets it
//!   manages, which is incompatible with App Hosting's client-side cleanup.
//!   Taking such a secret over requires explicit confirmation.
//!
//! Conflicts end in [`EnsureOutcome::Aborted`] with a labeled diagnostic
//! rather than an error.

use tracing::{debug, info};

use crate::core::constants::{LOG_LABEL, MANAGED_LABEL};
use crate::core::domain::{EnsureOutcome, Ownership, Secret};
use crate::core::notify::Notifier;
use crate::core::prompt::Confirm;
use crate::core::store::SecretStore;
use crate::core::validation::{validate_location, validate_project_id, validate_secret_name};
use crate::error::{Result, SecretError};

/// Ensures secrets exist and are safe to use.
pub struct SecretLifecycle<'a> {
    store: &'a dyn SecretStore,
    prompt: &'a dyn Confirm,
    notifier: &'a dyn Notifier,
}

impl<'a> SecretLifecycle<'a> {
    pub fn new(
        store: &'a dyn SecretStore,
        prompt: &'a dyn Confirm,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            store,
            prompt,
            notifier,
        }
    }

    /// Create `secret` if absent, or validate the existing one.
    ///
    /// `location` pins replication to a single region; `None` means automatic
    /// replication on creation and no region check on an existing secret.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for malformed input, `SecretError::Unexpected`
    /// if the lookup fails for any reason other than not-found, and
    /// `SecretError::{Create, Patch}` if a mutation fails.
    pub fn ensure(
        &self,
        project: &str,
        secret: &str,
        location: Option<&str>,
    ) -> Result<EnsureOutcome> {
        validate_project_id(project)?;
        validate_secret_name(secret)?;
        if let Some(location) = location {
            validate_location(location)?;
        }

        let existing = match self.store.get_secret(project, secret) {
            Ok(existing) => existing,
            Err(e) if e.is_not_found() => return self.create(project, secret, location),
            Err(source) => {
                return Err(SecretError::Unexpected {
                    project: project.to_string(),
                    secret: secret.to_string(),
                    source,
                }
                .into())
            }
        };

        let outcome = self.validate(project, secret, location, existing)?;
        info!(project, secret, outcome = %outcome, "secret checked");
        Ok(outcome)
    }

    fn create(&self, project: &str, secret: &str, location: Option<&str>) -> Result<EnsureOutcome> {
        debug!(project, secret, location = ?location, "secret not found, creating");

        self.store
            .create_secret(project, secret, &Ownership::self_labels(), location)
            .map_err(|source| SecretError::Create {
                project: project.to_string(),
                secret: secret.to_string(),
                source,
            })?;

        info!(project, secret, "secret created");
        Ok(EnsureOutcome::Created)
    }

    fn validate(
        &self,
        project: &str,
        secret: &str,
        location: Option<&str>,
        mut existing: Secret,
    ) -> Result<EnsureOutcome> {
        if let Some(location) = location {
            let current = existing.replication.single_region();
            if current != Some(location) {
                debug!(project, secret, requested = location, current = ?current, "replication mismatch");
                self.notifier.labeled_error(
                    LOG_LABEL,
                    &format!(
                        "Secret replication policies cannot be changed after creation \
                         (secret {} in project {} is not replicated only to {})",
                        secret, project, location
                    ),
                );
                return Ok(EnsureOutcome::Aborted);
            }
        }

        if let Ownership::ForeignManaged(marker) = existing.ownership() {
            debug!(project, secret, marker = %marker, "secret managed by Cloud Functions");
            self.notifier.labeled_warning(
                LOG_LABEL,
                &format!(
                    "Cloud Functions for Firebase currently manages versions of {} in project {}. \
                     Continuing will disable automatic deletion of old versions.",
                    secret, project
                ),
            );

            if !self.prompt.confirm("Do you wish to continue?", false)? {
                info!(project, secret, "ownership transfer declined");
                return Ok(EnsureOutcome::Aborted);
            }

            existing.labels.remove(MANAGED_LABEL);
            self.store
                .patch_secret(project, secret, &existing.labels)
                .map_err(|source| SecretError::Patch {
                    project: project.to_string(),
                    secret: secret.to_string(),
                    source,
                })?;
            info!(project, secret, "removed Cloud Functions ownership marker");
        }

        Ok(EnsureOutcome::AlreadyExists)
    }
}
