//! Per-backend secret provisioning.
//!
//! Resolves the backend's identities, ensures the secret exists and is
//! compatible, then grants access. Access is never granted to a secret whose
//! lifecycle check aborted.

use tracing::info;

use crate::core::accounts::resolve_service_accounts;
use crate::core::domain::{Backend, EnsureOutcome, Identity};
use crate::core::iam::IamReconciler;
use crate::core::lifecycle::SecretLifecycle;
use crate::core::notify::Notifier;
use crate::core::prompt::Confirm;
use crate::core::store::{PolicyStore, SecretStore};
use crate::error::Result;

/// What to provision.
#[derive(Debug, Clone)]
pub struct Request<'r> {
    pub project_id: &'r str,
    pub project_number: &'r str,
    pub secret: &'r str,
    pub location: Option<&'r str>,
    pub backend: &'r Backend,
}

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provisioned {
    pub outcome: EnsureOutcome,
    pub accounts: Vec<Identity>,
    /// Whether IAM bindings were written.
    pub granted: bool,
}

/// Collaborators for provisioning.
pub struct Provisioner<'a> {
    secrets: &'a dyn SecretStore,
    policies: &'a (dyn PolicyStore + Sync),
    prompt: &'a dyn Confirm,
    notifier: &'a (dyn Notifier + Sync),
}

impl<'a> Provisioner<'a> {
    pub fn new(
        secrets: &'a dyn SecretStore,
        policies: &'a (dyn PolicyStore + Sync),
        prompt: &'a dyn Confirm,
        notifier: &'a (dyn Notifier + Sync),
    ) -> Self {
        Self {
            secrets,
            policies,
            prompt,
            notifier,
        }
    }

    /// Resolve, ensure, then grant.
    ///
    /// # Errors
    ///
    /// Propagates validation, secret and policy errors from each step.
    pub fn provision(&self, request: &Request<'_>) -> Result<Provisioned> {
        let accounts = resolve_service_accounts(request.project_number, request.backend)?;

        let outcome = SecretLifecycle::new(self.secrets, self.prompt, self.notifier).ensure(
            request.project_id,
            request.secret,
            request.location,
        )?;

        if !outcome.is_usable() {
            info!(
                project = request.project_id,
                secret = request.secret,
                "secret not usable, skipping IAM grant"
            );
            return Ok(Provisioned {
                outcome,
                accounts,
                granted: false,
            });
        }

        IamReconciler::new(self.policies, self.notifier).grant_access(
            request.project_id,
            request.secret,
            &accounts,
        )?;

        info!(
            project = request.project_id,
            secret = request.secret,
            outcome = %outcome,
            accounts = accounts.len(),
            "secret provisioned"
        );
        Ok(Provisioned {
            outcome,
            accounts,
            granted: true,
        })
    }
}
