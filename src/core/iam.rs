//! IAM binding reconciliation.
//!
//! Grants the accessor and viewer roles on a secret by appending two bindings
//! to the full existing policy and writing it back. Existing bindings are never
//! touched, merged or deduplicated; calling twice appends twice.
//!
//! The read-modify-write is not protected against concurrent writers in other
//! processes (last writer wins at the store). Calls on the same reconciler are
//! serialized per secret.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use crate::core::domain::{Binding, Identity, Role};
use crate::core::notify::Notifier;
use crate::core::store::PolicyStore;
use crate::core::validation::{validate_project_id, validate_secret_name};
use crate::error::{PolicyError, Result, ValidationError};

/// The two bindings granted for `identities`.
///
/// The viewer role lets builds list secret versions and pin the latest one.
pub fn access_bindings(identities: &[Identity]) -> Vec<Binding> {
    vec![
        Binding::grant(Role::SecretAccessor, identities),
        Binding::grant(Role::Viewer, identities),
    ]
}

/// Grants secret access to identities.
pub struct IamReconciler<'a> {
    store: &'a (dyn PolicyStore + Sync),
    notifier: &'a (dyn Notifier + Sync),
    flights: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<'a> IamReconciler<'a> {
    pub fn new(store: &'a (dyn PolicyStore + Sync), notifier: &'a (dyn Notifier + Sync)) -> Self {
        Self {
            store,
            notifier,
            flights: Mutex::new(HashMap::new()),
        }
    }

    /// Grant the accessor and viewer roles on `secret` to `identities`.
    ///
    /// Writes exactly `existing + 2` bindings.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for malformed input or an empty identity
    /// list, `PolicyError::Read` if the policy cannot be read and
    /// `PolicyError::Write` if it cannot be written.
    pub fn grant_access(&self, project: &str, secret: &str, identities: &[Identity]) -> Result<()> {
        validate_project_id(project)?;
        validate_secret_name(secret)?;
        if identities.is_empty() {
            return Err(ValidationError::NoIdentities {
                project: project.to_string(),
                secret: secret.to_string(),
            }
            .into());
        }

        let new_bindings = access_bindings(identities);

        let key = format!("projects/{}/secrets/{}", project, secret);
        let flight = self.flight(&key);
        let held = flight.lock().unwrap_or_else(PoisonError::into_inner);
        let written = self.read_modify_write(project, secret, &new_bindings);
        drop(held);
        self.land(&key, flight);
        written?;

        self.notifier
            .success(&format!("Successfully set IAM bindings on secret {}.", secret));
        Ok(())
    }

    fn read_modify_write(
        &self,
        project: &str,
        secret: &str,
        new_bindings: &[Binding],
    ) -> Result<()> {
        let mut policy =
            self.store
                .get_iam_policy(project, secret)
                .map_err(|source| PolicyError::Read {
                    project: project.to_string(),
                    secret: secret.to_string(),
                    source,
                })?;
        debug!(
            project,
            secret,
            existing = policy.bindings.len(),
            "read IAM policy"
        );

        policy.bindings.extend(new_bindings.iter().cloned());

        self.store
            .set_iam_policy(project, secret, &policy)
            .map_err(|source| PolicyError::Write {
                project: project.to_string(),
                secret: secret.to_string(),
                bindings: serde_json::to_string(&new_bindings)
                    .unwrap_or_else(|_| format!("{:?}", new_bindings)),
                source,
            })?;

        info!(project, secret, bindings = policy.bindings.len(), "wrote IAM policy");
        Ok(())
    }

    /// Per-secret lock shared by concurrent callers of this reconciler.
    fn flight(&self, key: &str) -> Arc<Mutex<()>> {
        let mut flights = self.flights.lock().unwrap_or_else(PoisonError::into_inner);
        flights.entry(key.to_string()).or_default().clone()
    }

    /// Release a flight, removing its entry once no other caller holds it.
    fn land(&self, key: &str, flight: Arc<Mutex<()>>) {
        let mut flights = self.flights.lock().unwrap_or_else(PoisonError::into_inner);
        // One reference in the map, one here.
        if Arc::strong_count(&flight) == 2 {
            flights.remove(key);
        }
    }

    /// Number of secrets with a grant in flight.
    pub fn in_flight(&self) -> usize {
        self.flights
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
