//! In-process secret and policy store.
//!
//! Keeps secrets and policies in memory and records every call, so the
//! lifecycle and IAM logic can be exercised without a remote service.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{PolicyStore, SecretStore};
use crate::core::constants::STATUS_NOT_FOUND;
use crate::core::domain::{Policy, Replication, Secret};
use crate::core::types::Labels;
use crate::error::{StoreError, StoreResult};

/// Store operations, used to target injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetSecret,
    CreateSecret,
    PatchSecret,
    GetPolicy,
    SetPolicy,
}

/// A recorded store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetSecret {
        project: String,
        name: String,
    },
    CreateSecret {
        project: String,
        name: String,
        labels: Labels,
        location: Option<String>,
    },
    PatchSecret {
        project: String,
        name: String,
        labels: Labels,
    },
    GetPolicy {
        project: String,
        name: String,
    },
    SetPolicy {
        project: String,
        name: String,
        policy: Policy,
    },
}

impl Call {
    /// Whether the call changes remote state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::CreateSecret { .. } | Self::PatchSecret { .. } | Self::SetPolicy { .. }
        )
    }
}

#[derive(Debug, Default)]
struct State {
    secrets: BTreeMap<(String, String), Secret>,
    policies: BTreeMap<(String, String), Policy>,
    failures: HashMap<Operation, u16>,
    calls: Vec<Call>,
}

/// In-memory store.
#[derive(Debug, Default)]
pub struct InMemory {
    state: Mutex<State>,
}

impl InMemory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing secret.
    pub fn with_secret(self, project: &str, name: &str, secret: Secret) -> Self {
        self.lock()
            .secrets
            .insert((project.to_string(), name.to_string()), secret);
        self
    }

    /// Seed an existing policy.
    pub fn with_policy(self, project: &str, name: &str, policy: Policy) -> Self {
        self.lock()
            .policies
            .insert((project.to_string(), name.to_string()), policy);
        self
    }

    /// Make every call of `operation` fail with `status`.
    pub fn fail(self, operation: Operation, status: u16) -> Self {
        self.lock().failures.insert(operation, status);
        self
    }

    /// Current copy of a stored secret.
    pub fn secret(&self, project: &str, name: &str) -> Option<Secret> {
        self.lock()
            .secrets
            .get(&(project.to_string(), name.to_string()))
            .cloned()
    }

    /// Current copy of a stored policy.
    pub fn policy(&self, project: &str, name: &str) -> Option<Policy> {
        self.lock()
            .policies
            .get(&(project.to_string(), name.to_string()))
            .cloned()
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Calls that changed remote state.
    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl State {
    fn record(&mut self, operation: Operation, call: Call) -> StoreResult<()> {
        self.calls.push(call);
        match self.failures.get(&operation) {
            Some(&status) => Err(StoreError::Status {
                status,
                message: format!("injected {:?} failure", operation),
            }),
            None => Ok(()),
        }
    }
}

fn key(project: &str, name: &str) -> (String, String) {
    (project.to_string(), name.to_string())
}

impl SecretStore for InMemory {
    fn get_secret(&self, project: &str, name: &str) -> StoreResult<Secret> {
        let mut state = self.lock();
        state.record(
            Operation::GetSecret,
            Call::GetSecret {
                project: project.to_string(),
                name: name.to_string(),
            },
        )?;

        state
            .secrets
            .get(&key(project, name))
            .cloned()
            .ok_or_else(|| StoreError::Status {
                status: STATUS_NOT_FOUND,
                message: format!("Secret [projects/{}/secrets/{}] not found", project, name),
            })
    }

    fn create_secret(
        &self,
        project: &str,
        name: &str,
        labels: &Labels,
        location: Option<&str>,
    ) -> StoreResult<()> {
        let mut state = self.lock();
        state.record(
            Operation::CreateSecret,
            Call::CreateSecret {
                project: project.to_string(),
                name: name.to_string(),
                labels: labels.clone(),
                location: location.map(str::to_string),
            },
        )?;

        if state.secrets.contains_key(&key(project, name)) {
            return Err(StoreError::Status {
                status: 409,
                message: format!("Secret [{}] already exists", name),
            });
        }

        state.secrets.insert(
            key(project, name),
            Secret {
                name: format!("projects/{}/secrets/{}", project, name),
                labels: labels.clone(),
                replication: Replication::for_location(location),
            },
        );
        Ok(())
    }

    fn patch_secret(&self, project: &str, name: &str, labels: &Labels) -> StoreResult<()> {
        let mut state = self.lock();
        state.record(
            Operation::PatchSecret,
            Call::PatchSecret {
                project: project.to_string(),
                name: name.to_string(),
                labels: labels.clone(),
            },
        )?;

        match state.secrets.get_mut(&key(project, name)) {
            Some(secret) => {
                secret.labels = labels.clone();
                Ok(())
            }
            None => Err(StoreError::Status {
                status: STATUS_NOT_FOUND,
                message: format!("Secret [{}] not found", name),
            }),
        }
    }
}

impl PolicyStore for InMemory {
    fn get_iam_policy(&self, project: &str, name: &str) -> StoreResult<Policy> {
        let mut state = self.lock();
        state.record(
            Operation::GetPolicy,
            Call::GetPolicy {
                project: project.to_string(),
                name: name.to_string(),
            },
        )?;

        Ok(state
            .policies
            .get(&key(project, name))
            .cloned()
            .unwrap_or_default())
    }

    fn set_iam_policy(&self, project: &str, name: &str, policy: &Policy) -> StoreResult<()> {
        let mut state = self.lock();
        state.record(
            Operation::SetPolicy,
            Call::SetPolicy {
                project: project.to_string(),
                name: name.to_string(),
                policy: policy.clone(),
            },
        )?;

        state.policies.insert(key(project, name), policy.clone());
        Ok(())
    }
}
