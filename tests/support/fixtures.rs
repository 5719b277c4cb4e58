//! Test fixtures and constants.

use apphosting_secrets::core::domain::{Binding, Policy, Replication, Secret};
use apphosting_secrets::core::types::Labels;

/// Project id used across tests.
pub const PROJECT: &str = "proj-123";

/// Project number used across tests.
pub const PROJECT_NUMBER: &str = "proj-123";

/// Secret name used across tests.
pub const SECRET: &str = "API_KEY";

/// Default build account for `PROJECT_NUMBER`.
pub const BUILD_SA: &str = "proj-123@cloudbuild.gserviceaccount.com";

/// Default compute account for `PROJECT_NUMBER`.
pub const COMPUTE_SA: &str = "proj-123-compute@developer.gserviceaccount.com";

/// Build a label set.
pub fn labels(pairs: &[(&str, &str)]) -> Labels {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// An existing secret with the given replication and labels.
pub fn existing_secret(location: Option<&str>, pairs: &[(&str, &str)]) -> Secret {
    Secret {
        name: format!("projects/{}/secrets/{}", PROJECT, SECRET),
        labels: labels(pairs),
        replication: Replication::for_location(location),
    }
}

/// A policy with one unrelated binding.
pub fn unrelated_policy() -> Policy {
    Policy {
        bindings: vec![Binding {
            role: "roles/secretmanager.admin".to_string(),
            members: vec!["group:platform@example.com".to_string()],
            condition: None,
        }],
        etag: Some("BwWWja0YfJA=".to_string()),
        version: Some(1),
    }
}
