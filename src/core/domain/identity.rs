//! Identity type.
//!
//! A service account email that needs access to a secret.

use serde::{Deserialize, Serialize};

use crate::core::constants::PRINCIPAL_PREFIX;

/// A principal identifier (service account email).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wrap a service account email.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Service account email.
    pub fn email(&self) -> &str {
        &self.0
    }

    /// IAM principal reference, e.g. `serviceAccount:123@cloudbuild.gserviceaccount.com`.
    pub fn principal(&self) -> String {
        format!("{}{}", PRINCIPAL_PREFIX, self.0)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identity {
    fn from(email: &str) -> Self {
        Self::new(email)
    }
}

impl From<String> for Identity {
    fn from(email: String) -> Self {
        Self(email)
    }
}
