//! Backend type.
//!
//! The slice of a deployed backend's configuration that decides who reads its
//! secrets.

use serde::{Deserialize, Serialize};

/// A deployed compute configuration needing secret access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backend {
    /// Explicit service account override. Empty is treated as unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
}

impl Backend {
    /// Backend running as the platform default service accounts.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Backend running as an explicit service account.
    pub fn with_service_account(email: impl Into<String>) -> Self {
        Self {
            service_account: Some(email.into()),
        }
    }

    /// The explicit service account, if set and non-empty.
    pub fn explicit_service_account(&self) -> Option<&str> {
        self.service_account.as_deref().filter(|sa| !sa.is_empty())
    }
}
