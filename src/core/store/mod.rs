//! Secret and policy store capabilities.
//!
//! Abstracts the remote Secret Manager so the lifecycle and IAM logic can run
//! against different backends (the gcloud CLI, an in-process store, etc.).
//!
//! ## Adding a New Store
//!
//! 1. Implement `SecretStore` and/or `PolicyStore`
//! 2. Add the implementation in a new file (e.g., `rest.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Rest { /* ... */ }
//!
//! impl SecretStore for Rest {
//!     fn get_secret(&self, project: &str, name: &str) -> StoreResult<Secret> {
//!         // GET /v1/projects/{project}/secrets/{name}
//!     }
//!     // ...
//! }
//! ```

use crate::core::domain::{Policy, Secret};
use crate::core::types::Labels;
use crate::error::StoreResult;

mod gcloud;
mod memory;

pub use gcloud::Gcloud;
pub use memory::{Call, InMemory, Operation};

/// Secret resource storage.
pub trait SecretStore {
    /// Fetch a secret's metadata.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` with status 404 if the secret does not exist,
    /// or another `StoreError` if the lookup fails.
    fn get_secret(&self, project: &str, name: &str) -> StoreResult<Secret>;

    /// Create a secret with `labels`, replicated to `location` or
    /// automatically when `None`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if creation fails.
    fn create_secret(
        &self,
        project: &str,
        name: &str,
        labels: &Labels,
        location: Option<&str>,
    ) -> StoreResult<()>;

    /// Replace a secret's labels with `labels`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the update fails.
    fn patch_secret(&self, project: &str, name: &str, labels: &Labels) -> StoreResult<()>;
}

/// IAM policy storage for secrets.
pub trait PolicyStore {
    /// Read the full policy of a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the policy cannot be read.
    fn get_iam_policy(&self, project: &str, name: &str) -> StoreResult<Policy>;

    /// Overwrite the full policy of a secret.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the policy cannot be written.
    fn set_iam_policy(&self, project: &str, name: &str, policy: &Policy) -> StoreResult<()>;
}
