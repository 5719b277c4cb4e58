//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// A Google Cloud project id (e.g., my-project).
pub type ProjectId = String;

/// A Google Cloud project number (e.g., 123456789).
///
/// Default service account emails are derived from it.
pub type ProjectNumber = String;

/// A replication region (e.g., us-central1).
pub type Location = String;

/// Resource labels, ordered by key.
pub type Labels = BTreeMap<String, String>;
