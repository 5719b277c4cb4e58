//! IAM policy types.
//!
//! Mirrors the Secret Manager `Policy` resource closely enough to read a full
//! snapshot and write it back without dropping fields this crate ignores.

use serde::{Deserialize, Serialize};

use crate::core::constants::{ROLE_SECRET_ACCESSOR, ROLE_SECRET_VIEWER};
use crate::core::domain::Identity;

/// Roles this crate grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Read secret payloads.
    SecretAccessor,
    /// List and describe secret versions.
    Viewer,
}

impl Role {
    /// Fully-qualified IAM role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecretAccessor => ROLE_SECRET_ACCESSOR,
            Self::Viewer => ROLE_SECRET_VIEWER,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (role, members) pair.
///
/// Roles read back from a store can be anything, so the role is kept as a
/// string here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub role: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<serde_json::Value>,
}

impl Binding {
    /// Grant `role` to each identity's principal.
    pub fn grant(role: Role, identities: &[Identity]) -> Self {
        Self {
            role: role.as_str().to_string(),
            members: identities.iter().map(Identity::principal).collect(),
            condition: None,
        }
    }
}

/// Ordered bindings for one secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bindings: Vec<Binding>,
    /// Opaque version tag, written back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

impl Policy {
    /// Policy holding only `bindings`.
    pub fn from_bindings(bindings: Vec<Binding>) -> Self {
        Self {
            bindings,
            ..Self::default()
        }
    }
}
