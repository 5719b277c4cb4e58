//! Secret resource type.
//!
//! The metadata of a Secret Manager secret that matters for lifecycle
//! decisions: replication and labels.

use serde::{Deserialize, Serialize};

use crate::core::constants::{MANAGED_BY_APPHOSTING, MANAGED_LABEL};
use crate::core::types::Labels;

/// A secret resource as returned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Full resource name (projects/*/secrets/*).
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub replication: Replication,
}

impl Secret {
    /// Which subsystem manages this secret's versions.
    pub fn ownership(&self) -> Ownership {
        Ownership::from_labels(&self.labels)
    }
}

/// Replication policy. Exactly one of the fields is set by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Replication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automatic: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_managed: Option<UserManaged>,
}

impl Replication {
    /// Replication pinned to `location`, or automatic when `None`.
    pub fn for_location(location: Option<&str>) -> Self {
        match location {
            Some(location) => Self {
                automatic: None,
                user_managed: Some(UserManaged {
                    replicas: vec![Replica {
                        location: location.to_string(),
                    }],
                }),
            },
            None => Self {
                automatic: Some(serde_json::json!({})),
                user_managed: None,
            },
        }
    }

    /// The region, if exactly one user-managed replica is configured.
    pub fn single_region(&self) -> Option<&str> {
        match self.user_managed.as_ref()?.replicas.as_slice() {
            [only] => Some(only.location.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserManaged {
    #[serde(default)]
    pub replicas: Vec<Replica>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replica {
    pub location: String,
}

/// Who manages a secret's version garbage collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ownership {
    /// No ownership marker.
    Unmanaged,
    /// Marked as managed by this platform.
    SelfManaged,
    /// Marked as managed by another subsystem (value of the marker).
    ForeignManaged(String),
}

impl Ownership {
    /// Read the ownership marker from a label set.
    pub fn from_labels(labels: &Labels) -> Self {
        match labels.get(MANAGED_LABEL).map(String::as_str) {
            None => Self::Unmanaged,
            Some(MANAGED_BY_APPHOSTING) => Self::SelfManaged,
            Some(other) => Self::ForeignManaged(other.to_string()),
        }
    }

    /// Labels stamped on secrets this platform creates.
    pub fn self_labels() -> Labels {
        Labels::from([(
            MANAGED_LABEL.to_string(),
            MANAGED_BY_APPHOSTING.to_string(),
        )])
    }
}
