//! Error types.
//!
//! Remote failures are wrapped with the secret and project they concern so an
//! operator can reconcile IAM state by hand. Expected business conflicts
//! (replication mismatch, declined ownership transfer) are not errors; see
//! [`crate::core::domain::EnsureOutcome`].

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Actionable follow-up for the operator, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Config(ConfigError::Missing { hint, .. }) => Some(hint.clone()),
            Self::Config(ConfigError::NotFound(path)) => {
                Some(format!("create {} or drop --config", path))
            }
            Self::Store(StoreError::Spawn { .. }) => Some(
                "install gcloud from https://cloud.google.com/sdk/docs/install".to_string(),
            ),
            Self::Policy(_) | Self::Secret(_) => Some("run: gcloud auth login".to_string()),
            _ => None,
        }
    }
}

/// Caller precondition violations. Never retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("project number cannot be empty")]
    EmptyProjectNumber,

    #[error("invalid project number '{value}': {reason}")]
    InvalidProjectNumber { value: String, reason: String },

    #[error("project id cannot be empty")]
    EmptyProjectId,

    #[error("invalid project id '{value}': {reason}")]
    InvalidProjectId { value: String, reason: String },

    #[error("secret name cannot be empty")]
    EmptySecretName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidSecretName { name: String, reason: String },

    #[error("invalid location '{value}': {reason}")]
    InvalidLocation { value: String, reason: String },

    #[error("no service accounts to grant access to secret {secret} in project {project}")]
    NoIdentities { project: String, secret: String },
}

/// Secret resource failures other than the expected not-found signal.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error(
        "unexpected error loading secret {secret} in project {project}: {source}. \
         Ensure you have the permissions to do so and try again."
    )]
    Unexpected {
        project: String,
        secret: String,
        #[source]
        source: StoreError,
    },

    #[error(
        "failed to create secret {secret} in project {project}: {source}. \
         Ensure you have the permissions to do so and try again."
    )]
    Create {
        project: String,
        secret: String,
        #[source]
        source: StoreError,
    },

    #[error(
        "failed to update labels on secret {secret} in project {project}: {source}. \
         Ensure you have the permissions to do so and try again."
    )]
    Patch {
        project: String,
        secret: String,
        #[source]
        source: StoreError,
    },
}

/// IAM policy read/write failures.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error(
        "failed to get IAM bindings on secret {secret} in project {project}: {source}. \
         Ensure you have the permissions to do so and try again."
    )]
    Read {
        project: String,
        secret: String,
        #[source]
        source: StoreError,
    },

    #[error(
        "failed to set IAM bindings {bindings} on secret {secret} in project {project}: {source}. \
         Ensure you have the permissions to do so and try again."
    )]
    Write {
        project: String,
        secret: String,
        /// The attempted new bindings, serialized as JSON.
        bindings: String,
        #[source]
        source: StoreError,
    },
}

/// Configuration file and setting errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing {what}")]
    Missing { what: String, hint: String },

    #[error("invalid config: {0}")]
    Invalid(#[from] ValidationError),
}

/// Failures reported by a secret or policy store collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed: {stderr}")]
    Command { program: String, stderr: String },

    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// HTTP-like status code, when the store reported one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check whether this is the "resource does not exist" signal.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(crate::core::constants::STATUS_NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Result type returned by store collaborators.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
