//! Constants used throughout apphosting-secrets.
//!
//! Centralizes role names, label conventions and file names.

/// Role granting read access to secret payloads.
pub const ROLE_SECRET_ACCESSOR: &str = "roles/secretmanager.secretAccessor";

/// Role granting metadata access, so builds can list versions and pin one.
pub const ROLE_SECRET_VIEWER: &str = "roles/secretmanager.viewer";

/// Prefix turning a service account email into an IAM principal.
pub const PRINCIPAL_PREFIX: &str = "serviceAccount:";

/// Label key marking which subsystem manages a secret's versions.
pub const MANAGED_LABEL: &str = "firebase-managed";

/// Ownership marker value written by this platform.
pub const MANAGED_BY_APPHOSTING: &str = "apphosting";

/// Label for diagnostics emitted by this crate.
pub const LOG_LABEL: &str = "apphosting";

/// Domain of the default build service account.
pub const CLOUD_BUILD_DOMAIN: &str = "cloudbuild.gserviceaccount.com";

/// Domain of the default compute service account.
pub const COMPUTE_DOMAIN: &str = "developer.gserviceaccount.com";

/// Status code a store reports for a missing resource.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Configuration file name (apphosting.secrets.toml).
pub const CONFIG_FILE: &str = "apphosting.secrets.toml";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "APPHOSTING_SECRETS_LOG";

/// Name of the Google Cloud CLI binary.
pub const GCLOUD: &str = "gcloud";

/// Longest secret id Secret Manager accepts.
pub const MAX_SECRET_NAME_LEN: usize = 255;
