//! Secret Manager store backed by the gcloud CLI.
//!
//! ## Requirements
//!
//! - `gcloud` CLI must be installed and authenticated
//! - The caller needs `secretmanager.secrets.{get,create,update,getIamPolicy,setIamPolicy}`
//!
//! gcloud reports API failures on stderr as `ERROR: (gcloud.secrets.describe) NOT_FOUND: ...`.
//! The canonical status name is mapped back to its HTTP code so callers can
//! branch on [`StoreError::status`].

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::{PolicyStore, SecretStore};
use crate::core::constants::GCLOUD;
use crate::core::domain::{Policy, Secret};
use crate::core::types::Labels;
use crate::error::{StoreError, StoreResult};

/// Canonical gRPC status names gcloud prints, with their HTTP codes.
const STATUS_CODES: &[(&str, u16)] = &[
    ("NOT_FOUND", 404),
    ("PERMISSION_DENIED", 403),
    ("UNAUTHENTICATED", 401),
    ("ALREADY_EXISTS", 409),
    ("ABORTED", 409),
    ("FAILED_PRECONDITION", 400),
    ("INVALID_ARGUMENT", 400),
    ("RESOURCE_EXHAUSTED", 429),
    ("UNAVAILABLE", 503),
];

/// gcloud CLI store.
#[derive(Debug, Clone)]
pub struct Gcloud {
    program: PathBuf,
}

impl Gcloud {
    /// Locate `gcloud` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Spawn` if the binary cannot be found.
    pub fn locate() -> StoreResult<Self> {
        let program = which::which(GCLOUD).map_err(|e| StoreError::Spawn {
            program: GCLOUD.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
        })?;
        debug!(program = %program.display(), "using gcloud");
        Ok(Self { program })
    }

    /// Use a specific gcloud binary.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run gcloud and return stdout.
    fn run(&self, args: &[String]) -> StoreResult<Vec<u8>> {
        trace!(args = ?args, "running gcloud");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| StoreError::Spawn {
                program: GCLOUD.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(match classify(&stderr) {
                Some(status) => StoreError::Status {
                    status,
                    message: stderr,
                },
                None => StoreError::Command {
                    program: GCLOUD.to_string(),
                    stderr,
                },
            });
        }

        Ok(output.stdout)
    }
}

impl SecretStore for Gcloud {
    fn get_secret(&self, project: &str, name: &str) -> StoreResult<Secret> {
        let stdout = self.run(&describe_args(project, name))?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    fn create_secret(
        &self,
        project: &str,
        name: &str,
        labels: &Labels,
        location: Option<&str>,
    ) -> StoreResult<()> {
        self.run(&create_args(project, name, labels, location))?;
        Ok(())
    }

    fn patch_secret(&self, project: &str, name: &str, labels: &Labels) -> StoreResult<()> {
        self.run(&update_labels_args(project, name, labels))?;
        Ok(())
    }
}

impl PolicyStore for Gcloud {
    fn get_iam_policy(&self, project: &str, name: &str) -> StoreResult<Policy> {
        let stdout = self.run(&get_policy_args(project, name))?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    fn set_iam_policy(&self, project: &str, name: &str, policy: &Policy) -> StoreResult<()> {
        let mut file = tempfile::Builder::new()
            .prefix("iam-policy-")
            .suffix(".json")
            .tempfile()?;
        serde_json::to_writer(&mut file, policy)?;
        file.flush()?;

        self.run(&set_policy_args(project, name, file.path()))?;
        Ok(())
    }
}

/// Map gcloud stderr to an HTTP-like status code.
///
/// Only the status token right after the `(gcloud.<command>) ` prefix counts;
/// the rest of the line echoes resource names, which may contain status words.
pub(crate) fn classify(stderr: &str) -> Option<u16> {
    stderr.lines().find_map(|line| {
        let (_, rest) = line.split_once("(gcloud.")?.1.split_once(") ")?;
        let token = rest.split(':').next()?.trim();
        STATUS_CODES
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, code)| *code)
    })
}

/// Render labels as `k=v,k2=v2`.
fn format_labels(labels: &Labels) -> String {
    labels
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(",")
}

fn base_args(group: &[&str], name: &str, project: &str) -> Vec<String> {
    let mut args: Vec<String> = group.iter().map(|s| s.to_string()).collect();
    args.push(name.to_string());
    args.push(format!("--project={}", project));
    args
}

fn describe_args(project: &str, name: &str) -> Vec<String> {
    let mut args = base_args(&["secrets", "describe"], name, project);
    args.push("--format=json".to_string());
    args
}

fn create_args(project: &str, name: &str, labels: &Labels, location: Option<&str>) -> Vec<String> {
    let mut args = base_args(&["secrets", "create"], name, project);
    if !labels.is_empty() {
        args.push(format!("--labels={}", format_labels(labels)));
    }
    match location {
        Some(location) => {
            args.push("--replication-policy=user-managed".to_string());
            args.push(format!("--locations={}", location));
        }
        None => args.push("--replication-policy=automatic".to_string()),
    }
    args.push("--quiet".to_string());
    args
}

fn update_labels_args(project: &str, name: &str, labels: &Labels) -> Vec<String> {
    // --clear-labels is applied before --update-labels.
    let mut args = base_args(&["secrets", "update"], name, project);
    args.push("--clear-labels".to_string());
    if !labels.is_empty() {
        args.push(format!("--update-labels={}", format_labels(labels)));
    }
    args.push("--quiet".to_string());
    args
}

fn get_policy_args(project: &str, name: &str) -> Vec<String> {
    let mut args = base_args(&["secrets", "get-iam-policy"], name, project);
    args.push("--format=json".to_string());
    args
}

fn set_policy_args(project: &str, name: &str, file: &Path) -> Vec<String> {
    let mut args = base_args(&["secrets", "set-iam-policy"], name, project);
    args.insert(4, file.display().to_string());
    args.push("--format=json".to_string());
    args.push("--quiet".to_string());
    args
}
