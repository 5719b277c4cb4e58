//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::PathBuf;
use std::process::Output;

/// How the fake `gcloud secrets describe` responds.
pub enum Describe {
    /// Exit 1 with a NOT_FOUND error.
    NotFound,
    /// Exit 1 with a PERMISSION_DENIED error.
    Denied,
    /// Print this secret JSON.
    Existing(String),
}

impl Test {
    /// Create an apphosting-secrets command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - PATH set to the temporary bin directory only
    /// - NO_COLOR set, and project env vars cleared
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("apphosting-secrets")
            .expect("failed to find apphosting-secrets binary");
        cmd.env("PATH", self.bin.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("APPHOSTING_PROJECT");
        cmd.env_remove("APPHOSTING_PROJECT_NUMBER");
        cmd.env_remove("APPHOSTING_SECRETS_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run the binary with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run apphosting-secrets")
    }

    /// File the fake gcloud appends its arguments to.
    pub fn gcloud_log_path(&self) -> PathBuf {
        self.dir.path().join("gcloud.log")
    }

    /// File the fake gcloud copies set-iam-policy input to.
    pub fn policy_path(&self) -> PathBuf {
        self.dir.path().join("written-policy.json")
    }

    /// Every gcloud invocation, one argument string per line.
    pub fn gcloud_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.gcloud_log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// The policy passed to set-iam-policy, if any.
    pub fn written_policy(&self) -> Option<serde_json::Value> {
        let contents = std::fs::read_to_string(self.policy_path()).ok()?;
        Some(serde_json::from_str(&contents).expect("written policy is not JSON"))
    }

    /// Install a scripted `gcloud` on PATH.
    ///
    /// `get-iam-policy` returns an empty policy; mutations succeed.
    #[cfg(unix)]
    pub fn install_gcloud(&self, describe: Describe) {
        use std::os::unix::fs::PermissionsExt;

        let describe_branch = match describe {
            Describe::NotFound => "echo \"ERROR: (gcloud.secrets.describe) NOT_FOUND: Secret [$3] not found or has no versions.\" >&2; exit 1".to_string(),
            Describe::Denied => "echo \"ERROR: (gcloud.secrets.describe) PERMISSION_DENIED: Permission 'secretmanager.secrets.get' denied for resource 'projects/proj-123/secrets/$3' (or it may not exist).\" >&2; exit 1".to_string(),
            Describe::Existing(json) => {
                let body = self.dir.path().join("describe.json");
                std::fs::write(&body, json).expect("failed to write describe body");
                format!("cat '{}'", body.display())
            }
        };

        let script = format!(
            r#"#!/bin/sh
PATH=/usr/bin:/bin
echo "$@" >> '{log}'
case "$1 $2" in
  "secrets describe") {describe} ;;
  "secrets create") exit 0 ;;
  "secrets update") exit 0 ;;
  "secrets get-iam-policy") echo '{{"etag": "ACAB"}}' ;;
  "secrets set-iam-policy") cp "$5" '{policy}' ;;
  *) echo "unexpected gcloud call: $@" >&2; exit 1 ;;
esac
"#,
            log = self.gcloud_log_path().display(),
            describe = describe_branch,
            policy = self.policy_path().display(),
        );

        let path = self.bin.path().join("gcloud");
        std::fs::write(&path, script).expect("failed to write fake gcloud");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("failed to chmod fake gcloud");
    }
}
