//! Tests for the provision command against a scripted gcloud.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_provision_new_secret() {
    let t = Test::new();
    t.install_gcloud(Describe::NotFound);

    let output = t.run(&[
        "provision",
        SECRET,
        "--project",
        PROJECT,
        "--project-number",
        PROJECT_NUMBER,
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, "created API_KEY");
    assert_stdout_contains(&output, "Successfully set IAM bindings on secret API_KEY.");

    let calls = t.gcloud_calls();
    assert_eq!(calls.len(), 4);
    assert!(calls[0].starts_with("secrets describe"));
    assert!(calls[1].starts_with("secrets create"));
    assert!(calls[2].starts_with("secrets get-iam-policy"));
    assert!(calls[3].starts_with("secrets set-iam-policy"));

    let policy = t.written_policy().unwrap();
    let bindings = policy["bindings"].as_array().unwrap();
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings[0]["role"], "roles/secretmanager.secretAccessor");
    assert_eq!(bindings[1]["role"], "roles/secretmanager.viewer");
}

#[test]
fn test_provision_from_config() {
    let t = Test::new();
    t.install_gcloud(Describe::NotFound);
    t.write_config(
        r#"
[project]
id = "proj-123"

[backend]
service_account = "web@proj-123.iam.gserviceaccount.com"
"#,
    );

    let output = t.run(&["provision", SECRET]);
    assert_success(&output);

    let policy = t.written_policy().unwrap();
    assert_eq!(
        policy["bindings"][0]["members"],
        serde_json::json!(["serviceAccount:web@proj-123.iam.gserviceaccount.com"])
    );
}

#[test]
fn test_provision_declined_skips_grant() {
    let t = Test::new();
    t.install_gcloud(Describe::Existing(
        r#"{"name": "projects/proj-123/secrets/API_KEY", "labels": {"firebase-managed": "true"}, "replication": {"automatic": {}}}"#
            .to_string(),
    ));

    let output = t.run(&[
        "--non-interactive",
        "provision",
        SECRET,
        "--project",
        PROJECT,
        "--project-number",
        PROJECT_NUMBER,
    ]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "IAM bindings not changed");
    assert_eq!(t.gcloud_calls().len(), 1);
    assert!(t.written_policy().is_none());
}
