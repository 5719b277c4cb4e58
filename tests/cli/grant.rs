//! Tests for the grant command against a scripted gcloud.

#![cfg(unix)]

use crate::support::*;

#[test]
fn test_grant_explicit_accounts() {
    let t = Test::new();
    t.install_gcloud(Describe::NotFound);

    let output = t.run(&[
        "grant",
        SECRET,
        "--project",
        PROJECT,
        "--service-account",
        "a@proj-123.iam.gserviceaccount.com",
        "--service-account",
        "b@proj-123.iam.gserviceaccount.com",
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, "Successfully set IAM bindings on secret API_KEY.");

    let policy = t.written_policy().unwrap();
    assert_eq!(policy["etag"], "ACAB");
    let bindings = policy["bindings"].as_array().unwrap();
    assert_eq!(bindings.len(), 2);
    assert_eq!(
        bindings[1]["members"],
        serde_json::json!([
            "serviceAccount:a@proj-123.iam.gserviceaccount.com",
            "serviceAccount:b@proj-123.iam.gserviceaccount.com",
        ])
    );

    let calls = t.gcloud_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].starts_with("secrets get-iam-policy API_KEY --project=proj-123"));
    assert!(calls[1].starts_with("secrets set-iam-policy API_KEY --project=proj-123 "));
}

#[test]
fn test_grant_default_accounts() {
    let t = Test::new();
    t.install_gcloud(Describe::NotFound);

    let output = t.run(&[
        "grant",
        SECRET,
        "--project",
        PROJECT,
        "--project-number",
        PROJECT_NUMBER,
    ]);
    assert_success(&output);

    let policy = t.written_policy().unwrap();
    assert_eq!(
        policy["bindings"][0]["members"],
        serde_json::json!([
            format!("serviceAccount:{}", BUILD_SA),
            format!("serviceAccount:{}", COMPUTE_SA),
        ])
    );
}

#[test]
fn test_grant_without_accounts_needs_project_number() {
    let t = Test::new();
    t.install_gcloud(Describe::NotFound);

    let output = t.run(&["grant", SECRET, "--project", PROJECT]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "missing project number");
    assert!(t.gcloud_calls().is_empty());
}
