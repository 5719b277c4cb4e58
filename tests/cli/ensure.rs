//! Tests for the ensure command against a scripted gcloud.

#![cfg(unix)]

use crate::support::*;

fn existing(labels: &str, replication: &str) -> Describe {
    Describe::Existing(format!(
        r#"{{"name": "projects/proj-123/secrets/API_KEY", "labels": {}, "replication": {}}}"#,
        labels, replication
    ))
}

#[test]
fn test_creates_missing_secret() {
    let t = Test::new();
    t.install_gcloud(Describe::NotFound);

    let output = t.run(&["ensure", SECRET, "--project", PROJECT]);
    assert_success(&output);
    assert_stdout_contains(&output, "created API_KEY");

    assert_eq!(
        t.gcloud_calls(),
        vec![
            "secrets describe API_KEY --project=proj-123 --format=json",
            "secrets create API_KEY --project=proj-123 --labels=firebase-managed=apphosting --replication-policy=automatic --quiet",
        ]
    );
}

#[test]
fn test_creates_pinned_secret_from_config_location() {
    let t = Test::new();
    t.install_gcloud(Describe::NotFound);
    t.write_config(
        r#"
[project]
id = "proj-123"

[secrets]
location = "europe-west4"
"#,
    );

    let output = t.run(&["ensure", SECRET]);
    assert_success(&output);
    assert!(t.gcloud_calls()[1].contains("--replication-policy=user-managed --locations=europe-west4"));
}

#[test]
fn test_existing_secret_left_alone() {
    let t = Test::new();
    t.install_gcloud(existing(r#"{"firebase-managed": "apphosting"}"#, r#"{"automatic": {}}"#));

    let output = t.run(&["ensure", SECRET, "--project", PROJECT]);
    assert_success(&output);
    assert_stdout_contains(&output, "API_KEY already exists");
    assert_eq!(t.gcloud_calls().len(), 1);
}

#[test]
fn test_region_mismatch_exits_2() {
    let t = Test::new();
    t.install_gcloud(existing("{}", r#"{"automatic": {}}"#));

    let output = t.run(&[
        "ensure",
        SECRET,
        "--project",
        PROJECT,
        "--location",
        "us-central1",
    ]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(
        &output,
        "apphosting: Secret replication policies cannot be changed after creation",
    );
    assert_stderr_contains(&output, "aborted, API_KEY left unchanged");
    assert_eq!(t.gcloud_calls().len(), 1);
}

#[test]
fn test_matching_region_accepted() {
    let t = Test::new();
    t.install_gcloud(existing(
        "{}",
        r#"{"userManaged": {"replicas": [{"location": "us-central1"}]}}"#,
    ));

    let output = t.run(&[
        "ensure",
        SECRET,
        "--project",
        PROJECT,
        "--location",
        "us-central1",
    ]);
    assert_success(&output);
}

#[test]
fn test_functions_secret_declined_without_terminal() {
    let t = Test::new();
    t.install_gcloud(existing(r#"{"firebase-managed": "true"}"#, r#"{"automatic": {}}"#));

    let output = t.run(&["ensure", SECRET, "--project", PROJECT]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(
        &output,
        "apphosting: Cloud Functions for Firebase currently manages versions of API_KEY in project proj-123.",
    );
    assert_eq!(t.gcloud_calls().len(), 1);
}

#[test]
fn test_functions_secret_declined_non_interactive() {
    let t = Test::new();
    t.install_gcloud(existing(r#"{"firebase-managed": "true"}"#, r#"{"automatic": {}}"#));

    let output = t.run(&["--non-interactive", "ensure", SECRET, "--project", PROJECT]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_functions_secret_taken_over_with_yes() {
    let t = Test::new();
    t.install_gcloud(existing(
        r#"{"firebase-managed": "true", "env": "prod"}"#,
        r#"{"automatic": {}}"#,
    ));

    let output = t.run(&["--yes", "ensure", SECRET, "--project", PROJECT]);
    assert_success(&output);
    assert_eq!(
        t.gcloud_calls()[1],
        "secrets update API_KEY --project=proj-123 --clear-labels --update-labels=env=prod --quiet"
    );
}

#[test]
fn test_functions_secret_taken_over_with_assume_yes() {
    let t = Test::new();
    t.install_gcloud(existing(r#"{"firebase-managed": "true"}"#, r#"{"automatic": {}}"#));
    t.write_config("[prompt]\nassume_yes = true\n");

    let output = t.run(&["ensure", SECRET, "--project", PROJECT]);
    assert_success(&output);
    assert_eq!(
        t.gcloud_calls()[1],
        "secrets update API_KEY --project=proj-123 --clear-labels --quiet"
    );
}

#[test]
fn test_lookup_denied_is_an_error() {
    let t = Test::new();
    t.install_gcloud(Describe::Denied);

    let output = t.run(&["ensure", SECRET, "--project", PROJECT]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(
        &output,
        "unexpected error loading secret API_KEY in project proj-123",
    );
    assert_stderr_contains(&output, "Ensure you have the permissions to do so and try again.");
    assert_stderr_contains(&output, "gcloud auth login");
    assert_eq!(t.gcloud_calls().len(), 1);
}

#[test]
fn test_denied_lookup_of_status_like_name_does_not_create() {
    let t = Test::new();
    t.install_gcloud(Describe::Denied);

    let output = t.run(&["ensure", "NOT_FOUND_TOKEN", "--project", PROJECT]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(
        &output,
        "unexpected error loading secret NOT_FOUND_TOKEN in project proj-123",
    );
    assert_eq!(
        t.gcloud_calls(),
        vec!["secrets describe NOT_FOUND_TOKEN --project=proj-123 --format=json"]
    );
}
