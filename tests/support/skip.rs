/// Skip a test if gcloud is not authenticated or no test project is set.
#[macro_export]
macro_rules! skip_without_gcp {
    () => {
        if std::process::Command::new("gcloud")
            .args(["auth", "print-access-token"])
            .output()
            .map(|o| !o.status.success())
            .unwrap_or(true)
        {
            eprintln!("SKIPPED: gcloud not authenticated");
            return;
        }
        if std::env::var("APPHOSTING_TEST_PROJECT").is_err() {
            eprintln!("SKIPPED: APPHOSTING_TEST_PROJECT not set (set to a scratch project id)");
            return;
        }
    };
}
