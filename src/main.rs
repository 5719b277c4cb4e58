//! apphosting-secrets - Secret lifecycle and access control for App Hosting backends.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use apphosting_secrets::cli::output;
use apphosting_secrets::cli::{execute, Cli, LogFormat};
use apphosting_secrets::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("apphosting_secrets=debug")
        } else {
            EnvFilter::new("apphosting_secrets=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    match execute(cli.command, cli.globals) {
        Ok(exit) => std::process::exit(exit.code()),
        Err(e) => {
            output::error(&e.to_string());
            if let Some(hint) = e.hint() {
                output::hint(&hint);
            }
            std::process::exit(1);
        }
    }
}
