//! Command-line interface.

pub mod accounts;
pub mod completions;
pub mod context;
pub mod ensure;
pub mod grant;
pub mod output;
pub mod prompt;
pub mod provision;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::cli::context::Context;

/// apphosting-secrets - Secret lifecycle and access control for App Hosting backends.
#[derive(Parser, Debug)]
#[command(
    name = "apphosting-secrets",
    about = "Create App Hosting secrets and grant backends access to them",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub globals: Globals,

    #[command(subcommand)]
    pub command: Command,
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct Globals {
    /// Config file (default: ./apphosting.secrets.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project id
    #[arg(long, global = true, env = "APPHOSTING_PROJECT")]
    pub project: Option<String>,

    /// Project number (used for default service accounts)
    #[arg(long, global = true, env = "APPHOSTING_PROJECT_NUMBER")]
    pub project_number: Option<String>,

    /// Answer yes to confirmations
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Never prompt; confirmations take their default (no)
    #[arg(long, global = true)]
    pub non_interactive: bool,
}

/// Log output format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the service accounts that need access to a backend's secrets
    Accounts {
        /// Explicit backend service account
        #[arg(long)]
        service_account: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a secret, or check an existing one is usable
    Ensure {
        /// Secret name (e.g., API_KEY)
        name: String,
        /// Pin replication to a single region
        #[arg(long)]
        location: Option<String>,
    },

    /// Grant secret accessor and viewer roles
    Grant {
        /// Secret name
        name: String,
        /// Service account to grant (repeatable; default: the backend's accounts)
        #[arg(long = "service-account", value_name = "EMAIL")]
        service_accounts: Vec<String>,
    },

    /// Ensure a secret and grant the backend access to it
    Provision {
        /// Secret name
        name: String,
        /// Pin replication to a single region
        #[arg(long)]
        location: Option<String>,
        /// Explicit backend service account
        #[arg(long)]
        service_account: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    /// A conflict was reported or a confirmation declined.
    Aborted,
}

impl Exit {
    pub fn code(&self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Aborted => 2,
        }
    }
}

/// Execute a command.
pub fn execute(command: Command, globals: Globals) -> crate::error::Result<Exit> {
    use Command::*;

    if let Completions { shell } = command {
        completions::execute(shell, &mut std::io::stdout())?;
        return Ok(Exit::Success);
    }

    let ctx = Context::load(globals)?;
    match command {
        Accounts {
            service_account,
            json,
        } => accounts::execute(&ctx, service_account, json).map(|()| Exit::Success),
        Ensure { name, location } => ensure::execute(&ctx, &name, location),
        Grant {
            name,
            service_accounts,
        } => grant::execute(&ctx, &name, service_accounts).map(|()| Exit::Success),
        Provision {
            name,
            location,
            service_account,
        } => provision::execute(&ctx, &name, location, service_account),
        Completions { .. } => Ok(Exit::Success),
    }
}
