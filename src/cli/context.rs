//! Settings shared by every command.
//!
//! Merges global flags over `apphosting.secrets.toml` and picks the
//! collaborators commands run against.

use std::io::{self, IsTerminal};

use tracing::debug;

use crate::cli::prompt::Interactive;
use crate::cli::Globals;
use crate::core::config::{self, Config};
use crate::core::domain::Backend;
use crate::core::prompt::{Confirm, NonInteractive};
use crate::core::store::Gcloud;
use crate::error::Result;

/// Resolved command context.
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub globals: Globals,
}

impl Context {
    /// Load the config file named by `--config`, or the default one if present.
    pub fn load(globals: Globals) -> Result<Self> {
        let config = Config::discover(globals.config.as_deref())?;
        Ok(Self { config, globals })
    }

    /// Project id from `--project` or the config file.
    pub fn project_id(&self) -> Result<String> {
        config::require(
            self.globals.project.clone(),
            self.config.project.id.as_ref(),
            "project id",
            "--project",
        )
    }

    /// Project number from `--project-number` or the config file.
    pub fn project_number(&self) -> Result<String> {
        config::require(
            self.globals.project_number.clone(),
            self.config.project.number.as_ref(),
            "project number",
            "--project-number",
        )
    }

    /// Project number, required only when the backend uses default accounts.
    pub fn project_number_for(&self, backend: &Backend) -> Result<String> {
        if backend.explicit_service_account().is_some() {
            return Ok(self.project_number().unwrap_or_default());
        }
        self.project_number()
    }

    /// Replication location from a flag or the config file.
    pub fn location(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.config.secrets.location.clone())
    }

    /// Backend with a service account from a flag or the config file.
    pub fn backend(&self, flag: Option<String>) -> Backend {
        match flag {
            Some(sa) => Backend::with_service_account(sa),
            None => self.config.backend(),
        }
    }

    /// Confirmation source.
    ///
    /// `--yes` (or `assume_yes`) answers yes, a missing terminal or
    /// `--non-interactive` takes the default answer, otherwise the user is asked.
    pub fn prompt(&self) -> Box<dyn Confirm> {
        if self.globals.yes || self.config.prompt.assume_yes {
            debug!("confirmations answered yes");
            return Box::new(NonInteractive::answer(true));
        }
        if self.globals.non_interactive || !io::stdin().is_terminal() {
            debug!("no terminal, confirmations take their default");
            return Box::new(NonInteractive::use_default());
        }
        Box::new(Interactive)
    }

    /// Secret Manager store.
    pub fn store(&self) -> Result<Gcloud> {
        Ok(Gcloud::locate()?)
    }
}
