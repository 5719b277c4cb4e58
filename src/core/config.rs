//! Configuration file management.
//!
//! Reads and validates the optional `apphosting.secrets.toml` file that
//! supplies defaults for command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::Backend;
use crate::core::types::{Location, ProjectId, ProjectNumber};
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Settings stored in `apphosting.secrets.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub secrets: SecretsConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Project the secrets live in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub id: Option<ProjectId>,
    pub number: Option<ProjectNumber>,
}

/// Backend identity settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    pub service_account: Option<String>,
}

/// Secret creation defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsConfig {
    pub location: Option<Location>,
}

/// Confirmation behavior when no terminal is attached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// Answer "yes" to ownership-transfer confirmations.
    #[serde(default)]
    pub assume_yes: bool,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::Invalid` if a value fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(
            project = ?config.project.id,
            location = ?config.secrets.location,
            "config loaded"
        );
        Ok(config)
    }

    /// Load `path` if given, else the default file if present, else defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` is missing, or a file that
    /// exists cannot be parsed or validated.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Self::default_path();
                if default.exists() {
                    Self::load(&default)
                } else {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse and validate TOML contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::Invalid`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the values that are present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` wrapping the failing `ValidationError`.
    pub fn validate(&self) -> Result<()> {
        let check = |r: Result<()>| -> Result<()> {
            r.map_err(|e| match e {
                crate::error::Error::Validation(v) => ConfigError::Invalid(v).into(),
                other => other,
            })
        };

        if let Some(id) = &self.project.id {
            check(validation::validate_project_id(id))?;
        }
        if let Some(number) = &self.project.number {
            check(validation::validate_project_number(number))?;
        }
        if let Some(location) = &self.secrets.location {
            check(validation::validate_location(location))?;
        }
        Ok(())
    }

    /// Backend described by this configuration.
    pub fn backend(&self) -> Backend {
        Backend {
            service_account: self.backend.service_account.clone(),
        }
    }
}

/// Pick a required value from a flag or the config file.
///
/// # Errors
///
/// Returns `ConfigError::Missing` when neither is set.
pub fn require(flag: Option<String>, file: Option<&String>, what: &str, flag_name: &str) -> Result<String> {
    flag.or_else(|| file.cloned()).ok_or_else(|| {
        ConfigError::Missing {
            what: what.to_string(),
            hint: format!("pass {} or set it in {}", flag_name, constants::CONFIG_FILE),
        }
        .into()
    })
}
