//! Mail account credentials.
//!
//! Secrets live in their own TOML file (never committed) or in environment
//! variables, and are never serialized back to disk.

use crate::error::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit secrets file.
pub const SECRETS_PATH_ENV: &str = "FEEDBACK_SECRETS";

/// Default location of the secrets file, relative to the working directory.
pub const DEFAULT_SECRETS_PATH: &str = ".feedback/secrets.toml";

/// Sender account identity and password for the mail relay.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Secrets {
    /// Account address; used as both sender and recipient
    pub sender_email: Option<String>,
    /// Account password
    pub sender_password: Option<String>,
}

impl Secrets {
    /// Load secrets from the configured file, then apply environment overrides.
    ///
    /// A missing file is not an error; dispatch reports the gap later.
    pub fn load() -> ConfigResult<Self> {
        let path = std::env::var_os(SECRETS_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_SECRETS_PATH), PathBuf::from);
        let mut secrets = Self::load_from(&path)?;
        secrets.apply_overrides(|key| std::env::var(key).ok());
        Ok(secrets)
    }

    /// Load secrets from a specific file, returning empty secrets if absent.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!("Secrets file {} not found", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply `FEEDBACK_SENDER_EMAIL` / `FEEDBACK_SENDER_PASSWORD` overrides.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(email) = lookup("FEEDBACK_SENDER_EMAIL") {
            self.sender_email = Some(email);
        }
        if let Some(password) = lookup("FEEDBACK_SENDER_PASSWORD") {
            self.sender_password = Some(password);
        }
    }

    /// The sender address, or an error naming the missing secret.
    pub fn sender_email(&self) -> ConfigResult<&str> {
        self.sender_email
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret("sender_email"))
    }

    /// The sender password, or an error naming the missing secret.
    pub fn sender_password(&self) -> ConfigResult<&str> {
        self.sender_password
            .as_deref()
            .ok_or(ConfigError::MissingSecret("sender_password"))
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("sender_email", &self.sender_email)
            .field(
                "sender_password",
                &self.sender_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
