//! Configuration management for the feedback service.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. Credentials are not part of this file;
//! see [`crate::secrets`].

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "FEEDBACK_CONFIG";

/// Main application configuration.
///
/// This is loaded from `~/.config/feedback/config.toml` (or platform equivalent),
/// or from the file named by `FEEDBACK_CONFIG`.
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template input and document output locations
    pub template: TemplateConfig,
    /// Unique ID service settings
    pub id_service: IdServiceConfig,
    /// Outbound mail relay settings
    pub smtp: SmtpSettings,
    /// HTTP server settings
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => PathBuf::from(path),
            None => Self::config_path()?,
        };
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, using defaults if it is absent.
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `FEEDBACK_TEMPLATE_PATH`: Override the template document path
    /// - `FEEDBACK_OUTPUT_DIR`: Override the output directory
    /// - `FEEDBACK_BIND`: Override the server bind address
    /// - `FEEDBACK_SMTP_HOST`: Override the mail relay host
    /// - `FEEDBACK_SMTP_PORT`: Override the mail relay port
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in production).
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("FEEDBACK_TEMPLATE_PATH") {
            tracing::debug!("Override template.template_path from env: {}", val);
            self.template.template_path = PathBuf::from(val);
        }

        if let Some(val) = lookup("FEEDBACK_OUTPUT_DIR") {
            tracing::debug!("Override template.output_dir from env: {}", val);
            self.template.output_dir = PathBuf::from(val);
        }

        if let Some(val) = lookup("FEEDBACK_BIND") {
            tracing::debug!("Override server.bind_address from env: {}", val);
            self.server.bind_address = val;
        }

        if let Some(val) = lookup("FEEDBACK_SMTP_HOST") {
            tracing::debug!("Override smtp.host from env: {}", val);
            self.smtp.host = val;
        }

        if let Some(val) = lookup("FEEDBACK_SMTP_PORT") {
            if let Ok(port) = val.parse() {
                self.smtp.port = port;
                tracing::debug!("Override smtp.port from env: {}", port);
            }
        }
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/feedback/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("com", "feedback", "feedback").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Template input and document output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Path of the `.docx` template containing `[pN]` placeholders
    pub template_path: PathBuf,
    /// Directory receiving filled documents
    pub output_dir: PathBuf,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("resource/ph_feedback_form.docx"),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Where submission identifiers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdMode {
    /// Ask the external HTTP ID service
    Remote,
    /// Generate a UUID in-process
    Local,
}

/// Unique ID service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IdServiceConfig {
    /// Identifier source
    pub mode: IdMode,
    /// Endpoint returning a JSON array whose first element is the identifier
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for IdServiceConfig {
    fn default() -> Self {
        Self {
            mode: IdMode::Remote,
            endpoint: "https://www.uuidtools.com/api/generate/v1".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Outbound mail relay settings.
///
/// The account identity and password come from [`crate::Secrets`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmtpSettings {
    /// Relay host name
    pub host: String,
    /// Relay port (STARTTLS submission port)
    pub port: u16,
    /// Subject line of the submission email
    pub subject: String,
    /// Plain text body of the submission email
    pub body: String,
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: "smtp.office365.com".to_string(),
            port: 587,
            subject: "Student Feedback Form Submission".to_string(),
            body: "Please find the attached filled feedback form.".to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the form is served on
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8501".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.template.template_path,
            PathBuf::from("resource/ph_feedback_form.docx")
        );
        assert_eq!(config.template.output_dir, PathBuf::from("."));
        assert_eq!(config.id_service.mode, IdMode::Remote);
        assert_eq!(config.smtp.host, "smtp.office365.com");
        assert_eq!(config.smtp.port, 587);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[template]"));
        assert!(toml_str.contains("[id_service]"));
        assert!(toml_str.contains("[smtp]"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.smtp.subject, config.smtp.subject);
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");

        let mut config = AppConfig::default();
        config.template.output_dir = PathBuf::from("/srv/feedback/out");
        config.id_service.mode = IdMode::Local;
        let contents = toml::to_string_pretty(&config).expect("serialize config");
        fs::write(&config_path, contents).expect("write config file");

        let loaded = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(loaded.template.output_dir, PathBuf::from("/srv/feedback/out"));
        assert_eq!(loaded.id_service.mode, IdMode::Local);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let tmp = TempDir::new().expect("create temp dir");
        let loaded = AppConfig::load_from(&tmp.path().join("absent.toml")).expect("load");
        assert_eq!(loaded.server.bind_address, "127.0.0.1:8501");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("FEEDBACK_OUTPUT_DIR", "/tmp/filled"),
            ("FEEDBACK_SMTP_PORT", "2525"),
            ("FEEDBACK_SMTP_HOST", "mail.example.edu"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(config.template.output_dir, PathBuf::from("/tmp/filled"));
        assert_eq!(config.smtp.port, 2525);
        assert_eq!(config.smtp.host, "mail.example.edu");
        // Untouched
        assert_eq!(config.server.bind_address, "127.0.0.1:8501");
    }

    #[test]
    fn test_bad_port_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| (key == "FEEDBACK_SMTP_PORT").then(|| "smtp".to_string()));
        assert_eq!(config.smtp.port, 587);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[template]
template_path = "forms/feedback.docx"

[id_service]
mode = "local"
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.template.template_path, PathBuf::from("forms/feedback.docx"));
        assert_eq!(config.id_service.mode, IdMode::Local);
        // These should be defaults
        assert_eq!(config.template.output_dir, PathBuf::from("."));
        assert_eq!(config.id_service.timeout_secs, 10);
        assert_eq!(config.smtp.port, 587);
    }
}
