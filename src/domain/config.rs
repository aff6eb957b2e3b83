//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix connection and the system settings (admin, storage, sessions).

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    /// Reads and parses the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context(crate::strings::logs::CONFIG_PARSE_ERROR)
    }

    /// Rejects configurations the bot cannot start with.
    /// A missing credential is fatal, a missing admin only degrades admin features.
    pub fn validate(&self) -> Result<()> {
        if self.services.matrix.credential().is_none() {
            bail!(crate::strings::logs::MISSING_CREDENTIAL);
        }
        if self.system.admin_id().is_none() {
            tracing::warn!("{}", crate::strings::logs::MISSING_ADMIN);
        }
        Ok(())
    }
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub password_env: Option<String>, // e.g. "BOT_PASSWORD"
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl MatrixConfig {
    /// The bot credential: the inline password, else the named environment variable.
    pub fn credential(&self) -> Option<String> {
        non_empty(self.password.clone())
            .or_else(|| non_empty(self.password_env.as_ref().and_then(|k| std::env::var(k).ok())))
    }
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default)]
    pub admin: Option<String>,
    #[serde(default)]
    pub admin_env: Option<String>, // e.g. "ADMIN_ID"
    #[serde(default = "default_requests_file")]
    pub requests_file: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Idle wizard sessions older than this are discarded. `0` keeps them forever.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_minutes: u64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            admin: None,
            admin_env: None,
            requests_file: default_requests_file(),
            log_dir: default_log_dir(),
            session_ttl_minutes: default_session_ttl(),
        }
    }
}

impl SystemConfig {
    /// The single identity allowed to change request status.
    pub fn admin_id(&self) -> Option<String> {
        non_empty(self.admin.clone())
            .or_else(|| non_empty(self.admin_env.as_ref().and_then(|k| std::env::var(k).ok())))
    }

    pub fn session_ttl(&self) -> Option<chrono::Duration> {
        match self.session_ttl_minutes {
            0 => None,
            m => Some(chrono::Duration::minutes(m as i64)),
        }
    }
}

fn default_requests_file() -> String {
    "data/requests.json".to_string()
}

fn default_log_dir() -> String {
    "data".to_string()
}

fn default_session_ttl() -> u64 {
    60
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
services:
  matrix:
    homeserver: https://matrix.example.org
    username: potolkoff-bot
    password: hunter22
    display_name: Potolkoff
system:
  admin: "@owner:example.org"
  requests_file: /tmp/requests.json
  session_ttl_minutes: 15
"#;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_yaml(FULL).unwrap();
        assert_eq!(config.services.matrix.credential().as_deref(), Some("hunter22"));
        assert_eq!(config.system.admin_id().as_deref(), Some("@owner:example.org"));
        assert_eq!(config.system.requests_file, "/tmp/requests.json");
        assert_eq!(config.system.session_ttl(), Some(chrono::Duration::minutes(15)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_without_system_section() {
        let config = AppConfig::from_yaml(
            "services:\n  matrix:\n    homeserver: h\n    username: u\n    password: p\n",
        )
        .unwrap();
        assert_eq!(config.system.requests_file, "data/requests.json");
        assert_eq!(config.system.log_dir, "data");
        assert!(config.system.admin_id().is_none());
        // Missing admin only warns.
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_credential_is_fatal() {
        let config = AppConfig::from_yaml(
            "services:\n  matrix:\n    homeserver: h\n    username: u\n    password_env: POTOLKOFF_TEST_SURELY_UNSET_VAR\n",
        )
        .unwrap();
        assert!(config.services.matrix.credential().is_none());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let config = AppConfig::from_yaml(
            "services:\n  matrix:\n    homeserver: h\n    username: u\n    password: '  '\nsystem:\n  admin: ''\n  session_ttl_minutes: 0\n",
        )
        .unwrap();
        assert!(config.services.matrix.credential().is_none());
        assert!(config.system.admin_id().is_none());
        assert!(config.system.session_ttl().is_none());
    }
}
