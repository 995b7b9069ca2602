//! # Configuration Management
//!
//! Handles the configuration directory and the `jira.toml` settings file,
//! including XDG base directory support.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Default REST API version
pub const DEFAULT_API_VERSION: u8 = 2;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Represents the configuration directories for the sprig application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "sprig").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Use an explicit directory instead of the platform default
  pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
    Self {
      config_dir: config_dir.into(),
    }
  }

  pub fn config_dir(&self) -> &Path {
    &self.config_dir
  }

  /// Get the path to the Jira configuration file
  pub fn jira_config_path(&self) -> PathBuf {
    self.config_dir.join("jira.toml")
  }

  /// Load the Jira configuration from file or return the defaults
  pub fn load_jira_config(&self) -> Result<JiraConfig> {
    let config_path = self.jira_config_path();

    if !config_path.exists() {
      return Ok(JiraConfig::default());
    }

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read Jira config from {}", config_path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse Jira config from {}", config_path.display()))
  }

  /// Save the Jira configuration to file
  pub fn save_jira_config(&self, config: &JiraConfig) -> Result<()> {
    let config_path = self.jira_config_path();

    fs::create_dir_all(&self.config_dir)
      .with_context(|| format!("Failed to create config directory {}", self.config_dir.display()))?;

    let content = toml::to_string_pretty(config).context("Failed to serialize Jira config to TOML")?;

    fs::write(&config_path, content)
      .with_context(|| format!("Failed to write Jira config to {}", config_path.display()))?;

    Ok(())
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}

/// Settings stored in `jira.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JiraConfig {
  /// Jira host, used when `JIRA_HOST` is not set
  #[serde(skip_serializing_if = "Option::is_none")]
  pub host: Option<String>,
  /// REST API version used in `/rest/api/{version}`
  pub api_version: u8,
  /// Request timeout in seconds; `0` disables the timeout
  pub timeout_secs: u64,
}

impl Default for JiraConfig {
  fn default() -> Self {
    Self {
      host: None,
      api_version: DEFAULT_API_VERSION,
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl JiraConfig {
  pub const fn timeout(&self) -> Option<std::time::Duration> {
    match self.timeout_secs {
      0 => None,
      secs => Some(std::time::Duration::from_secs(secs)),
    }
  }
}
