//! Authentication helpers for the Jira client.
//!
//! These helpers centralize host resolution and credential lookup so the CLI
//! builds its client the same way everywhere.

use std::path::Path;

use anyhow::{Context, Result};
use sprig_core::config::JiraConfig;
use sprig_core::creds::netrc::normalize_host;
use sprig_core::creds::{ATLASSIAN_FALLBACK_MACHINE, Credentials, find_credentials};
pub use sprig_core::url::ENV_JIRA_HOST;
use sprig_core::url::resolve_jira_base_url;
use tracing::debug;

use crate::JiraClient;
use crate::transport::{ClientOptions, JiraAuth};

/// Resolve the Jira base URL from `$JIRA_HOST` or the configured host.
/// If the host doesn't include a scheme (http:// or https://), assumes https://.
pub fn get_jira_host(config: &JiraConfig) -> Result<String> {
  resolve_jira_base_url(config)
}

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(find_credentials(home, jira_host)?.is_some())
}

/// Retrieve Jira credentials for the host from `.netrc`.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  find_credentials(home, jira_host)?.with_context(|| {
    format!(
      "Jira credentials not found in .netrc file. Please add credentials for machine '{}' or '{ATLASSIAN_FALLBACK_MACHINE}'.",
      normalize_host(jira_host)
    )
  })
}

/// Transport options derived from `jira.toml`
pub const fn client_options(config: &JiraConfig) -> ClientOptions {
  ClientOptions {
    api_version: config.api_version,
    timeout: config.timeout(),
  }
}

/// Creates an authenticated Jira client using credentials from .netrc.
pub fn create_jira_client_from_netrc(home: &Path, jira_host: &str, config: &JiraConfig) -> Result<JiraClient> {
  let credentials = get_jira_credentials(home, jira_host).context("Failed to get credentials")?;
  debug!(host = jira_host, username = %credentials.username, "Creating Jira client");

  let auth = JiraAuth {
    username: credentials.username,
    api_token: credentials.password,
  };

  JiraClient::with_options(jira_host, auth, client_options(config)).context("Failed to create Jira client")
}
