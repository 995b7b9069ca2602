//! Jira host resolution and URL normalization.

use anyhow::{Context, Result};
use url::{Position, Url};

use crate::config::JiraConfig;

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Resolve the Jira base URL with a proper scheme.
///
/// `$JIRA_HOST` takes precedence over the `host` stored in `jira.toml`.
/// Returns an error when neither is set.
pub fn resolve_jira_base_url(config: &JiraConfig) -> Result<String> {
  resolve_host(std::env::var(ENV_JIRA_HOST).ok(), config)
}

fn resolve_host(env_host: Option<String>, config: &JiraConfig) -> Result<String> {
  let host = env_host
    .filter(|host| !host.trim().is_empty())
    .or_else(|| config.host.clone())
    .with_context(|| {
      format!("Jira host not configured. Set '{ENV_JIRA_HOST}' or run 'sprig config set --host <HOST>'")
    })?;

  ensure_url_scheme(&host)
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. A malformed
/// scheme such as `http:/example.com` is replaced with https://.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let candidate = match trimmed.split_once("://") {
    Some((scheme, _)) if is_scheme(scheme) => trimmed.to_string(),
    _ => format!("https://{}", strip_partial_scheme(trimmed)),
  };

  let url = Url::parse(&candidate).with_context(|| format!("Failed to parse URL: '{input}'"))?;
  if !url.has_host() {
    return Err(anyhow::anyhow!("URL has no host: '{input}'"));
  }

  Ok(without_root_slash(&url))
}

fn is_scheme(candidate: &str) -> bool {
  candidate.starts_with(|c: char| c.is_ascii_alphabetic())
    && candidate
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Drop a scheme that is missing its `//`, e.g. `https:/example.com`
fn strip_partial_scheme(input: &str) -> &str {
  for scheme in ["https:", "http:"] {
    if input
      .get(..scheme.len())
      .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    {
      return input[scheme.len()..].trim_start_matches('/');
    }
  }
  input
}

/// Render the URL without the lone `/` path `url` adds to bare hosts
fn without_root_slash(url: &Url) -> String {
  let path = match url.path() {
    "/" => "",
    path => path,
  };
  format!(
    "{}{path}{}",
    &url[..Position::BeforePath],
    &url[Position::AfterPath..]
  )
}
