//! # Credential Management
//!
//! Credentials for the Jira host are read from the user's `.netrc` file.

pub mod netrc;

use std::fmt;
use std::path::Path;

use anyhow::Result;

use crate::creds::netrc::{Netrc, get_netrc_path, normalize_host};

/// Machine name used when no entry matches the configured host
pub const ATLASSIAN_FALLBACK_MACHINE: &str = "atlassian.net";

/// Represents credentials for a service
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Look up credentials for `host` in `{home}/.netrc`.
///
/// The exact host is tried first, then `atlassian.net`, then the `default`
/// entry. A missing `.netrc` file yields `Ok(None)`.
pub fn find_credentials(home: &Path, host: &str) -> Result<Option<Credentials>> {
  let netrc_path = get_netrc_path(home);
  if !netrc_path.exists() {
    return Ok(None);
  }

  let netrc = Netrc::load(&netrc_path)?;
  let host = normalize_host(host);

  Ok(
    netrc
      .machine(&host)
      .or_else(|| netrc.machine(ATLASSIAN_FALLBACK_MACHINE))
      .or_else(|| netrc.default_entry())
      .cloned(),
  )
}
