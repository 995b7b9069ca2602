//! Helpers for reading credentials stored in `.netrc` files.
//!
//! Both the single-line (`machine host login user password pass`) and the
//! multi-line layouts are understood, as is the catch-all `default` entry.
//! `macdef` blocks are skipped up to the next blank line.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// ```
/// use std::path::Path;
/// use sprig_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Parsed contents of a `.netrc` file
#[derive(Debug, Default, Clone)]
pub struct Netrc {
  machines: Vec<(String, Credentials)>,
  default: Option<Credentials>,
}

#[derive(Default)]
struct Entry {
  /// `None` for the `default` entry
  machine: Option<String>,
  login: Option<String>,
  password: Option<String>,
}

impl Netrc {
  /// Read and parse the file at `path`
  pub fn load(path: &Path) -> Result<Self> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Self::parse(&content))
  }

  pub fn parse(content: &str) -> Self {
    let mut netrc = Self::default();
    let mut current: Option<Entry> = None;
    let mut in_macdef = false;

    for line in content.lines() {
      if in_macdef {
        in_macdef = !line.trim().is_empty();
        continue;
      }

      let mut tokens = line.split_whitespace();
      while let Some(token) = tokens.next() {
        match token {
          "machine" => {
            netrc.finish(current.take());
            current = Some(Entry {
              machine: tokens.next().map(str::to_string),
              ..Entry::default()
            });
          }
          "default" => {
            netrc.finish(current.take());
            current = Some(Entry::default());
          }
          "login" => {
            if let (Some(entry), Some(value)) = (current.as_mut(), tokens.next()) {
              entry.login = Some(value.to_string());
            }
          }
          "password" => {
            if let (Some(entry), Some(value)) = (current.as_mut(), tokens.next()) {
              entry.password = Some(value.to_string());
            }
          }
          "account" | "port" => {
            tokens.next();
          }
          "macdef" => {
            in_macdef = true;
            break;
          }
          _ => {}
        }
      }
    }
    netrc.finish(current);

    netrc
  }

  /// Keep an entry only when it carries both a login and a password. The
  /// first complete entry for a machine wins.
  fn finish(&mut self, entry: Option<Entry>) {
    let Some(Entry {
      machine,
      login: Some(username),
      password: Some(password),
    }) = entry
    else {
      return;
    };

    let credentials = Credentials { username, password };
    match machine {
      Some(machine) => {
        if self.machine(&machine).is_none() {
          self.machines.push((machine, credentials));
        }
      }
      None => {
        if self.default.is_none() {
          self.default = Some(credentials);
        }
      }
    }
  }

  /// Credentials for an exact machine name
  pub fn machine(&self, machine: &str) -> Option<&Credentials> {
    self
      .machines
      .iter()
      .find(|(name, _)| name == machine)
      .map(|(_, credentials)| credentials)
  }

  /// Credentials from the `default` entry, if any
  pub const fn default_entry(&self) -> Option<&Credentials> {
    self.default.as_ref()
  }

  pub fn is_empty(&self) -> bool {
    self.machines.is_empty() && self.default.is_none()
  }
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Returns `Ok(None)` when the machine is missing or its entry lacks a
/// `login` or `password`. The `default` entry is not consulted here.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  Ok(Netrc::load(path)?.machine(target_machine).cloned())
}

/// Normalizes a Jira host URL to a bare host name for `.netrc` lookups.
///
/// ```
/// use sprig_core::creds::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("http://jira.example.com"), "jira.example.com");
/// assert_eq!(normalize_host("my-jira-instance.com"), "my-jira-instance.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim()
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}
