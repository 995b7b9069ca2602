//! Isolated configuration and home directories for CLI tests
//!
//! The guard only creates directories; it hands the variables a child process
//! needs via [`ConfigDirsTestGuard::envs`] instead of mutating the test
//! process environment.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct ConfigDirsTestGuard {
  pub temp_dir: TempDir,
}

impl Default for ConfigDirsTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl ConfigDirsTestGuard {
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    fs::create_dir_all(temp_dir.path().join("home")).expect("Failed to create home directory");
    fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config directory");

    Self { temp_dir }
  }

  /// Value for `XDG_CONFIG_HOME`
  pub fn config_home(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }

  /// Value for `HOME`
  pub fn home_dir(&self) -> PathBuf {
    self.temp_dir.path().join("home")
  }

  /// Where sprig keeps `jira.toml` under [`Self::config_home`]
  pub fn sprig_config_dir(&self) -> PathBuf {
    self.config_home().join("sprig")
  }

  pub fn jira_config_path(&self) -> PathBuf {
    self.sprig_config_dir().join("jira.toml")
  }

  /// Write `{home}/.netrc`
  pub fn write_netrc(&self, content: &str) -> PathBuf {
    let path = self.home_dir().join(".netrc");
    fs::write(&path, content).expect("Failed to write test .netrc");
    path
  }

  /// Write `jira.toml` into the sprig config directory
  pub fn write_jira_config(&self, content: &str) -> PathBuf {
    fs::create_dir_all(self.sprig_config_dir()).expect("Failed to create sprig config directory");
    let path = self.jira_config_path();
    fs::write(&path, content).expect("Failed to write test jira.toml");
    path
  }

  /// Environment for a child process confined to this guard's directories
  pub fn envs(&self) -> Vec<(&'static str, PathBuf)> {
    vec![("HOME", self.home_dir()), ("XDG_CONFIG_HOME", self.config_home())]
  }

  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }
}
