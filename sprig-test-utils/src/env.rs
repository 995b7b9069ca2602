//! Environment variable management for testing

use std::env;
use std::ffi::OsString;

/// RAII guard for a single environment variable
///
/// The original value (or its absence) is captured on construction and
/// restored when the guard is dropped.
pub struct EnvVarGuard {
  key: &'static str,
  original: Option<OsString>,
}

impl EnvVarGuard {
  pub fn new(key: &'static str) -> Self {
    Self {
      key,
      original: env::var_os(key),
    }
  }

  pub fn set(&self, value: &str) {
    // SAFETY: test-only helper; callers own the variable for the guard's lifetime
    unsafe {
      env::set_var(self.key, value);
    }
  }

  pub fn remove(&self) {
    // SAFETY: see `set`
    unsafe {
      env::remove_var(self.key);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    // SAFETY: see `set`
    unsafe {
      match &self.original {
        Some(value) => env::set_var(self.key, value),
        None => env::remove_var(self.key),
      }
    }
  }
}
