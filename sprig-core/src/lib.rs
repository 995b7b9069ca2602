//! # Sprig Core Library
//!
//! Shared building blocks for the sprig workspace: configuration directories
//! and `jira.toml`, `.netrc` credentials, Jira host resolution, and terminal
//! output helpers.

pub mod config;
pub mod creds;
pub mod output;
pub mod url;

pub use config::{ConfigDirs, JiraConfig, get_config_dirs};
pub use creds::Credentials;
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
