//! Constants for the sprig-jira client.

use std::time::Duration;

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("sprig/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Path segments of the REST API root, followed by the API version
pub const API_ROOT: &[&str] = &["rest", "api"];

/// REST API version used unless configured otherwise
pub const DEFAULT_API_VERSION: u8 = 2;

/// Request timeout used unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
