//! # Jira Client Errors
//!
//! Error kinds raised by the client. Validation errors are produced locally
//! before any request leaves the process; the remaining kinds come from the
//! transport and are passed through untouched.

use reqwest::StatusCode;
use thiserror::Error;

use crate::params::ParamType;

/// Result alias used throughout the Jira client
pub type Result<T> = std::result::Result<T, JiraError>;

/// Errors produced by the Jira client
#[derive(Debug, Error)]
pub enum JiraError {
  #[error("Unknown parameter '{name}' for {schema}")]
  UnknownParameter { schema: &'static str, name: String },

  #[error(
    "Parameter '{name}' for {schema} must be {}, got {found}",
    ParamType::describe_all(.expected)
  )]
  TypeMismatch {
    schema: &'static str,
    name: String,
    expected: &'static [ParamType],
    found: ParamType,
  },

  #[error("Missing required parameter '{name}' for {schema}")]
  MissingParameter { schema: &'static str, name: String },

  #[error("Invalid identifier '{identifier}' for endpoint {endpoint}: {reason}")]
  InvalidIdentifier {
    endpoint: &'static str,
    identifier: String,
    reason: &'static str,
  },

  #[error("{operation} is not implemented")]
  NotImplemented { operation: &'static str },

  #[error("Authentication failed (HTTP {status}). Please check your Jira credentials.")]
  Unauthorized { status: StatusCode, body: String },

  #[error("Resource not found: {path}")]
  NotFound { path: String, body: String },

  #[error("Request rejected: HTTP {status} - {body}")]
  Client { status: StatusCode, body: String },

  #[error("Transport error: {message}")]
  Transport {
    message: String,
    #[source]
    source: Option<reqwest::Error>,
  },
}

impl JiraError {
  /// Whether the error was raised before any request was attempted
  pub const fn is_validation(&self) -> bool {
    matches!(
      self,
      JiraError::UnknownParameter { .. }
        | JiraError::TypeMismatch { .. }
        | JiraError::MissingParameter { .. }
        | JiraError::InvalidIdentifier { .. }
        | JiraError::NotImplemented { .. }
    )
  }

  pub(crate) fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
    JiraError::Transport {
      message: message.into(),
      source: Some(source),
    }
  }
}
