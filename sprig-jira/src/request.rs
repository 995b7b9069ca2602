//! # Request and Response Types
//!
//! The descriptor handed to a [`Transport`](crate::transport::Transport) and
//! the raw response it hands back.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{JiraError, Result};
use crate::params::Params;

/// Where the normalized parameters travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
  /// Encoded into the query string
  Query,
  /// Sent as a JSON object body
  Body,
}

/// A single outbound call, fully prepared for the transport
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
  pub method: Method,
  /// Path relative to the REST API root, identifiers already substituted
  pub path: String,
  pub params: Params,
  pub location: ParamLocation,
}

/// The transport's response, untouched
#[derive(Debug, Clone)]
pub struct RawResponse {
  pub status: StatusCode,
  pub headers: HeaderMap,
  pub body: String,
}

impl RawResponse {
  pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
    Self {
      status,
      headers: HeaderMap::new(),
      body: body.into(),
    }
  }

  pub fn is_success(&self) -> bool {
    self.status.is_success()
  }

  pub fn text(&self) -> &str {
    &self.body
  }

  /// Deserialize the body. Jira answers some writes with `204 No Content`,
  /// so callers expecting a body should check [`RawResponse::is_empty`].
  pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
    serde_json::from_str(&self.body).map_err(|e| JiraError::Transport {
      message: format!("Failed to parse response body as JSON: {e}"),
      source: None,
    })
  }

  pub fn is_empty(&self) -> bool {
    self.body.trim().is_empty()
  }
}
