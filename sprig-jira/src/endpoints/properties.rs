//! # Jira Issue Property Endpoints
//!
//! Issue properties are arbitrary JSON documents stored against an issue
//! under a string key.

use serde_json::Value;

use super::{DELETE_PROPERTY, GET_PROPERTY, LIST_PROPERTIES, SET_PROPERTY};
use crate::client::JiraClient;
use crate::error::Result;
use crate::params::Params;
use crate::request::RawResponse;
use crate::transport::Transport;

impl<T: Transport> JiraClient<T> {
  /// List the property keys stored on an issue
  pub async fn get_property_keys(&self, issue_key: &str) -> Result<RawResponse> {
    self.call(&LIST_PROPERTIES, &[issue_key], Params::new()).await
  }

  pub async fn get_property(&self, issue_key: &str, property_key: &str) -> Result<RawResponse> {
    self
      .call(&GET_PROPERTY, &[issue_key, property_key], Params::new())
      .await
  }

  /// Store `value` under `property_key`, replacing any previous value
  pub async fn set_property(&self, issue_key: &str, property_key: &str, value: Value) -> Result<RawResponse> {
    let mut params = Params::new();
    params.insert("value".to_string(), value);
    self.call(&SET_PROPERTY, &[issue_key, property_key], params).await
  }

  pub async fn delete_property(&self, issue_key: &str, property_key: &str) -> Result<RawResponse> {
    self
      .call(&DELETE_PROPERTY, &[issue_key, property_key], Params::new())
      .await
  }
}
