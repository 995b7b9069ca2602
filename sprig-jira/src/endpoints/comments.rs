//! # Jira Comment Endpoints

use super::{ADD_COMMENT, DELETE_COMMENT, GET_COMMENT, LIST_COMMENTS, UPDATE_COMMENT};
use crate::client::JiraClient;
use crate::error::Result;
use crate::params::Params;
use crate::request::RawResponse;
use crate::transport::Transport;

impl<T: Transport> JiraClient<T> {
  /// List the comments on an issue
  pub async fn get_comments(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&LIST_COMMENTS, &[issue_key], params).await
  }

  /// Add a comment to an issue; `params` must carry a `body` string
  pub async fn add_comment(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&ADD_COMMENT, &[issue_key], params).await
  }

  pub async fn get_comment(&self, issue_key: &str, comment_id: &str, params: Params) -> Result<RawResponse> {
    self.call(&GET_COMMENT, &[issue_key, comment_id], params).await
  }

  pub async fn update_comment(&self, issue_key: &str, comment_id: &str, params: Params) -> Result<RawResponse> {
    self.call(&UPDATE_COMMENT, &[issue_key, comment_id], params).await
  }

  pub async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<RawResponse> {
    self
      .call(&DELETE_COMMENT, &[issue_key, comment_id], Params::new())
      .await
  }
}
