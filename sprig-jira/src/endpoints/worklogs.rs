//! # Jira Worklog Endpoints
//!
//! Time tracking entries attached to an issue.

use super::{ADD_WORKLOG, DELETE_WORKLOG, GET_WORKLOG, LIST_WORKLOGS, UPDATE_WORKLOG};
use crate::client::JiraClient;
use crate::error::Result;
use crate::params::Params;
use crate::request::RawResponse;
use crate::transport::Transport;

impl<T: Transport> JiraClient<T> {
  pub async fn get_worklogs(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&LIST_WORKLOGS, &[issue_key], params).await
  }

  /// Log work on an issue
  pub async fn add_worklog(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&ADD_WORKLOG, &[issue_key], params).await
  }

  pub async fn get_worklog(&self, issue_key: &str, worklog_id: &str, params: Params) -> Result<RawResponse> {
    self.call(&GET_WORKLOG, &[issue_key, worklog_id], params).await
  }

  pub async fn update_worklog(&self, issue_key: &str, worklog_id: &str, params: Params) -> Result<RawResponse> {
    self.call(&UPDATE_WORKLOG, &[issue_key, worklog_id], params).await
  }

  /// Delete a worklog. The remaining estimate is adjusted automatically and
  /// watchers are notified unless `params` says otherwise.
  pub async fn delete_worklog(&self, issue_key: &str, worklog_id: &str, params: Params) -> Result<RawResponse> {
    self.call(&DELETE_WORKLOG, &[issue_key, worklog_id], params).await
  }
}
