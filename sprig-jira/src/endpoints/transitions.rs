use super::{DO_TRANSITION, LIST_TRANSITIONS};
use crate::client::JiraClient;
use crate::error::Result;
use crate::params::Params;
use crate::request::RawResponse;
use crate::transport::Transport;

impl<T: Transport> JiraClient<T> {
  /// Get available transitions for an issue
  pub async fn get_transitions(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&LIST_TRANSITIONS, &[issue_key], params).await
  }

  /// Transition an issue to a new status; `params` must carry a `transition`
  /// object such as `{"id": "31"}`
  pub async fn transition_issue(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&DO_TRANSITION, &[issue_key], params).await
  }
}
