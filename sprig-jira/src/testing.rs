//! In-memory transport for unit tests.

use std::sync::{Arc, Mutex};

use reqwest::StatusCode;

use crate::error::{JiraError, Result};
use crate::request::{RawResponse, RequestDescriptor};
use crate::transport::Transport;

type Outcome = Arc<dyn Fn() -> Result<RawResponse> + Send + Sync>;

/// Records every request it receives and answers with a canned outcome
#[derive(Clone)]
pub(crate) struct RecordingTransport {
  requests: Arc<Mutex<Vec<RequestDescriptor>>>,
  outcome: Outcome,
}

impl RecordingTransport {
  pub(crate) fn new() -> Self {
    Self::responding(StatusCode::OK, "{}")
  }

  pub(crate) fn responding(status: StatusCode, body: &'static str) -> Self {
    Self {
      requests: Arc::default(),
      outcome: Arc::new(move || Ok(RawResponse::new(status, body))),
    }
  }

  pub(crate) fn failing(error: impl Fn() -> JiraError + Send + Sync + 'static) -> Self {
    Self {
      requests: Arc::default(),
      outcome: Arc::new(move || Err(error())),
    }
  }

  pub(crate) fn requests(&self) -> Vec<RequestDescriptor> {
    self.requests.lock().unwrap().clone()
  }
}

impl Transport for RecordingTransport {
  async fn send(&self, request: RequestDescriptor) -> Result<RawResponse> {
    self.requests.lock().unwrap().push(request);
    (self.outcome)()
  }
}
