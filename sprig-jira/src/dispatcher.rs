//! # Request Dispatcher
//!
//! Turns an already-validated parameter mapping into exactly one transport
//! call. The dispatcher keeps no state between calls and never inspects or
//! retries the outcome.

use reqwest::Method;
use tracing::{debug, trace};

use crate::error::Result;
use crate::params::Params;
use crate::request::{ParamLocation, RawResponse, RequestDescriptor};
use crate::transport::Transport;

pub struct Dispatcher<T> {
  transport: T,
}

impl<T: Transport> Dispatcher<T> {
  pub const fn new(transport: T) -> Self {
    Self { transport }
  }

  pub const fn transport(&self) -> &T {
    &self.transport
  }

  /// Issue a single request and hand back the transport's answer unchanged
  pub async fn dispatch(
    &self,
    method: Method,
    path: String,
    params: Params,
    location: ParamLocation,
  ) -> Result<RawResponse> {
    debug!(%method, %path, ?location, "Dispatching Jira request");
    trace!(params = %serde_json::Value::Object(params.clone()), "Normalized parameters");

    self
      .transport
      .send(RequestDescriptor {
        method,
        path,
        params,
        location,
      })
      .await
  }
}
