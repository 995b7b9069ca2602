//! # Jira Client
//!
//! The client ties the pieces together: every operation looks up its
//! [`Endpoint`], validates the caller's parameters against the endpoint's
//! schema, renders the path, and hands the result to the dispatcher.

use tracing::debug;

use crate::dispatcher::Dispatcher;
use crate::endpoints::{Endpoint, MYSELF};
use crate::error::{JiraError, Result};
use crate::params::Params;
use crate::request::RawResponse;
use crate::transport::{ClientOptions, HttpTransport, JiraAuth, Transport};

/// Represents a Jira API client
pub struct JiraClient<T = HttpTransport> {
  dispatcher: Dispatcher<T>,
}

impl JiraClient<HttpTransport> {
  /// Create a new Jira client with default options
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self> {
    Self::with_options(base_url, auth, ClientOptions::default())
  }

  /// Create a new Jira client with explicit transport options
  pub fn with_options(base_url: &str, auth: JiraAuth, options: ClientOptions) -> Result<Self> {
    Ok(Self::with_transport(HttpTransport::new(base_url, auth, options)?))
  }

  pub fn base_url(&self) -> &str {
    self.dispatcher.transport().base_url()
  }
}

impl<T: Transport> JiraClient<T> {
  /// Create a client on top of any transport
  pub const fn with_transport(transport: T) -> Self {
    Self {
      dispatcher: Dispatcher::new(transport),
    }
  }

  pub const fn transport(&self) -> &T {
    self.dispatcher.transport()
  }

  /// Validate `params` for `endpoint`, substitute `identifiers` into its path
  /// and issue the request.
  ///
  /// Placeholder endpoints fail with [`JiraError::NotImplemented`] and
  /// invalid input fails before anything is sent.
  pub async fn call(&self, endpoint: &Endpoint, identifiers: &[&str], params: Params) -> Result<RawResponse> {
    if !endpoint.implemented {
      return Err(JiraError::NotImplemented {
        operation: endpoint.name,
      });
    }

    let params = endpoint.schema.validate(params)?;
    let path = endpoint.render_path(identifiers)?;
    debug!(endpoint = endpoint.name, "Calling Jira endpoint");

    self
      .dispatcher
      .dispatch(endpoint.method.clone(), path, params, endpoint.location)
      .await
  }

  /// Fetch the authenticated user's profile
  pub async fn get_myself(&self) -> Result<RawResponse> {
    self.call(&MYSELF, &[], Params::new()).await
  }

  /// Test the Jira connection by fetching the current user
  pub async fn test_connection(&self) -> Result<bool> {
    match self.get_myself().await {
      Ok(response) => Ok(response.is_success()),
      Err(JiraError::Unauthorized { .. }) => Ok(false),
      Err(e) => Err(e),
    }
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}
