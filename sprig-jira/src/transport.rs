//! # Jira HTTP Transport
//!
//! The transport owns everything between a prepared [`RequestDescriptor`] and
//! the wire: URL construction, authentication, parameter encoding, and mapping
//! HTTP failure statuses onto [`JiraError`] kinds.

use std::future::Future;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::consts::{API_ROOT, DEFAULT_API_VERSION, DEFAULT_TIMEOUT, USER_AGENT};
use crate::error::{JiraError, Result};
use crate::params::Params;
use crate::request::{ParamLocation, RawResponse, RequestDescriptor};

/// Sends one prepared request and returns the raw response
pub trait Transport: Send + Sync {
  fn send(&self, request: RequestDescriptor) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl std::fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraAuth")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// Tunables for the HTTP transport
#[derive(Debug, Clone)]
pub struct ClientOptions {
  /// REST API version used in `/rest/api/{version}`
  pub api_version: u8,
  /// Whole-request timeout; `None` leaves reqwest's default (no timeout)
  pub timeout: Option<Duration>,
}

impl Default for ClientOptions {
  fn default() -> Self {
    Self {
      api_version: DEFAULT_API_VERSION,
      timeout: Some(DEFAULT_TIMEOUT),
    }
  }
}

/// reqwest-backed transport using HTTP basic auth
pub struct HttpTransport {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) api_version: u8,
  pub(crate) auth: JiraAuth,
}

impl HttpTransport {
  pub fn new(base_url: &str, auth: JiraAuth, options: ClientOptions) -> Result<Self> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = options.timeout {
      builder = builder.timeout(timeout);
    }
    let client = builder
      .build()
      .map_err(|e| JiraError::transport("Failed to build HTTP client", e))?;

    Ok(Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      api_version: options.api_version,
      auth,
    })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Resolve a request path against `{base_url}/rest/api/{version}/`,
  /// percent-encoding each path segment.
  pub(crate) fn url_for(&self, path: &str) -> Result<Url> {
    let invalid = |reason: String| JiraError::Transport {
      message: format!("Invalid Jira base URL '{}': {reason}", self.base_url),
      source: None,
    };

    let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
    let version = self.api_version.to_string();
    {
      let mut segments = url
        .path_segments_mut()
        .map_err(|()| invalid("URL cannot be a base".to_string()))?;
      segments.pop_if_empty();
      segments.extend(API_ROOT.iter().copied());
      segments.push(&version);
      segments.extend(path.split('/').filter(|segment| !segment.is_empty()));
    }

    Ok(url)
  }
}

impl Transport for HttpTransport {
  async fn send(&self, request: RequestDescriptor) -> Result<RawResponse> {
    let url = self.url_for(&request.path)?;
    debug!(method = %request.method, %url, location = ?request.location, "Sending Jira request");

    let mut builder = self
      .client
      .request(request.method.clone(), url)
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .header(ACCEPT, "application/json");

    builder = match request.location {
      ParamLocation::Query if request.params.is_empty() => builder,
      ParamLocation::Query => builder.query(&query_pairs(&request.params)),
      ParamLocation::Body => builder.json(&request.params),
    };

    let response = builder
      .send()
      .await
      .map_err(|e| JiraError::transport("Failed to send request to Jira", e))?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
      .text()
      .await
      .map_err(|e| JiraError::transport("Failed to read Jira response body", e))?;

    if !status.is_success() && !status.is_redirection() {
      warn!(%status, path = %request.path, "Jira request failed");
    }

    match status {
      s if s.is_success() || s.is_redirection() => Ok(RawResponse { status, headers, body }),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JiraError::Unauthorized { status, body }),
      StatusCode::NOT_FOUND => Err(JiraError::NotFound {
        path: request.path,
        body,
      }),
      s if s.is_client_error() => Err(JiraError::Client { status, body }),
      _ => Err(JiraError::Transport {
        message: format!("Unexpected error: HTTP {status} - {body}"),
        source: None,
      }),
    }
  }
}

/// Flatten parameters into query pairs. Arrays become comma-separated lists,
/// objects are sent as compact JSON.
fn query_pairs(params: &Params) -> Vec<(String, String)> {
  params
    .iter()
    .map(|(key, value)| (key.clone(), query_value(value)))
    .collect()
}

fn query_value(value: &Value) -> String {
  match value {
    Value::String(s) => s.clone(),
    Value::Null => String::new(),
    Value::Array(items) => items.iter().map(query_value).collect::<Vec<_>>().join(","),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use reqwest::Method;
  use serde_json::json;
  use wiremock::matchers::{basic_auth, body_json, header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::params;

  fn test_auth() -> JiraAuth {
    JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    }
  }

  fn descriptor(method: Method, path: &str, params: Params, location: ParamLocation) -> RequestDescriptor {
    RequestDescriptor {
      method,
      path: path.to_string(),
      params,
      location,
    }
  }

  #[test]
  fn test_url_for_plain_host() {
    let transport = HttpTransport::new("https://test.atlassian.net/", test_auth(), ClientOptions::default()).unwrap();
    let url = transport.url_for("issue/TEST-1/worklog").unwrap();
    assert_eq!(url.as_str(), "https://test.atlassian.net/rest/api/2/issue/TEST-1/worklog");
  }

  #[test]
  fn test_url_for_context_path_and_version() {
    let options = ClientOptions {
      api_version: 3,
      ..Default::default()
    };
    let transport = HttpTransport::new("https://example.com/jira", test_auth(), options).unwrap();
    let url = transport.url_for("myself").unwrap();
    assert_eq!(url.as_str(), "https://example.com/jira/rest/api/3/myself");
  }

  #[test]
  fn test_url_for_encodes_segments() {
    let transport = HttpTransport::new("https://example.com", test_auth(), ClientOptions::default()).unwrap();
    let url = transport.url_for("issue/TEST-1/properties/my key").unwrap();
    assert_eq!(url.as_str(), "https://example.com/rest/api/2/issue/TEST-1/properties/my%20key");
  }

  #[test]
  fn test_url_for_rejects_invalid_base() {
    let transport = HttpTransport::new("not a url", test_auth(), ClientOptions::default()).unwrap();
    assert!(matches!(transport.url_for("myself"), Err(JiraError::Transport { .. })));
  }

  #[test]
  fn test_query_value_rendering() {
    assert_eq!(query_value(&json!("summary")), "summary");
    assert_eq!(query_value(&json!(false)), "false");
    assert_eq!(query_value(&json!(50)), "50");
    assert_eq!(query_value(&json!(["summary", "status"])), "summary,status");
    assert_eq!(query_value(&json!({"a": 1})), r#"{"a":1}"#);
    assert_eq!(query_value(&json!(null)), "");
  }

  #[test]
  fn test_auth_debug_redacts_token() {
    let rendered = format!("{:?}", test_auth());
    assert!(rendered.contains("test_user"));
    assert!(!rendered.contains("test_token"));
  }

  #[tokio::test]
  async fn test_send_query_parameters() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let transport = HttpTransport::new(&mock_server.uri(), test_auth(), ClientOptions::default())?;

    Mock::given(method("DELETE"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(basic_auth("test_user", "test_token"))
      .and(query_param("deleteSubtasks", "false"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = transport
      .send(descriptor(
        Method::DELETE,
        "issue/TEST-123",
        params! { "deleteSubtasks" => false },
        ParamLocation::Query,
      ))
      .await?;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.is_empty());
    Ok(())
  }

  #[tokio::test]
  async fn test_send_body_parameters() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let transport = HttpTransport::new(&mock_server.uri(), test_auth(), ClientOptions::default())?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/comment"))
      .and(header("Accept", "application/json"))
      .and(body_json(json!({ "body": "Looks good" })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "10000", "body": "Looks good" })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = transport
      .send(descriptor(
        Method::POST,
        "issue/TEST-123/comment",
        params! { "body" => "Looks good" },
        ParamLocation::Body,
      ))
      .await?;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json::<Value>()?["id"], json!("10000"));
    Ok(())
  }

  #[tokio::test]
  async fn test_send_maps_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let transport = HttpTransport::new(&mock_server.uri(), test_auth(), ClientOptions::default())?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .respond_with(ResponseTemplate::new(401).set_body_json(json!({
          "errorMessages": ["Authentication failed"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = transport
      .send(descriptor(Method::GET, "myself", Params::new(), ParamLocation::Query))
      .await;

    match result {
      Err(JiraError::Unauthorized { status, body }) => {
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Authentication failed"));
      }
      other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
  }

  #[tokio::test]
  async fn test_send_maps_forbidden_to_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let transport = HttpTransport::new(&mock_server.uri(), test_auth(), ClientOptions::default())?;

    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(403))
      .mount(&mock_server)
      .await;

    let result = transport
      .send(descriptor(Method::GET, "myself", Params::new(), ParamLocation::Query))
      .await;
    assert!(matches!(result, Err(JiraError::Unauthorized { status: StatusCode::FORBIDDEN, .. })));
    Ok(())
  }

  #[tokio::test]
  async fn test_send_maps_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let transport = HttpTransport::new(&mock_server.uri(), test_auth(), ClientOptions::default())?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/NONEXISTENT-123"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = transport
      .send(descriptor(
        Method::GET,
        "issue/NONEXISTENT-123",
        Params::new(),
        ParamLocation::Query,
      ))
      .await;

    match result {
      Err(JiraError::NotFound { path, body }) => {
        assert_eq!(path, "issue/NONEXISTENT-123");
        assert!(body.contains("does not exist"));
      }
      other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
  }

  #[tokio::test]
  async fn test_send_maps_client_and_server_errors() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let transport = HttpTransport::new(&mock_server.uri(), test_auth(), ClientOptions::default())?;

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .respond_with(ResponseTemplate::new(400).set_body_string("Field 'summary' is required"))
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
      .mount(&mock_server)
      .await;

    let client_error = transport
      .send(descriptor(
        Method::POST,
        "issue",
        params! { "fields" => json!({}) },
        ParamLocation::Body,
      ))
      .await;
    match client_error {
      Err(JiraError::Client { status, body }) => {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Field 'summary' is required");
      }
      other => panic!("unexpected result: {other:?}"),
    }

    let server_error = transport
      .send(descriptor(Method::GET, "myself", Params::new(), ParamLocation::Query))
      .await;
    match server_error {
      Err(JiraError::Transport { message, .. }) => {
        assert!(message.contains("503"));
        assert!(message.contains("maintenance"));
      }
      other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
  }

  #[tokio::test]
  async fn test_send_connection_failure() {
    // Nothing listens on port 9 of the loopback interface in CI
    let transport = HttpTransport::new("http://127.0.0.1:9", test_auth(), ClientOptions::default()).unwrap();

    let result = transport
      .send(descriptor(Method::GET, "myself", Params::new(), ParamLocation::Query))
      .await;
    assert!(matches!(result, Err(JiraError::Transport { source: Some(_), .. })));
  }
}
