//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations,
//! including fetching, creating, editing, deleting and searching issues.

use super::{
  ADD_ATTACHMENT, ASSIGN_ISSUE, CREATE_ISSUE, DELETE_ISSUE, EDIT_ISSUE, GET_CHANGELOG, GET_EDIT_META, GET_ISSUE,
  SEARCH_ISSUES, SEND_NOTIFICATION,
};
use crate::client::JiraClient;
use crate::error::Result;
use crate::params::Params;
use crate::request::RawResponse;
use crate::transport::Transport;

impl<T: Transport> JiraClient<T> {
  /// Create an issue; `params` must carry a `fields` object
  pub async fn create_issue(&self, params: Params) -> Result<RawResponse> {
    self.call(&CREATE_ISSUE, &[], params).await
  }

  /// Get a Jira issue by key or id
  pub async fn get_issue(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&GET_ISSUE, &[issue_key], params).await
  }

  pub async fn edit_issue(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&EDIT_ISSUE, &[issue_key], params).await
  }

  /// Delete an issue. Subtasks are kept unless `deleteSubtasks` is set.
  pub async fn delete_issue(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&DELETE_ISSUE, &[issue_key], params).await
  }

  /// Search issues with JQL
  pub async fn search_issues(&self, params: Params) -> Result<RawResponse> {
    self.call(&SEARCH_ISSUES, &[], params).await
  }

  pub async fn update_assignee(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&ASSIGN_ISSUE, &[issue_key], params).await
  }

  pub async fn add_attachment(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&ADD_ATTACHMENT, &[issue_key], params).await
  }

  pub async fn get_changelog(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&GET_CHANGELOG, &[issue_key], params).await
  }

  pub async fn get_edit_meta(&self, issue_key: &str) -> Result<RawResponse> {
    self.call(&GET_EDIT_META, &[issue_key], Params::new()).await
  }

  pub async fn send_notification(&self, issue_key: &str, params: Params) -> Result<RawResponse> {
    self.call(&SEND_NOTIFICATION, &[issue_key], params).await
  }
}

#[cfg(test)]
mod tests {
  use reqwest::StatusCode;
  use serde_json::{Value, json};
  use wiremock::matchers::{any, basic_auth, body_json, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::{JiraClient, create_jira_client};
  use crate::error::JiraError;
  use crate::params;
  use crate::params::Params;

  fn mock_client(mock_server: &MockServer) -> JiraClient {
    create_jira_client(&mock_server.uri(), "test_user", "test_token").unwrap()
  }

  #[tokio::test]
  async fn test_get_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    // Defaults for fieldsByKeys and updateHistory travel in the query string
    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(basic_auth("test_user", "test_token"))
      .and(query_param("fields", "summary,status"))
      .and(query_param("fieldsByKeys", "false"))
      .and(query_param("updateHistory", "false"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "10000",
          "key": "TEST-123",
          "fields": {
              "summary": "Test issue",
              "status": { "id": "10001", "name": "In Progress" }
          }
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client
      .get_issue("TEST-123", params! { "fields" => json!(["summary", "status"]) })
      .await?;
    let issue: Value = response.json()?;
    assert_eq!(issue["key"], json!("TEST-123"));
    assert_eq!(issue["fields"]["status"]["name"], json!("In Progress"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/NONEXISTENT-123"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.get_issue("NONEXISTENT-123", Params::new()).await;
    assert!(matches!(result, Err(JiraError::NotFound { .. })));
    assert!(result.unwrap_err().to_string().contains("not found"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "invalid_token")?;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .respond_with(ResponseTemplate::new(401).set_body_json(json!({
          "errorMessages": ["Authentication failed"],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.get_issue("TEST-123", Params::new()).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    let fields = json!({
        "project": { "key": "TEST" },
        "summary": "Something broke",
        "issuetype": { "name": "Bug" }
    });

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(body_json(json!({ "fields": fields })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "id": "10002",
          "key": "TEST-124",
          "self": "https://test.atlassian.net/rest/api/2/issue/10002"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client.create_issue(params! { "fields" => fields.clone() }).await?;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.json::<Value>()?["key"], json!("TEST-124"));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_without_fields_sends_nothing() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(any())
      .respond_with(ResponseTemplate::new(201))
      .expect(0)
      .mount(&mock_server)
      .await;

    let result = client
      .create_issue(params! { "update" => json!({ "labels": [{ "add": "triage" }] }) })
      .await;
    assert!(matches!(result, Err(JiraError::MissingParameter { ref name, .. }) if name == "fields"));

    Ok(())
  }

  #[tokio::test]
  async fn test_edit_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("PUT"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(body_json(json!({ "fields": { "summary": "Renamed" } })))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client
      .edit_issue("TEST-123", params! { "fields" => json!({ "summary": "Renamed" }) })
      .await?;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_issue_defaults_to_keeping_subtasks() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("DELETE"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(query_param("deleteSubtasks", "false"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.delete_issue("TEST-123", Params::new()).await?;
    Ok(())
  }

  #[tokio::test]
  async fn test_delete_issue_with_subtasks() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("DELETE"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(query_param("deleteSubtasks", "true"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client
      .delete_issue("TEST-123", params! { "deleteSubtasks" => true })
      .await?;
    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/2/search"))
      .and(body_json(json!({
          "jql": "project = TEST ORDER BY created DESC",
          "startAt": 0,
          "maxResults": 10,
          "fields": ["summary"]
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 10,
          "total": 1,
          "issues": [{ "key": "TEST-1", "fields": { "summary": "First" } }]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client
      .search_issues(params! {
        "jql" => "project = TEST ORDER BY created DESC",
        "maxResults" => 10,
        "fields" => json!(["summary"]),
      })
      .await?;
    assert_eq!(response.json::<Value>()?["total"], json!(1));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_issues_rejects_string_paging() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    let result = client
      .search_issues(params! { "jql" => "project = TEST", "maxResults" => "10" })
      .await;
    assert!(matches!(result, Err(JiraError::TypeMismatch { ref name, .. }) if name == "maxResults"));

    Ok(())
  }

  #[tokio::test]
  async fn test_placeholder_operations_are_not_implemented() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = mock_client(&mock_server);

    Mock::given(any())
      .respond_with(ResponseTemplate::new(200))
      .expect(0)
      .mount(&mock_server)
      .await;

    let results = [
      client
        .update_assignee("TEST-1", params! { "accountId" => "abc" })
        .await,
      client.add_attachment("TEST-1", Params::new()).await,
      client.get_changelog("TEST-1", Params::new()).await,
      client.get_edit_meta("TEST-1").await,
      client
        .send_notification("TEST-1", params! { "to" => json!({ "reporter": true }) })
        .await,
    ];

    for result in results {
      assert!(matches!(result, Err(JiraError::NotImplemented { .. })));
    }

    Ok(())
  }
}
