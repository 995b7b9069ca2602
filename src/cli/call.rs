//! # Call Command
//!
//! Validate parameters for any endpoint in the table and dispatch it.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use sprig_core::get_config_dirs;
use sprig_jira::auth::{create_jira_client_from_netrc, get_jira_host};
use sprig_jira::{Endpoint, JiraError, Params, RawResponse, endpoint};
use tokio::runtime::Runtime;
use tracing::info;

/// Command for calling a single endpoint
#[derive(Args)]
pub struct CallArgs {
  /// Endpoint name, e.g. issue.get (see `sprig endpoints`)
  #[arg(index = 1)]
  pub endpoint: String,

  /// Path identifiers in template order, e.g. an issue key then a comment id
  #[arg(index = 2, num_args = 0..)]
  pub identifiers: Vec<String>,

  /// A parameter as KEY=VALUE; VALUE is parsed as JSON when possible
  #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
  pub params: Vec<(String, Value)>,

  /// All parameters as one JSON object; --param entries override its keys
  #[arg(long, value_name = "OBJECT", value_parser = parse_json_object)]
  pub json: Option<Params>,
}

/// Handle the call command
pub(crate) fn handle_call_command(args: CallArgs) -> Result<()> {
  let endpoint = endpoint(&args.endpoint).with_context(|| {
    format!(
      "Unknown endpoint '{}'. Run 'sprig endpoints' to list them.",
      args.endpoint
    )
  })?;
  let identifiers: Vec<&str> = args.identifiers.iter().map(String::as_str).collect();
  let params = preflight(endpoint, &identifiers, merge_params(args.json, args.params))?;

  let config = get_config_dirs()?.load_jira_config()?;
  let jira_host = get_jira_host(&config)?;
  let client = create_jira_client_from_netrc(&super::home_dir()?, &jira_host, &config)?;

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let response = rt.block_on(client.call(endpoint, &identifiers, params))?;
  info!(status = %response.status, "Jira responded");

  print_response(&response);
  Ok(())
}

/// Reject bad input before touching configuration, credentials or the network
fn preflight(endpoint: &Endpoint, identifiers: &[&str], params: Params) -> Result<Params, JiraError> {
  if !endpoint.implemented {
    return Err(JiraError::NotImplemented {
      operation: endpoint.name,
    });
  }
  let params = endpoint.schema.validate(params)?;
  endpoint.render_path(identifiers)?;
  Ok(params)
}

fn merge_params(base: Option<Params>, overrides: Vec<(String, Value)>) -> Params {
  let mut params = base.unwrap_or_default();
  params.extend(overrides);
  params
}

fn parse_param(raw: &str) -> Result<(String, Value), String> {
  let (key, value) = raw
    .split_once('=')
    .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
  if key.is_empty() {
    return Err(format!("missing parameter name in '{raw}'"));
  }

  let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
  Ok((key.to_string(), value))
}

fn parse_json_object(raw: &str) -> Result<Params, String> {
  match serde_json::from_str(raw) {
    Ok(Value::Object(params)) => Ok(params),
    Ok(_) => Err("expected a JSON object".to_string()),
    Err(e) => Err(format!("invalid JSON: {e}")),
  }
}

/// Print the body as-is, pretty-printed when it is JSON
fn print_response(response: &RawResponse) {
  if response.is_empty() {
    eprintln!("HTTP {}", response.status);
    return;
  }

  match serde_json::from_str::<Value>(response.text()) {
    Ok(json) => match serde_json::to_string_pretty(&json) {
      Ok(pretty) => println!("{pretty}"),
      Err(_) => println!("{}", response.text()),
    },
    Err(_) => println!("{}", response.text()),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use sprig_jira::endpoints::{ASSIGN_ISSUE, CREATE_ISSUE, DELETE_ISSUE, GET_COMMENT};

  use super::*;

  #[test]
  fn test_parse_param_reads_json_then_string() {
    assert_eq!(parse_param("deleteSubtasks=true").unwrap(), ("deleteSubtasks".to_string(), json!(true)));
    assert_eq!(parse_param("maxResults=10").unwrap(), ("maxResults".to_string(), json!(10)));
    assert_eq!(
      parse_param("jql=project = TEST").unwrap(),
      ("jql".to_string(), json!("project = TEST"))
    );
    assert_eq!(
      parse_param(r#"fields={"summary":"Hi"}"#).unwrap(),
      ("fields".to_string(), json!({ "summary": "Hi" }))
    );
    assert_eq!(parse_param(r#"id="10""#).unwrap(), ("id".to_string(), json!("10")));
    assert_eq!(parse_param("empty=").unwrap(), ("empty".to_string(), json!("")));
  }

  #[test]
  fn test_parse_param_rejects_malformed() {
    assert!(parse_param("no-equals-sign").is_err());
    assert!(parse_param("=value").is_err());
  }

  #[test]
  fn test_parse_json_object() {
    assert_eq!(
      Value::Object(parse_json_object(r#"{"jql": "project = TEST"}"#).unwrap()),
      json!({ "jql": "project = TEST" })
    );
    assert!(parse_json_object("[1, 2]").is_err());
    assert!(parse_json_object("{").is_err());
  }

  #[test]
  fn test_merge_params_overrides_json() {
    let base = parse_json_object(r#"{"jql": "a", "maxResults": 5}"#).unwrap();
    let merged = merge_params(Some(base), vec![("jql".to_string(), json!("b"))]);
    assert_eq!(Value::Object(merged), json!({ "jql": "b", "maxResults": 5 }));
  }

  #[test]
  fn test_preflight() {
    let normalized = preflight(&DELETE_ISSUE, &["TEST-1"], Params::new()).unwrap();
    assert_eq!(Value::Object(normalized), json!({ "deleteSubtasks": false }));

    assert!(matches!(
      preflight(&CREATE_ISSUE, &[], Params::new()),
      Err(JiraError::MissingParameter { .. })
    ));
    assert!(matches!(
      preflight(&ASSIGN_ISSUE, &["TEST-1"], Params::new()),
      Err(JiraError::NotImplemented { .. })
    ));
    assert!(matches!(
      preflight(&GET_COMMENT, &["TEST-1"], Params::new()),
      Err(JiraError::InvalidIdentifier { .. })
    ));
  }
}
