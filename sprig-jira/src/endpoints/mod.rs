//! # Jira API Endpoints
//!
//! The endpoint table: every REST operation the client knows about, described
//! as a verb, a path template, a parameter schema, and where the parameters
//! travel. Resource-specific convenience methods on
//! [`JiraClient`](crate::JiraClient) live in the submodules and all go through
//! this table.

use reqwest::Method;

use crate::error::{JiraError, Result};
use crate::params::Schema;
use crate::params::schemas;
use crate::request::ParamLocation;

pub mod comments;
pub mod issues;
pub mod properties;
pub mod transitions;
pub mod worklogs;

/// Static description of one REST endpoint
#[derive(Debug)]
pub struct Endpoint {
  /// Stable dotted name, e.g. `issue.get`
  pub name: &'static str,
  pub method: Method,
  /// Path below the API root with `{placeholder}` segments
  pub path: &'static str,
  pub schema: &'static Schema,
  pub location: ParamLocation,
  /// Placeholder endpoints are listed but always fail with
  /// [`JiraError::NotImplemented`]
  pub implemented: bool,
}

impl Endpoint {
  /// Names of the `{placeholder}` segments, in order
  pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
    self
      .path
      .split('/')
      .filter_map(|segment| segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
  }

  /// Substitute `identifiers` into the path template, in order
  pub fn render_path(&self, identifiers: &[&str]) -> Result<String> {
    let invalid = |identifier: &str, reason: &'static str| JiraError::InvalidIdentifier {
      endpoint: self.name,
      identifier: identifier.to_string(),
      reason,
    };

    let mut remaining = identifiers.iter().copied();
    let mut segments = Vec::new();
    for segment in self.path.split('/') {
      if segment.starts_with('{') && segment.ends_with('}') {
        let identifier = remaining.next().ok_or_else(|| invalid(segment, "identifier missing"))?;
        if identifier.trim().is_empty() {
          return Err(invalid(identifier, "identifier is empty"));
        }
        if identifier.contains(['/', '?', '#']) {
          return Err(invalid(identifier, "identifier contains a reserved character"));
        }
        if matches!(identifier, "." | "..") {
          return Err(invalid(identifier, "identifier is a dot segment"));
        }
        segments.push(identifier);
      } else {
        segments.push(segment);
      }
    }

    if let Some(extra) = remaining.next() {
      return Err(invalid(extra, "unexpected extra identifier"));
    }

    Ok(segments.join("/"))
  }
}

macro_rules! endpoint {
  (@define $ident:ident, $name:literal, $method:ident, $path:literal, $schema:ident, $location:ident, $implemented:literal) => {
    pub static $ident: Endpoint = Endpoint {
      name: $name,
      method: Method::$method,
      path: $path,
      schema: &schemas::$schema,
      location: ParamLocation::$location,
      implemented: $implemented,
    };
  };
  ($ident:ident, $name:literal, $method:ident, $path:literal, $schema:ident, $location:ident) => {
    endpoint!(@define $ident, $name, $method, $path, $schema, $location, true);
  };
  ($ident:ident, $name:literal, $method:ident, $path:literal, $schema:ident, $location:ident, stub) => {
    endpoint!(@define $ident, $name, $method, $path, $schema, $location, false);
  };
}

endpoint!(MYSELF, "myself", GET, "myself", EMPTY, Query);

endpoint!(CREATE_ISSUE, "issue.create", POST, "issue", CREATE_ISSUE, Body);
endpoint!(GET_ISSUE, "issue.get", GET, "issue/{issue}", GET_ISSUE, Query);
endpoint!(EDIT_ISSUE, "issue.edit", PUT, "issue/{issue}", EDIT_ISSUE, Body);
endpoint!(DELETE_ISSUE, "issue.delete", DELETE, "issue/{issue}", DELETE_ISSUE, Query);
endpoint!(SEARCH_ISSUES, "issue.search", POST, "search", SEARCH_ISSUES, Body);
endpoint!(ASSIGN_ISSUE, "issue.assign", PUT, "issue/{issue}/assignee", ASSIGN_ISSUE, Body, stub);
endpoint!(ADD_ATTACHMENT, "issue.attach", POST, "issue/{issue}/attachments", EMPTY, Body, stub);
endpoint!(GET_CHANGELOG, "issue.changelog", GET, "issue/{issue}/changelog", PAGE, Query, stub);
endpoint!(GET_EDIT_META, "issue.editmeta", GET, "issue/{issue}/editmeta", EMPTY, Query, stub);
endpoint!(SEND_NOTIFICATION, "issue.notify", POST, "issue/{issue}/notify", NOTIFY, Body, stub);

endpoint!(LIST_COMMENTS, "comment.list", GET, "issue/{issue}/comment", LIST_COMMENTS, Query);
endpoint!(ADD_COMMENT, "comment.add", POST, "issue/{issue}/comment", COMMENT_BODY, Body);
endpoint!(GET_COMMENT, "comment.get", GET, "issue/{issue}/comment/{id}", EXPAND, Query);
endpoint!(UPDATE_COMMENT, "comment.update", PUT, "issue/{issue}/comment/{id}", COMMENT_BODY, Body);
endpoint!(DELETE_COMMENT, "comment.delete", DELETE, "issue/{issue}/comment/{id}", EMPTY, Query);

endpoint!(LIST_WORKLOGS, "worklog.list", GET, "issue/{issue}/worklog", PAGE, Query);
endpoint!(ADD_WORKLOG, "worklog.add", POST, "issue/{issue}/worklog", WORKLOG_BODY, Body);
endpoint!(GET_WORKLOG, "worklog.get", GET, "issue/{issue}/worklog/{id}", EXPAND, Query);
endpoint!(UPDATE_WORKLOG, "worklog.update", PUT, "issue/{issue}/worklog/{id}", WORKLOG_BODY, Body);
endpoint!(DELETE_WORKLOG, "worklog.delete", DELETE, "issue/{issue}/worklog/{id}", DELETE_WORKLOG, Query);

endpoint!(LIST_PROPERTIES, "property.list", GET, "issue/{issue}/properties", EMPTY, Query);
endpoint!(GET_PROPERTY, "property.get", GET, "issue/{issue}/properties/{key}", EMPTY, Query);
endpoint!(SET_PROPERTY, "property.set", PUT, "issue/{issue}/properties/{key}", PROPERTY_VALUE, Body);
endpoint!(DELETE_PROPERTY, "property.delete", DELETE, "issue/{issue}/properties/{key}", EMPTY, Query);

endpoint!(LIST_TRANSITIONS, "transition.list", GET, "issue/{issue}/transitions", LIST_TRANSITIONS, Query);
endpoint!(DO_TRANSITION, "transition.do", POST, "issue/{issue}/transitions", DO_TRANSITION, Body);

/// Every known endpoint, grouped by resource
pub static ENDPOINTS: &[&Endpoint] = &[
  &MYSELF,
  &CREATE_ISSUE,
  &GET_ISSUE,
  &EDIT_ISSUE,
  &DELETE_ISSUE,
  &SEARCH_ISSUES,
  &ASSIGN_ISSUE,
  &ADD_ATTACHMENT,
  &GET_CHANGELOG,
  &GET_EDIT_META,
  &SEND_NOTIFICATION,
  &LIST_COMMENTS,
  &ADD_COMMENT,
  &GET_COMMENT,
  &UPDATE_COMMENT,
  &DELETE_COMMENT,
  &LIST_WORKLOGS,
  &ADD_WORKLOG,
  &GET_WORKLOG,
  &UPDATE_WORKLOG,
  &DELETE_WORKLOG,
  &LIST_PROPERTIES,
  &GET_PROPERTY,
  &SET_PROPERTY,
  &DELETE_PROPERTY,
  &LIST_TRANSITIONS,
  &DO_TRANSITION,
];

/// Look up an endpoint by its dotted name
pub fn endpoint(name: &str) -> Option<&'static Endpoint> {
  ENDPOINTS.iter().copied().find(|endpoint| endpoint.name == name)
}
