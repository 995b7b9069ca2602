//! Parameter schemas for every Jira endpoint the client exposes.
//!
//! Field names follow the Jira REST API v2 wire names so a normalized mapping
//! can be sent as-is.

use super::{DefaultValue, Field, ParamType, Schema};

const STRING: &[ParamType] = &[ParamType::String];
const INTEGER: &[ParamType] = &[ParamType::Integer];
const BOOLEAN: &[ParamType] = &[ParamType::Boolean];
const OBJECT: &[ParamType] = &[ParamType::Object];
const ARRAY: &[ParamType] = &[ParamType::Array];
const STRING_OR_ARRAY: &[ParamType] = &[ParamType::String, ParamType::Array];
const STRING_OR_INTEGER: &[ParamType] = &[ParamType::String, ParamType::Integer];
const STRING_OR_BOOLEAN: &[ParamType] = &[ParamType::String, ParamType::Boolean];
const STRING_OR_NULL: &[ParamType] = &[ParamType::String, ParamType::Null];

/// Requests that take no parameters at all
pub static EMPTY: Schema = Schema {
  name: "Empty",
  fields: &[],
};

pub static CREATE_ISSUE: Schema = Schema {
  name: "CreateIssue",
  fields: &[
    Field::required("fields", OBJECT),
    Field::optional("update", OBJECT),
    Field::optional("properties", ARRAY),
  ],
};

pub static GET_ISSUE: Schema = Schema {
  name: "GetIssue",
  fields: &[
    Field::optional("fields", STRING_OR_ARRAY),
    Field::optional("expand", STRING),
    Field::optional("properties", STRING_OR_ARRAY),
    Field::optional("fieldsByKeys", BOOLEAN).with_default(DefaultValue::Bool(false)),
    Field::optional("updateHistory", BOOLEAN).with_default(DefaultValue::Bool(false)),
  ],
};

pub static EDIT_ISSUE: Schema = Schema {
  name: "EditIssue",
  fields: &[
    Field::optional("fields", OBJECT),
    Field::optional("update", OBJECT),
    Field::optional("properties", ARRAY),
    Field::optional("historyMetadata", OBJECT),
  ],
};

pub static DELETE_ISSUE: Schema = Schema {
  name: "DeleteIssue",
  fields: &[Field::optional("deleteSubtasks", BOOLEAN).with_default(DefaultValue::Bool(false))],
};

pub static SEARCH_ISSUES: Schema = Schema {
  name: "SearchIssues",
  fields: &[
    Field::required("jql", STRING),
    Field::optional("startAt", INTEGER).with_default(DefaultValue::Int(0)),
    Field::optional("maxResults", INTEGER).with_default(DefaultValue::Int(50)),
    Field::optional("validateQuery", STRING_OR_BOOLEAN),
    Field::optional("fields", ARRAY),
    Field::optional("expand", ARRAY),
    Field::optional("properties", ARRAY),
    Field::optional("fieldsByKeys", BOOLEAN),
  ],
};

pub static ASSIGN_ISSUE: Schema = Schema {
  name: "AssignIssue",
  fields: &[
    Field::optional("accountId", STRING_OR_NULL),
    Field::optional("name", STRING_OR_NULL),
  ],
};

pub static NOTIFY: Schema = Schema {
  name: "Notify",
  fields: &[
    Field::optional("subject", STRING),
    Field::optional("textBody", STRING),
    Field::optional("htmlBody", STRING),
    Field::required("to", OBJECT),
    Field::optional("restrict", OBJECT),
  ],
};

/// Paging parameters shared by list endpoints
pub static PAGE: Schema = Schema {
  name: "Page",
  fields: &[
    Field::optional("startAt", INTEGER),
    Field::optional("maxResults", INTEGER),
  ],
};

pub static EXPAND: Schema = Schema {
  name: "Expand",
  fields: &[Field::optional("expand", STRING)],
};

pub static LIST_COMMENTS: Schema = Schema {
  name: "ListComments",
  fields: &[
    Field::optional("startAt", INTEGER),
    Field::optional("maxResults", INTEGER),
    Field::optional("orderBy", STRING),
    Field::optional("expand", STRING),
  ],
};

pub static COMMENT_BODY: Schema = Schema {
  name: "CommentBody",
  fields: &[
    Field::required("body", STRING),
    Field::optional("visibility", OBJECT),
    Field::optional("properties", ARRAY),
  ],
};

pub static WORKLOG_BODY: Schema = Schema {
  name: "WorklogBody",
  fields: &[
    Field::optional("comment", STRING),
    Field::optional("started", STRING),
    Field::optional("timeSpent", STRING),
    Field::optional("timeSpentSeconds", STRING_OR_INTEGER),
    Field::optional("visibility", OBJECT),
    Field::optional("properties", ARRAY),
  ],
};

pub static DELETE_WORKLOG: Schema = Schema {
  name: "DeleteWorklog",
  fields: &[
    Field::optional("adjustEstimate", STRING).with_default(DefaultValue::Str("auto")),
    Field::optional("newEstimate", STRING),
    Field::optional("increaseBy", STRING),
    Field::optional("notifyUsers", BOOLEAN).with_default(DefaultValue::Bool(true)),
  ],
};

pub static PROPERTY_VALUE: Schema = Schema {
  name: "PropertyValue",
  fields: &[Field::required("value", ParamType::ANY)],
};

pub static LIST_TRANSITIONS: Schema = Schema {
  name: "ListTransitions",
  fields: &[
    Field::optional("expand", STRING),
    Field::optional("transitionId", STRING_OR_INTEGER),
    Field::optional("skipRemoteOnlyCondition", BOOLEAN),
    Field::optional("includeUnavailableTransitions", BOOLEAN),
  ],
};

pub static DO_TRANSITION: Schema = Schema {
  name: "DoTransition",
  fields: &[
    Field::required("transition", OBJECT),
    Field::optional("fields", OBJECT),
    Field::optional("update", OBJECT),
    Field::optional("historyMetadata", OBJECT),
    Field::optional("properties", ARRAY),
  ],
};
