//! # Request Parameters
//!
//! Declarative parameter schemas and the validator that normalizes a caller's
//! parameter mapping against them before anything is sent to Jira.
//!
//! A [`Schema`] is an ordered list of [`Field`] declarations. Validation
//! rejects undeclared keys and values of the wrong JSON type, fills declared
//! defaults for omitted fields, and rejects omitted mandatory fields. Values
//! are only checked at the outer level: an `object` field accepts any object.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{JiraError, Result};

pub mod schemas;

/// Parameter mapping supplied by callers and handed to the transport
pub type Params = Map<String, Value>;

/// Build a [`Params`] mapping from `key => value` pairs.
///
/// Values can be anything convertible into a [`serde_json::Value`], including
/// the output of [`serde_json::json!`].
///
/// ```
/// use sprig_jira::params;
///
/// let params = params! { "deleteSubtasks" => true, "startAt" => 10 };
/// assert_eq!(params.len(), 2);
/// ```
#[macro_export]
macro_rules! params {
  () => {
    $crate::Params::new()
  };
  ($($key:expr => $value:expr),+ $(,)?) => {{
    let mut params = $crate::Params::new();
    $(
      params.insert(::std::string::ToString::to_string(&$key), $crate::params::into_param($value));
    )+
    params
  }};
}

#[doc(hidden)]
pub fn into_param<V: Into<Value>>(value: V) -> Value {
  value.into()
}

/// JSON type accepted by a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
  String,
  Integer,
  Number,
  Boolean,
  Object,
  Array,
  Null,
}

/// `10.0` is a whole number that fits an i64; `1e300` and `4.5` are not
fn is_whole_i64(n: f64) -> bool {
  n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64
}

impl ParamType {
  /// Every JSON type, for fields that take arbitrary values
  pub const ANY: &'static [ParamType] = &[
    ParamType::String,
    ParamType::Integer,
    ParamType::Number,
    ParamType::Boolean,
    ParamType::Object,
    ParamType::Array,
    ParamType::Null,
  ];

  /// Classify a JSON value. Numbers without a fractional part are integers.
  pub fn of(value: &Value) -> Self {
    match value {
      Value::Null => ParamType::Null,
      Value::Bool(_) => ParamType::Boolean,
      Value::Number(n) if n.is_i64() || n.is_u64() => ParamType::Integer,
      Value::Number(n) if n.as_f64().is_some_and(is_whole_i64) => ParamType::Integer,
      Value::Number(_) => ParamType::Number,
      Value::String(_) => ParamType::String,
      Value::Array(_) => ParamType::Array,
      Value::Object(_) => ParamType::Object,
    }
  }

  /// Whether a value of type `found` satisfies this type
  pub fn admits(self, found: ParamType) -> bool {
    self == found || (self == ParamType::Number && found == ParamType::Integer)
  }

  pub const fn as_str(self) -> &'static str {
    match self {
      ParamType::String => "string",
      ParamType::Integer => "integer",
      ParamType::Number => "number",
      ParamType::Boolean => "boolean",
      ParamType::Object => "object",
      ParamType::Array => "array",
      ParamType::Null => "null",
    }
  }

  /// Render a type union as prose, e.g. `string, integer or null`
  pub fn describe_all(types: &[ParamType]) -> String {
    if types.len() == ParamType::ANY.len() {
      return "any type".to_string();
    }
    match types.split_last() {
      None => "nothing".to_string(),
      Some((last, [])) => last.to_string(),
      Some((last, rest)) => {
        let head = rest.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ");
        format!("{head} or {last}")
      }
    }
  }
}

impl fmt::Display for ParamType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Default value filled in for an omitted field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
  Bool(bool),
  Int(i64),
  Str(&'static str),
}

impl DefaultValue {
  pub fn to_value(self) -> Value {
    match self {
      DefaultValue::Bool(b) => Value::Bool(b),
      DefaultValue::Int(i) => Value::from(i),
      DefaultValue::Str(s) => Value::from(s),
    }
  }
}

impl fmt::Display for DefaultValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DefaultValue::Bool(b) => write!(f, "{b}"),
      DefaultValue::Int(i) => write!(f, "{i}"),
      DefaultValue::Str(s) => write!(f, "\"{s}\""),
    }
  }
}

/// A single declared parameter
#[derive(Debug, Clone, Copy)]
pub struct Field {
  pub name: &'static str,
  pub accepts: &'static [ParamType],
  pub default: Option<DefaultValue>,
  pub required: bool,
}

impl Field {
  /// Declare an optional field with no default
  pub const fn optional(name: &'static str, accepts: &'static [ParamType]) -> Self {
    Self {
      name,
      accepts,
      default: None,
      required: false,
    }
  }

  /// Declare a mandatory field
  pub const fn required(name: &'static str, accepts: &'static [ParamType]) -> Self {
    Self {
      name,
      accepts,
      default: None,
      required: true,
    }
  }

  /// Attach a default used when the caller omits the field
  pub const fn with_default(self, default: DefaultValue) -> Self {
    Self {
      default: Some(default),
      ..self
    }
  }

  pub fn admits(&self, value: &Value) -> bool {
    let found = ParamType::of(value);
    self.accepts.iter().any(|accepted| accepted.admits(found))
  }
}

/// Ordered, immutable set of field declarations for one kind of request
#[derive(Debug)]
pub struct Schema {
  pub name: &'static str,
  pub fields: &'static [Field],
}

impl Schema {
  /// Look up a declared field by name
  pub fn field(&self, name: &str) -> Option<&Field> {
    self.fields.iter().find(|field| field.name == name)
  }

  /// Validate `params` and return the normalized mapping.
  ///
  /// Undeclared keys are reported first (the smallest one by key order), then fields are checked in
  /// declaration order. The result holds every supplied field, every omitted
  /// field that has a default, and nothing else.
  pub fn validate(&self, mut params: Params) -> Result<Params> {
    if let Some(unknown) = params.keys().filter(|key| self.field(key).is_none()).min() {
      return Err(JiraError::UnknownParameter {
        schema: self.name,
        name: unknown.clone(),
      });
    }

    let mut normalized = Params::new();
    for field in self.fields {
      match params.remove(field.name) {
        Some(value) => {
          if !field.admits(&value) {
            return Err(JiraError::TypeMismatch {
              schema: self.name,
              name: field.name.to_string(),
              expected: field.accepts,
              found: ParamType::of(&value),
            });
          }
          normalized.insert(field.name.to_string(), value);
        }
        None => match field.default {
          Some(default) => {
            normalized.insert(field.name.to_string(), default.to_value());
          }
          None if field.required => {
            return Err(JiraError::MissingParameter {
              schema: self.name,
              name: field.name.to_string(),
            });
          }
          None => {}
        },
      }
    }

    Ok(normalized)
  }
}
