use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::*;
use crate::schema::*;

/// `{ "errors": { "email": ["is invalid"] } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorData {
  pub errors: BTreeMap<String, Vec<String>>,
}

/// `["generic failure"]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ApiErrorMessages(pub Vec<String>);

impl Contract for ApiErrorData {
  const KIND: ContractKind = ContractKind::ApiErrorData;
}

impl Contract for ApiErrorMessages {
  const KIND: ContractKind = ContractKind::ApiErrorMessages;
}

/// Error body returned by the API, tagged with the shape it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
  Fields(BTreeMap<String, Vec<String>>),
  Messages(Vec<String>),
}

impl ApiError {
  /// Match `value` against both error shapes. When neither fits, the
  /// violations of both attempts are returned.
  pub fn parse(value: &JsonValue) -> Result<Self> {
    Self::parse_with(default_registry(), value)
  }

  pub fn parse_with(registry: &Registry, value: &JsonValue) -> Result<Self> {
    let mut violations = match registry.parse::<ApiErrorData>(value) {
      Ok(data) => return Ok(ApiError::Fields(data.errors)),
      Err(Error::SchemaViolation(violations)) => violations,
      Err(err) => return Err(err),
    };
    match registry.parse::<ApiErrorMessages>(value) {
      Ok(messages) => Ok(ApiError::Messages(messages.0)),
      Err(Error::SchemaViolation(other)) => {
        violations.extend(other);
        Err(Error::SchemaViolation(violations))
      },
      Err(err) => Err(err),
    }
  }

  pub fn kind(&self) -> ContractKind {
    match self {
      ApiError::Fields(_) => ContractKind::ApiErrorData,
      ApiError::Messages(_) => ContractKind::ApiErrorMessages,
    }
  }

  /// Display lines: `"<field> <message>"` for field errors.
  pub fn messages(&self) -> Vec<String> {
    match self {
      ApiError::Fields(errors) => errors.iter()
        .flat_map(|(field, msgs)| msgs.iter().map(move |msg| format!("{} {}", field, msg)))
        .collect(),
      ApiError::Messages(msgs) => msgs.clone(),
    }
  }
}

pub fn api_error_data_rule() -> Rule {
  object(vec![field("errors", record(array(string())))])
}

pub fn api_error_messages_rule() -> Rule {
  array(string())
}
