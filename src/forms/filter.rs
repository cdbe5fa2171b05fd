use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::FilterQuery;
use crate::schema::*;
use crate::util::parse_number;

/// Query parameters for the article list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterQueryDto {
  pub offset: u64,
  pub limit: u64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub favorited: Option<String>,
}

impl FilterQueryDto {
  /// Unencoded `(name, value)` pairs in a stable order, refinements only when
  /// set.
  pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
      ("offset", self.offset.to_string()),
      ("limit", self.limit.to_string()),
    ];
    let refinements = [
      ("tag", &self.tag),
      ("author", &self.author),
      ("favorited", &self.favorited),
    ];
    for (name, val) in refinements.iter() {
      if let Some(val) = val {
        pairs.push((*name, val.clone()));
      }
    }
    pairs
  }
}

impl Contract for FilterQueryDto {
  const KIND: ContractKind = ContractKind::FilterQueryDto;
}

impl Contract for FilterQuery {
  const KIND: ContractKind = ContractKind::FilterQuery;
}

fn refinements() -> Vec<Field> {
  vec![
    field("tag", string().optional()),
    field("author", string().optional()),
    field("favorited", string().optional()),
  ]
}

pub fn filter_query_dto_rule() -> Rule {
  let mut fields = vec![
    field("offset", number().uint()),
    field("limit", number().uint().min(1.0)),
  ];
  fields.extend(refinements());
  object(fields)
}

fn is_positive_page(page: &JsonValue) -> bool {
  page.as_str()
    .and_then(parse_number)
    .map(|page| page > 0.0)
    .unwrap_or(false)
}

/// UI-side filter. `page` comes from form controls as a string or a number and
/// is kept in string form.
pub fn filter_query_rule() -> Rule {
  let mut fields = vec![
    field("page", coerce_string(string().refine(Refinement {
      path: vec![],
      message: "Page must be a positive number",
      check: is_positive_page,
    }))),
    field("source", enumeration(&["user", "global"])),
  ];
  fields.extend(refinements());
  object(fields)
}
