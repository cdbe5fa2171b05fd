use serde::{Deserialize, Serialize};

use crate::schema::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TagList {
  pub tags: Vec<String>,
}

impl Contract for TagList {
  const KIND: ContractKind = ContractKind::Tags;
}

pub fn tags_rule() -> Rule {
  object(vec![field("tags", array(string()))])
}
