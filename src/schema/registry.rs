use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::*;
use crate::forms;

use super::Rule;

/// Every payload kind with a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
  Article,
  Articles,
  CreateArticle,
  UpdateArticle,
  FilterQuery,
  FilterQueryDto,
  Comment,
  Comments,
  CreateComment,
  Profile,
  User,
  LoginUser,
  RegisterUser,
  UpdateUser,
  Tags,
  ApiErrorData,
  ApiErrorMessages,
  ArticleEntity,
  ArticlesEntity,
}

impl ContractKind {
  pub const ALL: [ContractKind; 19] = [
    ContractKind::Article,
    ContractKind::Articles,
    ContractKind::CreateArticle,
    ContractKind::UpdateArticle,
    ContractKind::FilterQuery,
    ContractKind::FilterQueryDto,
    ContractKind::Comment,
    ContractKind::Comments,
    ContractKind::CreateComment,
    ContractKind::Profile,
    ContractKind::User,
    ContractKind::LoginUser,
    ContractKind::RegisterUser,
    ContractKind::UpdateUser,
    ContractKind::Tags,
    ContractKind::ApiErrorData,
    ContractKind::ApiErrorMessages,
    ContractKind::ArticleEntity,
    ContractKind::ArticlesEntity,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      ContractKind::Article => "article",
      ContractKind::Articles => "articles",
      ContractKind::CreateArticle => "create-article",
      ContractKind::UpdateArticle => "update-article",
      ContractKind::FilterQuery => "filter-query",
      ContractKind::FilterQueryDto => "filter-query-dto",
      ContractKind::Comment => "comment",
      ContractKind::Comments => "comments",
      ContractKind::CreateComment => "create-comment",
      ContractKind::Profile => "profile",
      ContractKind::User => "user",
      ContractKind::LoginUser => "login-user",
      ContractKind::RegisterUser => "register-user",
      ContractKind::UpdateUser => "update-user",
      ContractKind::Tags => "tags",
      ContractKind::ApiErrorData => "api-error-data",
      ContractKind::ApiErrorMessages => "api-error-messages",
      ContractKind::ArticleEntity => "article-entity",
      ContractKind::ArticlesEntity => "articles-entity",
    }
  }
}

impl fmt::Display for ContractKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ContractKind {
  type Err = Error;

  fn from_str(name: &str) -> Result<Self> {
    ContractKind::ALL.iter()
      .find(|kind| kind.name() == name)
      .copied()
      .ok_or_else(|| Error::UnknownContract(name.to_string()))
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryOptions {
  /// Require RFC 3339 `createdAt`/`updatedAt` on articles. Comment
  /// timestamps are always checked.
  pub strict_timestamps: bool,
}

/// Compiled rules for every contract.
#[derive(Debug, Clone)]
pub struct Registry {
  options: RegistryOptions,
  rules: HashMap<ContractKind, Rule>,
}

lazy_static! {
  static ref DEFAULT_REGISTRY: Registry = Registry::new(RegistryOptions::default());
}

/// Registry built with default options.
pub fn default_registry() -> &'static Registry {
  &DEFAULT_REGISTRY
}

impl Registry {
  pub fn new(options: RegistryOptions) -> Self {
    let rules = ContractKind::ALL.iter()
      .map(|kind| (*kind, forms::contract_rule(*kind, &options)))
      .collect();
    Self {
      options,
      rules,
    }
  }

  pub fn options(&self) -> &RegistryOptions {
    &self.options
  }

  pub fn rule(&self, kind: ContractKind) -> &Rule {
    // every kind is compiled in `new`.
    &self.rules[&kind]
  }

  /// Check `value` against a contract, returning the normalized value.
  pub fn validate(&self, kind: ContractKind, value: &JsonValue) -> Result<JsonValue> {
    Ok(self.rule(kind).parse(value)?)
  }

  /// Check `value` and deserialize it into the contract's typed view.
  pub fn parse<T: Contract>(&self, value: &JsonValue) -> Result<T> {
    let value = self.validate(T::KIND, value)?;
    Ok(serde_json::from_value(value)?)
  }
}

/// Typed view of a payload accepted by a contract.
pub trait Contract: DeserializeOwned {
  const KIND: ContractKind;

  /// Validate with the default registry.
  fn parse(value: &JsonValue) -> Result<Self> {
    default_registry().parse(value)
  }

  fn parse_str(json: &str) -> Result<Self> {
    let value: JsonValue = serde_json::from_str(json)?;
    Self::parse(&value)
  }
}
