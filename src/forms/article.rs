use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::schema::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArticleOut<T> {
  pub article: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleList<T> {
  pub articles: Vec<T>,
  pub articles_count: u64,
}

/// Author as embedded in article payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthorData {
  pub username: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub following: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
  pub slug: String,
  pub title: String,
  pub description: String,
  pub body: String,
  pub tag_list: Vec<String>,
  pub created_at: String,
  pub updated_at: String,
  pub favorited: bool,
  pub favorites_count: u64,
  pub author: AuthorData,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comments: Option<Vec<JsonValue>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticle {
  pub title: String,
  pub description: String,
  pub body: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticle {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag_list: Option<Vec<String>>,
}

impl Contract for ArticleOut<ArticleData> {
  const KIND: ContractKind = ContractKind::Article;
}

impl Contract for ArticleList<ArticleData> {
  const KIND: ContractKind = ContractKind::Articles;
}

impl Contract for ArticleOut<CreateArticle> {
  const KIND: ContractKind = ContractKind::CreateArticle;
}

impl Contract for ArticleOut<UpdateArticle> {
  const KIND: ContractKind = ContractKind::UpdateArticle;
}

fn timestamp(options: &RegistryOptions) -> Rule {
  if options.strict_timestamps {
    string().datetime()
  } else {
    string()
  }
}

/// The list endpoint leaves out `bio`, `image` and `following` on authors and
/// sends `null` for an unset bio or image, so only `username` is required
/// here. This is looser than the `Author` entity on purpose; the mapper fills
/// in the defaults.
fn author_in_article() -> Rule {
  object(vec![
    field("username", string()),
    field("email", string().email().optional()),
    field("bio", string().nullable().optional()),
    field("image", string().nullable().optional()),
    field("following", boolean().optional()),
  ])
}

pub fn article_object(options: &RegistryOptions) -> Rule {
  object(vec![
    field("slug", string()),
    field("title", string()),
    field("description", string()),
    field("body", string()),
    field("tagList", array(string())),
    field("createdAt", timestamp(options)),
    field("updatedAt", timestamp(options)),
    field("favorited", boolean()),
    field("favoritesCount", number().uint()),
    field("author", author_in_article()),
    // some backends over-fetch comments into the article; contents unchecked.
    field("comments", array(any()).optional()),
  ])
}

pub fn article_rule(options: &RegistryOptions) -> Rule {
  object(vec![field("article", article_object(options))])
}

pub fn articles_rule(options: &RegistryOptions) -> Rule {
  object(vec![
    field("articles", array(article_object(options))),
    field("articlesCount", number().uint()),
  ])
}

pub fn create_article_rule() -> Rule {
  object(vec![
    field("article", object(vec![
      field("title", string().min_len(1)),
      field("description", string().min_len(1)),
      field("body", string().min_len(1)),
      field("tagList", array(string()).optional()),
    ])),
  ])
}

pub fn update_article_rule() -> Rule {
  object(vec![
    field("article", object(vec![
      field("title", string().optional()),
      field("description", string().optional()),
      field("body", string().optional()),
      field("tagList", array(string()).optional()),
    ])),
  ])
}

// Entity side: what the mapper guarantees.

fn author_entity() -> Rule {
  object(vec![
    field("username", string()),
    field("email", string().optional()),
    field("bio", string()),
    field("image", string()),
    field("following", boolean()),
  ])
}

pub fn article_entity_rule() -> Rule {
  object(vec![
    field("slug", string()),
    field("title", string()),
    field("description", string()),
    field("body", string()),
    field("tagList", array(string())),
    field("createdAt", string()),
    field("updatedAt", string()),
    field("favorited", boolean()),
    field("favoritesCount", number().uint()),
    field("author", author_entity()),
  ])
}

pub fn articles_entity_rule() -> Rule {
  object(vec![
    field("articles", record(article_entity_rule())),
    field("articlesCount", number().uint()),
  ])
}
