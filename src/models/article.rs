use indexmap::IndexMap;

use serde::{Deserialize, Serialize};

use crate::schema::{Contract, ContractKind};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Author {
  pub username: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  pub bio: String,
  pub image: String,
  pub following: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
  pub slug: String,
  pub title: String,
  pub description: String,
  pub body: String,
  pub tag_list: Vec<String>,
  pub created_at: String,
  pub updated_at: String,
  pub favorited: bool,
  pub favorites_count: u64,
  pub author: Author,
}

/// One page of articles keyed by slug, iterating in fetch order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Articles {
  pub articles: IndexMap<String, Article>,
  /// Server-side total, not the size of this page.
  pub articles_count: u64,
}

impl Articles {
  pub fn new(articles_count: u64) -> Self {
    Self {
      articles: IndexMap::new(),
      articles_count,
    }
  }

  /// Add `article` under its slug. A repeated slug replaces the earlier
  /// article but keeps its position.
  pub fn insert(&mut self, article: Article) -> Option<Article> {
    self.articles.insert(article.slug.clone(), article)
  }

  pub fn get(&self, slug: &str) -> Option<&Article> {
    self.articles.get(slug)
  }

  pub fn len(&self) -> usize {
    self.articles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.articles.is_empty()
  }

  /// Slugs in display order.
  pub fn slugs(&self) -> impl Iterator<Item = &str> {
    self.articles.keys().map(|slug| slug.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = &Article> {
    self.articles.values()
  }
}

impl Contract for Article {
  const KIND: ContractKind = ContractKind::ArticleEntity;
}

impl Contract for Articles {
  const KIND: ContractKind = ContractKind::ArticlesEntity;
}
