use serde::{Deserialize, Serialize};

use crate::util::parse_number;

/// Which feed a list query reads from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedSource {
  /// Articles by authors the viewer follows.
  User,
  Global,
}

impl FeedSource {
  pub fn endpoint(&self) -> &'static str {
    match self {
      FeedSource::User => "/articles/feed",
      FeedSource::Global => "/articles",
    }
  }
}

impl Default for FeedSource {
  fn default() -> Self {
    FeedSource::Global
  }
}

/// Article list filter as held by the UI. `page` is 1-based and kept as the
/// string a form control produces.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterQuery {
  pub page: String,
  pub source: FeedSource,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub favorited: Option<String>,
}

impl FilterQuery {
  pub fn new(page: u32, source: FeedSource) -> Self {
    Self {
      page: page.to_string(),
      source,
      ..Default::default()
    }
  }

  pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
    self.tag = Some(tag.into());
    self
  }

  pub fn with_author(mut self, author: impl Into<String>) -> Self {
    self.author = Some(author.into());
    self
  }

  pub fn with_favorited(mut self, username: impl Into<String>) -> Self {
    self.favorited = Some(username.into());
    self
  }

  /// Numeric page, if `page` holds a number.
  pub fn page_number(&self) -> Option<f64> {
    parse_number(&self.page)
  }

  pub fn endpoint(&self) -> &'static str {
    self.source.endpoint()
  }
}
