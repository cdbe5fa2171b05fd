use crate::forms::article::*;
use crate::models::*;

/// Build the author entity; a missing, `null` or empty bio/image becomes `""`
/// and a missing `following` becomes `false`.
pub fn map_author(author: AuthorData) -> Author {
  Author {
    username: author.username,
    email: author.email,
    bio: author.bio.unwrap_or_default(),
    image: author.image.unwrap_or_default(),
    following: author.following.unwrap_or(false),
  }
}

/// Map one validated article. Never fails.
pub fn map_article(article: ArticleData) -> Article {
  Article {
    slug: article.slug,
    title: article.title,
    description: article.description,
    body: article.body,
    tag_list: article.tag_list.into_iter().filter(|tag| !tag.is_empty()).collect(),
    created_at: article.created_at,
    updated_at: article.updated_at,
    favorited: article.favorited,
    favorites_count: article.favorites_count,
    author: map_author(article.author),
  }
}

pub fn map_article_response(res: ArticleOut<ArticleData>) -> Article {
  map_article(res.article)
}

/// Key every article by slug, in wire order. On a repeated slug the later
/// article wins and the slug stays where it first appeared.
pub fn map_articles_response(res: ArticleList<ArticleData>) -> Articles {
  let mut articles = Articles::new(res.articles_count);
  for article in res.articles {
    articles.insert(map_article(article));
  }
  articles
}

impl From<AuthorData> for Author {
  fn from(author: AuthorData) -> Self {
    map_author(author)
  }
}

impl From<ArticleData> for Article {
  fn from(article: ArticleData) -> Self {
    map_article(article)
  }
}

impl From<ArticleOut<ArticleData>> for Article {
  fn from(res: ArticleOut<ArticleData>) -> Self {
    map_article_response(res)
  }
}

impl From<ArticleList<ArticleData>> for Articles {
  fn from(res: ArticleList<ArticleData>) -> Self {
    map_articles_response(res)
  }
}
