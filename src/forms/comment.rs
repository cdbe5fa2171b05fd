use serde::{Deserialize, Serialize};

use crate::schema::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentOut<T> {
  pub comment: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentList {
  pub comments: Vec<CommentData>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentAuthor {
  pub username: String,
  pub bio: Option<String>,
  pub image: String,
  pub following: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommentData {
  pub id: i64,
  pub created_at: String,
  pub updated_at: String,
  pub body: String,
  pub author: CommentAuthor,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateComment {
  pub body: String,
}

impl Contract for CommentOut<CommentData> {
  const KIND: ContractKind = ContractKind::Comment;
}

impl Contract for CommentList {
  const KIND: ContractKind = ContractKind::Comments;
}

impl Contract for CommentOut<CreateComment> {
  const KIND: ContractKind = ContractKind::CreateComment;
}

/// The comments endpoint always sends the full author, unlike the article
/// list, so nothing is optional here.
fn comment_author() -> Rule {
  object(vec![
    field("username", string()),
    field("bio", string().nullable()),
    field("image", string()),
    field("following", boolean()),
  ])
}

pub fn comment_object() -> Rule {
  object(vec![
    field("id", number().int()),
    field("createdAt", string().datetime()),
    field("updatedAt", string().datetime()),
    field("body", string()),
    field("author", comment_author()),
  ])
}

pub fn comment_rule() -> Rule {
  object(vec![field("comment", comment_object())])
}

pub fn comments_rule() -> Rule {
  object(vec![field("comments", array(comment_object()))])
}

pub fn create_comment_rule() -> Rule {
  object(vec![
    field("comment", object(vec![field("body", string().min_len(1))])),
  ])
}
