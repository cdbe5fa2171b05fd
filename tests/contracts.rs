use rstest::rstest;
use serde_json::{json, Value as JsonValue};

use realworld_contracts::error::Error;
use realworld_contracts::forms::*;
use realworld_contracts::models::*;
use realworld_contracts::schema::*;

fn article_json() -> JsonValue {
  json!({
    "slug": "how-to-train-your-dragon",
    "title": "How to train your dragon",
    "description": "Ever wonder how?",
    "body": "It takes a Jacobian",
    "tagList": ["dragons", "training"],
    "createdAt": "2016-02-18T03:22:56.637Z",
    "updatedAt": "2016-02-18T03:48:35.824Z",
    "favorited": false,
    "favoritesCount": 0,
    "author": {
      "username": "jake",
      "bio": "I work at statefarm",
      "image": "https://i.stack.imgur.com/xHWG8.jpg",
      "following": false
    }
  })
}

fn comment_json() -> JsonValue {
  json!({
    "id": 1,
    "createdAt": "2016-02-18T03:22:56.637Z",
    "updatedAt": "2016-02-18T03:22:56.637Z",
    "body": "It takes a Jacobian",
    "author": {
      "username": "jake",
      "bio": null,
      "image": "https://i.stack.imgur.com/xHWG8.jpg",
      "following": false
    }
  })
}

fn rejected(err: Error) -> Violations {
  match err {
    Error::SchemaViolation(violations) => violations,
    err => panic!("expected a schema violation, got {:?}", err),
  }
}

fn paths(violations: &Violations) -> Vec<String> {
  violations.iter().map(|v| v.path_string()).collect()
}

#[test]
fn single_article_is_accepted() {
  let res = ArticleOut::<ArticleData>::parse(&json!({ "article": article_json() })).unwrap();
  assert_eq!(res.article.slug, "how-to-train-your-dragon");
  assert_eq!(res.article.author.following, Some(false));
}

#[test]
fn list_author_may_omit_profile_fields() {
  let mut article = article_json();
  article["author"] = json!({ "username": "jake", "bio": null });
  let list = ArticleList::<ArticleData>::parse(&json!({
    "articles": [article],
    "articlesCount": 42,
  })).unwrap();

  let author = &list.articles[0].author;
  assert_eq!(author.bio, None);
  assert_eq!(author.image, None);
  assert_eq!(author.following, None);
  assert_eq!(list.articles_count, 42);
}

#[test]
fn unexpected_comments_are_tolerated() {
  let mut article = article_json();
  article["comments"] = json!([{ "anything": true }, 3, null]);
  let res = ArticleOut::<ArticleData>::parse(&json!({ "article": article })).unwrap();
  assert_eq!(res.article.comments.map(|c| c.len()), Some(3));
}

#[test]
fn every_bad_field_is_reported() {
  let mut article = article_json();
  article["tagList"] = json!(["ok", 7]);
  article["favorited"] = json!("no");
  article.as_object_mut().unwrap().remove("slug");

  let err = ArticleOut::<ArticleData>::parse(&json!({ "article": article })).unwrap_err();
  let violations = rejected(err);
  assert_eq!(paths(&violations), vec![
    "article.slug",
    "article.tagList.1",
    "article.favorited",
  ]);
  assert_eq!(violations.at("article.slug").unwrap().message, "Required");
  assert_eq!(violations.at("article.favorited").unwrap().message, "Expected boolean, received string");
}

#[test]
fn list_items_report_their_position() {
  let mut bad = article_json();
  bad["author"] = json!({ "bio": "no name" });
  let err = ArticleList::<ArticleData>::parse(&json!({
    "articles": [article_json(), bad],
    "articlesCount": 2,
  })).unwrap_err();
  assert_eq!(paths(&rejected(err)), vec!["articles.1.author.username"]);
}

#[test]
fn strict_timestamps_are_opt_in() {
  let mut article = article_json();
  article["createdAt"] = json!("last tuesday");
  let payload = json!({ "article": article });

  assert!(default_registry().validate(ContractKind::Article, &payload).is_ok());

  let strict = Registry::new(RegistryOptions { strict_timestamps: true });
  let err = strict.validate(ContractKind::Article, &payload).unwrap_err();
  let violations = rejected(err);
  assert_eq!(violations.at("article.createdAt").unwrap().message, "Invalid datetime");
}

#[rstest]
#[case(json!({ "offset": 0, "limit": 10 }), true)]
#[case(json!({ "offset": 20, "limit": 10, "tag": "dragons", "author": "jake" }), true)]
#[case(json!({ "offset": -1, "limit": 10 }), false)]
#[case(json!({ "offset": 0, "limit": 0 }), false)]
#[case(json!({ "offset": 0, "limit": 10, "favorited": 1 }), false)]
#[case(json!({ "offset": 0, "limit": 1e20 }), false)]
fn filter_query_dto_bounds(#[case] payload: JsonValue, #[case] ok: bool) {
  assert_eq!(FilterQueryDto::parse(&payload).is_ok(), ok);
}

#[test]
fn create_article_needs_content() {
  let ok = ArticleOut::<CreateArticle>::parse(&json!({
    "article": { "title": "t", "description": "d", "body": "b", "tagList": ["x"] }
  })).unwrap();
  assert_eq!(ok.article.tag_list, Some(vec!["x".to_string()]));

  let err = ArticleOut::<CreateArticle>::parse(&json!({
    "article": { "title": "", "description": "d" }
  })).unwrap_err();
  let violations = rejected(err);
  assert_eq!(paths(&violations), vec!["article.title", "article.body"]);
  assert_eq!(violations.at("article.title").unwrap().message, "String must contain at least 1 character(s)");
}

#[test]
fn update_article_fields_are_optional() {
  let res = ArticleOut::<UpdateArticle>::parse(&json!({ "article": {} })).unwrap();
  assert_eq!(res.article, UpdateArticle::default());
  assert!(ArticleOut::<UpdateArticle>::parse(&json!({ "article": { "title": 1 } })).is_err());
}

#[test]
fn comments_need_full_author() {
  let list = CommentList::parse(&json!({ "comments": [comment_json()] })).unwrap();
  assert_eq!(list.comments[0].author.bio, None);

  let mut comment = comment_json();
  comment["author"].as_object_mut().unwrap().remove("following");
  comment["createdAt"] = json!("not a date");
  let err = CommentOut::<CommentData>::parse(&json!({ "comment": comment })).unwrap_err();
  assert_eq!(paths(&rejected(err)), vec!["comment.createdAt", "comment.author.following"]);
}

#[test]
fn integer_fields_reject_values_their_type_cannot_hold() {
  let mut article = article_json();
  article["favoritesCount"] = json!(1e20);
  let err = ArticleOut::<ArticleData>::parse(&json!({ "article": article })).unwrap_err();
  let violations = rejected(err);
  let violation = violations.at("article.favoritesCount").unwrap();
  assert_eq!(violation.code, ViolationCode::TooBig);
  assert_eq!(violation.message, "Number must be less than or equal to 18446744073709551615");

  let mut comment = comment_json();
  comment["id"] = json!(u64::MAX);
  let err = CommentOut::<CommentData>::parse(&json!({ "comment": comment })).unwrap_err();
  let violations = rejected(err);
  assert_eq!(paths(&violations), vec!["comment.id"]);
  assert_eq!(violations.at("comment.id").unwrap().message, "Number must be less than or equal to 9223372036854775807");

  let mut comment = comment_json();
  comment["id"] = json!(i64::MAX);
  let ok = CommentOut::<CommentData>::parse(&json!({ "comment": comment })).unwrap();
  assert_eq!(ok.comment.id, i64::MAX);
}

#[test]
fn create_comment_needs_body() {
  assert!(CommentOut::<CreateComment>::parse(&json!({ "comment": { "body": "hi" } })).is_ok());
  assert!(CommentOut::<CreateComment>::parse(&json!({ "comment": { "body": "" } })).is_err());
}

#[test]
fn profile_following_is_required() {
  let profile = ProfileOut::parse(&json!({
    "profile": { "username": "jake", "bio": null, "image": null, "following": true }
  })).unwrap();
  assert!(profile.profile.following);

  let err = ProfileOut::parse(&json!({
    "profile": { "username": "jake", "bio": null, "image": null }
  })).unwrap_err();
  assert_eq!(paths(&rejected(err)), vec!["profile.following"]);
}

#[test]
fn session_user() {
  let user = UserOut::<UserData>::parse(&json!({
    "user": {
      "email": "jake@jake.jake",
      "token": "jwt.token.here",
      "username": "jake",
      "bio": null,
      "image": null
    }
  })).unwrap();
  assert_eq!(user.user.token, "jwt.token.here");
  assert!(UserOut::<UserData>::parse(&json!({ "user": { "email": "jake@jake.jake" } })).is_err());
}

#[test]
fn login_reports_email_and_password() {
  let err = UserOut::<LoginUser>::parse(&json!({
    "user": { "email": "not-an-email", "password": "short" }
  })).unwrap_err();
  let violations = rejected(err);
  assert_eq!(violations.len(), 2);
  assert_eq!(violations.at("user.email").unwrap().message, "Invalid email");
  assert_eq!(violations.at("user.password").unwrap().message, "String must contain at least 8 character(s)");
}

#[rstest]
#[case("jake", "jake@jake.jake", "password1", vec!["user.username"])]
#[case("jacob", "jake", "password1", vec!["user.email"])]
#[case("jacob", "jake@jake.jake", "pass", vec!["user.password"])]
#[case("jacob", "jake@jake.jake", "password1", vec![])]
fn register_rules(
  #[case] username: &str,
  #[case] email: &str,
  #[case] password: &str,
  #[case] expected: Vec<&str>,
) {
  let res = UserOut::<RegisterUser>::parse(&json!({
    "user": { "username": username, "email": email, "password": password }
  }));
  match res {
    Ok(_) => assert!(expected.is_empty()),
    Err(err) => assert_eq!(paths(&rejected(err)), expected),
  }
}

#[test]
fn update_user_needs_one_field() {
  let err = UserOut::<UpdateUser>::parse(&json!({ "user": {} })).unwrap_err();
  let violations = rejected(err);
  assert_eq!(violations.len(), 1);
  let root = violations.iter().next().unwrap();
  assert!(root.is_root());
  assert_eq!(root.path_string(), "user.root");
  assert_eq!(root.message, "One of the fields must be defined");

  // empty strings alone are not enough
  let err = UserOut::<UpdateUser>::parse(&json!({ "user": { "bio": "", "image": "" } })).unwrap_err();
  assert!(rejected(err).iter().all(|v| v.is_root()));

  let ok = UserOut::<UpdateUser>::parse(&json!({ "user": { "bio": "hi" } })).unwrap();
  assert_eq!(ok.user.bio.as_deref(), Some("hi"));
}

#[test]
fn update_user_empty_string_is_a_valid_sentinel() {
  let ok = UserOut::<UpdateUser>::parse(&json!({
    "user": { "email": "", "username": "", "password": "", "bio": "new bio" }
  })).unwrap();
  assert_eq!(ok.user.email.as_deref(), Some(""));

  let err = UserOut::<UpdateUser>::parse(&json!({
    "user": { "email": "nope", "username": "abc" }
  })).unwrap_err();
  let violations = rejected(err);
  assert_eq!(violations.at("user.email").unwrap().message, "Invalid email");
  assert_eq!(violations.at("user.username").unwrap().message, "String must contain at least 5 character(s)");
  assert!(!violations.iter().any(|v| v.is_root()));
}

#[test]
fn tags() {
  let tags = TagList::parse(&json!({ "tags": ["dragons", "training"] })).unwrap();
  assert_eq!(tags.tags, vec!["dragons", "training"]);
  assert!(TagList::parse(&json!({ "tags": "dragons" })).is_err());
}

#[test]
fn api_error_shapes_are_told_apart() {
  let fields = ApiError::parse(&json!({ "errors": { "email": ["is invalid"] } })).unwrap();
  assert_eq!(fields.kind(), ContractKind::ApiErrorData);
  assert_eq!(fields.messages(), vec!["email is invalid"]);

  let messages = ApiError::parse(&json!(["generic failure"])).unwrap();
  assert_eq!(messages, ApiError::Messages(vec!["generic failure".to_string()]));
  assert_eq!(messages.kind(), ContractKind::ApiErrorMessages);

  assert!(ApiErrorData::parse(&json!({ "errors": { "email": ["is invalid"] } })).is_ok());
  assert!(ApiErrorMessages::parse(&json!(["generic failure"])).is_ok());
}

#[test]
fn api_error_matching_neither_shape() {
  let err = ApiError::parse(&json!({ "message": "boom" })).unwrap_err();
  let violations = rejected(err);
  assert_eq!(paths(&violations), vec!["errors", ""]);
}

#[rstest]
#[case(json!("2"), "2")]
#[case(json!(3), "3")]
#[case(json!(" 4 "), " 4 ")]
fn filter_query_page_is_kept_as_string(#[case] page: JsonValue, #[case] expected: &str) {
  let filter = FilterQuery::parse(&json!({ "page": page, "source": "global", "tag": "dragons" })).unwrap();
  assert_eq!(filter.page, expected);
  assert_eq!(filter.source, FeedSource::Global);
  assert_eq!(filter.tag.as_deref(), Some("dragons"));
}

#[rstest]
#[case(json!({ "page": "0", "source": "global" }), "page", "Page must be a positive number")]
#[case(json!({ "page": "abc", "source": "user" }), "page", "Page must be a positive number")]
#[case(json!({ "source": "user" }), "page", "Page must be a positive number")]
#[case(json!({ "page": 1, "source": "mine" }), "source", "Invalid enum value. Expected 'user' | 'global', received 'mine'")]
fn filter_query_rejections(#[case] payload: JsonValue, #[case] path: &str, #[case] message: &str) {
  let violations = rejected(FilterQuery::parse(&payload).unwrap_err());
  assert_eq!(violations.len(), 1);
  assert_eq!(violations.at(path).unwrap().message, message);
}

#[test]
fn field_errors_group_by_path() {
  let err = UserOut::<LoginUser>::parse(&json!({ "user": { "email": "x" } })).unwrap_err();
  let errors = rejected(err).field_errors();
  assert_eq!(errors["user.email"], vec!["Invalid email"]);
  assert_eq!(errors["user.password"], vec!["Required"]);
}

#[test]
fn registry_validates_by_name() {
  let kind: ContractKind = "tags".parse().unwrap();
  let out = default_registry().validate(kind, &json!({ "tags": ["a"], "extra": 1 })).unwrap();
  assert_eq!(out, json!({ "tags": ["a"] }));
}
