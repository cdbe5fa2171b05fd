use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::schema::*;
use crate::util::is_truthy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserOut<T> {
  pub user: T,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginUser {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegisterUser {
  pub username: String,
  pub email: String,
  pub password: String,
}

/// Profile changes. An empty string is a valid "leave unchanged" value,
/// distinct from the field not being submitted at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateUser {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub bio: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub password: Option<String>,
}

/// Authenticated session user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserData {
  pub email: String,
  pub token: String,
  pub username: String,
  pub bio: Option<String>,
  pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileOut {
  pub profile: ProfileData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileData {
  pub username: String,
  pub bio: Option<String>,
  pub image: Option<String>,
  pub following: bool,
}

impl Contract for UserOut<UserData> {
  const KIND: ContractKind = ContractKind::User;
}

impl Contract for UserOut<LoginUser> {
  const KIND: ContractKind = ContractKind::LoginUser;
}

impl Contract for UserOut<RegisterUser> {
  const KIND: ContractKind = ContractKind::RegisterUser;
}

impl Contract for UserOut<UpdateUser> {
  const KIND: ContractKind = ContractKind::UpdateUser;
}

impl Contract for ProfileOut {
  const KIND: ContractKind = ContractKind::Profile;
}

/// `following` is relative to the viewer and always sent.
pub fn profile_rule() -> Rule {
  object(vec![
    field("profile", object(vec![
      field("username", string()),
      field("bio", string().nullable()),
      field("image", string().nullable()),
      field("following", boolean()),
    ])),
  ])
}

pub fn user_rule() -> Rule {
  object(vec![
    field("user", object(vec![
      field("email", string()),
      field("token", string()),
      field("username", string()),
      field("bio", string().nullable()),
      field("image", string().nullable()),
    ])),
  ])
}

pub fn login_user_rule() -> Rule {
  object(vec![
    field("user", object(vec![
      field("email", string().email()),
      field("password", string().min_len(8)),
    ])),
  ])
}

pub fn register_user_rule() -> Rule {
  object(vec![
    field("user", object(vec![
      field("username", string().min_len(5)),
      field("email", string().email()),
      field("password", string().min_len(8)),
    ])),
  ])
}

fn unset_or(rule: Rule) -> Rule {
  rule.optional().or(literal(""))
}

fn any_field_set(user: &JsonValue) -> bool {
  user.as_object()
    .map(|fields| fields.values().any(is_truthy))
    .unwrap_or(false)
}

pub fn update_user_rule() -> Rule {
  let user = object(vec![
    field("email", unset_or(string().email())),
    field("username", unset_or(string().min_len(5))),
    field("bio", unset_or(string())),
    field("image", unset_or(string())),
    field("password", unset_or(string().min_len(8))),
  ]);
  object(vec![
    field("user", user.refine(Refinement {
      path: vec![ROOT_FIELD],
      message: "One of the fields must be defined",
      check: any_field_set,
    })),
  ])
}
