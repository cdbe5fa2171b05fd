use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Path segment inside a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
  Key(String),
  Index(usize),
}

impl fmt::Display for PathSegment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      PathSegment::Key(key) => f.write_str(key),
      PathSegment::Index(idx) => write!(f, "{}", idx),
    }
  }
}

impl From<&str> for PathSegment {
  fn from(key: &str) -> Self {
    PathSegment::Key(key.to_string())
  }
}

impl From<usize> for PathSegment {
  fn from(idx: usize) -> Self {
    PathSegment::Index(idx)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
  Required,
  InvalidType,
  InvalidLiteral,
  InvalidEnumValue,
  InvalidString,
  InvalidUnion,
  TooSmall,
  TooBig,
  NotInteger,
  Custom,
}

impl ViolationCode {
  /// The value had the wrong shape entirely, as opposed to failing a check
  /// on an otherwise well-typed value.
  pub fn is_fatal(&self) -> bool {
    matches!(self,
      ViolationCode::Required
      | ViolationCode::InvalidType
      | ViolationCode::InvalidLiteral
      | ViolationCode::InvalidEnumValue
      | ViolationCode::InvalidUnion
      | ViolationCode::NotInteger
    )
  }
}

/// Name of the synthetic field cross-field refinements report against.
pub const ROOT_FIELD: &str = "root";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
  pub path: Vec<PathSegment>,
  pub code: ViolationCode,
  pub message: String,
}

impl Violation {
  pub fn new(path: Vec<PathSegment>, code: ViolationCode, message: impl Into<String>) -> Self {
    Self {
      path,
      code,
      message: message.into(),
    }
  }

  /// Dotted path, e.g. `articles.0.author.username`.
  pub fn path_string(&self) -> String {
    self.path.iter().map(|seg| seg.to_string()).collect::<Vec<String>>().join(".")
  }

  /// Last key of the path.
  pub fn field(&self) -> Option<&str> {
    self.path.iter().rev().find_map(|seg| match seg {
      PathSegment::Key(key) => Some(key.as_str()),
      _ => None,
    })
  }

  /// Form-level failure, not tied to a single field.
  pub fn is_root(&self) -> bool {
    self.code == ViolationCode::Custom && self.field() == Some(ROOT_FIELD)
  }
}

impl fmt::Display for Violation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.path.is_empty() {
      f.write_str(&self.message)
    } else {
      write!(f, "{}: {}", self.path_string(), self.message)
    }
  }
}

/// Every violation found in one payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
  pub fn new(violations: Vec<Violation>) -> Self {
    Self(violations)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
    self.0.iter()
  }

  pub fn into_inner(self) -> Vec<Violation> {
    self.0
  }

  /// Find the first violation reported at `path` (dotted form).
  pub fn at(&self, path: &str) -> Option<&Violation> {
    self.0.iter().find(|v| v.path_string() == path)
  }

  /// Messages grouped by dotted path, for form rendering.
  pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for violation in self.0.iter() {
      errors.entry(violation.path_string())
        .or_default()
        .push(violation.message.clone());
    }
    errors
  }

  pub fn extend(&mut self, other: Violations) {
    self.0.extend(other.0);
  }
}

impl fmt::Display for Violations {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for violation in self.0.iter() {
      if !first {
        f.write_str("; ")?;
      }
      first = false;
      write!(f, "{}", violation)?;
    }
    Ok(())
  }
}

impl IntoIterator for Violations {
  type Item = Violation;
  type IntoIter = std::vec::IntoIter<Violation>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'a> IntoIterator for &'a Violations {
  type Item = &'a Violation;
  type IntoIter = std::slice::Iter<'a, Violation>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
