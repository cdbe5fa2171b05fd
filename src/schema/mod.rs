//! Declarative payload contracts.
//!
//! A contract is a tree of [`Rule`]s. Checking a JSON value against it either
//! yields the normalized value (unknown object keys dropped, coercions applied)
//! or every violation found, never a partial result.

use serde_json::Value as JsonValue;

mod check;

pub mod violation;
pub use violation::*;

pub mod registry;
pub use registry::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  Email,
  DateTime,
}

/// Integer type a whole-number field deserializes into. Values outside its
/// range are rejected instead of being cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
  I64,
  U64,
}

impl IntWidth {
  pub fn max(&self) -> u64 {
    match self {
      IntWidth::I64 => i64::MAX as u64,
      IntWidth::U64 => u64::MAX,
    }
  }

  pub fn min(&self) -> i64 {
    match self {
      IntWidth::I64 => i64::MIN,
      IntWidth::U64 => 0,
    }
  }
}

/// Check run on an already accepted value.
#[derive(Debug, Clone)]
pub struct Refinement {
  /// Reported below the refined value's own path.
  pub path: Vec<&'static str>,
  pub message: &'static str,
  pub check: fn(&JsonValue) -> bool,
}

#[derive(Debug, Clone)]
pub struct Field {
  pub name: &'static str,
  pub rule: Rule,
}

#[derive(Debug, Clone)]
pub enum Rule {
  /// Anything, including an absent value.
  Any,
  Bool,
  Str {
    min_len: Option<usize>,
    format: Option<Format>,
  },
  Number {
    integer: Option<IntWidth>,
    min: Option<f64>,
  },
  Literal(JsonValue),
  Enum(&'static [&'static str]),
  Array(Box<Rule>),
  /// Object with arbitrary keys, every value checked by the same rule.
  Record(Box<Rule>),
  Object(Vec<Field>),
  Optional(Box<Rule>),
  Nullable(Box<Rule>),
  /// First matching alternative wins.
  Union(Vec<Rule>),
  /// Stringify the input before checking it.
  CoerceString(Box<Rule>),
  Refine(Box<Rule>, Refinement),
}

pub fn any() -> Rule {
  Rule::Any
}

pub fn boolean() -> Rule {
  Rule::Bool
}

pub fn string() -> Rule {
  Rule::Str {
    min_len: None,
    format: None,
  }
}

pub fn number() -> Rule {
  Rule::Number {
    integer: None,
    min: None,
  }
}

pub fn literal(val: impl Into<JsonValue>) -> Rule {
  Rule::Literal(val.into())
}

pub fn enumeration(options: &'static [&'static str]) -> Rule {
  Rule::Enum(options)
}

pub fn array(item: Rule) -> Rule {
  Rule::Array(Box::new(item))
}

pub fn record(value: Rule) -> Rule {
  Rule::Record(Box::new(value))
}

pub fn object(fields: Vec<Field>) -> Rule {
  Rule::Object(fields)
}

pub fn field(name: &'static str, rule: Rule) -> Field {
  Field { name, rule }
}

pub fn coerce_string(rule: Rule) -> Rule {
  Rule::CoerceString(Box::new(rule))
}

impl Rule {
  /// Minimum length, strings only.
  pub fn min_len(self, len: usize) -> Self {
    match self {
      Rule::Str { format, .. } => Rule::Str {
        min_len: Some(len),
        format,
      },
      rule => rule,
    }
  }

  pub fn email(self) -> Self {
    self.format(Format::Email)
  }

  pub fn datetime(self) -> Self {
    self.format(Format::DateTime)
  }

  fn format(self, format: Format) -> Self {
    match self {
      Rule::Str { min_len, .. } => Rule::Str {
        min_len,
        format: Some(format),
      },
      rule => rule,
    }
  }

  /// Whole numbers that fit an `i64`.
  pub fn int(self) -> Self {
    self.whole(IntWidth::I64)
  }

  /// Whole numbers that fit a `u64`. Negative values are too small.
  pub fn uint(self) -> Self {
    self.whole(IntWidth::U64)
  }

  fn whole(self, width: IntWidth) -> Self {
    match self {
      Rule::Number { min, .. } => Rule::Number {
        integer: Some(width),
        min,
      },
      rule => rule,
    }
  }

  pub fn min(self, min: f64) -> Self {
    match self {
      Rule::Number { integer, .. } => Rule::Number {
        integer,
        min: Some(min),
      },
      rule => rule,
    }
  }

  pub fn optional(self) -> Self {
    Rule::Optional(Box::new(self))
  }

  pub fn nullable(self) -> Self {
    Rule::Nullable(Box::new(self))
  }

  pub fn or(self, other: Rule) -> Self {
    match self {
      Rule::Union(mut options) => {
        options.push(other);
        Rule::Union(options)
      },
      rule => Rule::Union(vec![rule, other]),
    }
  }

  pub fn refine(self, refinement: Refinement) -> Self {
    Rule::Refine(Box::new(self), refinement)
  }

  /// Check `value` and return its normalized form.
  pub fn parse(&self, value: &JsonValue) -> Result<JsonValue, Violations> {
    check::parse(self, value)
  }
}
