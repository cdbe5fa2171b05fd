use serde_json::{Map, Value as JsonValue};

use crate::util::*;

use super::*;

enum Parsed {
  Value(JsonValue),
  Absent,
  Invalid,
}

struct Checker {
  path: Vec<PathSegment>,
  issues: Vec<Violation>,
}

pub(super) fn parse(rule: &Rule, value: &JsonValue) -> Result<JsonValue, Violations> {
  let mut checker = Checker {
    path: Vec::new(),
    issues: Vec::new(),
  };
  match checker.walk(rule, Some(value)) {
    Parsed::Value(out) if checker.issues.is_empty() => Ok(out),
    Parsed::Absent if checker.issues.is_empty() => Ok(JsonValue::Null),
    _ => Err(Violations::new(checker.issues)),
  }
}

fn expected_name(rule: &Rule) -> String {
  match rule {
    Rule::Bool => "boolean".to_string(),
    Rule::Str { .. } => "string".to_string(),
    Rule::Number { .. } => "number".to_string(),
    Rule::Array(_) => "array".to_string(),
    Rule::Record(_) | Rule::Object(_) => "object".to_string(),
    Rule::Enum(options) => quoted_options(options),
    _ => "value".to_string(),
  }
}

fn quoted_options(options: &[&str]) -> String {
  options.iter().map(|opt| format!("'{}'", opt)).collect::<Vec<String>>().join(" | ")
}

impl Checker {
  fn issue(&mut self, code: ViolationCode, message: impl Into<String>) {
    self.issues.push(Violation::new(self.path.clone(), code, message));
  }

  fn type_issue(&mut self, rule: &Rule, value: Option<&JsonValue>) -> Parsed {
    match value {
      None => self.issue(ViolationCode::Required, "Required"),
      Some(value) => {
        let msg = format!("Expected {}, received {}", expected_name(rule), type_name(Some(value)));
        self.issue(ViolationCode::InvalidType, msg);
      },
    }
    Parsed::Invalid
  }

  fn nested<F>(&mut self, seg: PathSegment, f: F) -> Parsed
  where
    F: FnOnce(&mut Self) -> Parsed,
  {
    self.path.push(seg);
    let res = f(self);
    self.path.pop();
    res
  }

  fn walk(&mut self, rule: &Rule, value: Option<&JsonValue>) -> Parsed {
    match rule {
      Rule::Any => match value {
        Some(value) => Parsed::Value(value.clone()),
        None => Parsed::Absent,
      },
      Rule::Optional(inner) => match value {
        None => Parsed::Absent,
        value => self.walk(inner, value),
      },
      Rule::Nullable(inner) => match value {
        Some(JsonValue::Null) => Parsed::Value(JsonValue::Null),
        value => self.walk(inner, value),
      },
      Rule::Bool => match value {
        Some(JsonValue::Bool(b)) => Parsed::Value(JsonValue::Bool(*b)),
        value => self.type_issue(rule, value),
      },
      Rule::Str { min_len, format } => match value {
        Some(JsonValue::String(s)) => self.check_string(s, *min_len, *format),
        value => self.type_issue(rule, value),
      },
      Rule::Number { integer, min } => match value {
        Some(JsonValue::Number(n)) => self.check_number(n, *integer, *min),
        value => self.type_issue(rule, value),
      },
      Rule::Literal(expected) => match value {
        Some(value) if value == expected => Parsed::Value(value.clone()),
        _ => {
          self.issue(ViolationCode::InvalidLiteral, format!("Invalid literal value, expected {}", expected));
          Parsed::Invalid
        },
      },
      Rule::Enum(options) => match value {
        Some(JsonValue::String(s)) => {
          if options.iter().any(|opt| *opt == s.as_str()) {
            Parsed::Value(JsonValue::String(s.clone()))
          } else {
            let msg = format!("Invalid enum value. Expected {}, received '{}'", quoted_options(options), s);
            self.issue(ViolationCode::InvalidEnumValue, msg);
            Parsed::Invalid
          }
        },
        value => self.type_issue(rule, value),
      },
      Rule::Array(item) => match value {
        Some(JsonValue::Array(items)) => self.check_array(item, items),
        value => self.type_issue(rule, value),
      },
      Rule::Record(item) => match value {
        Some(JsonValue::Object(map)) => self.check_record(item, map),
        value => self.type_issue(rule, value),
      },
      Rule::Object(fields) => match value {
        Some(JsonValue::Object(map)) => self.check_object(fields, map),
        value => self.type_issue(rule, value),
      },
      Rule::Union(options) => self.check_union(options, value),
      Rule::CoerceString(inner) => {
        let coerced = JsonValue::String(to_js_string(value));
        self.walk(inner, Some(&coerced))
      },
      Rule::Refine(inner, refinement) => {
        let before = self.issues.len();
        match self.walk(inner, value) {
          Parsed::Value(out) if self.issues.len() == before => {
            if (refinement.check)(&out) {
              Parsed::Value(out)
            } else {
              let mut path = self.path.clone();
              path.extend(refinement.path.iter().map(|key| PathSegment::from(*key)));
              self.issues.push(Violation::new(path, ViolationCode::Custom, refinement.message));
              Parsed::Invalid
            }
          },
          res => res,
        }
      },
    }
  }

  fn check_string(&mut self, s: &str, min_len: Option<usize>, format: Option<Format>) -> Parsed {
    let before = self.issues.len();
    if let Some(min) = min_len {
      if s.chars().count() < min {
        self.issue(ViolationCode::TooSmall, format!("String must contain at least {} character(s)", min));
      }
    }
    match format {
      Some(Format::Email) if !is_email(s) => self.issue(ViolationCode::InvalidString, "Invalid email"),
      Some(Format::DateTime) if !is_datetime(s) => self.issue(ViolationCode::InvalidString, "Invalid datetime"),
      _ => (),
    }
    if self.issues.len() == before {
      Parsed::Value(JsonValue::String(s.to_string()))
    } else {
      Parsed::Invalid
    }
  }

  fn check_number(&mut self, n: &serde_json::Number, integer: Option<IntWidth>, min: Option<f64>) -> Parsed {
    let before = self.issues.len();
    let val = n.as_f64().unwrap_or(0.0);
    if let Some(width) = integer {
      if val.fract() != 0.0 {
        self.issue(ViolationCode::NotInteger, "Expected integer, received float");
      } else if exceeds_max(n, width) {
        self.issue(ViolationCode::TooBig, format!("Number must be less than or equal to {}", width.max()));
      }
    }
    match min {
      Some(min) if val < min => {
        self.issue(ViolationCode::TooSmall, format!("Number must be greater than or equal to {}", min));
      }
      _ => {
        if let Some(width) = integer.filter(|width| below_min(n, *width)) {
          self.issue(ViolationCode::TooSmall, format!("Number must be greater than or equal to {}", width.min()));
        }
      }
    }
    if self.issues.len() != before {
      return Parsed::Invalid;
    }
    // `3.0` normalizes to `3` so integer fields deserialize. The range checks
    // above keep both casts exact.
    if integer.is_some() && n.is_f64() {
      if val >= 0.0 {
        return Parsed::Value(JsonValue::from(val as u64));
      }
      return Parsed::Value(JsonValue::from(val as i64));
    }
    Parsed::Value(JsonValue::Number(n.clone()))
  }

  fn check_array(&mut self, item: &Rule, items: &[JsonValue]) -> Parsed {
    let before = self.issues.len();
    let mut out = Vec::with_capacity(items.len());
    for (idx, value) in items.iter().enumerate() {
      match self.nested(PathSegment::Index(idx), |c| c.walk(item, Some(value))) {
        Parsed::Value(value) => out.push(value),
        Parsed::Absent => out.push(JsonValue::Null),
        Parsed::Invalid => (),
      }
    }
    if self.issues.len() == before {
      Parsed::Value(JsonValue::Array(out))
    } else {
      Parsed::Invalid
    }
  }

  fn check_record(&mut self, item: &Rule, map: &Map<String, JsonValue>) -> Parsed {
    let before = self.issues.len();
    let mut out = Map::new();
    for (key, value) in map.iter() {
      if let Parsed::Value(value) = self.nested(PathSegment::Key(key.clone()), |c| c.walk(item, Some(value))) {
        out.insert(key.clone(), value);
      }
    }
    if self.issues.len() == before {
      Parsed::Value(JsonValue::Object(out))
    } else {
      Parsed::Invalid
    }
  }

  fn check_object(&mut self, fields: &[Field], map: &Map<String, JsonValue>) -> Parsed {
    let before = self.issues.len();
    let mut out = Map::new();
    for field in fields.iter() {
      let value = map.get(field.name);
      if let Parsed::Value(value) = self.nested(PathSegment::from(field.name), |c| c.walk(&field.rule, value)) {
        out.insert(field.name.to_string(), value);
      }
    }
    if self.issues.len() == before {
      Parsed::Value(JsonValue::Object(out))
    } else {
      Parsed::Invalid
    }
  }

  fn check_union(&mut self, options: &[Rule], value: Option<&JsonValue>) -> Parsed {
    let mut failures = Vec::with_capacity(options.len());
    for option in options.iter() {
      let mut attempt = Checker {
        path: self.path.clone(),
        issues: Vec::new(),
      };
      match attempt.walk(option, value) {
        Parsed::Invalid => failures.push(attempt.issues),
        res if attempt.issues.is_empty() => return res,
        _ => failures.push(attempt.issues),
      }
    }
    // Report the alternative that got furthest: the first one that only
    // failed value checks.
    let dirty = failures.into_iter()
      .find(|issues| issues.iter().all(|issue| !issue.code.is_fatal()));
    match dirty {
      Some(issues) => self.issues.extend(issues),
      None => self.issue(ViolationCode::InvalidUnion, "Invalid input"),
    }
    Parsed::Invalid
  }
}

// 2^63 and 2^64 are exact as f64, unlike `i64::MAX` and `u64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn exceeds_max(n: &serde_json::Number, width: IntWidth) -> bool {
  if let Some(val) = n.as_u64() {
    return val > width.max();
  }
  if n.is_i64() {
    return false;
  }
  let val = n.as_f64().unwrap_or(0.0);
  match width {
    IntWidth::I64 => val >= I64_LIMIT,
    IntWidth::U64 => val >= U64_LIMIT,
  }
}

fn below_min(n: &serde_json::Number, width: IntWidth) -> bool {
  if let Some(val) = n.as_i64() {
    return val < width.min();
  }
  if n.is_u64() {
    return false;
  }
  let val = n.as_f64().unwrap_or(0.0);
  match width {
    IntWidth::I64 => val < -I64_LIMIT,
    IntWidth::U64 => val < 0.0,
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn messages(rule: &Rule, value: JsonValue) -> Vec<String> {
    match rule.parse(&value) {
      Ok(_) => Vec::new(),
      Err(violations) => violations.iter().map(|v| v.to_string()).collect(),
    }
  }

  #[test]
  fn missing_and_mistyped_fields() {
    let rule = object(vec![
      field("name", string()),
      field("count", number()),
    ]);
    assert_eq!(messages(&rule, json!({ "count": "3" })), vec![
      "name: Required".to_string(),
      "count: Expected number, received string".to_string(),
    ]);
  }

  #[test]
  fn unknown_keys_are_dropped() {
    let rule = object(vec![field("name", string())]);
    let out = rule.parse(&json!({ "name": "a", "extra": 1 })).unwrap();
    assert_eq!(out, json!({ "name": "a" }));
  }

  #[test]
  fn optional_is_not_nullable() {
    let rule = object(vec![field("bio", string().optional())]);
    assert!(rule.parse(&json!({})).is_ok());
    assert_eq!(messages(&rule, json!({ "bio": null })), vec![
      "bio: Expected string, received null".to_string(),
    ]);
    let rule = object(vec![field("bio", string().nullable().optional())]);
    assert_eq!(rule.parse(&json!({ "bio": null })).unwrap(), json!({ "bio": null }));
  }

  #[test]
  fn string_checks_are_all_reported() {
    let rule = string().min_len(8).email();
    assert_eq!(messages(&rule, json!("a@b")), vec![
      "String must contain at least 8 character(s)".to_string(),
      "Invalid email".to_string(),
    ]);
  }

  #[test]
  fn integer_numbers_are_normalized() {
    let rule = number().int().min(0.0);
    assert_eq!(rule.parse(&json!(3.0)).unwrap(), json!(3));
    assert_eq!(messages(&rule, json!(1.5)), vec!["Expected integer, received float".to_string()]);
    assert_eq!(messages(&rule, json!(-1)), vec!["Number must be greater than or equal to 0".to_string()]);
  }

  #[test]
  fn integers_must_fit_their_width() {
    let count = number().uint();
    assert_eq!(count.parse(&json!(u64::MAX)).unwrap(), json!(u64::MAX));
    assert_eq!(count.parse(&json!(1.8e19)).unwrap(), json!(18_000_000_000_000_000_000u64));
    assert_eq!(messages(&count, json!(1e20)), vec!["Number must be less than or equal to 18446744073709551615".to_string()]);
    assert_eq!(messages(&count, json!(-2)), vec!["Number must be greater than or equal to 0".to_string()]);

    let id = number().int();
    assert_eq!(id.parse(&json!(i64::MIN)).unwrap(), json!(i64::MIN));
    assert_eq!(id.parse(&json!(-4.0)).unwrap(), json!(-4));
    assert_eq!(messages(&id, json!(i64::MAX as u64 + 1)), vec!["Number must be less than or equal to 9223372036854775807".to_string()]);
    assert_eq!(messages(&id, json!(-1e19)), vec!["Number must be greater than or equal to -9223372036854775808".to_string()]);

    let issues = number().uint().parse(&json!(1e20)).unwrap_err();
    assert_eq!(issues.iter().next().unwrap().code, ViolationCode::TooBig);
  }

  #[test]
  fn array_items_report_their_index() {
    let rule = object(vec![field("tags", array(string()))]);
    assert_eq!(messages(&rule, json!({ "tags": ["a", 2] })), vec![
      "tags.1: Expected string, received number".to_string(),
    ]);
  }

  #[test]
  fn union_reports_closest_alternative() {
    let rule = string().email().optional().or(literal(""));
    assert!(rule.parse(&json!("")).is_ok());
    assert!(rule.parse(&json!("jake@jake.jake")).is_ok());
    assert_eq!(messages(&rule, json!("nope")), vec!["Invalid email".to_string()]);
    assert_eq!(messages(&rule, json!(5)), vec!["Invalid input".to_string()]);
  }

  #[test]
  fn enum_values() {
    let rule = enumeration(&["user", "global"]);
    assert_eq!(messages(&rule, json!("mine")), vec![
      "Invalid enum value. Expected 'user' | 'global', received 'mine'".to_string(),
    ]);
    assert_eq!(messages(&rule, json!(1)), vec![
      "Expected 'user' | 'global', received number".to_string(),
    ]);
  }

  #[test]
  fn refinement_runs_after_inner_rule() {
    let rule = object(vec![field("a", string().optional())]).refine(Refinement {
      path: vec!["root"],
      message: "empty",
      check: |v| v.as_object().map(|m| !m.is_empty()).unwrap_or(false),
    });
    let violations = rule.parse(&json!({})).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(violations.iter().next().unwrap().is_root());
    assert_eq!(messages(&rule, json!({ "a": 1 })), vec!["a: Expected string, received number".to_string()]);
  }

  #[test]
  fn coerce_before_checking() {
    let rule = coerce_string(string());
    assert_eq!(rule.parse(&json!(2)).unwrap(), json!("2"));
  }
}
