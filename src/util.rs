use regex::Regex;

use serde_json::Value as JsonValue;

// json value helpers with javascript semantics.

lazy_static! {
  static ref EMAIL_RE: Regex = Regex::new(
    r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$"
  ).unwrap();
}

pub fn is_email(val: &str) -> bool {
  // no leading dot, no consecutive dots.
  !val.starts_with('.') && !val.contains("..") && EMAIL_RE.is_match(val)
}

/// RFC 3339 date-time, any offset.
pub fn is_datetime(val: &str) -> bool {
  chrono::DateTime::parse_from_rfc3339(val).is_ok()
}

pub fn is_truthy(val: &JsonValue) -> bool {
  match val {
    JsonValue::Null => false,
    JsonValue::Bool(b) => *b,
    JsonValue::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
    JsonValue::String(s) => !s.is_empty(),
    JsonValue::Array(_) | JsonValue::Object(_) => true,
  }
}

/// String form of a (possibly absent) value, the way `String(value)` renders it.
pub fn to_js_string(val: Option<&JsonValue>) -> String {
  match val {
    None => "undefined".to_string(),
    Some(JsonValue::Null) => "null".to_string(),
    Some(JsonValue::Bool(b)) => b.to_string(),
    Some(JsonValue::Number(n)) => match n.as_i64() {
      Some(n) => n.to_string(),
      None => n.as_f64().map(|n| n.to_string()).unwrap_or_else(|| n.to_string()),
    },
    Some(JsonValue::String(s)) => s.clone(),
    Some(JsonValue::Array(items)) => items.iter().map(|item| {
      match item {
        JsonValue::Null => "".to_string(),
        item => to_js_string(Some(item)),
      }
    }).collect::<Vec<String>>().join(","),
    Some(JsonValue::Object(_)) => "[object Object]".to_string(),
  }
}

/// Numeric value of a string, `Number(val)` style: surrounding whitespace is
/// ignored and an empty string is zero. Only finite decimal numbers parse.
pub fn parse_number(val: &str) -> Option<f64> {
  let val = val.trim();
  if val.is_empty() {
    return Some(0.0);
  }
  // rust accepts "inf"/"nan" spellings.
  if !val.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) {
    return None;
  }
  val.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn type_name(val: Option<&JsonValue>) -> &'static str {
  match val {
    None => "undefined",
    Some(JsonValue::Null) => "null",
    Some(JsonValue::Bool(_)) => "boolean",
    Some(JsonValue::Number(_)) => "number",
    Some(JsonValue::String(_)) => "string",
    Some(JsonValue::Array(_)) => "array",
    Some(JsonValue::Object(_)) => "object",
  }
}
