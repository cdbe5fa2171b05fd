use std::io::Read;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::*;
use crate::app::AppConfig;

pub mod check;
pub mod map;
pub mod contracts;

/// Read a JSON document from `file`, or stdin.
pub fn read_input(file: Option<&str>) -> Result<JsonValue> {
  let text = match file {
    Some(path) => std::fs::read_to_string(path)?,
    None => {
      let mut buf = String::new();
      std::io::stdin().read_to_string(&mut buf)?;
      buf
    },
  };
  Ok(serde_json::from_str(&text)?)
}

pub fn render<T: Serialize>(config: &AppConfig, value: &T) -> Result<String> {
  if config.pretty_output()? {
    Ok(serde_json::to_string_pretty(value)?)
  } else {
    Ok(serde_json::to_string(value)?)
  }
}
