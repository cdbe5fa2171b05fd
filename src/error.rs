use thiserror::Error;

use crate::schema::Violations;

#[derive(Error, Debug)]
pub enum Error {
  // payload rejected by a contract.
  #[error("schema violation: {0}")]
  SchemaViolation(Violations),

  #[error("unknown contract: {0}")]
  UnknownContract(String),

  // Json error
  #[error("Json error: {source}")]
  JsonError {
    #[from]
    source: serde_json::Error,
  },

  #[error("std io error")]
  IOError {
    #[from]
    source: std::io::Error,
  },

  #[error("config error")]
  ConfigError {
    #[from]
    source: config::ConfigError,
  },

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl From<Violations> for Error {
  fn from(violations: Violations) -> Self {
    Error::SchemaViolation(violations)
  }
}

impl Error {
  /// Violations carried by a `SchemaViolation`.
  pub fn violations(&self) -> Option<&Violations> {
    match self {
      Error::SchemaViolation(ref violations) => Some(violations),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
