use serde::de::DeserializeOwned;

use clap::ArgMatches;
use config::{Config, ConfigError, Value, File, Environment};

use crate::error::*;
use crate::schema::RegistryOptions;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub conf: Config
}

impl AppConfig {
  pub fn new_clap(cli: &ArgMatches) -> Result<Self> {
    Self::load(cli.value_of("config"))
  }

  pub fn load(config_file: Option<&str>) -> Result<Self> {
    let mut conf = Config::default();
    conf.set_default("schema.strict_timestamps", false)?;
    conf.set_default("output.pretty", true)?;

    if let Some(config_file) = config_file {
      conf.merge(File::with_name(config_file))?;
    } else {
      // Load defaults
      conf.merge(File::with_name("conf/default").required(false))?;

      // Get RUN_MODE from environment
      let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
      conf.merge(File::with_name(&format!("conf/{}", env)).required(false))?;

      // Allow overrides from environment, e.g. APP_SCHEMA__STRICT_TIMESTAMPS
      conf.merge(Environment::with_prefix("app").separator("__"))?;
    }

    Ok(AppConfig {
      conf,
    })
  }

  pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
    Ok(self.conf.get(key).or_else(|e| {
      match e {
        ConfigError::NotFound(_) => Ok(None),
        err => Err(err),
      }
    })?)
  }

  pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
    let val = if let Some(val) = self.get::<Value>(key)? {
      Some(Value::into_bool(val)?)
    } else {
      None
    };
    Ok(val)
  }

  pub fn registry_options(&self) -> Result<RegistryOptions> {
    Ok(RegistryOptions {
      strict_timestamps: self.get_bool("schema.strict_timestamps")?.unwrap_or(false),
    })
  }

  pub fn pretty_output(&self) -> Result<bool> {
    Ok(self.get_bool("output.pretty")?.unwrap_or(true))
  }
}
