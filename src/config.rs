//! Environment-driven configuration
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file by the caller (see [`crate::bootstrap`]).

use std::env;

use crate::plates::Unit;

const DATABASE_URL_VAR: &str = "LIFT_TOOLS_DATABASE_URL";
const LOG_LEVEL_VAR: &str = "LIFT_TOOLS_LOG";
const UNIT_VAR: &str = "LIFT_TOOLS_UNIT";

const DEFAULT_DATABASE_URL: &str = "sqlite://lift-tools.db?mode=rwc";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  pub database_url: String,
  pub log_level: String,
  /// Default unit for the plate calculator
  pub unit: Unit,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      log_level: DEFAULT_LOG_LEVEL.to_string(),
      unit: Unit::Kg,
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {var}: {reason}")]
  Invalid { var: &'static str, reason: String },
}

impl serde::Serialize for ConfigError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let database_url = non_empty_var(DATABASE_URL_VAR).unwrap_or(defaults.database_url);
    let log_level = non_empty_var(LOG_LEVEL_VAR).unwrap_or(defaults.log_level);
    let unit = match non_empty_var(UNIT_VAR) {
      Some(raw) => raw
        .parse::<Unit>()
        .map_err(|reason| ConfigError::Invalid { var: UNIT_VAR, reason })?,
      None => defaults.unit,
    };

    Ok(Self {
      database_url,
      log_level,
      unit,
    })
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  env::var(name).ok().filter(|v| !v.trim().is_empty())
}
