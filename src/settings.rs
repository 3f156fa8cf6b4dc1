use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_COLUMN: &str = "created_at";

/// Layered settings: built-in defaults, then an optional `active_time.toml`
/// in the working directory, then `ACTIVE_TIME_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Timestamp column used when neither the caller nor the entity type names one.
    pub default_column: String,
    /// SQLite file for the persistence layer; in-memory when absent.
    #[serde(default)]
    pub database: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self> {
        Self::load("active_time")
    }

    /// Same layering as [`Settings::new`], reading the optional file `name`
    /// (extension inferred) instead of `active_time`.
    pub fn load(name: &str) -> Result<Self> {
        let s = Config::builder()
            .set_default("default_column", DEFAULT_COLUMN)?
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("ACTIVE_TIME"))
            .build()?;
        Ok(s.try_deserialize()?)
    }

    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let s = Config::builder()
            .set_default("default_column", DEFAULT_COLUMN)?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_column: DEFAULT_COLUMN.to_string(),
            database: None,
        }
    }
}
