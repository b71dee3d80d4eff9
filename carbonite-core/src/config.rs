//! Configuration for the conversion table, optionally read from `carbonite.toml`.
//!
//! ```toml
//! [arrays]
//! # PostgreSQL names the 64-bit integer type `int8`
//! int-type-name = "int8"
//!
//! [log]
//! converter-level = "debug"
//! failure-level = "error"
//! ```

use log::LevelFilter;

#[cfg(feature = "carbonite-toml")]
use crate::error::{Error, Result};

/// Top-level configuration, one field per `carbonite.toml` table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "carbonite-toml",
    derive(serde::Deserialize),
    serde(default, rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct Config {
    /// Configuration for binding lists as SQL arrays.
    pub arrays: ArraysConfig,

    /// Levels for conversion logging.
    pub log: LogConfig,
}

/// The `[arrays]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "carbonite-toml",
    derive(serde::Deserialize),
    serde(default, rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct ArraysConfig {
    /// Override the driver type name `Int` lists are created with.
    ///
    /// Defaults to `BIGINT`.
    pub int_type_name: Option<Box<str>>,
}

/// The `[log]` table. Levels are `off`, `error`, `warn`, `info`, `debug` or `trace`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "carbonite-toml",
    derive(serde::Deserialize),
    serde(default, rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct LogConfig {
    /// Level for converter acquisition. Defaults to `trace`.
    pub converter_level: Option<LevelFilter>,

    /// Level for failed conversions. Defaults to `warn`.
    pub failure_level: Option<LevelFilter>,
}

#[cfg(feature = "carbonite-toml")]
impl Config {
    /// The file name looked up by [`Config::read_from_dir`].
    pub const FILE_NAME: &'static str = "carbonite.toml";

    /// Parses configuration from TOML text.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(Error::config)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn read_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();

        let toml = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("failed to read {}: {e}", path.display()))
        })?;

        Self::from_toml_str(&toml)
    }

    /// Reads `carbonite.toml` from `dir`, or returns the default configuration if there is none.
    pub fn read_from_dir(dir: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = dir.as_ref().join(Self::FILE_NAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::read_from(path)
    }
}
