#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for errfmt
//!
//! A formatter's default attribute set is loaded and merged from:
//! - Default values (no attributes)
//! - Configuration file (~/.config/errfmt/config.toml)
//! - Environment variables

use errfmt_errors::{ConfigError, Error};
use errfmt_valued::{validate_code, AttributeKind, AttributeValue, Payload};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub formatter: FormatterConfig,
}

/// Default attributes attached by a valued formatter
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormatterConfig {
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub public_code: Option<i64>,
    /// Extra attributes applied after the named fields, in order.
    #[serde(default)]
    pub attributes: Vec<AttributeEntry>,
}

/// One `[[formatter.attributes]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeEntry {
    pub kind: AttributeKind,
    pub value: Payload,
}

impl FormatterConfig {
    /// The default batch described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry's value does not fit its kind or if a
    /// code is not positive.
    pub fn attributes(&self) -> Result<Vec<AttributeValue>, Error> {
        let mut values = Vec::with_capacity(4 + self.attributes.len());

        if let Some(scope) = &self.scope {
            values.push(AttributeValue::scope(scope.as_str()));
        }
        if !self.details.is_empty() {
            values.push(AttributeValue::details(self.details.iter().cloned()));
        }
        if let Some(code) = self.code {
            values.push(AttributeValue::code(validate_code(code)?));
        }
        if let Some(code) = self.public_code {
            values.push(AttributeValue::public_code(validate_code(code)?));
        }

        for entry in &self.attributes {
            let value = AttributeValue::from_payload(entry.kind, entry.value.clone())?;
            if let AttributeValue::Code(code) | AttributeValue::PublicCode(code) = value {
                validate_code(code)?;
            }
            values.push(value);
        }

        Ok(values)
    }
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("errfmt").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the file contents
    /// contain invalid TOML syntax that cannot be parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
                .into()
            } else {
                Error::io_with_path(&e, path)
            }
        })?;

        let config: Self = toml::from_str(&contents)?;
        debug!(path = %path.display(), "loaded errfmt config");
        Ok(config)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load(),
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a code variable is not an integer.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        if let Ok(scope) = std::env::var("ERRFMT_SCOPE") {
            debug!(%scope, "scope overridden from environment");
            self.formatter.scope = Some(scope);
        }

        if let Ok(details) = std::env::var("ERRFMT_DETAILS") {
            self.formatter.details = details
                .split(',')
                .map(str::trim)
                .filter(|detail| !detail.is_empty())
                .map(ToString::to_string)
                .collect();
        }

        if let Some(code) = env_code("ERRFMT_CODE")? {
            self.formatter.code = Some(code);
        }

        if let Some(code) = env_code("ERRFMT_PUBLIC_CODE")? {
            self.formatter.public_code = Some(code);
        }

        Ok(())
    }
}

fn env_code(var: &str) -> Result<Option<i64>, Error> {
    let Ok(value) = std::env::var(var) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| {
            ConfigError::InvalidValue {
                field: var.to_string(),
                value,
            }
            .into()
        })
}
