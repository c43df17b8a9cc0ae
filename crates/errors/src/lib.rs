#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Error types for errfmt
//!
//! These are the failures of the library itself (bad attribute input,
//! unreadable configuration), not the annotated errors it produces.

use thiserror::Error;

pub mod attribute;
pub mod config;

pub use attribute::AttributeError;
pub use config::ConfigError;

/// Generic error type for cross-crate boundaries
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("attribute error: {0}")]
    Attribute(#[from] AttributeError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {message}")]
    Io {
        kind: std::io::ErrorKind,
        message: String,
        path: Option<std::path::PathBuf>,
    },
}

impl Error {
    /// Create an Io error with an associated path
    pub fn io_with_path(err: &std::io::Error, path: impl Into<std::path::PathBuf>) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: Some(path.into()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.into())
    }
}

/// Result type alias for errfmt operations
pub type Result<T> = std::result::Result<T, Error>;
