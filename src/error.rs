//! Errors raised by the fallible ambient code: config, string tables and
//! feeds. The cards themselves never fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid feed JSON in {path}: {source}")]
    Feed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown string key '{key}'")]
    UnknownStringKey { key: String },

    #[error("template for '{key}' is missing placeholder {placeholder}")]
    MissingPlaceholder {
        key: &'static str,
        placeholder: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
