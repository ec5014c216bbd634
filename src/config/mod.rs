//! Optional preview configuration loaded from TOML.

mod types;

pub use types::{CardSizeConfig, Config, ThemeVariant};

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::model::Post;

const APP_DIR: &str = "newscards";
const CONFIG_FILE: &str = "config.toml";

/// Default config location: `<config_dir>/newscards/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and a missing file yields [`Config::default`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

/// Load a JSON array of posts.
pub fn load_feed(path: &Path) -> Result<Vec<Post>> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let posts: Vec<Post> = serde_json::from_str(&raw).map_err(|source| ConfigError::Feed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = posts.len(), "Loaded feed");
    Ok(posts)
}
