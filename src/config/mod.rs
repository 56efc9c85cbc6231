//! Configuration file loading and parsing.
//!
//! This module handles loading the optional configuration file from disk and
//! merging it with the process environment into a validated [`SiteConfig`].
//!
//! # Configuration Sources
//!
//! In increasing order of precedence:
//!
//! 1. Configuration file, from the `CONFIG_FILE` CLI argument or the default location:
//!    - **Linux/macOS:** `~/.wordpress-mcp/config.json`
//!    - **Windows:** `%USERPROFILE%\.wordpress-mcp\config.json`
//! 2. Environment variables `WORDPRESS_SITE_URL`, `WORDPRESS_USERNAME`,
//!    `WORDPRESS_PASSWORD` and `WORDPRESS_TIMEOUT_SECS`.

mod settings;

pub use settings::{
    Config, LoggingConfig, SiteConfig, ENV_PASSWORD, ENV_SITE_URL, ENV_TIMEOUT_SECS, ENV_USERNAME,
};

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Returns the default configuration directory.
///
/// - **Linux/macOS:** `~/.wordpress-mcp/`
/// - **Windows:** `%USERPROFILE%\.wordpress-mcp\`
#[must_use]
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".wordpress-mcp"))
}

/// Returns the platform-specific default configuration file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|p| p.join("config.json"))
}

/// Loads and parses the configuration file.
///
/// If `path` is `None`, the default location is tried and an empty
/// configuration is returned when no file exists there.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given file cannot be found
/// - The file cannot be read
/// - The JSON is malformed or contains unknown fields
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound {
                    path: p.to_path_buf(),
                });
            }
            p.to_path_buf()
        }
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: config_path,
        source: e,
    })
}

/// Loads the configuration file and resolves it against the process environment.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or a required setting is missing.
pub fn load_site_config(path: Option<&Path>) -> Result<(Config, SiteConfig), ConfigError> {
    let config = load_config(path)?;
    let site = config.resolve(|name| std::env::var(name).ok())?;
    Ok((config, site))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_dir_exists() {
        assert!(default_config_dir().is_some());
    }

    #[test]
    fn default_config_path_exists() {
        let path = default_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("config.json"));
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let err = load_config(Some(Path::new("/definitely/not/here/config.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
