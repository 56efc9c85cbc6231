//! Configuration structures for deserialisation.
//!
//! [`Config`] maps directly to the JSON configuration file format. It is
//! merged with environment variables by [`Config::resolve`] to produce the
//! [`SiteConfig`] the REST client is built from.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the WordPress site URL.
pub const ENV_SITE_URL: &str = "WORDPRESS_SITE_URL";
/// Environment variable holding the account user name.
pub const ENV_USERNAME: &str = "WORDPRESS_USERNAME";
/// Environment variable holding the account application password.
pub const ENV_PASSWORD: &str = "WORDPRESS_PASSWORD";
/// Environment variable holding the optional request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "WORDPRESS_TIMEOUT_SECS";

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
/// Every field is optional so that a deployment can rely on environment
/// variables alone.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Base URL of the WordPress site, e.g. `https://example.com`.
    #[serde(default)]
    pub site_url: Option<String>,

    /// Account user name.
    #[serde(default)]
    pub username: Option<String>,

    /// Application password for the account.
    #[serde(default)]
    pub password: Option<String>,

    /// Per-request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Merges file values with variables from `lookup` and validates the result.
    ///
    /// Variables take precedence over file values. Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingValue`] naming the first required setting
    /// that is absent, or [`ConfigError::ValidationError`] if a value is malformed.
    pub fn resolve<F>(&self, lookup: F) -> Result<SiteConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |name: &'static str, file_value: Option<&String>| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .or_else(|| file_value.filter(|v| !v.is_empty()).cloned())
                .ok_or(ConfigError::MissingValue { name })
        };

        let site_url = pick(ENV_SITE_URL, self.site_url.as_ref())?;
        let username = pick(ENV_USERNAME, self.username.as_ref())?;
        let password = pick(ENV_PASSWORD, self.password.as_ref())?;

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS).filter(|v| !v.is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::ValidationError {
                    message: format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds"),
                }
            })?),
            None => self.request_timeout_secs,
        };

        let site_url = normalise_site_url(&site_url)?;

        Ok(SiteConfig {
            site_url,
            username,
            password,
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        })
    }
}

/// Strips trailing slashes and checks the URL is absolute http(s).
fn normalise_site_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::ValidationError {
        message: format!("{ENV_SITE_URL} is not a valid URL: {e}"),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            message: format!("{ENV_SITE_URL} must use http or https"),
        });
    }

    Ok(trimmed.to_string())
}

/// Resolved connection settings for one WordPress site.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site URL without a trailing slash.
    pub site_url: String,
    /// Account user name.
    pub username: String,
    /// Application password (never logged).
    pub password: String,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

impl SiteConfig {
    /// Creates settings directly, bypassing file and environment lookup.
    #[must_use]
    pub fn new(
        site_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            site_url: site_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            timeout: None,
        }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteConfig")
            .field("site_url", &self.site_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
