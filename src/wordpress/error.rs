//! Error types for WordPress REST API calls.

use thiserror::Error;

/// Result type for WordPress REST API calls.
pub type WpResult<T> = Result<T, WpError>;

/// Errors that can occur while talking to the WordPress REST API.
#[derive(Debug, Error)]
pub enum WpError {
    /// The site answered with a non-2xx status.
    #[error("WordPress API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The request could not be sent or the response could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Request URL (never contains credentials).
        url: String,
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON shape.
    #[error("unexpected response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The endpoint could not be joined onto the site URL.
    #[error("invalid request URL {url}: {source}")]
    InvalidUrl {
        /// The URL that failed to parse.
        url: String,
        /// Underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl WpError {
    /// Creates an API error from a status code and body text.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Returns the HTTP status code if the site answered with an error status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_embeds_status_and_body() {
        let err = WpError::api(404, "not found");
        assert_eq!(err.to_string(), "WordPress API error 404: not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn decode_error_has_no_status() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WpError::Decode {
            url: "https://example.com/wp-json/".to_string(),
            source,
        };
        assert!(err.status().is_none());
        assert!(err.to_string().contains("unexpected response"));
    }
}
