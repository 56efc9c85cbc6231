//! Authenticated JSON client for the WordPress REST API.
//!
//! Every request goes to `<site_url>/wp-json<endpoint>` and carries the same
//! precomputed `Authorization: Basic ...` header (WordPress application
//! passwords, WP 5.6+) and a JSON content type.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::SiteConfig;
use crate::wordpress::error::{WpError, WpResult};
use crate::wordpress::query::Query;

/// Path prefix under which WordPress serves its REST routes.
pub const API_PREFIX: &str = "/wp-json";

/// Client for one WordPress site.
///
/// Holds only read-only state, so a single instance can be shared by every
/// tool handler.
#[derive(Clone)]
pub struct WpClient {
    http: reqwest::Client,
    site_url: String,
    auth_header: String,
}

impl std::fmt::Debug for WpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WpClient")
            .field("site_url", &self.site_url)
            .finish_non_exhaustive()
    }
}

impl WpClient {
    /// Builds a client from resolved site settings.
    ///
    /// # Errors
    ///
    /// Returns [`WpError::Client`] if the HTTP client cannot be constructed.
    pub fn new(site: &SiteConfig) -> WpResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("wordpress-mcp/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = site.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(WpError::Client)?;

        Ok(Self {
            http,
            site_url: site.site_url.trim_end_matches('/').to_string(),
            auth_header: basic_auth_header(&site.username, &site.password),
        })
    }

    /// Returns the site URL without a trailing slash.
    #[must_use]
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Builds the full request URL for `endpoint` with `query` appended.
    ///
    /// # Errors
    ///
    /// Returns [`WpError::InvalidUrl`] if the result is not a valid URL.
    pub fn endpoint_url(&self, endpoint: &str, query: &Query) -> WpResult<Url> {
        let raw = format!("{}{API_PREFIX}{endpoint}", self.site_url);
        let mut url = Url::parse(&raw).map_err(|source| WpError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;
        if !query.is_empty() {
            url.set_query(Some(&query.to_query_string()));
        }
        Ok(url)
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx status, or an unexpected body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &Query) -> WpResult<T> {
        let url = self.endpoint_url(endpoint, query)?;
        self.send::<T, ()>(Method::GET, url, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx status, or an unexpected body.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> WpResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint, &Query::new())?;
        self.send(Method::POST, url, Some(body)).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx status, or an unexpected body.
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> WpResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint, &Query::new())?;
        self.send(Method::PUT, url, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-2xx status, or an unexpected body.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str, query: &Query) -> WpResult<T> {
        let url = self.endpoint_url(endpoint, query)?;
        self.send::<T, ()>(Method::DELETE, url, None).await
    }

    async fn send<T, B>(&self, method: Method, url: Url, body: Option<&B>) -> WpResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        debug!(method = %method, url = %url, "WordPress request");

        let url_text = url.to_string();
        let mut request = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, &self.auth_header)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|source| WpError::Request {
            url: url_text.clone(),
            source,
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|source| WpError::Request {
            url: url_text.clone(),
            source,
        })?;

        if !status.is_success() {
            warn!(status = status.as_u16(), url = %url_text, "WordPress API returned an error status");
            return Err(WpError::api(status.as_u16(), text));
        }

        serde_json::from_str(&text).map_err(|source| WpError::Decode {
            url: url_text,
            source,
        })
    }
}

/// Encodes `username:password` as an HTTP Basic authorization value.
fn basic_auth_header(username: &str, password: &str) -> String {
    let credentials = BASE64_STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WpClient {
        WpClient::new(&SiteConfig::new("https://example.com/", "admin", "secret")).unwrap()
    }

    #[test]
    fn basic_auth_encoding() {
        assert_eq!(basic_auth_header("admin", "secret"), "Basic YWRtaW46c2VjcmV0");
    }

    #[test]
    fn endpoint_url_joins_prefix() {
        let url = client().endpoint_url("/wp/v2/posts", &Query::new()).unwrap();
        assert_eq!(url.as_str(), "https://example.com/wp-json/wp/v2/posts");
    }

    #[test]
    fn endpoint_url_appends_query() {
        let query = Query::new().param("per_page", 5_u32).opt("status", None::<&str>);
        let url = client().endpoint_url("/wp/v2/posts", &query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/wp-json/wp/v2/posts?per_page=5"
        );
    }

    #[test]
    fn endpoint_url_keeps_encoded_segments() {
        let url = client()
            .endpoint_url("/wp/v2/plugins/akismet%2Fakismet.php", &Query::new())
            .unwrap();
        assert!(url.as_str().ends_with("/plugins/akismet%2Fakismet.php"));
    }

    #[test]
    fn debug_hides_credentials() {
        let debug = format!("{:?}", client());
        assert!(!debug.contains("YWRtaW46c2VjcmV0"));
        assert!(debug.contains("example.com"));
    }
}
