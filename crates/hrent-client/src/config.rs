//! API client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://hrentapi.onrender.com/api";

/// API client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to (may carry a path prefix).
    pub base_url: Url,
    /// Overall request timeout. `None` keeps the HTTP client's default.
    #[serde(default, with = "optional_secs")]
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Whether to honour proxy settings from the environment.
    #[serde(default = "default_true")]
    pub use_system_proxy: bool,
}

fn default_user_agent() -> String {
    format!("hrent-client/{}", env!("CARGO_PKG_VERSION"))
}

const fn default_true() -> bool {
    true
}

impl ClientConfig {
    /// Creates the configuration for the production API.
    ///
    /// # Errors
    ///
    /// Returns an error if [`DEFAULT_BASE_URL`] fails to parse.
    pub fn production() -> Result<Self> {
        Self::builder().build()
    }

    /// Creates a configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::builder().base_url(base_url).build()
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Validates that the base URL can carry endpoint paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "base_url {} cannot carry paths",
                self.base_url
            )));
        }
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "unsupported scheme {}",
                self.base_url.scheme()
            )));
        }
        Ok(())
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: String,
    use_system_proxy: bool,
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfigBuilder {
    /// Creates a builder pointing at the production API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: default_user_agent(),
            use_system_proxy: true,
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl AsRef<str>) -> Self {
        self.base_url = url.as_ref().to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Ignores proxy settings from the environment.
    #[must_use]
    pub const fn no_proxy(mut self) -> Self {
        self.use_system_proxy = false;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn build(self) -> Result<ClientConfig> {
        let config = ClientConfig {
            base_url: Url::parse(&self.base_url)?,
            timeout: self.timeout,
            user_agent: self.user_agent,
            use_system_proxy: self.use_system_proxy,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Serde helpers for `Option<Duration>` as whole seconds.
mod optional_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::ref_option)] // Required by serde with= signature
    pub fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_production_config() {
        let config = ClientConfig::production().unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
        assert!(config.use_system_proxy);
        assert!(config.user_agent.starts_with("hrent-client/"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .base_url("http://127.0.0.1:8080/api")
            .timeout(Duration::from_secs(10))
            .user_agent("tests")
            .no_proxy()
            .build()
            .unwrap();

        assert_eq!(config.base_url.path(), "/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.user_agent, "tests");
        assert!(!config.use_system_proxy);
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(ClientConfig::new("not a url"), Err(Error::Url(_))));
        assert!(matches!(
            ClientConfig::new("mailto:someone@example.com"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com/api"),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"base_url":"https://staging.example.com/api","timeout":30}"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.use_system_proxy);
        assert!(!config.user_agent.is_empty());
    }
}
