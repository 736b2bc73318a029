//! Persistent application settings.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use hrent_client::{ClientConfig, FileStore, KeyringStore, Session};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "HRENT_API_URL";

/// Where the session token is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStoreKind {
    /// System keyring.
    #[default]
    Keyring,
    /// Plain file in the data directory.
    File,
}

/// Application settings that persist across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// API base URL; the production API when unset.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Token storage backend.
    pub token_store: TokenStoreKind,
}

impl AppSettings {
    /// Builds the client configuration, letting `url_override` win over the
    /// configured base URL.
    pub fn client_config(&self, url_override: Option<String>) -> anyhow::Result<ClientConfig> {
        let mut builder = ClientConfig::builder();
        if let Some(url) = url_override.or_else(|| self.base_url.clone()) {
            builder = builder.base_url(url);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("invalid API configuration")
    }

    /// Opens the session backed by the configured token store.
    pub fn open_session(&self) -> Session {
        match self.token_store {
            TokenStoreKind::Keyring => Session::new(KeyringStore::new()),
            TokenStoreKind::File => Session::new(FileStore::new(token_path())),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hrent")
}

fn token_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hrent")
        .join("token")
}

/// Load application settings from file.
pub async fn load_settings() -> anyhow::Result<AppSettings> {
    let settings_path = config_dir().join("settings.json");

    if !tokio::fs::try_exists(&settings_path).await.unwrap_or(false) {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .with_context(|| format!("failed to read {}", settings_path.display()))?;

    let settings = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", settings_path.display()))?;
    tracing::debug!("Settings loaded from {:?}", settings_path);
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"token_store":"file"}"#).unwrap();
        assert_eq!(settings.token_store, TokenStoreKind::File);
        assert_eq!(settings.base_url, None);
        assert_eq!(settings.timeout_secs, None);

        let empty: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AppSettings::default());
        assert_eq!(empty.token_store, TokenStoreKind::Keyring);
    }

    #[test]
    fn test_client_config_defaults_to_production() {
        let config = AppSettings::default().client_config(None).unwrap();
        assert_eq!(config.base_url.as_str(), hrent_client::DEFAULT_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_url_override_wins() {
        let settings = AppSettings {
            base_url: Some("https://staging.example.com/api".into()),
            timeout_secs: Some(15),
            ..AppSettings::default()
        };

        let config = settings.client_config(None).unwrap();
        assert_eq!(config.base_url.as_str(), "https://staging.example.com/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));

        let config = settings
            .client_config(Some("http://localhost:5000/api".into()))
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:5000/api");
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let settings = AppSettings {
            base_url: Some("not a url".into()),
            ..AppSettings::default()
        };
        assert!(settings.client_config(None).is_err());
    }
}
