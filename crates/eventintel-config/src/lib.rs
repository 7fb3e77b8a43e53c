//! Configuration loading for the Event Intelligence service.
//! Reads eventintel.toml from the current directory or the path in the
//! EVENTINTEL_CONFIG env var, then overlays API credentials from the
//! environment (a `.env` file is honoured when present).
//!
//! Credentials are optional: the service runs against mock record sources
//! until every key for an integration is supplied.

use secrecy::SecretString;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_ENV: &str = "EVENTINTEL_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "eventintel.toml";

pub const SEARCH_API_KEY_ENV: &str = "SERPAPI_API_KEY";
pub const SOCIAL_API_KEY_ENV: &str = "TWITTER_API_KEY";
pub const SOCIAL_API_SECRET_ENV: &str = "TWITTER_API_SECRET";
pub const SOCIAL_ACCESS_TOKEN_ENV: &str = "TWITTER_ACCESS_TOKEN";
pub const SOCIAL_ACCESS_SECRET_ENV: &str = "TWITTER_ACCESS_SECRET";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,
}

fn default_bind()         -> String  { "0.0.0.0:8000".to_string() }
fn default_frontend_dir() -> PathBuf { PathBuf::from("frontend") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), frontend_dir: default_frontend_dir() }
    }
}

/// External API credentials. Never logged; `SecretString` redacts on Debug.
#[derive(Debug, Default)]
pub struct Credentials {
    pub search_api_key: Option<SecretString>,
    pub social: SocialCredentials,
}

#[derive(Debug, Default)]
pub struct SocialCredentials {
    pub api_key: Option<SecretString>,
    pub api_secret: Option<SecretString>,
    pub access_token: Option<SecretString>,
    pub access_secret: Option<SecretString>,
}

impl SocialCredentials {
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some()
            && self.api_secret.is_some()
            && self.access_token.is_some()
            && self.access_secret.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    Mock,
    Live,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds credentials from an arbitrary key lookup. Blank values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map(SecretString::from)
        };
        Self {
            search_api_key: secret(SEARCH_API_KEY_ENV),
            social: SocialCredentials {
                api_key: secret(SOCIAL_API_KEY_ENV),
                api_secret: secret(SOCIAL_API_SECRET_ENV),
                access_token: secret(SOCIAL_ACCESS_TOKEN_ENV),
                access_secret: secret(SOCIAL_ACCESS_SECRET_ENV),
            },
        }
    }

    pub fn mode(&self) -> SourceMode {
        if self.search_api_key.is_some() && self.social.is_complete() {
            SourceMode::Live
        } else {
            SourceMode::Mock
        }
    }
}

impl Config {
    /// Load configuration. A missing config file falls back to defaults;
    /// missing credentials are not an error.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut config = Self::from_path(Path::new(&path))?;
        config.credentials = Credentials::from_env();
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn mode(&self) -> SourceMode {
        self.credentials.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_bind_is_fixed_port() {
        let config = Config::default();
        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert_eq!(config.server.frontend_dir, PathBuf::from("frontend"));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.server.bind, default_bind());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nfrontend_dir = \"/srv/www\"").unwrap();
        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.server.frontend_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.server.bind, "0.0.0.0:8000");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nbind = ").unwrap();
        assert!(matches!(Config::from_path(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_no_credentials_means_mock_mode() {
        let creds = Credentials::from_lookup(|_| None);
        assert_eq!(creds.mode(), SourceMode::Mock);
        assert!(creds.search_api_key.is_none());
    }

    #[test]
    fn test_blank_credentials_are_absent() {
        let creds = Credentials::from_lookup(|_| Some("   ".to_string()));
        assert!(creds.search_api_key.is_none());
        assert!(!creds.social.is_complete());
    }

    #[test]
    fn test_full_credentials_mean_live_mode() {
        let vars: HashMap<&str, &str> = [
            (SEARCH_API_KEY_ENV, "serp"),
            (SOCIAL_API_KEY_ENV, "k"),
            (SOCIAL_API_SECRET_ENV, "s"),
            (SOCIAL_ACCESS_TOKEN_ENV, "t"),
            (SOCIAL_ACCESS_SECRET_ENV, "ts"),
        ]
        .into_iter()
        .collect();
        let creds = Credentials::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(creds.mode(), SourceMode::Live);
        assert_eq!(creds.search_api_key.as_ref().unwrap().expose_secret(), "serp");
    }

    #[test]
    fn test_partial_social_credentials_stay_mock() {
        let creds = Credentials::from_lookup(|k| {
            (k == SEARCH_API_KEY_ENV || k == SOCIAL_API_KEY_ENV).then(|| "x".to_string())
        });
        assert_eq!(creds.mode(), SourceMode::Mock);
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let creds = Credentials::from_lookup(|_| Some("hunter2".to_string()));
        assert!(!format!("{creds:?}").contains("hunter2"));
    }
}
