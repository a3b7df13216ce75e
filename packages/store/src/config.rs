//! # Client configuration: `chattrix.toml`
//!
//! Where the REST API lives and a few client-side tunables.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5123/api"
//! media_base_url = "http://localhost:5123"   # optional
//!
//! [session]
//! ttl_hours = 8
//!
//! [search]
//! debounce_ms = 400
//! ```
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::session::DEFAULT_SESSION_HOURS;

pub const DEFAULT_API_URL: &str = "http://localhost:5123/api";

/// Top-level configuration stored in `chattrix.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// REST endpoint configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
    /// Origin that relative media paths are served from.
    /// Derived from `base_url` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_base_url: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            media_base_url: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session length fixed at login, in hours.
    #[serde(default = "default_ttl_hours")]
    pub ttl_hours: u32,
}

fn default_ttl_hours() -> u32 {
    DEFAULT_SESSION_HOURS
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: default_ttl_hours(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a search box hits the server. 0 disables debouncing.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
}

fn default_debounce_ms() -> u32 {
    400
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                media_base_url: None,
            },
            ..Self::default()
        }
    }

    /// Builder method to set the media origin explicitly.
    pub fn with_media_base(mut self, url: impl Into<String>) -> Self {
        self.api.media_base_url = Some(url.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "chattrix.toml"
    }

    /// API base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }

    /// Origin for relative media paths: the explicit setting, or the API base
    /// with a trailing `/api` segment removed.
    pub fn media_base(&self) -> String {
        match &self.api.media_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let base = self.api_base();
                base.strip_suffix("/api").unwrap_or(base).to_string()
            }
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.session.ttl_hours, 8);
        assert_eq!(config.search.debounce_ms, 400);
        assert_eq!(config.api_base(), DEFAULT_API_URL);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://chattrix.example.com/api/"

            [search]
            debounce_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base(), "https://chattrix.example.com/api");
        assert_eq!(config.search.debounce_ms, 0);
        assert_eq!(config.session.ttl_hours, 8);
    }

    #[test]
    fn test_media_base_strips_api_segment() {
        let config = ClientConfig::new("http://localhost:5123/api");
        assert_eq!(config.media_base(), "http://localhost:5123");

        let config = ClientConfig::new("http://localhost:5123/v1");
        assert_eq!(config.media_base(), "http://localhost:5123/v1");

        let config = ClientConfig::new("http://localhost:5123/api")
            .with_media_base("https://cdn.example.com/");
        assert_eq!(config.media_base(), "https://cdn.example.com");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://api.example.com")
            .with_media_base("https://media.example.com");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ClientConfig::from_toml("[api\nbase_url = 3").is_err());
    }
}
