//! Environment-driven configuration.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BASE_URL` | `https://reqres.in` | Root of the API under test |
//! | `API_KEY` | unset | Sent as `x-api-key` when set to a real key |
//!
//! A `Config` is built once per run and passed into each fixture; nothing
//! reads the environment after that.

use url::Url;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "BASE_URL";
pub const API_KEY_VAR: &str = "API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://reqres.in";

/// Value shipped in sample env files to mean "no key configured".
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Validated harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    api_key: Option<String>,
}

impl Config {
    /// Validate `base_url` and keep `api_key` as given.
    ///
    /// The URL must parse, have a host and carry no query or fragment. The
    /// parsed form is stored, so surrounding whitespace is gone, and a
    /// trailing slash is dropped so paths can be appended directly.
    pub fn new(base_url: &str, api_key: Option<String>) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        })?;
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(ConfigError::MissingHost {
                value: base_url.to_string(),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::QueryOrFragment {
                value: base_url.to_string(),
            });
        }
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. An unset `BASE_URL` falls
    /// back to the default; a set but empty one is rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let config = Self::new(&base_url, lookup(API_KEY_VAR))?;
        tracing::debug!(
            base_url = %config.base_url,
            api_key = config.effective_api_key().is_some(),
            "resolved configuration"
        );
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The raw `API_KEY` value, placeholder and whitespace included.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The key to send, if any: trimmed, non-blank and not the placeholder.
    pub fn effective_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    /// Absolute URL for `path` under the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
