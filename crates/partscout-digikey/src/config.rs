//! Client settings and credentials

use crate::DigikeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Production API endpoint
pub const PRODUCTION_BASE_URL: &str = "https://api.digikey.com";

/// Sandbox API endpoint
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.digikey.com";

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OAuth2 client credentials for the product API
///
/// Passed explicitly to [`crate::DigikeyClient::new`]; nothing is read from
/// the process environment here.
#[derive(Clone, PartialEq, Eq)]
pub struct DigikeyCredentials {
    /// Application client id
    pub client_id: String,

    /// Application client secret
    pub client_secret: String,
}

impl DigikeyCredentials {
    /// Create a credentials pair
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Check both halves are present
    pub fn validate(&self) -> Result<(), DigikeyError> {
        if self.client_id.trim().is_empty() {
            return Err(DigikeyError::Auth("client id is empty".to_string()));
        }
        if self.client_secret.trim().is_empty() {
            return Err(DigikeyError::Auth("client secret is empty".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for DigikeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigikeyCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Non-secret client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigikeyConfig {
    /// Use the sandbox endpoint instead of production
    #[serde(default)]
    pub sandbox: bool,

    /// Override the endpoint entirely (takes precedence over `sandbox`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Locale site header
    #[serde(default = "default_locale_site")]
    pub locale_site: String,

    /// Locale language header
    #[serde(default = "default_locale_language")]
    pub locale_language: String,

    /// Locale currency header
    #[serde(default = "default_locale_currency")]
    pub locale_currency: String,
}

impl DigikeyConfig {
    /// Endpoint requests are sent to, without trailing slash
    pub fn base_url(&self) -> &str {
        let url = match &self.base_url {
            Some(url) => url.as_str(),
            None if self.sandbox => SANDBOX_BASE_URL,
            None => PRODUCTION_BASE_URL,
        };
        url.trim_end_matches('/')
    }

    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DigikeyConfig {
    fn default() -> Self {
        Self {
            sandbox: false,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale_site: default_locale_site(),
            locale_language: default_locale_language(),
            locale_currency: default_locale_currency(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_locale_site() -> String {
    "US".to_string()
}

fn default_locale_language() -> String {
    "en".to_string()
}

fn default_locale_currency() -> String {
    "USD".to_string()
}
