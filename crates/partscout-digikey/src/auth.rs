//! OAuth2 client-credentials token handling

use crate::config::DigikeyCredentials;
use crate::wire::TokenResponse;
use crate::DigikeyError;
use std::time::{Duration, Instant};
use tracing::debug;

/// Tokens are refreshed this long before the server-side expiry
const EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// A bearer token and the instant it stops being usable
#[derive(Debug, Clone)]
pub struct AccessToken {
    token: String,
    expires_at: Instant,
}

impl AccessToken {
    /// Build from a token response received at `issued_at`
    pub fn from_response(response: TokenResponse, issued_at: Instant) -> Self {
        let lifetime = Duration::from_secs(response.expires_in).saturating_sub(EXPIRY_MARGIN);
        Self {
            token: response.access_token,
            expires_at: issued_at + lifetime,
        }
    }

    /// Bearer token text
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Whether the token can still be sent at `now`
    pub fn is_valid_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Request a fresh token from `{base_url}/v1/oauth2/token`
pub async fn request_token(
    http_client: &reqwest::Client,
    base_url: &str,
    credentials: &DigikeyCredentials,
) -> Result<AccessToken, DigikeyError> {
    let url = format!("{}/v1/oauth2/token", base_url);
    let issued_at = Instant::now();

    let form = [
        ("client_id", credentials.client_id.as_str()),
        ("client_secret", credentials.client_secret.as_str()),
        ("grant_type", "client_credentials"),
    ];

    let response = http_client.post(&url).form(&form).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(DigikeyError::Auth(format!("HTTP {}: {}", status, error_text)));
    }

    let token_response: TokenResponse = response.json().await?;
    if token_response.access_token.is_empty() {
        return Err(DigikeyError::Auth("token endpoint returned an empty token".to_string()));
    }

    debug!("Obtained access token valid for {}s", token_response.expires_in);
    Ok(AccessToken::from_response(token_response, issued_at))
}
