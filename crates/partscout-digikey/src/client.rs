//! Digi-Key Product Information Client
//!
//! Looks up manufacturer product details over the Digi-Key v3 search API.
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - OAuth2 client-credentials tokens, reused until shortly before expiry
//! - Configurable endpoint (production, sandbox or an explicit URL)
//! - Timeout handling
//!
//! No retries are attempted; a failed call is reported to the caller as is.
//!
//! # Examples
//!
//! ```no_run
//! use partscout_digikey::{DigikeyClient, DigikeyConfig, DigikeyCredentials};
//!
//! let credentials = DigikeyCredentials::new("client-id", "client-secret");
//! let client = DigikeyClient::new(credentials, DigikeyConfig::default()).unwrap();
//! ```

use crate::auth::{request_token, AccessToken};
use crate::config::{DigikeyConfig, DigikeyCredentials};
use crate::conversions::records_from_response;
use crate::wire::{
    ApiErrorResponse, ManufacturerProductDetailsRequest, ManufacturerProductDetailsResponse,
};
use crate::DigikeyError;
use partscout_domain::traits::PartLookup;
use partscout_domain::ProductRecord;
use reqwest::StatusCode;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::debug;

/// Path of the manufacturer product details endpoint
const PRODUCT_DETAILS_PATH: &str = "/Search/v3/Products/ManufacturerProductDetails";

/// Digi-Key API client
pub struct DigikeyClient {
    credentials: DigikeyCredentials,
    config: DigikeyConfig,
    client: reqwest::Client,
    token: Mutex<Option<AccessToken>>,
}

impl DigikeyClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are incomplete or the HTTP client
    /// cannot be built.
    pub fn new(credentials: DigikeyCredentials, config: DigikeyConfig) -> Result<Self, DigikeyError> {
        credentials.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DigikeyError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            config,
            client,
            token: Mutex::new(None),
        })
    }

    /// Endpoint this client talks to
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Fetch product records for a manufacturer part number
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The token request is rejected
    /// - Network communication fails
    /// - The service answers with a non-success status
    /// - The response body cannot be parsed
    pub async fn manufacturer_product_details(
        &self,
        part_number: &str,
        record_count: u32,
    ) -> Result<Vec<ProductRecord>, DigikeyError> {
        let token = self.bearer_token().await?;
        let url = format!("{}{}", self.base_url(), PRODUCT_DETAILS_PATH);

        let request_body = ManufacturerProductDetailsRequest {
            manufacturer_product: part_number.to_string(),
            record_count,
        };

        debug!("POST {} for '{}'", url, part_number);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&token)
            .header("X-DIGIKEY-Client-Id", &self.credentials.client_id)
            .header("X-DIGIKEY-Locale-Site", &self.config.locale_site)
            .header("X-DIGIKEY-Locale-Language", &self.config.locale_language)
            .header("X-DIGIKEY-Locale-Currency", &self.config.locale_currency)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body: ManufacturerProductDetailsResponse = response.json().await.map_err(|e| {
                DigikeyError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(records_from_response(body));
        }

        let error_text = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorResponse>(&error_text)
            .ok()
            .and_then(|body| body.describe())
            .unwrap_or(error_text);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                // Drop the cached token so the next call fetches a new one
                self.token.lock().await.take();
                Err(DigikeyError::Auth(format!("HTTP {}: {}", status, detail)))
            }
            StatusCode::NOT_FOUND => Err(DigikeyError::NotFound(part_number.to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(DigikeyError::RateLimitExceeded),
            _ => Err(DigikeyError::Communication(format!("HTTP {}: {}", status, detail))),
        }
    }

    /// Return a cached token, requesting a new one when absent or expired
    async fn bearer_token(&self) -> Result<String, DigikeyError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_valid_at(Instant::now()) {
                return Ok(token.as_str().to_string());
            }
        }

        let token = request_token(&self.client, self.base_url(), &self.credentials).await?;
        let text = token.as_str().to_string();
        *cached = Some(token);
        Ok(text)
    }
}

impl PartLookup for DigikeyClient {
    type Error = DigikeyError;

    async fn lookup(
        &self,
        part_number: &str,
        record_count: u32,
    ) -> Result<Vec<ProductRecord>, Self::Error> {
        self.manufacturer_product_details(part_number, record_count)
            .await
    }
}
