//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the PayPal Orders v2
//! API. Handles OAuth2 client-credentials auth with token caching,
//! order creation and order capture.
//!
//! # Security
//!
//! - The client secret is handled via `secrecy::SecretString`
//! - Raw provider error bodies are logged, never surfaced to callers
//!
//! # Configuration
//!
//! ```ignore
//! let config = PaypalConfig::new(client_id, secret).with_currency("USD");
//! let gateway = PaypalGateway::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

use crate::domain::foundation::{Amount, OrderId};
use crate::ports::{
    CaptureStatus, PayerInfo, PaymentError, PaymentGateway, ProviderCapture, ProviderOrder,
};

use super::api_types::{
    PaypalCaptureResponse, PaypalErrorBody, PaypalOrderRequest, PaypalOrderResponse,
    PaypalTokenResponse,
};

/// PayPal REST API base URL for the sandbox environment.
pub const SANDBOX_API_BASE: &str = "https://api-m.sandbox.paypal.com";

/// PayPal REST API base URL for the live environment.
pub const LIVE_API_BASE: &str = "https://api-m.paypal.com";

/// Refresh the cached token this many seconds before it expires.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

/// PayPal API configuration.
#[derive(Clone)]
pub struct PaypalConfig {
    /// OAuth2 client id from the PayPal developer dashboard.
    client_id: String,

    /// OAuth2 client secret.
    secret: SecretString,

    /// Base URL for the PayPal REST API (default: sandbox).
    api_base_url: String,

    /// ISO 4217 currency code for all orders (default: USD).
    currency_code: String,
}

impl PaypalConfig {
    /// Create a new PayPal configuration targeting the sandbox.
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            secret: SecretString::new(secret.into()),
            api_base_url: SANDBOX_API_BASE.to_string(),
            currency_code: "USD".to_string(),
        }
    }

    /// Set a custom API base URL (live environment or a test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the currency code used for all orders.
    pub fn with_currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }
}

/// A cached OAuth2 access token.
struct CachedToken {
    access_token: String,
    expires_at: i64,
}

impl CachedToken {
    /// Usable if it will not expire within the refresh margin.
    fn is_fresh(&self, now: i64) -> bool {
        self.expires_at - TOKEN_REFRESH_MARGIN_SECS > now
    }
}

/// PayPal payment gateway adapter.
///
/// Implements `PaymentGateway` for the Orders v2 API. Safe to share
/// behind an `Arc`; the token cache is synchronized internally.
pub struct PaypalGateway {
    config: PaypalConfig,
    http_client: reqwest::Client,
    token: RwLock<Option<CachedToken>>,
}

impl PaypalGateway {
    /// Create a new PayPal gateway with the given configuration.
    pub fn new(config: PaypalConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    /// Return a valid access token, fetching a fresh one when the
    /// cached token is missing or near expiry.
    async fn access_token(&self) -> Result<String, PaymentError> {
        let now = chrono::Utc::now().timestamp();

        {
            let guard = self.token.read().await;
            if let Some(token) = guard.as_ref() {
                if token.is_fresh(now) {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let mut guard = self.token.write().await;

        // Another task may have refreshed while we waited for the lock
        if let Some(token) = guard.as_ref() {
            if token.is_fresh(now) {
                return Ok(token.access_token.clone());
            }
        }

        let fresh = self.fetch_token().await?;
        let access_token = fresh.access_token.clone();
        *guard = Some(fresh);
        Ok(access_token)
    }

    /// Exchange client credentials for an access token.
    async fn fetch_token(&self) -> Result<CachedToken, PaymentError> {
        let url = format!("{}/v1/oauth2/token", self.config.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.client_id,
                Some(self.config.secret.expose_secret()),
            )
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "PayPal token request failed"
            );
            return Err(
                PaymentError::authentication("PayPal credentials were rejected")
                    .with_status(status.as_u16()),
            );
        }

        let token: PaypalTokenResponse = response.json().await.map_err(|e| {
            PaymentError::invalid_response(format!("Failed to parse token response: {}", e))
        })?;

        tracing::debug!(expires_in = token.expires_in, "PayPal access token refreshed");

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: chrono::Utc::now().timestamp() + token.expires_in as i64,
        })
    }

    /// Drop the cached token so the next call re-authenticates.
    async fn drop_cached_token(&self) {
        self.token.write().await.take();
    }

    /// Log a provider error body with its PayPal correlation id.
    fn log_provider_error(operation: &str, status: u16, error_text: &str) {
        let parsed: PaypalErrorBody = serde_json::from_str(error_text).unwrap_or_default();
        tracing::error!(
            operation,
            status,
            error_name = parsed.name.as_deref().unwrap_or("unknown"),
            debug_id = parsed.debug_id.as_deref().unwrap_or(""),
            error = %error_text,
            "PayPal API request failed"
        );
    }
}

#[async_trait]
impl PaymentGateway for PaypalGateway {
    async fn create_order(&self, amount: &Amount) -> Result<ProviderOrder, PaymentError> {
        let token = self.access_token().await?;
        let url = format!("{}/v2/checkout/orders", self.config.api_base_url);
        let payload =
            PaypalOrderRequest::capture(&self.config.currency_code, amount.to_provider_string());

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&token)
            .header("Prefer", "return=minimal")
            .json(&payload)
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            Self::log_provider_error("create_order", status.as_u16(), &error_text);

            if status.as_u16() == 401 {
                self.drop_cached_token().await;
            }
            let err = match status.as_u16() {
                401 => PaymentError::authentication("PayPal credentials were rejected"),
                400 | 422 => PaymentError::order_rejected("PayPal rejected the order request"),
                _ => PaymentError::provider("PayPal order creation failed"),
            };
            return Err(err.with_status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            PaymentError::invalid_response(format!("Failed to parse order response: {}", e))
        })?;

        let order: PaypalOrderResponse = serde_json::from_value(body.clone()).map_err(|e| {
            PaymentError::invalid_response(format!("Order response missing id: {}", e))
        })?;
        let order_id = OrderId::new(order.id)
            .map_err(|_| PaymentError::invalid_response("Order response carried an empty id"))?;

        tracing::info!(
            order_id = %order_id,
            order_status = %order.status,
            "PayPal order created"
        );

        Ok(ProviderOrder {
            order_id,
            http_status: status.as_u16(),
            body,
        })
    }

    async fn capture_order(&self, order_id: &OrderId) -> Result<ProviderCapture, PaymentError> {
        let token = self.access_token().await?;
        let url = format!(
            "{}/v2/checkout/orders/{}/capture",
            self.config.api_base_url,
            order_id.as_str()
        );

        // The capture endpoint requires a JSON content type even with an
        // empty request body.
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&token)
            .header("Prefer", "return=minimal")
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| PaymentError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            Self::log_provider_error("capture_order", status.as_u16(), &error_text);

            if status.as_u16() == 401 {
                self.drop_cached_token().await;
            }
            let err = match status.as_u16() {
                401 => PaymentError::authentication("PayPal credentials were rejected"),
                404 => PaymentError::capture_rejected("PayPal does not know this order"),
                400 | 422 => PaymentError::capture_rejected("PayPal declined the capture"),
                _ => PaymentError::provider("PayPal order capture failed"),
            };
            return Err(err.with_status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            PaymentError::invalid_response(format!("Failed to parse capture response: {}", e))
        })?;

        let capture: PaypalCaptureResponse = serde_json::from_value(body.clone()).map_err(|e| {
            PaymentError::invalid_response(format!("Capture response missing status: {}", e))
        })?;

        let capture_status = CaptureStatus::from_provider(&capture.status);
        let payer = capture.payer.map(|p| PayerInfo {
            payer_id: p.payer_id,
            email: p.email_address,
        });

        tracing::info!(
            order_id = %order_id,
            capture_status = ?capture_status,
            "PayPal capture completed"
        );

        Ok(ProviderCapture {
            status: capture_status,
            payer,
            http_status: status.as_u16(),
            body,
        })
    }
}
