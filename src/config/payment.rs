//! Payment configuration (PayPal)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration for the PayPal Orders API.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// OAuth2 client id from the PayPal developer dashboard
    pub paypal_client_id: String,

    /// OAuth2 client secret
    pub paypal_client_secret: SecretString,

    /// Which PayPal environment to target
    #[serde(default)]
    pub environment: PaypalEnvironment,

    /// ISO 4217 currency code used for every order
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// PayPal execution environment.
///
/// Closed set: the provider is selected at startup, never switched at
/// runtime.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaypalEnvironment {
    #[default]
    Sandbox,
    Live,
}

impl PaymentConfig {
    /// Check if targeting the sandbox environment
    pub fn is_sandbox(&self) -> bool {
        self.environment == PaypalEnvironment::Sandbox
    }

    /// Check if targeting the live environment
    pub fn is_live(&self) -> bool {
        self.environment == PaypalEnvironment::Live
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.paypal_client_id.is_empty() {
            return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_ID"));
        }
        if self.paypal_client_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("PAYPAL_CLIENT_SECRET"));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrencyCode);
        }
        Ok(())
    }
}

fn default_currency() -> String {
    "USD".to_string()
}
