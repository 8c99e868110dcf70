//! PayPal-specific types for the Orders v2 API.
//!
//! These types represent PayPal request and response payloads as they
//! travel over the wire. They are designed to:
//! - Serialize order requests exactly as the Orders v2 API expects
//! - Extract the few fields this service acts on (id, status, payer)
//! - Leave the rest of the response untouched for raw passthrough

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════════
// OAuth
// ════════════════════════════════════════════════════════════════════════════════

/// Response from `POST /v1/oauth2/token`.
///
/// Only the fields needed for bearer auth and cache expiry are kept;
/// PayPal sends several more (`scope`, `app_id`, `nonce`).
#[derive(Debug, Clone, Deserialize)]
pub struct PaypalTokenResponse {
    /// Bearer token for subsequent API calls.
    pub access_token: String,

    /// Token lifetime in seconds from issuance.
    pub expires_in: u64,
}

// ════════════════════════════════════════════════════════════════════════════════
// Order Creation
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /v2/checkout/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct PaypalOrderRequest {
    /// Processing intent. This service only creates `CAPTURE` orders.
    pub intent: String,

    /// One purchase unit per order; this service always sends exactly one.
    pub purchase_units: Vec<PaypalPurchaseUnit>,
}

impl PaypalOrderRequest {
    /// Builds a single-unit capture-intent order.
    ///
    /// `value` must already be in the provider's canonical form
    /// (two fraction digits, e.g. `"50.00"`).
    pub fn capture(currency_code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            intent: "CAPTURE".to_string(),
            purchase_units: vec![PaypalPurchaseUnit {
                amount: PaypalAmount {
                    currency_code: currency_code.into(),
                    value: value.into(),
                },
            }],
        }
    }
}

/// A single purchase unit within an order request.
#[derive(Debug, Clone, Serialize)]
pub struct PaypalPurchaseUnit {
    pub amount: PaypalAmount,
}

/// Money as PayPal represents it: currency code plus a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaypalAmount {
    /// ISO 4217 currency code, e.g. `USD`.
    pub currency_code: String,

    /// Decimal string with up to two fraction digits.
    pub value: String,
}

/// Response from `POST /v2/checkout/orders`.
///
/// With `Prefer: return=minimal` PayPal answers with just the id,
/// status and HATEOAS links; only the first two matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct PaypalOrderResponse {
    /// Provider order id, used for the capture step.
    pub id: String,

    /// Order status, `CREATED` on success.
    #[serde(default)]
    pub status: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Capture
// ════════════════════════════════════════════════════════════════════════════════

/// Response from `POST /v2/checkout/orders/{id}/capture`.
///
/// Deserialized from a clone of the raw body; the raw body itself is
/// forwarded to clients untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct PaypalCaptureResponse {
    /// Capture outcome, `COMPLETED` when funds settled.
    #[serde(default)]
    pub status: String,

    /// Buyer identity, present on settled captures.
    pub payer: Option<PaypalPayer>,
}

/// Buyer details attached to a capture response.
#[derive(Debug, Clone, Deserialize)]
pub struct PaypalPayer {
    /// PayPal account id of the buyer.
    pub payer_id: Option<String>,

    /// Buyer email as shared by PayPal.
    pub email_address: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Error body PayPal returns on non-2xx responses.
///
/// Parsed for structured logging only; the message shown to callers is
/// always a generic one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaypalErrorBody {
    /// Machine-readable error name, e.g. `INVALID_REQUEST`.
    pub name: Option<String>,

    /// Human-readable summary from PayPal.
    pub message: Option<String>,

    /// PayPal's correlation id for support lookups.
    pub debug_id: Option<String>,
}
