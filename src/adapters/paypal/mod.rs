//! PayPal payment gateway adapter.
//!
//! Implements the `PaymentGateway` port against the PayPal Orders v2
//! API, including:
//! - OAuth2 client-credentials auth with cached bearer tokens
//! - Order creation with capture intent
//! - Order capture after buyer approval
//!
//! # Security
//!
//! - The client secret is handled via `secrecy::SecretString`
//! - Raw provider error bodies are logged with their `debug_id`, never
//!   returned to callers

mod api_types;
mod gateway;
mod mock_gateway;

pub use gateway::{PaypalConfig, PaypalGateway, LIVE_API_BASE, SANDBOX_API_BASE};
pub use mock_gateway::MockPaymentGateway;
pub use api_types::{
    PaypalAmount, PaypalCaptureResponse, PaypalErrorBody, PaypalOrderRequest,
    PaypalOrderResponse, PaypalPayer, PaypalPurchaseUnit, PaypalTokenResponse,
};
