//! Payment gateway port for external order processing.
//!
//! Defines the contract for one-shot purchase payments (e.g., PayPal
//! Orders v2). Implementations handle the provider's create/capture
//! handshake; callers never see provider endpoints or auth.
//!
//! # Design
//!
//! - **Gateway agnostic**: Interface works with any order-based provider
//! - **Two-phase**: create an order, then capture it after buyer approval
//! - **Raw passthrough**: responses carry the provider's JSON so the
//!   HTTP layer can forward it to browser-side provider SDKs

use crate::domain::foundation::{Amount, DomainError, OrderId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for payment gateway integrations.
///
/// An order is created first; capture must use the id returned by
/// `create_order`. Neither call is assumed idempotent by callers.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a capture-intent order for the given amount.
    ///
    /// The currency is fixed by gateway configuration. Callers must not
    /// proceed to capture if this fails.
    async fn create_order(&self, amount: &Amount) -> Result<ProviderOrder, PaymentError>;

    /// Capture a previously created order.
    ///
    /// Fails with `PaymentError` if the provider rejects the capture
    /// (unknown id, expired order, declined funding).
    async fn capture_order(&self, order_id: &OrderId) -> Result<ProviderCapture, PaymentError>;
}

/// A created provider order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderOrder {
    /// Provider's order id; required for the capture step.
    pub order_id: OrderId,

    /// HTTP status the provider answered with.
    pub http_status: u16,

    /// Raw provider response body, forwarded to clients as-is.
    pub body: serde_json::Value,
}

/// Result of capturing a provider order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderCapture {
    /// Outcome reported by the provider.
    pub status: CaptureStatus,

    /// Buyer details, when the provider includes them.
    pub payer: Option<PayerInfo>,

    /// HTTP status the provider answered with.
    pub http_status: u16,

    /// Raw provider response body, forwarded to clients as-is.
    pub body: serde_json::Value,
}

/// Capture outcome from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureStatus {
    /// Funds captured.
    Completed,

    /// Provider declined the capture.
    Declined,

    /// Capture accepted but not yet settled.
    Pending,

    /// Status string we do not recognize.
    Unknown,
}

impl CaptureStatus {
    /// Returns true only for a settled capture.
    pub fn is_completed(&self) -> bool {
        matches!(self, CaptureStatus::Completed)
    }

    /// Maps the provider's status string to a known outcome.
    pub fn from_provider(status: &str) -> Self {
        match status {
            "COMPLETED" => CaptureStatus::Completed,
            "DECLINED" | "FAILED" => CaptureStatus::Declined,
            "PENDING" => CaptureStatus::Pending,
            _ => CaptureStatus::Unknown,
        }
    }
}

/// Buyer identity attached to a capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayerInfo {
    /// Provider's account id for the buyer.
    pub payer_id: Option<String>,

    /// Buyer email, when shared by the provider.
    pub email: Option<String>,
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentError {
    /// Error code for categorization.
    pub code: PaymentErrorCode,

    /// Human-readable message. Generic by design; raw provider
    /// responses are logged, not carried here.
    pub message: String,

    /// HTTP status the provider answered with (if it answered).
    pub provider_status: Option<u16>,

    /// Whether the operation can be retried.
    pub retryable: bool,
}

impl PaymentError {
    /// Create a new payment error.
    pub fn new(code: PaymentErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_status: None,
            retryable: code.is_retryable(),
        }
    }

    /// Attach the provider's HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.provider_status = Some(status);
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::AuthenticationFailed, message)
    }

    /// Create an order rejection error.
    pub fn order_rejected(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::OrderRejected, message)
    }

    /// Create a capture rejection error.
    pub fn capture_rejected(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::CaptureRejected, message)
    }

    /// Create an unparseable-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::InvalidResponse, message)
    }

    /// Create a generic provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(PaymentErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PaymentError {}

impl From<PaymentError> for DomainError {
    fn from(err: PaymentError) -> Self {
        use crate::domain::foundation::ErrorCode;

        let code = match err.code {
            PaymentErrorCode::OrderRejected | PaymentErrorCode::CaptureRejected => {
                ErrorCode::PaymentFailed
            }
            _ => ErrorCode::ExternalServiceError,
        };

        DomainError::new(code, err.message)
    }
}

/// Payment error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorCode {
    /// Network connectivity issue.
    NetworkError,

    /// Provider rejected our credentials.
    AuthenticationFailed,

    /// Provider refused to create the order.
    OrderRejected,

    /// Provider refused to capture the order.
    CaptureRejected,

    /// Provider answered with a body we could not parse.
    InvalidResponse,

    /// Provider API error.
    ProviderError,
}

impl PaymentErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentErrorCode::NetworkError | PaymentErrorCode::ProviderError
        )
    }
}

impl std::fmt::Display for PaymentErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentErrorCode::NetworkError => "network_error",
            PaymentErrorCode::AuthenticationFailed => "authentication_failed",
            PaymentErrorCode::OrderRejected => "order_rejected",
            PaymentErrorCode::CaptureRejected => "capture_rejected",
            PaymentErrorCode::InvalidResponse => "invalid_response",
            PaymentErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
