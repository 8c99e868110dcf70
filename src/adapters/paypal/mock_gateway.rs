//! Mock payment gateway for testing.
//!
//! Provides a configurable mock implementation of `PaymentGateway` for
//! unit and integration tests. Supports:
//! - Canned create/capture responses with realistic bodies
//! - Error injection per method
//! - Capture outcome overrides
//! - Call tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::{Amount, OrderId};
use crate::ports::{
    CaptureStatus, PayerInfo, PaymentError, PaymentGateway, ProviderCapture, ProviderOrder,
};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// let order = mock.create_order(&amount).await?;
/// let capture = mock.capture_order(&order.order_id).await?;
/// assert!(capture.status.is_completed());
/// ```
#[derive(Default)]
pub struct MockPaymentGateway {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

/// Internal mutable state.
#[derive(Default)]
struct MockState {
    /// Orders created so far, in creation order.
    created: Vec<OrderId>,

    /// Order ids passed to `capture_order`, in call order.
    capture_calls: Vec<OrderId>,

    /// Sequence counter for minted order ids.
    next_seq: u32,

    /// Capture outcome override (default: `Completed`).
    capture_status: Option<CaptureStatus>,

    /// Error to return from `create_order`.
    create_error: Option<PaymentError>,

    /// Error to return from `capture_order`.
    capture_error: Option<PaymentError>,
}

impl MockPaymentGateway {
    /// Create a mock where both operations succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock where both operations fail with a network error.
    pub fn failing() -> Self {
        let mock = Self::new();
        mock.set_create_error(PaymentError::network("simulated connection failure"));
        mock.set_capture_error(PaymentError::network("simulated connection failure"));
        mock
    }

    /// Create a mock where orders are created normally but every
    /// capture comes back `Declined`.
    pub fn declining_capture() -> Self {
        let mock = Self::new();
        mock.set_capture_status(CaptureStatus::Declined);
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Set the error returned by `create_order`.
    pub fn set_create_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().create_error = Some(error);
    }

    /// Set the error returned by `capture_order`.
    pub fn set_capture_error(&self, error: PaymentError) {
        self.inner.lock().unwrap().capture_error = Some(error);
    }

    /// Override the status reported by successful captures.
    pub fn set_capture_status(&self, status: CaptureStatus) {
        self.inner.lock().unwrap().capture_status = Some(status);
    }

    /// Clear an injected capture error, simulating a recovered provider.
    pub fn clear_capture_error(&self) {
        self.inner.lock().unwrap().capture_error = None;
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// All orders created so far.
    pub fn created_orders(&self) -> Vec<OrderId> {
        self.inner.lock().unwrap().created.clone()
    }

    /// All order ids passed to `capture_order`.
    pub fn capture_calls(&self) -> Vec<OrderId> {
        self.inner.lock().unwrap().capture_calls.clone()
    }

    /// Whether `capture_order` was called with the given id.
    pub fn was_captured(&self, order_id: &OrderId) -> bool {
        self.inner
            .lock()
            .unwrap()
            .capture_calls
            .iter()
            .any(|id| id == order_id)
    }
}

impl Clone for MockPaymentGateway {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, amount: &Amount) -> Result<ProviderOrder, PaymentError> {
        let mut state = self.inner.lock().unwrap();

        if let Some(error) = state.create_error.clone() {
            return Err(error);
        }

        state.next_seq += 1;
        let id = format!("MOCK-ORDER-{}", state.next_seq);
        let order_id = OrderId::new(&id).unwrap();
        state.created.push(order_id.clone());

        let body = serde_json::json!({
            "id": id,
            "status": "CREATED",
            "purchase_units": [
                {"amount": {"currency_code": "USD", "value": amount.to_provider_string()}}
            ],
            "links": []
        });

        Ok(ProviderOrder {
            order_id,
            http_status: 201,
            body,
        })
    }

    async fn capture_order(&self, order_id: &OrderId) -> Result<ProviderCapture, PaymentError> {
        let mut state = self.inner.lock().unwrap();
        state.capture_calls.push(order_id.clone());

        if let Some(error) = state.capture_error.clone() {
            return Err(error);
        }

        if !state.created.iter().any(|id| id == order_id) {
            return Err(
                PaymentError::capture_rejected("PayPal does not know this order").with_status(404),
            );
        }

        let status = state.capture_status.unwrap_or(CaptureStatus::Completed);
        let status_str = match status {
            CaptureStatus::Completed => "COMPLETED",
            CaptureStatus::Declined => "DECLINED",
            CaptureStatus::Pending => "PENDING",
            CaptureStatus::Unknown => "UNKNOWN",
        };

        let payer = status.is_completed().then(|| PayerInfo {
            payer_id: Some("MOCKPAYER123".to_string()),
            email: Some("buyer@example.com".to_string()),
        });

        let body = serde_json::json!({
            "id": order_id.as_str(),
            "status": status_str,
            "payer": {
                "payer_id": "MOCKPAYER123",
                "email_address": "buyer@example.com"
            }
        });

        Ok(ProviderCapture {
            status,
            payer,
            http_status: 201,
            body,
        })
    }
}
