//! CaptureOrderHandler - Command handler for capturing a provider order.

use std::sync::Arc;

use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::OrderId;
use crate::ports::{PaymentGateway, ProviderCapture};

/// Generic reason surfaced when capture fails. Raw provider detail
/// stays in the logs.
pub(crate) const CAPTURE_ORDER_FAILED: &str = "Failed to capture order.";

/// Command to capture a previously created provider order.
#[derive(Debug, Clone)]
pub struct CaptureOrderCommand {
    pub order_id: OrderId,
}

/// Handler for the capture half of the provider handshake.
///
/// Stateless passthrough; the capture outcome (including a declined
/// status) is returned to the caller to act on.
pub struct CaptureOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CaptureOrderHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: CaptureOrderCommand,
    ) -> Result<ProviderCapture, CheckoutError> {
        self.gateway
            .capture_order(&cmd.order_id)
            .await
            .map_err(|_| CheckoutError::provider(CAPTURE_ORDER_FAILED))
    }
}
