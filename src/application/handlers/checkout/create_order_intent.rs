//! CreateOrderIntentHandler - Command handler for opening a provider order.

use std::sync::Arc;

use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::Amount;
use crate::ports::{PaymentGateway, ProviderOrder};

/// Generic reason surfaced when order creation fails. Raw provider
/// detail stays in the logs.
pub(crate) const CREATE_ORDER_FAILED: &str = "Failed to create order.";

/// Command to create a provider order for an amount.
#[derive(Debug, Clone)]
pub struct CreateOrderIntentCommand {
    pub amount: Amount,
}

/// Handler for the order-creation half of the provider handshake.
///
/// Stateless: each command opens a fresh provider order. The session
/// flow with state tracking lives in `CheckoutOrchestrator`.
pub struct CreateOrderIntentHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateOrderIntentHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(
        &self,
        cmd: CreateOrderIntentCommand,
    ) -> Result<ProviderOrder, CheckoutError> {
        self.gateway
            .create_order(&cmd.amount)
            .await
            .map_err(|_| CheckoutError::provider(CREATE_ORDER_FAILED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::paypal::MockPaymentGateway;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn returns_provider_order_on_success() {
        let gateway = Arc::new(MockPaymentGateway::new());
        let handler = CreateOrderIntentHandler::new(gateway);

        let result = handler
            .handle(CreateOrderIntentCommand {
                amount: Amount::new(dec!(50.00)).unwrap(),
            })
            .await;

        let order = result.unwrap();
        assert!(!order.order_id.as_str().is_empty());
        assert_eq!(order.http_status, 201);
    }

    #[tokio::test]
    async fn maps_gateway_failure_to_generic_provider_error() {
        let gateway = Arc::new(MockPaymentGateway::failing());
        let handler = CreateOrderIntentHandler::new(gateway);

        let result = handler
            .handle(CreateOrderIntentCommand {
                amount: Amount::new(dec!(50.00)).unwrap(),
            })
            .await;

        match result {
            Err(CheckoutError::Provider { reason }) => {
                assert_eq!(reason, "Failed to create order.")
            }
            other => panic!("Expected provider error, got {:?}", other),
        }
    }
}
