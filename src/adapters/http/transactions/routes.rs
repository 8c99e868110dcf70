//! Axum router configuration for transaction endpoints.
//!
//! This module defines the route structure for the checkout API and
//! wires it to the corresponding handlers.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    capture_paypal_order, create_payment_intent, health, list_transactions, purchase_course,
    TransactionsAppState,
};

/// Create the transactions API router.
///
/// # Routes
///
/// ## Provider Handshake
/// - `POST /paypal/payment-intent` - Open a provider order for an amount
/// - `POST /paypal/:orderID/capturePaypalOrder` - Capture a created order
///
/// ## Purchase Records
/// - `POST /` - Record a captured purchase (transaction + progress + enrollment)
/// - `GET /?userId=` - List purchases, optionally for one user
pub fn transactions_routes() -> Router<TransactionsAppState> {
    Router::new()
        .route("/", post(purchase_course).get(list_transactions))
        .route("/paypal/payment-intent", post(create_payment_intent))
        .route(
            "/paypal/:order_id/capturePaypalOrder",
            post(capture_paypal_order),
        )
}

/// Create the complete application router.
///
/// Mounts the transactions routes at `/transactions` alongside the
/// liveness probe. The caller supplies the state and outer layers
/// (trace, CORS, timeout).
///
/// # Example
///
/// ```ignore
/// let app = transactions_router().with_state(app_state);
/// ```
pub fn transactions_router() -> Router<TransactionsAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/transactions", transactions_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::adapters::memory::InMemoryStore;
    use crate::adapters::paypal::MockPaymentGateway;

    fn test_state() -> TransactionsAppState {
        let store = Arc::new(InMemoryStore::new());
        TransactionsAppState {
            payment_gateway: Arc::new(MockPaymentGateway::new()),
            course_repository: store.clone(),
            enrollment_repository: store.clone(),
            transaction_reader: store,
        }
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let app = transactions_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = transactions_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/transactions/unknown/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn payment_intent_rejects_missing_body() {
        let app = transactions_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/transactions/paypal/payment-intent")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn listing_starts_empty() {
        let app = transactions_router().with_state(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/transactions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
