//! Integration tests for the transactions HTTP API.
//!
//! Drives the axum router with in-process requests over the mock
//! payment gateway and the in-memory store, asserting on the wire
//! contract: paths, envelopes, forwarded provider bodies and error
//! shapes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use course_checkout::adapters::http::transactions::{transactions_router, TransactionsAppState};
use course_checkout::adapters::memory::InMemoryStore;
use course_checkout::adapters::paypal::MockPaymentGateway;
use course_checkout::domain::course::{Chapter, Course, Section};
use course_checkout::domain::foundation::{Amount, ChapterId, CourseId, SectionId};
use rust_decimal_macros::dec;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    store: Arc<InMemoryStore>,
}

fn test_app(gateway: MockPaymentGateway) -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    store.insert_course(Course::new(
        CourseId::new("c1").unwrap(),
        "Practical Rust",
        Amount::new(dec!(50.00)).unwrap(),
        vec![
            Section::new(
                SectionId::new("s1").unwrap(),
                vec![
                    Chapter::new(ChapterId::new("ch1").unwrap()),
                    Chapter::new(ChapterId::new("ch2").unwrap()),
                ],
            ),
            Section::new(
                SectionId::new("s2").unwrap(),
                vec![Chapter::new(ChapterId::new("ch3").unwrap())],
            ),
        ],
    ));

    let state = TransactionsAppState {
        payment_gateway: Arc::new(gateway),
        course_repository: store.clone(),
        enrollment_repository: store.clone(),
        transaction_reader: store.clone(),
    };

    TestApp {
        router: transactions_router().with_state(state),
        store,
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn purchase_body(user: &str, order: &str) -> Value {
    json!({
        "userId": user,
        "courseId": "c1",
        "transactionId": order,
        "amount": 50.00,
        "paymentProvider": "paypal"
    })
}

// =============================================================================
// Provider Handshake
// =============================================================================

#[tokio::test]
async fn payment_intent_forwards_provider_order() {
    let app = test_app(MockPaymentGateway::new());

    let response = app
        .router
        .oneshot(post_json(
            "/transactions/paypal/payment-intent",
            json!({"amount": 50.00}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["id"], "MOCK-ORDER-1");
    assert_eq!(body["status"], "CREATED");
    assert_eq!(
        body["purchase_units"][0]["amount"]["value"],
        "50.00"
    );
}

#[tokio::test]
async fn payment_intent_accepts_string_amount() {
    let app = test_app(MockPaymentGateway::new());

    let response = app
        .router
        .oneshot(post_json(
            "/transactions/paypal/payment-intent",
            json!({"amount": "19.99"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn payment_intent_rejects_invalid_amounts() {
    for amount in [json!(0), json!(-5.00), json!(9.999)] {
        let app = test_app(MockPaymentGateway::new());
        let response = app
            .router
            .oneshot(post_json(
                "/transactions/paypal/payment-intent",
                json!({ "amount": amount }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "amount {}", amount);
        let body = read_json(response).await;
        assert_eq!(body["error_code"], "VALIDATION_FAILED");
    }
}

#[tokio::test]
async fn payment_intent_provider_failure_is_bad_gateway() {
    let app = test_app(MockPaymentGateway::failing());

    let response = app
        .router
        .oneshot(post_json(
            "/transactions/paypal/payment-intent",
            json!({"amount": 50.00}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Failed to create order.");
}

#[tokio::test]
async fn capture_forwards_provider_capture() {
    let gateway = MockPaymentGateway::new();
    let app = test_app(gateway);

    let create = app
        .router
        .clone()
        .oneshot(post_json(
            "/transactions/paypal/payment-intent",
            json!({"amount": 50.00}),
        ))
        .await
        .unwrap();
    let order_id = read_json(create).await["id"].as_str().unwrap().to_string();

    let response = app
        .router
        .oneshot(post_json(
            &format!("/transactions/paypal/{}/capturePaypalOrder", order_id),
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["status"], "COMPLETED");
    assert_eq!(body["id"], order_id);
}

#[tokio::test]
async fn capture_of_unknown_order_is_bad_gateway() {
    let app = test_app(MockPaymentGateway::new());

    let response = app
        .router
        .oneshot(post_json(
            "/transactions/paypal/never-created/capturePaypalOrder",
            json!({}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Failed to capture order.");
    // No purchase record was created
    assert!(app.store.transactions().is_empty());
}

// =============================================================================
// Purchase Records
// =============================================================================

#[tokio::test]
async fn purchase_records_transaction_and_progress() {
    let app = test_app(MockPaymentGateway::new());

    let response = app
        .router
        .oneshot(post_json("/transactions", purchase_body("u1", "O1")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["message"], "Purchased Course successfully");

    let transaction = &body["data"]["transaction"];
    assert_eq!(transaction["userId"], "u1");
    assert_eq!(transaction["courseId"], "c1");
    assert_eq!(transaction["transactionId"], "O1");
    assert_eq!(transaction["amount"], "50.00");
    assert_eq!(transaction["paymentProvider"], "paypal");

    let progress = &body["data"]["courseProgress"];
    assert_eq!(progress["overallProgress"], 0);
    assert_eq!(progress["sections"].as_array().unwrap().len(), 2);
    assert_eq!(
        progress["sections"][0]["chapters"].as_array().unwrap().len(),
        2
    );
    assert_eq!(progress["sections"][0]["chapters"][0]["completed"], false);
}

#[tokio::test]
async fn purchase_of_missing_course_is_not_found() {
    let app = test_app(MockPaymentGateway::new());

    let mut body = purchase_body("u1", "O1");
    body["courseId"] = json!("missing");
    let response = app
        .router
        .oneshot(post_json("/transactions", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error_code"], "COURSE_NOT_FOUND");
    assert!(app.store.transactions().is_empty());
}

#[tokio::test]
async fn purchase_rejects_unknown_provider_tag() {
    let app = test_app(MockPaymentGateway::new());

    let mut body = purchase_body("u1", "O1");
    body["paymentProvider"] = json!("stripe");
    let response = app
        .router
        .oneshot(post_json("/transactions", body))
        .await
        .unwrap();

    // Closed provider enum: rejected during deserialization
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn listing_returns_all_or_filtered_purchases() {
    let app = test_app(MockPaymentGateway::new());

    for (user, order) in [("u1", "O1"), ("u2", "O2"), ("u1", "O3")] {
        let response = app
            .router
            .clone()
            .oneshot(post_json("/transactions", purchase_body(user, order)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let all = app.router.clone().oneshot(get("/transactions")).await.unwrap();
    assert_eq!(all.status(), StatusCode::OK);
    let body = read_json(all).await;
    assert_eq!(body["message"], "Transactions retrieved successfully");
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let filtered = app
        .router
        .oneshot(get("/transactions?userId=u1"))
        .await
        .unwrap();
    let body = read_json(filtered).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert!(data.iter().all(|t| t["userId"] == "u1"));
}

#[tokio::test]
async fn listing_newest_first() {
    let app = test_app(MockPaymentGateway::new());

    for order in ["O1", "O2"] {
        app.router
            .clone()
            .oneshot(post_json("/transactions", purchase_body("u1", order)))
            .await
            .unwrap();
    }

    let response = app.router.oneshot(get("/transactions")).await.unwrap();
    let body = read_json(response).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["transactionId"], "O2");
    assert_eq!(data[1]["transactionId"], "O1");
}

// =============================================================================
// End to End
// =============================================================================

#[tokio::test]
async fn full_checkout_over_http() {
    let app = test_app(MockPaymentGateway::new());

    // 1. Open a provider order for 50.00
    let create = app
        .router
        .clone()
        .oneshot(post_json(
            "/transactions/paypal/payment-intent",
            json!({"amount": 50.00}),
        ))
        .await
        .unwrap();
    assert_eq!(create.status(), StatusCode::CREATED);
    let order_id = read_json(create).await["id"].as_str().unwrap().to_string();

    // 2. Capture it
    let capture = app
        .router
        .clone()
        .oneshot(post_json(
            &format!("/transactions/paypal/{}/capturePaypalOrder", order_id),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(read_json(capture).await["status"], "COMPLETED");

    // 3. Record the purchase
    let purchase = app
        .router
        .clone()
        .oneshot(post_json("/transactions", purchase_body("u1", &order_id)))
        .await
        .unwrap();
    assert_eq!(purchase.status(), StatusCode::CREATED);
    let body = read_json(purchase).await;
    assert_eq!(body["data"]["transaction"]["amount"], "50.00");
    assert_eq!(body["data"]["courseProgress"]["overallProgress"], 0);

    // 4. Buyer is enrolled and the purchase is listed
    let course = app.store.course(&CourseId::new("c1").unwrap()).unwrap();
    assert_eq!(course.enrollments.len(), 1);

    let listed = app
        .router
        .oneshot(get("/transactions?userId=u1"))
        .await
        .unwrap();
    let body = read_json(listed).await;
    assert_eq!(body["data"][0]["transactionId"], order_id);
}
