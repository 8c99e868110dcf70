//! HTTP handlers for transaction endpoints.
//!
//! These handlers connect Axum routes to application layer command/query
//! handlers. Provider responses are forwarded to the client raw, with the
//! provider's HTTP status, so browser-side provider SDKs can consume them
//! unchanged.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::checkout::{
    CaptureOrderCommand, CaptureOrderHandler, CreateOrderIntentCommand, CreateOrderIntentHandler,
};
use crate::application::handlers::enrollment::{
    EnrollCourseCommand, EnrollCourseHandler, ListTransactionsHandler, ListTransactionsQuery,
};
use crate::domain::checkout::CheckoutError;
use crate::domain::foundation::{Amount, CourseId, OrderId, UserId};
use crate::ports::{CourseRepository, EnrollmentRepository, PaymentGateway, TransactionReader};

use super::dto::{
    CreatePaymentIntentRequest, ErrorResponse, ListTransactionsParams, MessageResponse,
    PurchaseCourseRequest, PurchaseData, TransactionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// This struct is cloned for each request and contains Arc-wrapped
/// dependencies for efficient sharing across handlers.
#[derive(Clone)]
pub struct TransactionsAppState {
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub course_repository: Arc<dyn CourseRepository>,
    pub enrollment_repository: Arc<dyn EnrollmentRepository>,
    pub transaction_reader: Arc<dyn TransactionReader>,
}

impl TransactionsAppState {
    /// Create handlers on demand from the shared state.
    pub fn create_order_intent_handler(&self) -> CreateOrderIntentHandler {
        CreateOrderIntentHandler::new(self.payment_gateway.clone())
    }

    pub fn capture_order_handler(&self) -> CaptureOrderHandler {
        CaptureOrderHandler::new(self.payment_gateway.clone())
    }

    pub fn enroll_course_handler(&self) -> EnrollCourseHandler {
        EnrollCourseHandler::new(
            self.course_repository.clone(),
            self.enrollment_repository.clone(),
        )
    }

    pub fn list_transactions_handler(&self) -> ListTransactionsHandler {
        ListTransactionsHandler::new(self.transaction_reader.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

/// HTTP-facing wrapper around `CheckoutError`.
pub struct ApiError(pub CheckoutError);

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            CheckoutError::Provider { .. } => StatusCode::BAD_GATEWAY,
            CheckoutError::CourseNotFound(_) => StatusCode::NOT_FOUND,
            CheckoutError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CheckoutError::Validation { .. } => StatusCode::BAD_REQUEST,
            CheckoutError::InvalidTransition { .. } => StatusCode::CONFLICT,
        };
        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}

/// Forward the provider's HTTP status, falling back to 200 for values
/// `StatusCode` does not accept.
fn forward_status(provider_status: u16) -> StatusCode {
    StatusCode::from_u16(provider_status).unwrap_or(StatusCode::OK)
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /transactions/paypal/payment-intent
///
/// Opens a provider order for the requested amount and forwards the
/// provider's raw order JSON with its status.
pub async fn create_payment_intent(
    State(state): State<TransactionsAppState>,
    Json(request): Json<CreatePaymentIntentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let amount = Amount::new(request.amount).map_err(CheckoutError::from)?;

    let order = state
        .create_order_intent_handler()
        .handle(CreateOrderIntentCommand { amount })
        .await?;

    Ok((forward_status(order.http_status), Json(order.body)))
}

/// POST /transactions/paypal/:orderID/capturePaypalOrder
///
/// Captures a previously created order and forwards the provider's raw
/// capture JSON with its status.
pub async fn capture_paypal_order(
    State(state): State<TransactionsAppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let order_id = OrderId::new(order_id.trim()).map_err(CheckoutError::from)?;

    let capture = state
        .capture_order_handler()
        .handle(CaptureOrderCommand { order_id })
        .await?;

    Ok((forward_status(capture.http_status), Json(capture.body)))
}

/// POST /transactions
///
/// Records a captured purchase: transaction, progress snapshot and
/// enrollment, committed atomically.
pub async fn purchase_course(
    State(state): State<TransactionsAppState>,
    Json(request): Json<PurchaseCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let command = EnrollCourseCommand {
        user_id: UserId::new(request.user_id).map_err(CheckoutError::from)?,
        course_id: CourseId::new(request.course_id).map_err(CheckoutError::from)?,
        order_id: OrderId::new(request.transaction_id).map_err(CheckoutError::from)?,
        amount: Amount::new(request.amount).map_err(CheckoutError::from)?,
        provider: request.payment_provider,
    };

    let result = state.enroll_course_handler().handle(command).await?;

    let body = MessageResponse::new(
        "Purchased Course successfully",
        PurchaseData {
            transaction: TransactionResponse::from(&result.transaction),
            course_progress: (&result.course_progress).into(),
        },
    );
    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /transactions?userId=
///
/// Lists purchases, newest first, optionally filtered to one user.
pub async fn list_transactions(
    State(state): State<TransactionsAppState>,
    Query(params): Query<ListTransactionsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = params
        .user_id
        .filter(|id| !id.trim().is_empty())
        .map(UserId::new)
        .transpose()
        .map_err(CheckoutError::from)?;

    let result = state
        .list_transactions_handler()
        .handle(ListTransactionsQuery { user_id })
        .await?;

    let transactions: Vec<TransactionResponse> =
        result.transactions.iter().map(Into::into).collect();
    let body = MessageResponse::new("Transactions retrieved successfully", transactions);
    Ok((StatusCode::OK, Json(body)))
}

/// GET /health
///
/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
