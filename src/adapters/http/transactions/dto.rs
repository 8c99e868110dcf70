//! HTTP DTOs (Data Transfer Objects) for transaction endpoints.
//!
//! These types define the JSON request/response structure for the checkout
//! API. They serve as the boundary between HTTP and the application layer.
//! Field names are camelCase to match the published wire contract.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enrollment::{ChapterProgress, CourseProgress, SectionProgress, Transaction};
use crate::domain::foundation::PaymentProviderKind;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to open a provider order for an amount.
///
/// The amount is in decimal major currency units; `Decimal` accepts
/// both JSON numbers and strings, so `50.00` and `"50.00"` are
/// equivalent. Range and precision are validated by `Amount`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentIntentRequest {
    pub amount: Decimal,
}

/// Request to record a captured purchase.
///
/// `transaction_id` carries the provider's order id from the capture
/// step, matching the wire contract clients already speak.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCourseRequest {
    pub user_id: String,
    pub course_id: String,
    pub transaction_id: String,
    pub amount: Decimal,
    pub payment_provider: PaymentProviderKind,
}

/// Query parameters for listing purchases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsParams {
    /// When present, only this user's purchases are returned.
    pub user_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Envelope for successful responses: `{message, data}`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> MessageResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// A recorded purchase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// This backend's record id.
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    /// Provider order id, under the name clients know it by.
    pub transaction_id: String,
    /// Canonical two-fraction-digit string, e.g. `"50.00"`.
    pub amount: String,
    pub payment_provider: String,
    /// When the purchase was recorded (ISO 8601).
    pub created_at: String,
}

impl From<&Transaction> for TransactionResponse {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            user_id: txn.user_id.as_str().to_string(),
            course_id: txn.course_id.as_str().to_string(),
            transaction_id: txn.order_id.as_str().to_string(),
            amount: txn.amount.to_provider_string(),
            payment_provider: txn.provider.as_str().to_string(),
            created_at: txn.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Per-chapter completion flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterProgressResponse {
    pub chapter_id: String,
    pub completed: bool,
}

impl From<&ChapterProgress> for ChapterProgressResponse {
    fn from(chapter: &ChapterProgress) -> Self {
        Self {
            chapter_id: chapter.chapter_id.as_str().to_string(),
            completed: chapter.completed,
        }
    }
}

/// Per-section progress entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProgressResponse {
    pub section_id: String,
    pub chapters: Vec<ChapterProgressResponse>,
}

impl From<&SectionProgress> for SectionProgressResponse {
    fn from(section: &SectionProgress) -> Self {
        Self {
            section_id: section.section_id.as_str().to_string(),
            chapters: section.chapters.iter().map(Into::into).collect(),
        }
    }
}

/// A user's progress snapshot for a purchased course.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgressResponse {
    pub user_id: String,
    pub course_id: String,
    pub enrolled_at: String,
    /// Overall completion, 0-100.
    pub overall_progress: u8,
    pub sections: Vec<SectionProgressResponse>,
    pub last_accessed: String,
}

impl From<&CourseProgress> for CourseProgressResponse {
    fn from(progress: &CourseProgress) -> Self {
        Self {
            user_id: progress.user_id.as_str().to_string(),
            course_id: progress.course_id.as_str().to_string(),
            enrolled_at: progress.enrolled_at.as_datetime().to_rfc3339(),
            overall_progress: progress.overall_completion.value(),
            sections: progress.sections.iter().map(Into::into).collect(),
            last_accessed: progress.last_accessed.as_datetime().to_rfc3339(),
        }
    }
}

/// Payload of a successful purchase: the records written.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseData {
    pub transaction: TransactionResponse,
    pub course_progress: CourseProgressResponse,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
