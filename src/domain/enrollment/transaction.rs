//! Transaction record entity.
//!
//! One Transaction is written per successfully captured purchase. It is the
//! audit trail linking a user, a course, and the provider's order id.
//! Records are immutable once written.

use crate::domain::foundation::{
    Amount, CourseId, OrderId, PaymentProviderKind, Timestamp, TransactionId, UserId,
};
use serde::{Deserialize, Serialize};

/// A completed purchase.
///
/// # Invariants
///
/// - `id` is minted here (UUID v4), never supplied by callers
/// - `order_id` is the provider's order id from the capture step
/// - never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for this record.
    pub id: TransactionId,

    /// Buyer.
    pub user_id: UserId,

    /// Purchased course.
    pub course_id: CourseId,

    /// Provider order id of the captured payment.
    pub order_id: OrderId,

    /// Price paid, in major currency units.
    pub amount: Amount,

    /// Which provider settled the payment.
    pub provider: PaymentProviderKind,

    /// When the purchase was recorded.
    pub created_at: Timestamp,
}

impl Transaction {
    /// Records a new purchase with a fresh id and the current time.
    pub fn record(
        user_id: UserId,
        course_id: CourseId,
        order_id: OrderId,
        amount: Amount,
        provider: PaymentProviderKind,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            course_id,
            order_id,
            amount,
            provider,
            created_at: Timestamp::now(),
        }
    }
}
