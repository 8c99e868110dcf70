//! EnrollCourseHandler - Command handler for recording a paid purchase.

use std::sync::Arc;

use crate::domain::checkout::CheckoutError;
use crate::domain::enrollment::{CourseProgress, Transaction};
use crate::domain::foundation::{Amount, CourseId, OrderId, PaymentProviderKind, UserId};
use crate::ports::{CourseRepository, EnrollmentRepository};

/// Command to record a captured purchase as an enrollment.
#[derive(Debug, Clone)]
pub struct EnrollCourseCommand {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub order_id: OrderId,
    pub amount: Amount,
    pub provider: PaymentProviderKind,
}

/// Result of a successful enrollment.
#[derive(Debug, Clone)]
pub struct EnrollCourseResult {
    pub transaction: Transaction,
    pub course_progress: CourseProgress,
}

/// Handler for recording purchases.
///
/// Called once per captured payment. Writes the Transaction record, the
/// seeded CourseProgress snapshot, and the enrollment-set append as one
/// atomic commit; a failed commit leaves no partial purchase behind.
pub struct EnrollCourseHandler {
    courses: Arc<dyn CourseRepository>,
    enrollments: Arc<dyn EnrollmentRepository>,
}

impl EnrollCourseHandler {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        enrollments: Arc<dyn EnrollmentRepository>,
    ) -> Self {
        Self {
            courses,
            enrollments,
        }
    }

    pub async fn handle(
        &self,
        cmd: EnrollCourseCommand,
    ) -> Result<EnrollCourseResult, CheckoutError> {
        // 1. Load the course being purchased
        let course = self
            .courses
            .find_by_id(&cmd.course_id)
            .await?
            .ok_or_else(|| CheckoutError::course_not_found(cmd.course_id.clone()))?;

        // 2. Build the purchase record
        let transaction = Transaction::record(
            cmd.user_id.clone(),
            cmd.course_id,
            cmd.order_id,
            cmd.amount,
            cmd.provider,
        );

        // 3. Seed the progress snapshot from the course structure
        let course_progress = CourseProgress::start(cmd.user_id, &course);

        // 4. Commit transaction + progress + enrollment atomically
        self.enrollments
            .record(&transaction, &course_progress)
            .await?;

        Ok(EnrollCourseResult {
            transaction,
            course_progress,
        })
    }
}
