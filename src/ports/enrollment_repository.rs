//! Enrollment repository port (write side).
//!
//! Defines the contract for committing a completed purchase: the
//! Transaction record, the initial CourseProgress snapshot, and the
//! append to the course's enrollment set.
//!
//! # Design
//!
//! - **One atomic write**: all three effects commit together or not at
//!   all; a failed commit leaves no partial purchase behind
//! - **Idempotent enrollment**: appending an already-enrolled user is a
//!   no-op, so concurrent purchases of the same course are safe
//!
//! # Example
//!
//! ```ignore
//! async fn settle(
//!     repo: &dyn EnrollmentRepository,
//!     course: &Course,
//!     transaction: Transaction,
//! ) -> Result<(), DomainError> {
//!     let progress = CourseProgress::start(transaction.user_id.clone(), course);
//!     repo.record(&transaction, &progress).await
//! }
//! ```

use crate::domain::enrollment::{CourseProgress, Transaction};
use crate::domain::foundation::DomainError;
use async_trait::async_trait;

/// Repository port for enrollment persistence.
///
/// Implementations must ensure:
/// - Transaction, progress, and enrollment append commit atomically
/// - Re-enrolling an already-enrolled user does not fail
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Persist a purchase as one atomic write.
    ///
    /// Inserts the transaction and progress records and adds the buyer
    /// to the course's enrollment set.
    ///
    /// # Errors
    ///
    /// - `CourseNotFound` if the referenced course is gone
    /// - `DatabaseError` on persistence failure (nothing committed)
    async fn record(
        &self,
        transaction: &Transaction,
        progress: &CourseProgress,
    ) -> Result<(), DomainError>;
}
