//! Course repository port (read side).
//!
//! Defines the contract for loading Course aggregates. The catalog
//! service authors courses; this backend only reads them to price a
//! purchase and snapshot the structure for progress seeding.
//!
//! # Design
//!
//! - **Read-only here**: enrollment-set writes go through
//!   `EnrollmentRepository` so they commit atomically with the purchase
//! - **Whole aggregate**: returns the full section/chapter tree
//!
//! # Example
//!
//! ```ignore
//! async fn price_of(
//!     repo: &dyn CourseRepository,
//!     course_id: &CourseId,
//! ) -> Result<Amount, DomainError> {
//!     let course = repo
//!         .find_by_id(course_id)
//!         .await?
//!         .ok_or_else(|| DomainError::new(ErrorCode::CourseNotFound, "Course not found"))?;
//!     Ok(course.price)
//! }
//! ```

use crate::domain::course::Course;
use crate::domain::foundation::{CourseId, DomainError};
use async_trait::async_trait;

/// Repository port for Course lookups.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by its catalog id.
    ///
    /// Returns `None` if no such course exists.
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError>;
}
