//! PostgreSQL implementation of EnrollmentRepository.
//!
//! Commits a purchase as one database transaction: the payment record,
//! the initial progress snapshot and the enrollment-set append either
//! all land or none do.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::enrollment::{CourseProgress, Transaction};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::EnrollmentRepository;

/// PostgreSQL implementation of the EnrollmentRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresEnrollmentRepository {
    pool: PgPool,
}

impl PostgresEnrollmentRepository {
    /// Creates a new PostgresEnrollmentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PostgresEnrollmentRepository {
    async fn record(
        &self,
        transaction: &Transaction,
        progress: &CourseProgress,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to start transaction: {}", e),
            )
        })?;

        // Insert the purchase record
        sqlx::query(
            r#"
            INSERT INTO transactions (
                id, user_id, course_id, order_id, amount, payment_provider, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(transaction.id.as_uuid())
        .bind(transaction.user_id.as_str())
        .bind(transaction.course_id.as_str())
        .bind(transaction.order_id.as_str())
        .bind(Decimal::from(transaction.amount))
        .bind(transaction.provider.as_str())
        .bind(transaction.created_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("transactions_course_id_fkey") {
                    return DomainError::new(ErrorCode::CourseNotFound, "Course does not exist")
                        .with_detail("course_id", transaction.course_id.as_str());
                }
                if db_err.constraint() == Some("transactions_order_id_key") {
                    return DomainError::new(
                        ErrorCode::DatabaseError,
                        "Order id already recorded",
                    );
                }
            }
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to record transaction: {}", e),
            )
        })?;

        // Insert the initial progress snapshot; a re-purchase keeps the
        // buyer's existing progress
        sqlx::query(
            r#"
            INSERT INTO course_progress (
                user_id, course_id, enrolled_at, overall_completion, sections, last_accessed
            ) VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, course_id) DO NOTHING
            "#,
        )
        .bind(progress.user_id.as_str())
        .bind(progress.course_id.as_str())
        .bind(progress.enrolled_at.as_datetime())
        .bind(i16::from(progress.overall_completion.value()))
        .bind(sqlx::types::Json(&progress.sections))
        .bind(progress.last_accessed.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to record course progress: {}", e),
            )
        })?;

        // Append to the enrollment set; union-add, so a second purchase
        // of the same course is a no-op here
        sqlx::query(
            r#"
            INSERT INTO enrollments (course_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (course_id, user_id) DO NOTHING
            "#,
        )
        .bind(transaction.course_id.as_str())
        .bind(transaction.user_id.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to record enrollment: {}", e),
            )
        })?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit enrollment: {}", e),
            )
        })?;

        Ok(())
    }
}
