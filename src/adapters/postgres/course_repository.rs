//! PostgreSQL implementation of CourseRepository.
//!
//! Loads Course aggregates from the relational catalog tables
//! (courses, sections, chapters, enrollments).

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::course::{Chapter, Course, Section};
use crate::domain::foundation::{
    Amount, ChapterId, CourseId, DomainError, ErrorCode, SectionId, UserId,
};
use crate::ports::CourseRepository;

/// PostgreSQL implementation of the CourseRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
/// The aggregate spans four tables; sections and chapters are returned
/// in their stored `position` order.
pub struct PostgresCourseRepository {
    pool: PgPool,
}

impl PostgresCourseRepository {
    /// Creates a new PostgresCourseRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a course.
#[derive(Debug, sqlx::FromRow)]
struct CourseRow {
    id: String,
    title: String,
    price: Decimal,
}

#[derive(Debug, sqlx::FromRow)]
struct SectionRow {
    id: String,
}

#[derive(Debug, sqlx::FromRow)]
struct ChapterRow {
    id: String,
    section_id: String,
}

#[derive(Debug, sqlx::FromRow)]
struct EnrollmentRow {
    user_id: String,
}

fn invalid_column(column: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Invalid {} value: {}", column, err),
    )
}

#[async_trait]
impl CourseRepository for PostgresCourseRepository {
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        let row: Option<CourseRow> =
            sqlx::query_as("SELECT id, title, price FROM courses WHERE id = $1")
                .bind(id.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to load course: {}", e),
                    )
                })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let section_rows: Vec<SectionRow> = sqlx::query_as(
            "SELECT id FROM sections WHERE course_id = $1 ORDER BY position",
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to load sections: {}", e),
            )
        })?;

        let chapter_rows: Vec<ChapterRow> = sqlx::query_as(
            r#"
            SELECT ch.id, ch.section_id
            FROM chapters ch
            JOIN sections s ON ch.section_id = s.id
            WHERE s.course_id = $1
            ORDER BY s.position, ch.position
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to load chapters: {}", e),
            )
        })?;

        let enrollment_rows: Vec<EnrollmentRow> =
            sqlx::query_as("SELECT user_id FROM enrollments WHERE course_id = $1")
                .bind(id.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to load enrollments: {}", e),
                    )
                })?;

        // Group chapters under their sections, preserving position order
        let mut chapters_by_section: HashMap<String, Vec<Chapter>> = HashMap::new();
        for chapter in chapter_rows {
            let id = ChapterId::new(chapter.id).map_err(|e| invalid_column("chapter id", e))?;
            chapters_by_section
                .entry(chapter.section_id)
                .or_default()
                .push(Chapter::new(id));
        }

        let mut sections = Vec::with_capacity(section_rows.len());
        for section in section_rows {
            let chapters = chapters_by_section.remove(&section.id).unwrap_or_default();
            let id = SectionId::new(section.id).map_err(|e| invalid_column("section id", e))?;
            sections.push(Section::new(id, chapters));
        }

        let mut enrollments = BTreeSet::new();
        for enrollment in enrollment_rows {
            let user_id =
                UserId::new(enrollment.user_id).map_err(|e| invalid_column("user_id", e))?;
            enrollments.insert(user_id);
        }

        Ok(Some(Course {
            id: CourseId::new(row.id).map_err(|e| invalid_column("course id", e))?,
            title: row.title,
            price: Amount::new(row.price).map_err(|e| invalid_column("price", e))?,
            sections,
            enrollments,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_column_reports_database_error() {
        let err = invalid_column("price", "must be positive");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("price"));
        assert!(err.message.contains("must be positive"));
    }
}
