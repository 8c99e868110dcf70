//! In-memory persistence implementation.
//!
//! This adapter provides an in-memory implementation of the course,
//! enrollment and transaction ports. Useful for:
//! - Development and testing environments
//! - Integration tests that exercise the full purchase flow
//! - Demonstration and prototyping
//!
//! For production deployments, use the PostgreSQL-backed adapters
//! instead.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::course::Course;
use crate::domain::enrollment::{CourseProgress, Transaction};
use crate::domain::foundation::{CourseId, DomainError, ErrorCode, UserId};
use crate::ports::{CourseRepository, EnrollmentRepository, TransactionReader};

/// In-memory implementation of the persistence ports.
///
/// Thread-safe via an internal `Mutex` over the whole store, which also
/// gives `record` the same all-or-nothing behavior as a database
/// transaction. Does not persist data across restarts.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(InMemoryStore::new());
/// store.insert_course(course);
///
/// let handler = EnrollCourseHandler::new(store.clone(), store.clone());
/// ```
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

/// Everything the store holds, guarded by one lock.
#[derive(Default)]
struct StoreState {
    courses: HashMap<CourseId, Course>,
    transactions: Vec<Transaction>,
    progress: Vec<CourseProgress>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a course in the catalog.
    pub fn insert_course(&self, course: Course) {
        let mut state = self.state.lock().unwrap();
        state.courses.insert(course.id.clone(), course);
    }

    /// Returns a course by id, if present.
    ///
    /// Useful for asserting on enrollment sets in tests.
    pub fn course(&self, id: &CourseId) -> Option<Course> {
        self.state.lock().unwrap().courses.get(id).cloned()
    }

    /// Returns all recorded transactions in insertion order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().transactions.clone()
    }

    /// Returns all recorded progress snapshots.
    pub fn progress_records(&self) -> Vec<CourseProgress> {
        self.state.lock().unwrap().progress.clone()
    }

    /// Clears everything.
    ///
    /// Useful for testing scenarios that need a clean slate.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.courses.clear();
        state.transactions.clear();
        state.progress.clear();
    }
}

#[async_trait]
impl CourseRepository for InMemoryStore {
    async fn find_by_id(&self, id: &CourseId) -> Result<Option<Course>, DomainError> {
        Ok(self.state.lock().unwrap().courses.get(id).cloned())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryStore {
    async fn record(
        &self,
        transaction: &Transaction,
        progress: &CourseProgress,
    ) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();

        // Same checks the database enforces via constraints, applied
        // before any write so a failure leaves the store untouched.
        if state
            .transactions
            .iter()
            .any(|t| t.id == transaction.id)
        {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Transaction id already recorded",
            ));
        }
        let course = state.courses.get_mut(&transaction.course_id).ok_or_else(|| {
            DomainError::new(ErrorCode::CourseNotFound, "Course does not exist")
                .with_detail("course_id", transaction.course_id.as_str())
        })?;

        course.enroll(transaction.user_id.clone());
        state.transactions.push(transaction.clone());

        // One snapshot per (user, course); a repeat purchase keeps the
        // first, like the database's keyed conflict skip.
        let already_tracked = state
            .progress
            .iter()
            .any(|p| p.user_id == progress.user_id && p.course_id == progress.course_id);
        if !already_tracked {
            state.progress.push(progress.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl TransactionReader for InMemoryStore {
    async fn list(&self, user_id: Option<&UserId>) -> Result<Vec<Transaction>, DomainError> {
        let state = self.state.lock().unwrap();

        // Appends are chronological, so reverse order is newest first.
        let transactions = state
            .transactions
            .iter()
            .rev()
            .filter(|t| user_id.map_or(true, |u| &t.user_id == u))
            .cloned()
            .collect();

        Ok(transactions)
    }
}
