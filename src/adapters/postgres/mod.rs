//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresCourseRepository` - Course aggregate reads across the catalog tables
//! - `PostgresEnrollmentRepository` - Atomic purchase commit (transaction + progress + enrollment)
//! - `PostgresTransactionReader` - Purchase history queries

mod course_repository;
mod enrollment_repository;
mod transaction_reader;

pub use course_repository::PostgresCourseRepository;
pub use enrollment_repository::PostgresEnrollmentRepository;
pub use transaction_reader::PostgresTransactionReader;
