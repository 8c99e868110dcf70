//! In-memory persistence adapter.
//!
//! Implements the `CourseRepository`, `EnrollmentRepository` and
//! `TransactionReader` ports over process memory. Used by tests and by
//! deployments that run without a database.

mod store;

pub use store::InMemoryStore;
