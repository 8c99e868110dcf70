//! Enrollment handlers.
//!
//! Command and query handlers for purchase records:
//!
//! ## Commands
//! - Recording a captured payment as transaction + progress + enrollment
//!
//! ## Queries
//! - Listing purchase history, optionally per user

mod enroll_course;
mod list_transactions;

// Commands
pub use enroll_course::{EnrollCourseCommand, EnrollCourseHandler, EnrollCourseResult};

// Queries
pub use list_transactions::{
    ListTransactionsHandler, ListTransactionsQuery, ListTransactionsResult,
};
