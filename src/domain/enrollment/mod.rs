//! Enrollment domain module.
//!
//! The records written when a purchase completes: the Transaction audit
//! trail and the initial CourseProgress snapshot.
//!
//! # Module Structure
//!
//! - `transaction` - immutable purchase record
//! - `progress` - per-user course progress snapshot

mod progress;
mod transaction;

pub use progress::{ChapterProgress, CourseProgress, SectionProgress};
pub use transaction::Transaction;
