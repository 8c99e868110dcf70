//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the course checkout domain.

mod ids;
mod timestamp;
mod money;
mod percentage;
mod payment_provider;
mod state_machine;
mod errors;

pub use ids::{ChapterId, CourseId, OrderId, SectionId, TransactionId, UserId};
pub use timestamp::Timestamp;
pub use money::Amount;
pub use percentage::Percentage;
pub use payment_provider::PaymentProviderKind;
pub use state_machine::StateMachine;
pub use errors::{DomainError, ErrorCode, ValidationError};
