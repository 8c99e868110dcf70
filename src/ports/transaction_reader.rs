//! Transaction reader port (read side / CQRS queries).
//!
//! Defines the contract for listing purchase records. Kept separate
//! from the write side so read-optimized implementations (cached,
//! denormalized) can be swapped in without touching enrollment.
//!
//! # Example
//!
//! ```ignore
//! async fn purchases_of(
//!     reader: &dyn TransactionReader,
//!     user_id: UserId,
//! ) -> Result<Vec<Transaction>, DomainError> {
//!     reader.list(Some(&user_id)).await
//! }
//! ```

use crate::domain::enrollment::Transaction;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Reader port for transaction queries.
#[async_trait]
pub trait TransactionReader: Send + Sync {
    /// List transactions, newest first.
    ///
    /// With a `user_id` filter only that user's purchases are returned;
    /// without one, every transaction is.
    async fn list(&self, user_id: Option<&UserId>) -> Result<Vec<Transaction>, DomainError>;
}
