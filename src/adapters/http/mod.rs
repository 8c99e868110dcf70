//! HTTP adapters - REST API implementations.

pub mod transactions;

// Re-export key types for convenience
pub use transactions::transactions_router;
pub use transactions::TransactionsAppState;
