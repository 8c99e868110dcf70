//! HTTP adapter for the checkout API.
//!
//! Exposes the provider handshake endpoints and the purchase record
//! endpoints over an axum router.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, TransactionsAppState};
pub use routes::{transactions_router, transactions_routes};
