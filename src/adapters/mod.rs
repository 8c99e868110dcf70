//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum REST API for the checkout endpoints
//! - `paypal` - PayPal Orders v2 payment gateway (plus a test mock)
//! - `postgres` - PostgreSQL-backed persistence
//! - `memory` - In-memory persistence for tests and development

pub mod http;
pub mod memory;
pub mod paypal;
pub mod postgres;
