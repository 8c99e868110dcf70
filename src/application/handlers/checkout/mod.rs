//! Checkout handlers.
//!
//! Command handlers for the payment provider handshake:
//!
//! ## Commands
//! - Creating a provider order for an amount
//! - Capturing an approved provider order
//!
//! ## Flow
//! - `CheckoutOrchestrator` drives a full session (create, capture, enroll)
//!   with state tracking

mod capture_order;
mod create_order_intent;
mod orchestrator;

// Commands
pub use capture_order::{CaptureOrderCommand, CaptureOrderHandler};
pub use create_order_intent::{CreateOrderIntentCommand, CreateOrderIntentHandler};

// Flow
pub use orchestrator::CheckoutOrchestrator;
