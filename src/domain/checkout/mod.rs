//! Checkout domain module.
//!
//! The purchase flow itself: session state machine and error taxonomy.
//!
//! # Module Structure
//!
//! - `state` - CheckoutState state machine
//! - `errors` - CheckoutError taxonomy

mod errors;
mod state;

pub use errors::CheckoutError;
pub use state::CheckoutState;
