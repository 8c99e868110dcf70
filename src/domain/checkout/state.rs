//! Checkout session state machine.
//!
//! One state machine per purchase attempt. No provider order exists until
//! the explicit start-payment step; a session abandoned before capture
//! leaves no server-side state (the provider expires the order on its own).

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Where a checkout session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutState {
    /// Nothing requested from the provider yet.
    Idle,

    /// Provider order created, waiting for the buyer to approve.
    OrderCreated,

    /// Capture request in flight.
    Capturing,

    /// Payment captured and enrollment recorded. Terminal.
    Captured,

    /// Provider declined or errored during capture.
    /// Restart returns the session to Idle.
    Failed,
}

impl CheckoutState {
    /// Returns true if the purchase settled.
    pub fn is_settled(&self) -> bool {
        matches!(self, CheckoutState::Captured)
    }

    /// Returns the state name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "Idle",
            CheckoutState::OrderCreated => "OrderCreated",
            CheckoutState::Capturing => "Capturing",
            CheckoutState::Captured => "Captured",
            CheckoutState::Failed => "Failed",
        }
    }
}

impl StateMachine for CheckoutState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CheckoutState::*;
        matches!(
            (self, target),
            // From IDLE
            (Idle, OrderCreated)
            // From ORDER_CREATED
                | (OrderCreated, Capturing)
            // From CAPTURING
                | (Capturing, Captured)
                | (Capturing, Failed)
            // From FAILED
                | (Failed, Idle) // Restart
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CheckoutState::*;
        match self {
            Idle => vec![OrderCreated],
            OrderCreated => vec![Capturing],
            Capturing => vec![Captured, Failed],
            Captured => vec![],
            Failed => vec![Idle],
        }
    }
}
