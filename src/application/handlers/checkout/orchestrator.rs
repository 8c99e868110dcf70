//! CheckoutOrchestrator - the stateful purchase flow.
//!
//! One orchestrator per purchase attempt. Drives the session through
//! `Idle → OrderCreated → Capturing → Captured | Failed`, calling the
//! payment gateway and, on a settled capture, the enrollment writer.
//!
//! Dropping an orchestrator mid-flow is the abandonment path: nothing
//! was persisted before capture, and the provider expires unfinished
//! orders on its own schedule.

use std::sync::Arc;

use crate::domain::checkout::{CheckoutError, CheckoutState};
use crate::domain::foundation::{
    Amount, CourseId, OrderId, PaymentProviderKind, StateMachine, UserId,
};
use crate::ports::{PaymentGateway, ProviderOrder};

use super::super::enrollment::{EnrollCourseCommand, EnrollCourseHandler, EnrollCourseResult};
use super::capture_order::CAPTURE_ORDER_FAILED;
use super::create_order_intent::CREATE_ORDER_FAILED;

/// Drives a single checkout session.
///
/// No provider order exists until `start_payment` is called; session
/// construction is free of side effects so UI re-renders cannot mint
/// stray orders.
pub struct CheckoutOrchestrator {
    gateway: Arc<dyn PaymentGateway>,
    enrollment: EnrollCourseHandler,
    user_id: UserId,
    course_id: CourseId,
    amount: Amount,
    provider: PaymentProviderKind,
    state: CheckoutState,
    order: Option<OrderId>,
}

impl CheckoutOrchestrator {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        enrollment: EnrollCourseHandler,
        user_id: UserId,
        course_id: CourseId,
        amount: Amount,
        provider: PaymentProviderKind,
    ) -> Self {
        Self {
            gateway,
            enrollment,
            user_id,
            course_id,
            amount,
            provider,
            state: CheckoutState::Idle,
            order: None,
        }
    }

    /// Current session state.
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// The provider order id, once one exists.
    pub fn order_id(&self) -> Option<&OrderId> {
        self.order.as_ref()
    }

    /// Create the provider order. Valid only from `Idle`.
    ///
    /// On provider failure the session stays `Idle`; the caller decides
    /// whether to try again.
    pub async fn start_payment(&mut self) -> Result<ProviderOrder, CheckoutError> {
        if self.state != CheckoutState::Idle {
            return Err(CheckoutError::invalid_transition(
                self.state.name(),
                "start_payment",
            ));
        }

        let order = self
            .gateway
            .create_order(&self.amount)
            .await
            .map_err(|_| CheckoutError::provider(CREATE_ORDER_FAILED))?;

        self.transition(CheckoutState::OrderCreated)?;
        self.order = Some(order.order_id.clone());
        Ok(order)
    }

    /// Capture the order and record the enrollment. Valid only from
    /// `OrderCreated`.
    ///
    /// Any capture failure, including a non-completed capture status,
    /// moves the session to `Failed`; `restart` returns it to `Idle`.
    pub async fn complete_payment(&mut self) -> Result<EnrollCourseResult, CheckoutError> {
        if self.state != CheckoutState::OrderCreated {
            return Err(CheckoutError::invalid_transition(
                self.state.name(),
                "complete_payment",
            ));
        }
        let Some(order_id) = self.order.clone() else {
            return Err(CheckoutError::invalid_transition(
                self.state.name(),
                "complete_payment",
            ));
        };

        self.transition(CheckoutState::Capturing)?;

        let capture = match self.gateway.capture_order(&order_id).await {
            Ok(capture) => capture,
            Err(_) => {
                self.transition(CheckoutState::Failed)?;
                return Err(CheckoutError::provider(CAPTURE_ORDER_FAILED));
            }
        };

        if !capture.status.is_completed() {
            self.transition(CheckoutState::Failed)?;
            return Err(CheckoutError::provider(CAPTURE_ORDER_FAILED));
        }

        let result = self
            .enrollment
            .handle(EnrollCourseCommand {
                user_id: self.user_id.clone(),
                course_id: self.course_id.clone(),
                order_id,
                amount: self.amount,
                provider: self.provider,
            })
            .await;

        match result {
            Ok(result) => {
                self.transition(CheckoutState::Captured)?;
                Ok(result)
            }
            Err(err) => {
                self.transition(CheckoutState::Failed)?;
                Err(err)
            }
        }
    }

    /// Return a failed session to `Idle` for another attempt.
    pub fn restart(&mut self) -> Result<(), CheckoutError> {
        if self.state != CheckoutState::Failed {
            return Err(CheckoutError::invalid_transition(
                self.state.name(),
                "restart",
            ));
        }
        self.transition(CheckoutState::Idle)?;
        self.order = None;
        Ok(())
    }

    fn transition(&mut self, target: CheckoutState) -> Result<(), CheckoutError> {
        self.state = self
            .state
            .transition_to(target)
            .map_err(|_| CheckoutError::invalid_transition(self.state.name(), target.name()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::adapters::paypal::MockPaymentGateway;
    use crate::domain::course::{Chapter, Course, Section};
    use crate::domain::foundation::{ChapterId, SectionId};
    use rust_decimal_macros::dec;

    fn test_course() -> Course {
        Course::new(
            CourseId::new("c1").unwrap(),
            "Practical Rust",
            Amount::new(dec!(50.00)).unwrap(),
            vec![Section::new(
                SectionId::new("s1").unwrap(),
                vec![
                    Chapter::new(ChapterId::new("ch1").unwrap()),
                    Chapter::new(ChapterId::new("ch2").unwrap()),
                ],
            )],
        )
    }

    fn orchestrator_with(gateway: Arc<MockPaymentGateway>) -> CheckoutOrchestrator {
        let store = Arc::new(InMemoryStore::new());
        store.insert_course(test_course());
        let enrollment = EnrollCourseHandler::new(store.clone(), store);
        CheckoutOrchestrator::new(
            gateway,
            enrollment,
            UserId::new("u1").unwrap(),
            CourseId::new("c1").unwrap(),
            Amount::new(dec!(50.00)).unwrap(),
            PaymentProviderKind::Paypal,
        )
    }

    #[tokio::test]
    async fn session_starts_idle_with_no_order() {
        let orchestrator = orchestrator_with(Arc::new(MockPaymentGateway::new()));
        assert_eq!(orchestrator.state(), CheckoutState::Idle);
        assert!(orchestrator.order_id().is_none());
    }

    #[tokio::test]
    async fn start_payment_creates_order_and_advances() {
        let mut orchestrator = orchestrator_with(Arc::new(MockPaymentGateway::new()));

        let order = orchestrator.start_payment().await.unwrap();

        assert_eq!(orchestrator.state(), CheckoutState::OrderCreated);
        assert_eq!(orchestrator.order_id(), Some(&order.order_id));
    }

    #[tokio::test]
    async fn start_payment_failure_stays_idle() {
        let mut orchestrator = orchestrator_with(Arc::new(MockPaymentGateway::failing()));

        let result = orchestrator.start_payment().await;

        assert!(matches!(result, Err(CheckoutError::Provider { .. })));
        assert_eq!(orchestrator.state(), CheckoutState::Idle);
        assert!(orchestrator.order_id().is_none());
    }

    #[tokio::test]
    async fn start_payment_twice_is_rejected() {
        let mut orchestrator = orchestrator_with(Arc::new(MockPaymentGateway::new()));
        orchestrator.start_payment().await.unwrap();

        let result = orchestrator.start_payment().await;
        assert!(matches!(
            result,
            Err(CheckoutError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn complete_payment_settles_and_enrolls() {
        let mut orchestrator = orchestrator_with(Arc::new(MockPaymentGateway::new()));
        orchestrator.start_payment().await.unwrap();

        let result = orchestrator.complete_payment().await.unwrap();

        assert_eq!(orchestrator.state(), CheckoutState::Captured);
        assert_eq!(result.transaction.amount, Amount::new(dec!(50.00)).unwrap());
        assert_eq!(result.course_progress.overall_completion.value(), 0);
    }

    #[tokio::test]
    async fn complete_payment_before_start_is_rejected() {
        let mut orchestrator = orchestrator_with(Arc::new(MockPaymentGateway::new()));

        let result = orchestrator.complete_payment().await;
        assert!(matches!(
            result,
            Err(CheckoutError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn declined_capture_fails_without_enrollment() {
        let gateway = Arc::new(MockPaymentGateway::declining_capture());
        let mut orchestrator = orchestrator_with(gateway);
        orchestrator.start_payment().await.unwrap();

        let result = orchestrator.complete_payment().await;

        assert!(matches!(result, Err(CheckoutError::Provider { .. })));
        assert_eq!(orchestrator.state(), CheckoutState::Failed);
    }

    #[tokio::test]
    async fn failed_session_can_restart() {
        let gateway = Arc::new(MockPaymentGateway::declining_capture());
        let mut orchestrator = orchestrator_with(gateway);
        orchestrator.start_payment().await.unwrap();
        let _ = orchestrator.complete_payment().await;

        orchestrator.restart().unwrap();

        assert_eq!(orchestrator.state(), CheckoutState::Idle);
        assert!(orchestrator.order_id().is_none());
    }

    #[tokio::test]
    async fn restart_from_captured_is_rejected() {
        let mut orchestrator = orchestrator_with(Arc::new(MockPaymentGateway::new()));
        orchestrator.start_payment().await.unwrap();
        orchestrator.complete_payment().await.unwrap();

        let result = orchestrator.restart();
        assert!(matches!(
            result,
            Err(CheckoutError::InvalidTransition { .. })
        ));
    }
}
