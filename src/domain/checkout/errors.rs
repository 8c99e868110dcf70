//! Checkout-specific error types.
//!
//! Errors raised while driving a purchase: provider failures, missing
//! courses, persistence failures, and orchestrator misuse.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | Provider | 502 |
//! | CourseNotFound | 404 |
//! | Persistence | 500 |
//! | Validation | 400 |
//! | InvalidTransition | 409 |

use crate::domain::foundation::{CourseId, DomainError, ErrorCode, ValidationError};

/// Checkout-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// The payment provider rejected a request.
    ///
    /// Carries only the generic reason; raw provider detail is logged
    /// at the gateway boundary, never surfaced.
    Provider { reason: String },

    /// The referenced course does not exist.
    CourseNotFound(CourseId),

    /// Writing transaction/progress/enrollment failed.
    Persistence(String),

    /// Boundary validation failed.
    Validation { field: String, message: String },

    /// The checkout session was driven out of order.
    InvalidTransition { from: String, attempted: String },
}

impl CheckoutError {
    // Constructor functions for cleaner error creation

    pub fn provider(reason: impl Into<String>) -> Self {
        CheckoutError::Provider {
            reason: reason.into(),
        }
    }

    pub fn course_not_found(course_id: CourseId) -> Self {
        CheckoutError::CourseNotFound(course_id)
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        CheckoutError::Persistence(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CheckoutError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_transition(from: impl Into<String>, attempted: impl Into<String>) -> Self {
        CheckoutError::InvalidTransition {
            from: from.into(),
            attempted: attempted.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CheckoutError::Provider { .. } => ErrorCode::PaymentFailed,
            CheckoutError::CourseNotFound(_) => ErrorCode::CourseNotFound,
            CheckoutError::Persistence(_) => ErrorCode::DatabaseError,
            CheckoutError::Validation { .. } => ErrorCode::ValidationFailed,
            CheckoutError::InvalidTransition { .. } => ErrorCode::InvalidStateTransition,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            CheckoutError::Provider { reason } => reason.clone(),
            CheckoutError::CourseNotFound(course_id) => {
                format!("Course not found: {}", course_id)
            }
            CheckoutError::Persistence(msg) => format!("Failed to record purchase: {}", msg),
            CheckoutError::Validation { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CheckoutError::InvalidTransition { from, attempted } => {
                format!("Cannot {} while checkout is {}", attempted, from)
            }
        }
    }

    /// Returns true if retrying the whole checkout may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CheckoutError::Provider { .. } | CheckoutError::Persistence(_)
        )
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CheckoutError {}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        CheckoutError::Validation {
            field,
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for CheckoutError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::CourseNotFound => match err.details.get("course_id") {
                Some(id) => match CourseId::new(id.clone()) {
                    Ok(course_id) => CheckoutError::CourseNotFound(course_id),
                    Err(_) => CheckoutError::Persistence(err.to_string()),
                },
                None => CheckoutError::Persistence(err.to_string()),
            },
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat
            | ErrorCode::OutOfRange => CheckoutError::Validation {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::PaymentFailed | ErrorCode::ExternalServiceError => CheckoutError::Provider {
                reason: err.message,
            },
            ErrorCode::InvalidStateTransition => CheckoutError::InvalidTransition {
                from: "unknown".to_string(),
                attempted: err.message,
            },
            _ => CheckoutError::Persistence(err.to_string()),
        }
    }
}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_course_id() -> CourseId {
        CourseId::new("course-test-1").unwrap()
    }

    // ============================================================
    // Constructor Tests
    // ============================================================

    #[test]
    fn provider_creates_correctly() {
        let err = CheckoutError::provider("Failed to create order.");
        assert!(matches!(
            err,
            CheckoutError::Provider { ref reason } if reason == "Failed to create order."
        ));
        assert_eq!(err.code(), ErrorCode::PaymentFailed);
    }

    #[test]
    fn course_not_found_creates_correctly() {
        let id = test_course_id();
        let err = CheckoutError::course_not_found(id.clone());
        assert!(matches!(err, CheckoutError::CourseNotFound(ref i) if *i == id));
        assert_eq!(err.code(), ErrorCode::CourseNotFound);
    }

    #[test]
    fn persistence_creates_correctly() {
        let err = CheckoutError::persistence("connection reset");
        assert!(matches!(err, CheckoutError::Persistence(ref m) if m == "connection reset"));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_creates_correctly() {
        let err = CheckoutError::validation("amount", "must be greater than zero");
        assert!(matches!(
            err,
            CheckoutError::Validation { ref field, ref message }
            if field == "amount" && message == "must be greater than zero"
        ));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn invalid_transition_creates_correctly() {
        let err = CheckoutError::invalid_transition("Idle", "capture");
        assert!(matches!(
            err,
            CheckoutError::InvalidTransition { ref from, ref attempted }
            if from == "Idle" && attempted == "capture"
        ));
        assert_eq!(err.code(), ErrorCode::InvalidStateTransition);
    }

    // ============================================================
    // Message Tests
    // ============================================================

    #[test]
    fn course_not_found_message_includes_id() {
        let id = test_course_id();
        let err = CheckoutError::course_not_found(id.clone());
        assert!(err.message().contains(id.as_str()));
    }

    #[test]
    fn provider_message_is_the_generic_reason() {
        let err = CheckoutError::provider("Failed to capture order.");
        assert_eq!(err.message(), "Failed to capture order.");
    }

    #[test]
    fn invalid_transition_message_names_both_states() {
        let err = CheckoutError::invalid_transition("Captured", "restart");
        let msg = err.message();
        assert!(msg.contains("Captured"));
        assert!(msg.contains("restart"));
    }

    // ============================================================
    // Retryable Tests
    // ============================================================

    #[test]
    fn provider_errors_are_retryable() {
        assert!(CheckoutError::provider("timeout").is_retryable());
    }

    #[test]
    fn persistence_errors_are_retryable() {
        assert!(CheckoutError::persistence("deadlock").is_retryable());
    }

    #[test]
    fn validation_errors_are_not_retryable() {
        assert!(!CheckoutError::validation("amount", "negative").is_retryable());
    }

    #[test]
    fn course_not_found_is_not_retryable() {
        assert!(!CheckoutError::course_not_found(test_course_id()).is_retryable());
    }

    // ============================================================
    // Conversion Tests
    // ============================================================

    #[test]
    fn display_matches_message() {
        let err = CheckoutError::persistence("disk full");
        assert_eq!(format!("{}", err), err.message());
    }

    #[test]
    fn converts_to_domain_error() {
        let err = CheckoutError::course_not_found(test_course_id());
        let domain_err: DomainError = err.clone().into();
        assert_eq!(domain_err.code, err.code());
    }

    #[test]
    fn converts_from_validation_error() {
        let err: CheckoutError = ValidationError::empty_field("order_id").into();
        assert!(matches!(
            err,
            CheckoutError::Validation { ref field, .. } if field == "order_id"
        ));
    }

    #[test]
    fn converts_from_domain_error_with_course_detail() {
        let domain_err = DomainError::new(ErrorCode::CourseNotFound, "Course not found")
            .with_detail("course_id", "c42");
        let err: CheckoutError = domain_err.into();
        assert!(matches!(
            err,
            CheckoutError::CourseNotFound(ref id) if id.as_str() == "c42"
        ));
    }

    #[test]
    fn converts_unmapped_domain_error_to_persistence() {
        let domain_err = DomainError::new(ErrorCode::InternalError, "boom");
        let err: CheckoutError = domain_err.into();
        assert!(matches!(err, CheckoutError::Persistence(_)));
    }
}
