//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Payment Ports
//!
//! - `PaymentGateway` - Provider order create/capture handshake
//!
//! ## Persistence Ports
//!
//! - `CourseRepository` - Course aggregate lookups
//! - `EnrollmentRepository` - Atomic purchase commit (write side)
//! - `TransactionReader` - Purchase listing queries (read side)

mod course_repository;
mod enrollment_repository;
mod payment_gateway;
mod transaction_reader;

pub use course_repository::CourseRepository;
pub use enrollment_repository::EnrollmentRepository;
pub use payment_gateway::{
    CaptureStatus, PayerInfo, PaymentError, PaymentErrorCode, PaymentGateway, ProviderCapture,
    ProviderOrder,
};
pub use transaction_reader::TransactionReader;
