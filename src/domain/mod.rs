//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `course` - Purchasable course structure and enrollment set
//! - `checkout` - Purchase flow state machine and error taxonomy
//! - `enrollment` - Transaction records and progress snapshots

pub mod checkout;
pub mod course;
pub mod enrollment;
pub mod foundation;
