//! Course Checkout - Course purchase backend
//!
//! This crate implements the order-to-enrollment workflow for course
//! purchases: a PayPal order create/capture handshake, followed by an
//! atomic write of the transaction record, the initial course-progress
//! snapshot, and the enrollment-set append.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
