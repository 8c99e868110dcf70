//! Course domain module.
//!
//! The purchasable course: structure read from the catalog, enrollment
//! set owned here.

mod course;

pub use course::{Chapter, Course, Section};
