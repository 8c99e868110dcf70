//! Course aggregate entity.
//!
//! A Course is the purchasable unit: a priced, ordered tree of sections and
//! chapters plus the set of users who bought it. The catalog service owns
//! authoring; this service only reads the structure and appends enrollments.
//!
//! # Design Decisions
//!
//! - **Opaque ids**: Course/section/chapter ids come from the catalog as
//!   non-empty strings, never minted here
//! - **Set-union enrollment**: enrolling twice is a no-op, not an error
//! - **Ordered enrollments**: `BTreeSet` keeps listings deterministic

use crate::domain::foundation::{Amount, ChapterId, CourseId, SectionId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A chapter within a section. Progress is tracked per chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Catalog identifier for this chapter.
    pub id: ChapterId,
}

impl Chapter {
    /// Creates a chapter from its catalog id.
    pub fn new(id: ChapterId) -> Self {
        Self { id }
    }
}

/// An ordered group of chapters within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Catalog identifier for this section.
    pub id: SectionId,

    /// Chapters in presentation order.
    pub chapters: Vec<Chapter>,
}

impl Section {
    /// Creates a section from its catalog id and chapter list.
    pub fn new(id: SectionId, chapters: Vec<Chapter>) -> Self {
        Self { id, chapters }
    }
}

/// Course aggregate - a purchasable course and its enrollment set.
///
/// # Invariants
///
/// - `id` is unique within the catalog
/// - `enrollments` contains each `UserId` at most once
/// - `sections` order is the presentation order and is preserved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog identifier for this course.
    pub id: CourseId,

    /// Display title.
    pub title: String,

    /// Purchase price in major currency units.
    pub price: Amount,

    /// Sections in presentation order.
    pub sections: Vec<Section>,

    /// Users who have purchased this course.
    pub enrollments: BTreeSet<UserId>,
}

impl Course {
    /// Creates a course with no enrollments.
    pub fn new(id: CourseId, title: impl Into<String>, price: Amount, sections: Vec<Section>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            sections,
            enrollments: BTreeSet::new(),
        }
    }

    /// Adds a user to the enrollment set.
    ///
    /// Returns `true` if the user was newly added, `false` if they were
    /// already enrolled. Never fails: enrollment is a set union.
    pub fn enroll(&mut self, user_id: UserId) -> bool {
        self.enrollments.insert(user_id)
    }

    /// Checks whether a user has purchased this course.
    pub fn is_enrolled(&self, user_id: &UserId) -> bool {
        self.enrollments.contains(user_id)
    }

    /// Total number of chapters across all sections.
    pub fn chapter_count(&self) -> usize {
        self.sections.iter().map(|s| s.chapters.len()).sum()
    }
}
