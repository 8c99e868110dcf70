//! Course progress tracking entity.
//!
//! A CourseProgress record is created once per enrollment as a snapshot of
//! the course's section/chapter tree at purchase time. Later edits to the
//! course in the catalog do not rewrite existing snapshots.

use crate::domain::course::Course;
use crate::domain::foundation::{ChapterId, CourseId, Percentage, SectionId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Completion state of a single chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterProgress {
    /// Chapter this entry tracks.
    pub chapter_id: ChapterId,

    /// Whether the user finished the chapter.
    pub completed: bool,
}

/// Completion state of the chapters in one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionProgress {
    /// Section this entry tracks.
    pub section_id: SectionId,

    /// Per-chapter state, in the section's presentation order.
    pub chapters: Vec<ChapterProgress>,
}

/// A user's progress through a purchased course.
///
/// # Invariants
///
/// - keyed by (`user_id`, `course_id`); one record per enrollment
/// - `sections` mirrors the course structure at enrollment time
/// - `overall_completion` is completed chapters over total chapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProgress {
    /// Enrolled user.
    pub user_id: UserId,

    /// Purchased course.
    pub course_id: CourseId,

    /// When the enrollment was created.
    pub enrolled_at: Timestamp,

    /// Fraction of chapters completed, 0 at enrollment.
    pub overall_completion: Percentage,

    /// Snapshot of the course tree with per-chapter completion flags.
    pub sections: Vec<SectionProgress>,

    /// Last time the user touched the course.
    pub last_accessed: Timestamp,
}

impl CourseProgress {
    /// Seeds a fresh progress record from the course's current structure.
    ///
    /// Every chapter starts incomplete and overall completion is zero.
    pub fn start(user_id: UserId, course: &Course) -> Self {
        let now = Timestamp::now();
        let sections: Vec<SectionProgress> = course
            .sections
            .iter()
            .map(|section| SectionProgress {
                section_id: section.id.clone(),
                chapters: section
                    .chapters
                    .iter()
                    .map(|chapter| ChapterProgress {
                        chapter_id: chapter.id.clone(),
                        completed: false,
                    })
                    .collect(),
            })
            .collect();

        let completed = Self::count_completed(&sections);
        Self {
            user_id,
            course_id: course.id.clone(),
            enrolled_at: now,
            overall_completion: Percentage::from_ratio(completed, course.chapter_count()),
            sections,
            last_accessed: now,
        }
    }

    /// Number of chapters marked complete across all sections.
    pub fn completed_chapters(&self) -> usize {
        Self::count_completed(&self.sections)
    }

    /// Total chapters tracked by this snapshot.
    pub fn total_chapters(&self) -> usize {
        self.sections.iter().map(|s| s.chapters.len()).sum()
    }

    fn count_completed(sections: &[SectionProgress]) -> usize {
        sections
            .iter()
            .flat_map(|s| &s.chapters)
            .filter(|c| c.completed)
            .count()
    }
}
