//! Lesson access states over an ordered sequence
//!
//! [`decorate`] is scope-agnostic: the course overview runs it over the
//! course-wide sequence and the section page runs it over one scope's
//! members. In both cases the resulting states read `done* next locked*`:
//!
//! ```text
//! [done] [done] [next] [locked] [locked]
//! ```
//!
//! A fully completed sequence keeps its last lesson as `next` so there is
//! always something to open for review. Only an empty sequence has no `next`.

use serde::Serialize;

use crate::course::{DecoratedLesson, LessonRecord, LessonState};

/// Decorated sequence plus its aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    /// Every input lesson, in input order, with its state
    pub items: Vec<DecoratedLesson>,
    /// Number of lessons flagged completed
    pub done: usize,
    /// Number of lessons in the sequence
    pub total: usize,
    /// `done / total` as a rounded percentage, 0 for an empty sequence
    pub percent: u8,
    /// Sum of the known lesson durations
    pub total_duration_minutes: u32,
    /// The lesson in state `next`, if the sequence is non-empty
    pub next: Option<DecoratedLesson>,
}

impl Progression {
    /// Does the sequence hold no lessons?
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Is every lesson completed? False for an empty sequence.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.done == self.total
    }

    /// Number of lessons not yet completed
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.done)
    }

    /// State of a lesson by id, if it is part of the sequence
    pub fn state_of(&self, lesson_id: i64) -> Option<LessonState> {
        self.items.iter().find(|item| item.lesson.id == lesson_id).map(|item| item.state)
    }
}

/// Assign `done`/`next`/`locked` to an ordered sequence
///
/// The sequence must already be in its final order; nothing is sorted here.
/// Lessons before the first incomplete one are `done`, that lesson is
/// `next`, and everything after it is `locked`, including lessons that are
/// flagged completed out of order. Those still count towards `done`.
pub fn decorate(sequence: &[LessonRecord]) -> Progression {
    if sequence.is_empty() {
        return Progression::default();
    }

    let total = sequence.len();
    // All completed: the last lesson reopens for review
    let next_index = sequence.iter().position(|lesson| !lesson.completed).unwrap_or(total - 1);

    let items: Vec<DecoratedLesson> = sequence
        .iter()
        .enumerate()
        .map(|(index, lesson)| {
            let state = match index.cmp(&next_index) {
                std::cmp::Ordering::Less => LessonState::Done,
                std::cmp::Ordering::Equal => LessonState::Next,
                std::cmp::Ordering::Greater => LessonState::Locked,
            };
            DecoratedLesson { lesson: lesson.clone(), state }
        })
        .collect();

    let done = sequence.iter().filter(|lesson| lesson.completed).count();
    let total_duration_minutes = sequence
        .iter()
        .filter_map(|lesson| lesson.duration_minutes)
        .fold(0u32, u32::saturating_add);
    let next = items.get(next_index).cloned();

    Progression { items, done, total, percent: percent(done, total), total_duration_minutes, next }
}

/// Rounded completion percentage, half rounding up; 0 when `total` is 0
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let done = done.min(total) as u64;
    let total = total as u64;
    ((done * 200 + total) / (total * 2)) as u8
}
