//! View-ready outlines for the course overview and section pages
//!
//! Both pages run the same [`decorate`] over a different sequence: the
//! overview over the whole course, the section page over one scope.

use serde::Serialize;

use super::continuation::{Continuation, resolve_continuation};
use super::engine::{Progression, decorate};
use crate::course::{DecoratedLesson, Scope, ScopeId};
use crate::snapshot::CourseSnapshot;

/// Per-scope aggregates shown on the course overview
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeSummary {
    pub scope: Scope,
    pub done: usize,
    pub total: usize,
    pub percent: u8,
    pub duration_minutes: u32,
    /// Entry point into this section
    pub continuation: Continuation,
}

/// Course overview: course-wide states grouped under their scopes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOutline {
    pub course_id: i64,
    /// Course-wide decorated sequence
    pub progress: Progression,
    pub scopes: Vec<ScopeSummary>,
    pub continuation: Continuation,
}

impl CourseOutline {
    /// Build the overview from a snapshot
    pub fn build(snapshot: &CourseSnapshot) -> Self {
        let resolution = snapshot.resolve();
        let progress = decorate(&resolution.course_sequence());
        let continuation = resolve_continuation(snapshot.course_id, None, &progress);

        let scopes = resolution
            .scopes
            .iter()
            .map(|scope| {
                let local = decorate(resolution.members(scope.id));
                ScopeSummary {
                    scope: scope.clone(),
                    done: local.done,
                    total: local.total,
                    percent: local.percent,
                    duration_minutes: local.total_duration_minutes,
                    continuation: resolve_continuation(
                        snapshot.course_id,
                        Some(scope.id),
                        &local,
                    ),
                }
            })
            .collect();

        tracing::debug!(
            "Course {} outline: {}/{} done across {} scope(s)",
            snapshot.course_id,
            progress.done,
            progress.total,
            resolution.scopes.len()
        );

        Self { course_id: snapshot.course_id, progress, scopes, continuation }
    }

    /// Course-wide decorated lessons of one scope, in order
    pub fn items_in(&self, scope: ScopeId) -> impl Iterator<Item = &DecoratedLesson> + '_ {
        self.progress.items.iter().filter(move |item| item.lesson.scope_id == scope)
    }

    /// Summary of one scope
    pub fn summary(&self, scope: ScopeId) -> Option<&ScopeSummary> {
        self.scopes.iter().find(|summary| summary.scope.id == scope)
    }
}

/// Section page: states computed over one scope only
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOutline {
    pub course_id: i64,
    pub scope: Scope,
    /// Scope-local decorated sequence
    pub progress: Progression,
    pub continuation: Continuation,
}

impl SectionOutline {
    /// Build the section page for `scope`
    ///
    /// An unknown scope yields an empty progression and a landing route.
    pub fn build(snapshot: &CourseSnapshot, scope: ScopeId) -> Self {
        let resolution = snapshot.resolve();
        let progress = decorate(resolution.members(scope));
        let continuation = resolve_continuation(snapshot.course_id, Some(scope), &progress);
        let scope = resolution.scope(scope).cloned().unwrap_or_else(|| {
            tracing::debug!("Scope {} not present in course {}", scope, snapshot.course_id);
            Scope::placeholder(scope)
        });

        Self { course_id: snapshot.course_id, scope, progress, continuation }
    }
}
