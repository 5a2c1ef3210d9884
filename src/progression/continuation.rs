//! "Start / Continue / Review" navigation target

use std::fmt;

use serde::{Deserialize, Serialize};

use super::engine::Progression;
use crate::course::ScopeId;

/// Route prefix shared by every student course page
pub const COURSE_ROUTE_PREFIX: &str = "/student/courses";

/// Which call to action the continuation represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContinuationMode {
    /// Nothing completed yet, or nothing to open
    Start,
    /// Some but not all lessons completed
    Continue,
    /// Everything completed; the last lesson reopens
    Review,
}

impl ContinuationMode {
    /// Button label for the call to action
    pub fn label(&self) -> &'static str {
        match self {
            ContinuationMode::Start => "Start",
            ContinuationMode::Continue => "Continue",
            ContinuationMode::Review => "Review",
        }
    }
}

impl fmt::Display for ContinuationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the call to action leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Continuation {
    pub href: String,
    pub mode: ContinuationMode,
    /// Target lesson, `None` when routing to a landing page
    pub lesson_id: Option<i64>,
}

/// Pick the lesson the call to action should open
///
/// `scope` is the scope the caller is operating in: `None` (or the root
/// scope) for the course-wide page, a module for a section page.
pub fn resolve_continuation(
    course_id: i64,
    scope: Option<ScopeId>,
    progression: &Progression,
) -> Continuation {
    let Some(next) = &progression.next else {
        return Continuation {
            href: landing_route(course_id, scope),
            mode: ContinuationMode::Start,
            lesson_id: None,
        };
    };

    let mode = if progression.done == 0 {
        ContinuationMode::Start
    } else if progression.done < progression.total {
        ContinuationMode::Continue
    } else {
        ContinuationMode::Review
    };

    Continuation {
        href: lesson_route(course_id, scope, next.lesson.id),
        mode,
        lesson_id: Some(next.lesson.id),
    }
}

/// Route of a lesson page
pub fn lesson_route(course_id: i64, scope: Option<ScopeId>, lesson_id: i64) -> String {
    format!("{}/lessons/{lesson_id}", landing_route(course_id, scope))
}

/// Route of the course landing page, or of a section landing page
pub fn landing_route(course_id: i64, scope: Option<ScopeId>) -> String {
    match scope.filter(|scope| !scope.is_root()) {
        Some(section) => format!("{COURSE_ROUTE_PREFIX}/{course_id}/sections/{section}"),
        None => format!("{COURSE_ROUTE_PREFIX}/{course_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::LessonRecord;
    use crate::progression::decorate;

    fn sequence(completed: &[bool]) -> Vec<LessonRecord> {
        completed
            .iter()
            .enumerate()
            .map(|(i, &completed)| LessonRecord {
                order: i as i64,
                completed,
                ..LessonRecord::new(i as i64 + 1, format!("Lesson {}", i + 1))
            })
            .collect()
    }

    #[test]
    fn nothing_done_is_start() {
        let progression = decorate(&sequence(&[false, false, false]));
        let continuation = resolve_continuation(5, None, &progression);
        assert_eq!(continuation.mode, ContinuationMode::Start);
        assert_eq!(continuation.href, "/student/courses/5/lessons/1");
        assert_eq!(continuation.lesson_id, Some(1));
    }

    #[test]
    fn partial_progress_is_continue() {
        let progression = decorate(&sequence(&[true, false, false]));
        let continuation = resolve_continuation(5, None, &progression);
        assert_eq!(continuation.mode, ContinuationMode::Continue);
        assert_eq!(continuation.href, "/student/courses/5/lessons/2");
    }

    #[test]
    fn everything_done_is_review_of_last_lesson() {
        let progression = decorate(&sequence(&[true, true, true]));
        let continuation = resolve_continuation(5, None, &progression);
        assert_eq!(continuation.mode, ContinuationMode::Review);
        assert_eq!(continuation.href, "/student/courses/5/lessons/3");
    }

    #[test]
    fn empty_sequence_routes_to_landing() {
        let progression = decorate(&[]);
        assert_eq!(
            resolve_continuation(5, None, &progression),
            Continuation {
                href: "/student/courses/5".into(),
                mode: ContinuationMode::Start,
                lesson_id: None
            }
        );
        assert_eq!(
            resolve_continuation(5, Some(ScopeId::Module(9)), &progression).href,
            "/student/courses/5/sections/9"
        );
    }

    #[test]
    fn section_segment_only_for_named_scopes() {
        let progression = decorate(&sequence(&[true, false]));
        assert_eq!(
            resolve_continuation(3, Some(ScopeId::Module(12)), &progression).href,
            "/student/courses/3/sections/12/lessons/2"
        );
        assert_eq!(
            resolve_continuation(3, Some(ScopeId::Root), &progression).href,
            "/student/courses/3/lessons/2"
        );
    }

    #[test]
    fn landing_routes() {
        assert_eq!(landing_route(2, None), "/student/courses/2");
        assert_eq!(landing_route(2, Some(ScopeId::Root)), "/student/courses/2");
        assert_eq!(landing_route(2, Some(ScopeId::Module(8))), "/student/courses/2/sections/8");
    }

    #[test]
    fn mode_labels() {
        assert_eq!(ContinuationMode::Continue.to_string(), "Continue");
        assert_eq!(serde_json::to_string(&ContinuationMode::Review).unwrap(), "\"review\"");
    }
}
