//! course-progress - lesson progression for course marketplaces
//!
//! Turns a flat list of lessons with completion flags into access states
//! (`done`, `next`, `locked`), completion aggregates and the route that a
//! "Start / Continue / Review" button should open.
//!
//! The pipeline is pure: normalize payloads, resolve scopes, decorate a
//! sequence, resolve the continuation, render.

pub mod config;
pub mod course;
pub mod progression;
pub mod snapshot;
pub mod theme;
pub mod ui;

pub use config::Config;
pub use course::{DecoratedLesson, LessonRecord, LessonState, Scope, ScopeId};
pub use progression::{
    Continuation, ContinuationMode, CourseOutline, Progression, SectionOutline, decorate,
    resolve_continuation,
};
pub use snapshot::{CourseSnapshot, SnapshotError};
pub use theme::Theme;
