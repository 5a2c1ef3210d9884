//! Course progression: access states, aggregates and continuation routes

pub mod continuation;
pub mod engine;
pub mod outline;

pub use continuation::{
    Continuation, ContinuationMode, landing_route, lesson_route, resolve_continuation,
};
pub use engine::{Progression, decorate, percent};
pub use outline::{CourseOutline, ScopeSummary, SectionOutline};
