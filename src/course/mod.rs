//! Course content: canonical records, payload normalization and scopes

pub mod model;
pub mod normalize;
pub mod scope;

pub use model::{DecoratedLesson, LessonRecord, LessonState, ParseScopeIdError, Scope, ScopeId};
pub use normalize::{normalize_lessons, normalize_scopes};
pub use scope::{ScopeResolution, resolve_scopes};
