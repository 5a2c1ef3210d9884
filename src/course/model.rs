//! Course content model
//!
//! Canonical lesson and scope records. Everything downstream of the
//! normalizer works on these types and never looks at raw API payloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Title given to the synthetic scope holding moduleless lessons
pub const ROOT_SCOPE_TITLE: &str = "Lessons";

/// Identifier of a scope: a course module, or the synthetic root scope
///
/// `Root` orders before every module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeId {
    /// Lessons that belong to no module
    #[default]
    Root,
    /// A module, by its numeric id
    Module(i64),
}

impl ScopeId {
    /// Is this the synthetic root scope?
    pub fn is_root(&self) -> bool {
        matches!(self, ScopeId::Root)
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeId::Root => f.write_str("root"),
            ScopeId::Module(id) => write!(f, "{id}"),
        }
    }
}

/// Error returned when a scope id cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scope id {0:?}: expected \"root\" or an integer module id")]
pub struct ParseScopeIdError(String);

impl FromStr for ScopeId {
    type Err = ParseScopeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("root") {
            return Ok(ScopeId::Root);
        }
        trimmed.parse::<i64>().map(ScopeId::Module).map_err(|_| ParseScopeIdError(s.to_string()))
    }
}

impl Serialize for ScopeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScopeId::Root => serializer.serialize_str("root"),
            ScopeId::Module(id) => serializer.serialize_i64(*id),
        }
    }
}

impl<'de> Deserialize<'de> for ScopeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Id(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Id(id) => Ok(ScopeId::Module(id)),
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One lesson as known to the progression engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    /// Unique, stable lesson id
    pub id: i64,
    /// Display title
    pub title: String,
    /// Ordering key within the owning scope
    pub order: i64,
    /// Duration in minutes, when known
    pub duration_minutes: Option<u32>,
    /// Owning scope
    pub scope_id: ScopeId,
    /// Ordering key of the owning scope among all scopes
    pub scope_order: i64,
    /// Title of the owning module, when the payload embedded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_title: Option<String>,
    /// Server-reported completion flag
    pub completed: bool,
    /// Last score, display only
    pub result_percent: Option<f64>,
}

impl LessonRecord {
    /// Create an incomplete root-scope lesson with default ordering
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            order: 0,
            duration_minutes: None,
            scope_id: ScopeId::Root,
            scope_order: 0,
            scope_title: None,
            completed: false,
            result_percent: None,
        }
    }

    /// Ordering key inside a single scope: `(order, id)`
    pub fn scope_key(&self) -> (i64, i64) {
        (self.order, self.id)
    }

    /// Ordering key across the whole course
    ///
    /// The scope id only separates distinct scopes that share a `scope_order`.
    pub fn course_key(&self) -> (i64, ScopeId, i64, i64) {
        (self.scope_order, self.scope_id, self.order, self.id)
    }
}

/// A module/section, or the synthetic root scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub id: ScopeId,
    pub title: String,
    pub order: i64,
}

impl Scope {
    /// Create a scope
    pub fn new(id: ScopeId, title: impl Into<String>, order: i64) -> Self {
        Self { id, title: title.into(), order }
    }

    /// The synthetic root scope
    pub fn root() -> Self {
        Self::new(ScopeId::Root, ROOT_SCOPE_TITLE, 0)
    }

    /// Stand-in for a scope that is referenced but not described anywhere
    pub fn placeholder(id: ScopeId) -> Self {
        match id {
            ScopeId::Root => Self::root(),
            ScopeId::Module(module_id) => Self::new(id, format!("Module {module_id}"), 0),
        }
    }

    /// Ordering key among scopes: `(order, id)`
    pub fn sort_key(&self) -> (i64, ScopeId) {
        (self.order, self.id)
    }
}

/// Access state of a lesson within a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonState {
    /// Completed
    Done,
    /// The single actionable lesson of the sequence
    Next,
    /// Not reachable yet
    Locked,
}

/// A lesson annotated with its access state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecoratedLesson {
    #[serde(flatten)]
    pub lesson: LessonRecord,
    pub state: LessonState,
}
