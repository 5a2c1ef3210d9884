//! Course snapshots
//!
//! A snapshot is the normalized result of one fetch of a course's lessons
//! (and optionally its modules). It is immutable once built; a re-fetch
//! produces a new snapshot rather than patching the old one.

pub mod error;

pub use error::SnapshotError;

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::course::{
    LessonRecord, Scope, ScopeResolution, normalize_lessons, normalize_scopes, resolve_scopes,
};

/// Normalized lessons and modules of one course
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSnapshot {
    pub course_id: i64,
    pub lessons: Vec<LessonRecord>,
    /// Modules reported by the API; `None` means scopes are synthesized
    pub scopes: Option<Vec<Scope>>,
}

impl CourseSnapshot {
    /// Build a snapshot from already-normalized records
    pub fn new(course_id: i64, lessons: Vec<LessonRecord>, scopes: Option<Vec<Scope>>) -> Self {
        Self { course_id, lessons, scopes }
    }

    /// Build a snapshot from raw API payloads
    pub fn from_values(course_id: i64, lessons: &Value, modules: Option<&Value>) -> Self {
        Self::new(course_id, normalize_lessons(lessons), modules.map(normalize_scopes))
    }

    /// Read lessons (and optionally modules) payloads from JSON files
    pub fn load(
        course_id: i64,
        lessons_path: &Path,
        modules_path: Option<&Path>,
    ) -> Result<Self, SnapshotError> {
        let lessons = read_json(lessons_path)?;
        let modules = modules_path.map(read_json).transpose()?;
        let snapshot = Self::from_values(course_id, &lessons, modules.as_ref());

        tracing::info!(
            "Loaded course {} snapshot: {} lesson(s), {} module(s)",
            course_id,
            snapshot.lessons.len(),
            snapshot.scopes.as_ref().map_or(0, Vec::len)
        );
        Ok(snapshot)
    }

    /// Group the snapshot's lessons into ordered scopes
    pub fn resolve(&self) -> ScopeResolution {
        resolve_scopes(&self.lessons, self.scopes.as_deref())
    }
}

fn read_json(path: &Path) -> Result<Value, SnapshotError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| SnapshotError::Read { path: path.to_path_buf(), source })?;
    serde_json::from_str(&contents)
        .map_err(|source| SnapshotError::Parse { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::ScopeId;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn from_values_normalizes_both_payloads() {
        let lessons = json!({ "results": [{ "id": 1, "title": "A", "module": 3 }] });
        let modules = json!([{ "id": 3, "title": "Basics", "order": 1 }]);
        let snapshot = CourseSnapshot::from_values(8, &lessons, Some(&modules));

        assert_eq!(snapshot.course_id, 8);
        assert_eq!(snapshot.lessons.len(), 1);
        assert_eq!(snapshot.scopes.as_ref().map(Vec::len), Some(1));

        let resolution = snapshot.resolve();
        assert_eq!(resolution.members(ScopeId::Module(3))[0].scope_title.as_deref(), Some("Basics"));
    }

    #[test]
    fn load_reads_files() {
        let dir = TempDir::new().unwrap();
        let lessons = write(&dir, "lessons.json", r#"[{"id": 1, "completed": true}, {"id": 2}]"#);
        let modules = write(&dir, "modules.json", r#"{"results": []}"#);

        let snapshot = CourseSnapshot::load(4, &lessons, Some(modules.as_path())).unwrap();
        assert_eq!(snapshot.lessons.len(), 2);
        assert_eq!(snapshot.scopes, Some(Vec::new()));
    }

    #[test]
    fn load_without_modules_synthesizes_scopes() {
        let dir = TempDir::new().unwrap();
        let lessons = write(&dir, "lessons.json", r#"[{"id": 1}]"#);

        let snapshot = CourseSnapshot::load(4, &lessons, None).unwrap();
        assert!(snapshot.scopes.is_none());
        assert_eq!(snapshot.resolve().scopes, vec![Scope::root()]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");

        let err = CourseSnapshot::load(1, &missing, None).unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let lessons = write(&dir, "lessons.json", "{ not json");

        let err = CourseSnapshot::load(1, &lessons, None).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("lessons.json"));
    }

    #[test]
    fn valid_json_of_wrong_shape_is_empty_not_error() {
        let dir = TempDir::new().unwrap();
        let lessons = write(&dir, "lessons.json", r#""just a string""#);

        let snapshot = CourseSnapshot::load(1, &lessons, None).unwrap();
        assert!(snapshot.lessons.is_empty());
    }
}
