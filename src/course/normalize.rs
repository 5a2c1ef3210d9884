//! Boundary normalization of lesson and module payloads
//!
//! The REST layer hands over either a bare array or a paginated envelope,
//! and lessons reference their module either as an embedded object or as a
//! bare id. These functions fold all of that into [`LessonRecord`] and
//! [`Scope`] lists. They never fail: malformed items are skipped.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::model::{LessonRecord, Scope, ScopeId};

/// List fields probed on an envelope object holding lessons
const LESSON_LIST_FIELDS: &[&str] = &["results", "items", "data", "lessons"];

/// List fields probed on an envelope object holding modules
const SCOPE_LIST_FIELDS: &[&str] = &["results", "items", "data", "modules"];

/// Normalize a raw lessons payload into canonical records
///
/// Input order is preserved. Duplicate ids keep their first occurrence.
pub fn normalize_lessons(raw: &Value) -> Vec<LessonRecord> {
    let mut seen = HashSet::new();
    let mut lessons = Vec::new();

    for item in list_items(raw, LESSON_LIST_FIELDS) {
        let Some(lesson) = lesson_from_item(item) else {
            tracing::debug!("Skipping malformed lesson item: {}", item);
            continue;
        };
        if !seen.insert(lesson.id) {
            tracing::debug!("Skipping duplicate lesson id {}", lesson.id);
            continue;
        }
        lessons.push(lesson);
    }

    lessons
}

/// Normalize a raw modules payload into scopes
///
/// Input order is preserved; sorting is the resolver's job.
pub fn normalize_scopes(raw: &Value) -> Vec<Scope> {
    list_items(raw, SCOPE_LIST_FIELDS)
        .iter()
        .filter_map(|item| {
            let scope = scope_from_item(item);
            if scope.is_none() {
                tracing::debug!("Skipping malformed module item: {}", item);
            }
            scope
        })
        .collect()
}

/// Extract the item list from a bare array or an envelope object
fn list_items<'a>(raw: &'a Value, fields: &[&str]) -> &'a [Value] {
    match raw {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => fields
            .iter()
            .find_map(|field| map.get(*field).and_then(Value::as_array))
            .map(Vec::as_slice)
            .unwrap_or(&[]),
        _ => &[],
    }
}

fn lesson_from_item(item: &Value) -> Option<LessonRecord> {
    let map = item.as_object()?;
    let id = integer(map.get("id")?)?;

    let (scope_id, scope_order, scope_title) = match module_ref(map) {
        Some(ModuleRef::Embedded { id, order, title }) => (ScopeId::Module(id), order, title),
        Some(ModuleRef::Bare(id)) => (ScopeId::Module(id), 0, None),
        None => (ScopeId::Root, 0, None),
    };

    Some(LessonRecord {
        id,
        title: text(map.get("title")).unwrap_or_default(),
        order: map.get("order").and_then(integer).unwrap_or(0),
        duration_minutes: first_field(map, &["duration_min", "duration", "durationMinutes"])
            .and_then(integer)
            .and_then(|minutes| u32::try_from(minutes).ok()),
        scope_id,
        scope_order,
        scope_title,
        completed: matches!(map.get("completed"), Some(Value::Bool(true))),
        result_percent: first_field(map, &["result_percent", "resultPercent"])
            .and_then(Value::as_f64)
            .filter(|score| score.is_finite()),
    })
}

fn scope_from_item(item: &Value) -> Option<Scope> {
    let map = item.as_object()?;
    let id = integer(map.get("id")?)?;
    let title = text(map.get("title")).unwrap_or_else(|| format!("Module {id}"));
    let order = map.get("order").and_then(integer).unwrap_or(0);
    Some(Scope::new(ScopeId::Module(id), title, order))
}

/// How a lesson payload points at its module
enum ModuleRef {
    Embedded { id: i64, order: i64, title: Option<String> },
    Bare(i64),
}

/// Embedded module object with an id first, then the first bare id that parses
fn module_ref(map: &Map<String, Value>) -> Option<ModuleRef> {
    if let Some(Value::Object(module)) = map.get("module") {
        if let Some(id) = module.get("id").and_then(integer) {
            return Some(ModuleRef::Embedded {
                id,
                order: module.get("order").and_then(integer).unwrap_or(0),
                title: text(module.get("title")),
            });
        }
    }

    ["module", "module_id", "moduleId"]
        .iter()
        .filter_map(|name| map.get(*name))
        .find_map(integer)
        .map(ModuleRef::Bare)
}

/// First present, non-null field among `names`
fn first_field<'a>(map: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().filter_map(|name| map.get(*name)).find(|value| !value.is_null())
}

/// Integer from a JSON number or a numeric string
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn accepts_bare_array() {
        let raw = json!([
            { "id": 1, "title": "Intro", "order": 1, "completed": true },
            { "id": 2, "title": "Setup", "order": 2 }
        ]);
        let lessons = normalize_lessons(&raw);
        assert_eq!(lessons.len(), 2);
        assert!(lessons[0].completed);
        assert!(!lessons[1].completed);
    }

    #[test]
    fn accepts_paginated_envelope() {
        let raw = json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [{ "id": 10, "title": "A" }, { "id": 11, "title": "B" }]
        });
        let ids: Vec<i64> = normalize_lessons(&raw).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn other_shapes_yield_empty_list() {
        assert!(normalize_lessons(&json!(null)).is_empty());
        assert!(normalize_lessons(&json!("lessons")).is_empty());
        assert!(normalize_lessons(&json!({ "count": 0 })).is_empty());
        assert!(normalize_lessons(&json!({ "results": "nope" })).is_empty());
    }

    #[test]
    fn resolves_embedded_module() {
        let raw = json!([{
            "id": 1,
            "title": "Ownership",
            "module": { "id": 7, "title": "Memory", "order": 3 }
        }]);
        let lesson = &normalize_lessons(&raw)[0];
        assert_eq!(lesson.scope_id, ScopeId::Module(7));
        assert_eq!(lesson.scope_order, 3);
        assert_eq!(lesson.scope_title.as_deref(), Some("Memory"));
    }

    #[test]
    fn resolves_bare_module_id() {
        let raw = json!([{ "id": 1, "title": "x", "module": 4 }, { "id": 2, "module_id": "5" }]);
        let lessons = normalize_lessons(&raw);
        assert_eq!(lessons[0].scope_id, ScopeId::Module(4));
        assert_eq!(lessons[0].scope_order, 0);
        assert_eq!(lessons[1].scope_id, ScopeId::Module(5));
    }

    #[test]
    fn missing_or_null_module_falls_back_to_root() {
        let raw = json!([
            { "id": 1, "module": null },
            { "id": 2 },
            { "id": 3, "module": { "title": "no id" } }
        ]);
        assert!(normalize_lessons(&raw).iter().all(|l| l.scope_id == ScopeId::Root));
    }

    #[test]
    fn unusable_module_falls_through_to_bare_id() {
        let raw = json!([
            { "id": 1, "module": { "title": "x" }, "module_id": 5 },
            { "id": 2, "module": "garbage", "module_id": 6 },
            { "id": 3, "module": null, "moduleId": "7" }
        ]);
        let scopes: Vec<ScopeId> = normalize_lessons(&raw).iter().map(|l| l.scope_id).collect();
        assert_eq!(scopes, vec![ScopeId::Module(5), ScopeId::Module(6), ScopeId::Module(7)]);
    }

    #[test]
    fn applies_defaults() {
        let lesson = &normalize_lessons(&json!([{ "id": 1 }]))[0];
        assert_eq!(lesson.title, "");
        assert_eq!(lesson.order, 0);
        assert_eq!(lesson.duration_minutes, None);
        assert_eq!(lesson.result_percent, None);
        assert!(!lesson.completed);
    }

    #[test]
    fn reads_duration_and_score() {
        let raw = json!([
            { "id": 1, "duration_min": 12, "result_percent": 87.5 },
            { "id": 2, "duration": -3 }
        ]);
        let lessons = normalize_lessons(&raw);
        assert_eq!(lessons[0].duration_minutes, Some(12));
        assert_eq!(lessons[0].result_percent, Some(87.5));
        assert_eq!(lessons[1].duration_minutes, None);
    }

    #[test]
    fn garbage_completed_is_incomplete() {
        let raw = json!([
            { "id": 1, "completed": "true" },
            { "id": 2, "completed": 1 },
            { "id": 3, "completed": null },
            { "id": 4, "completed": true }
        ]);
        let flags: Vec<bool> = normalize_lessons(&raw).iter().map(|l| l.completed).collect();
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn skips_malformed_items_and_duplicates() {
        let raw = json!([
            42,
            { "title": "no id" },
            { "id": "abc" },
            { "id": "3", "title": "string id" },
            { "id": 3, "title": "duplicate" }
        ]);
        let lessons = normalize_lessons(&raw);
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].id, 3);
        assert_eq!(lessons[0].title, "string id");
    }

    #[test]
    fn normalizes_module_payloads() {
        let raw = json!({ "results": [
            { "id": 2, "title": "Advanced", "order": 2 },
            { "id": 1 },
            { "title": "orphan" }
        ]});
        let scopes = normalize_scopes(&raw);
        assert_eq!(
            scopes,
            vec![
                Scope::new(ScopeId::Module(2), "Advanced", 2),
                Scope::new(ScopeId::Module(1), "Module 1", 0),
            ]
        );
    }
}
