//! Grouping of lessons into ordered scopes

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::model::{LessonRecord, ROOT_SCOPE_TITLE, Scope, ScopeId};

/// Lessons grouped by scope, both levels sorted
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScopeResolution {
    /// Scopes sorted by `(order, id)`
    pub scopes: Vec<Scope>,
    /// Members of each scope, sorted by `(order, id)`
    pub by_scope: BTreeMap<ScopeId, Vec<LessonRecord>>,
}

impl ScopeResolution {
    /// Sorted members of a scope; empty for unknown or unpopulated scopes
    pub fn members(&self, id: ScopeId) -> &[LessonRecord] {
        self.by_scope.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Look up a scope by id
    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.id == id)
    }

    /// All lessons flattened in scope order: the course-wide sequence
    pub fn course_sequence(&self) -> Vec<LessonRecord> {
        self.scopes.iter().flat_map(|scope| self.members(scope.id).iter().cloned()).collect()
    }

    /// Total number of lessons across all scopes
    pub fn lesson_count(&self) -> usize {
        self.by_scope.values().map(Vec::len).sum()
    }
}

/// Group lessons into scopes
///
/// With `explicit` scopes (the modules endpoint), those define titles and
/// ordering; lessons pointing at a scope missing from that list still get a
/// synthesized scope so no lesson is dropped. Without it, scopes are
/// synthesized from the lessons in first-seen order.
pub fn resolve_scopes(lessons: &[LessonRecord], explicit: Option<&[Scope]>) -> ScopeResolution {
    let mut scopes: Vec<Scope> = Vec::new();
    let mut index: HashMap<ScopeId, usize> = HashMap::new();

    for scope in explicit.unwrap_or(&[]) {
        if index.contains_key(&scope.id) {
            tracing::debug!("Ignoring duplicate scope {}", scope.id);
            continue;
        }
        index.insert(scope.id, scopes.len());
        scopes.push(scope.clone());
    }
    let explicit_count = scopes.len();

    let mut by_scope: BTreeMap<ScopeId, Vec<LessonRecord>> = BTreeMap::new();
    for lesson in lessons {
        let slot = *index.entry(lesson.scope_id).or_insert_with(|| {
            scopes.push(synthesize(lesson));
            scopes.len() - 1
        });

        // Members always agree with their scope on ordering and title
        let scope = &scopes[slot];
        let mut lesson = lesson.clone();
        lesson.scope_order = scope.order;
        lesson.scope_title = Some(scope.title.clone());
        by_scope.entry(lesson.scope_id).or_default().push(lesson);
    }

    if explicit.is_some() && scopes.len() > explicit_count {
        tracing::debug!(
            "Synthesized {} scope(s) missing from the module list",
            scopes.len() - explicit_count
        );
    }

    scopes.sort_by_key(Scope::sort_key);
    for members in by_scope.values_mut() {
        members.sort_by_key(LessonRecord::scope_key);
    }

    ScopeResolution { scopes, by_scope }
}

fn synthesize(lesson: &LessonRecord) -> Scope {
    let title = match (lesson.scope_id, &lesson.scope_title) {
        (ScopeId::Root, _) => ROOT_SCOPE_TITLE.to_string(),
        (_, Some(title)) => title.clone(),
        (ScopeId::Module(id), None) => format!("Module {id}"),
    };
    Scope::new(lesson.scope_id, title, lesson.scope_order)
}
