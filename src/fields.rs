//! Default `opt_fields` per resource collection.
//!
//! When a caller sends no field selection for a list request, the request
//! builder falls back to these lists so each item carries a useful minimal
//! set of fields. Single-resource paths get no defaults and return the full
//! record.

const TAG_FIELDS: &[&str] = &["name", "color", "notes"];
const USER_FIELDS: &[&str] = &["name", "email", "photo"];
const PROJECT_FIELDS: &[&str] = &["name", "color", "archived"];
const WORKSPACE_FIELDS: &[&str] = &["name", "is_organization"];
const TASK_FIELDS: &[&str] = &["name", "assignee", "assignee_status", "completed", "parent"];
const SECTION_FIELDS: &[&str] = &["name", "created_at"];
const STORY_FIELDS: &[&str] = &["created_at", "created_by", "text", "type"];

/// Default fields for the collection listed at `path`, or an empty slice.
pub fn default_opt_fields(path: &str) -> &'static [&'static str] {
    match resource_collection(path) {
        Some("tags") => TAG_FIELDS,
        Some("users") => USER_FIELDS,
        Some("projects") => PROJECT_FIELDS,
        Some("workspaces") => WORKSPACE_FIELDS,
        Some("tasks") => TASK_FIELDS,
        Some("sections") => SECTION_FIELDS,
        Some("stories") => STORY_FIELDS,
        _ => &[],
    }
}

/// Name of the collection a path lists, if it lists one.
///
/// Paths alternate collection and key segments, so a path with an odd number
/// of segments ends in a collection: `tasks` and `projects/{id}/tasks` list
/// tasks. `tasks/{key}` addresses one task and lists nothing, while
/// `tasks/{key}/addTag` ends in an action name.
fn resource_collection(path: &str) -> Option<&str> {
    let segments: Vec<&str> = path
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() % 2 == 1 {
        segments.last().copied()
    } else {
        None
    }
}
