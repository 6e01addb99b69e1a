//! Query options shared by every operation.

use crate::types::Id;

/// Caller-configurable query parameters for a single call.
///
/// Only options that are set are sent. List-valued options are comma-joined
/// on the wire.
///
/// ```rust
/// use asana_client::Filter;
///
/// let filter = Filter::new()
///     .workspace(1234)
///     .completed_since("now")
///     .opt_fields(["name", "due_on"]);
///
/// assert_eq!(
///     filter.query_pairs(),
///     vec![
///         ("workspace", "1234".to_string()),
///         ("completed_since", "now".to_string()),
///         ("opt_fields", "name,due_on".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub archived: Option<bool>,
    pub assignee: Option<Id>,
    pub project: Option<Id>,
    pub workspace: Option<Id>,
    /// ISO-8601 timestamp, or `now` for incomplete tasks only.
    pub completed_since: Option<String>,
    pub modified_since: Option<String>,
    pub opt_fields: Vec<String>,
    pub opt_expand: Vec<String>,
    /// Opaque pagination cursor returned by the API.
    pub offset: Option<String>,
    /// Maximum page size.
    pub limit: Option<u32>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn assignee(mut self, id: Id) -> Self {
        self.assignee = Some(id);
        self
    }

    pub fn project(mut self, id: Id) -> Self {
        self.project = Some(id);
        self
    }

    pub fn workspace(mut self, id: Id) -> Self {
        self.workspace = Some(id);
        self
    }

    pub fn completed_since(mut self, since: impl Into<String>) -> Self {
        self.completed_since = Some(since.into());
        self
    }

    pub fn modified_since(mut self, since: impl Into<String>) -> Self {
        self.modified_since = Some(since.into());
        self
    }

    pub fn opt_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opt_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn opt_expand<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.opt_expand = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// A copy of this filter positioned at `offset`. `self` is left untouched.
    pub fn with_offset(&self, offset: impl Into<String>) -> Self {
        Self {
            offset: Some(offset.into()),
            ..self.clone()
        }
    }

    /// The query parameters this filter sends, in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(archived) = self.archived {
            pairs.push(("archived", archived.to_string()));
        }
        if let Some(id) = self.assignee {
            pairs.push(("assignee", id.to_string()));
        }
        if let Some(id) = self.project {
            pairs.push(("project", id.to_string()));
        }
        if let Some(id) = self.workspace {
            pairs.push(("workspace", id.to_string()));
        }
        if let Some(since) = &self.completed_since {
            pairs.push(("completed_since", since.clone()));
        }
        if let Some(since) = &self.modified_since {
            pairs.push(("modified_since", since.clone()));
        }
        if !self.opt_fields.is_empty() {
            pairs.push(("opt_fields", self.opt_fields.join(",")));
        }
        if !self.opt_expand.is_empty() {
            pairs.push(("opt_expand", self.opt_expand.join(",")));
        }
        if let Some(offset) = &self.offset {
            pairs.push(("offset", offset.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_sends_nothing() {
        assert!(Filter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_all_options() {
        let filter = Filter::new()
            .archived(false)
            .assignee(1)
            .project(2)
            .workspace(3)
            .completed_since("2024-01-01T00:00:00Z")
            .modified_since("2024-02-01T00:00:00Z")
            .opt_fields(["name", "notes"])
            .opt_expand(["assignee"])
            .limit(50);

        assert_eq!(
            filter.query_pairs(),
            vec![
                ("archived", "false".to_string()),
                ("assignee", "1".to_string()),
                ("project", "2".to_string()),
                ("workspace", "3".to_string()),
                ("completed_since", "2024-01-01T00:00:00Z".to_string()),
                ("modified_since", "2024-02-01T00:00:00Z".to_string()),
                ("opt_fields", "name,notes".to_string()),
                ("opt_expand", "assignee".to_string()),
                ("limit", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_with_offset_copies() {
        let original = Filter::new().workspace(7).limit(10);
        let advanced = original.with_offset("eyJ0eXAiOjE");

        assert_eq!(original.offset, None);
        assert_eq!(advanced.offset.as_deref(), Some("eyJ0eXAiOjE"));
        assert_eq!(advanced.workspace, Some(7));
        assert_eq!(advanced.limit, Some(10));
    }

    #[test]
    fn test_with_offset_replaces_existing_offset() {
        let filter = Filter::new().with_offset("first").with_offset("second");
        assert_eq!(filter.offset.as_deref(), Some("second"));
    }
}
