//! Asana resource types and write payloads.
//!
//! Every field of a resource is optional on decode: the API only returns the
//! fields named in `opt_fields`, plus `id`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numeric identifier of an Asana resource.
pub type Id = i64;

/// Addresses a single resource by primary ID or by external ID.
///
/// External IDs render as `external:<id>` in the path, so both forms share
/// the same operation:
///
/// ```rust
/// use asana_client::ResourceKey;
///
/// assert_eq!(format!("tasks/{}", ResourceKey::from(123)), "tasks/123");
/// assert_eq!(
///     format!("tasks/{}", ResourceKey::external("ABC123")),
///     "tasks/external:ABC123"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Id(Id),
    External(String),
}

impl ResourceKey {
    pub fn external(id: impl Into<String>) -> Self {
        ResourceKey::External(id.into())
    }
}

impl From<Id> for ResourceKey {
    fn from(id: Id) -> Self {
        ResourceKey::Id(id)
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKey::Id(id) => write!(f, "{}", id),
            ResourceKey::External(id) => write!(f, "external:{}", id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_organization: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Image URLs keyed by size, e.g. `image_60x60`.
    #[serde(default)]
    pub photo: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub workspaces: Vec<Workspace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub assignee: Option<User>,
    /// `inbox`, `later`, `today` or `upcoming`.
    #[serde(default)]
    pub assignee_status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    // Not documented, but returned when requested.
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub parent: Option<Box<Task>>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub due_on: Option<String>,
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub followers: Vec<User>,
    #[serde(default)]
    pub hearts: Vec<Heart>,
    #[serde(default)]
    pub hearted: bool,
    #[serde(default)]
    pub num_hearts: i64,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub num_likes: i64,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
    #[serde(default)]
    pub workspace: Option<Workspace>,
    #[serde(default)]
    pub external: Option<External>,
}

/// Caller-assigned external identity of a task or section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct External {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub section: Option<Section>,
}

/// A ♥ on a task or story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project: Option<Project>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub external: Option<External>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<User>,
    #[serde(default)]
    pub hearts: Vec<Heart>,
    #[serde(default)]
    pub text: Option<String>,
    /// `comment` or `system`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Story {
    /// Returns true if this story is a user comment.
    pub fn is_comment(&self) -> bool {
        self.kind.as_deref() == Some("comment")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub resource: Option<WebhookResource>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub active: bool,
}

/// The resource a webhook is subscribed to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookResource {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `text`, `number` or `enum`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub enum_options: Vec<EnumOption>,
    #[serde(default)]
    pub precision: Option<i64>,
    #[serde(default)]
    pub text_value: Option<String>,
    #[serde(default)]
    pub number_value: Option<f64>,
    #[serde(default)]
    pub enum_value: Option<EnumOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumOption {
    #[serde(default)]
    pub id: Id,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

/// Fields to change on a task. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    /// User ID, email, or `me`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hearted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<String>,
    /// Custom field values keyed by custom field ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<BTreeMap<Id, Value>>,
}

/// Placement of a task when adding it to a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MembershipUpdate {
    pub project: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_after: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_before: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Id>,
}

impl MembershipUpdate {
    pub fn new(project: Id) -> Self {
        Self {
            project,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
