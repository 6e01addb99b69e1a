//! Asana API Client Library
//!
//! Typed async access to the Asana REST API: workspaces, users, projects,
//! tasks, sections, tags, stories, webhooks and custom fields.
//!
//! # Features
//!
//! - **One request pipeline**: every operation builds its request, passes it to
//!   a [`Transport`] and decodes the `{data, next_page, errors}` envelope the
//!   same way
//! - **Automatic pagination**: list operations follow `next_page` cursors and
//!   return every item in server order
//! - **Pluggable transport**: swap the default `reqwest` transport for your own
//!   to add authentication, instrumentation or test doubles
//!
//! # Example
//!
//! ```rust,no_run
//! use asana_client::{AsanaClient, Filter, ResourceKey};
//!
//! # async fn example() -> Result<(), asana_client::Error> {
//! let client = AsanaClient::from_env()?;
//!
//! let me = client.get_authenticated_user(None).await?;
//! let workspace = me.workspaces[0].id;
//!
//! let filter = Filter::new()
//!     .workspace(workspace)
//!     .assignee(me.id)
//!     .completed_since("now");
//! let tasks = client.list_tasks(Some(&filter)).await?;
//!
//! let imported = client
//!     .get_task(ResourceKey::external("crm-4411"), None)
//!     .await?;
//! # let _ = (tasks, imported);
//! # Ok(())
//! # }
//! ```
//!
//! The crate logs through `tracing` and never installs a subscriber.

mod api;
pub mod client;
pub mod error;
mod fields;
pub mod filter;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use client::{AsanaClient, ClientBuilder, USER_AGENT};
pub use error::{ApiErrors, BoxError, Error, ErrorRecord};
pub use filter::Filter;
pub use request::ApiRequest;
pub use response::{NextPage, Response};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport, TransportFn,
};

// Re-export resource types
pub use types::{
    CustomField, EnumOption, External, Heart, Id, Membership, MembershipUpdate, Project,
    ResourceKey, Section, SectionUpdate, Story, Tag, Task, TaskUpdate, User, Webhook,
    WebhookResource, Workspace,
};
