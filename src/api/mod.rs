//! Typed operations per Asana resource.
//!
//! Each operation only picks a path and a payload shape; the request,
//! decoding and pagination logic all live in [`AsanaClient`](crate::AsanaClient).

mod custom_fields;
mod projects;
mod sections;
mod stories;
mod tags;
mod tasks;
mod users;
mod webhooks;
mod workspaces;
