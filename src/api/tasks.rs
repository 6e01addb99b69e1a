use serde::Serialize;
use serde_json::json;

use crate::types::{Id, MembershipUpdate, ResourceKey, Task, TaskUpdate};
use crate::{AsanaClient, Error, Filter};

fn task_path(task: impl Into<ResourceKey>) -> String {
    format!("tasks/{}", task.into())
}

impl AsanaClient {
    /// List tasks. The API requires either a project or an assignee plus a
    /// workspace in the filter.
    pub async fn list_tasks(&self, filter: Option<&Filter>) -> Result<Vec<Task>, Error> {
        self.paginate("tasks", filter).await
    }

    pub async fn list_project_tasks(
        &self,
        project: Id,
        filter: Option<&Filter>,
    ) -> Result<Vec<Task>, Error> {
        self.paginate(&format!("projects/{}/tasks", project), filter)
            .await
    }

    /// Get a task by ID or by external ID.
    pub async fn get_task(
        &self,
        task: impl Into<ResourceKey>,
        filter: Option<&Filter>,
    ) -> Result<Task, Error> {
        self.get(&task_path(task), filter).await
    }

    /// Create a task from arbitrary fields, e.g. `json!({"workspace": 1, "name": "x"})`.
    pub async fn create_task<B>(&self, fields: &B, filter: Option<&Filter>) -> Result<Task, Error>
    where
        B: Serialize + ?Sized,
    {
        self.post("tasks", fields, filter).await
    }

    pub async fn update_task(
        &self,
        task: impl Into<ResourceKey>,
        update: &TaskUpdate,
        filter: Option<&Filter>,
    ) -> Result<Task, Error> {
        self.put(&task_path(task), update, filter).await
    }

    pub async fn delete_task(
        &self,
        task: impl Into<ResourceKey>,
        filter: Option<&Filter>,
    ) -> Result<(), Error> {
        self.delete(&task_path(task), filter).await
    }

    pub async fn add_tag(
        &self,
        task: impl Into<ResourceKey>,
        tag: Id,
        filter: Option<&Filter>,
    ) -> Result<(), Error> {
        let path = format!("{}/addTag", task_path(task));
        self.post_empty(&path, &json!({ "tag": tag }), filter).await
    }

    pub async fn remove_tag(
        &self,
        task: impl Into<ResourceKey>,
        tag: Id,
        filter: Option<&Filter>,
    ) -> Result<(), Error> {
        let path = format!("{}/removeTag", task_path(task));
        self.post_empty(&path, &json!({ "tag": tag }), filter).await
    }

    /// Add a task to a project, optionally placing it in a section or next
    /// to another task.
    pub async fn add_project(
        &self,
        task: impl Into<ResourceKey>,
        membership: &MembershipUpdate,
        filter: Option<&Filter>,
    ) -> Result<(), Error> {
        let path = format!("{}/addProject", task_path(task));
        self.post_empty(&path, membership, filter).await
    }

    pub async fn remove_project(
        &self,
        task: impl Into<ResourceKey>,
        project: Id,
        filter: Option<&Filter>,
    ) -> Result<(), Error> {
        let path = format!("{}/removeProject", task_path(task));
        self.post_empty(&path, &json!({ "project": project }), filter)
            .await
    }
}
