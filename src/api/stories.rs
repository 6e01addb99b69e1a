use crate::types::{ResourceKey, Story};
use crate::{AsanaClient, Error, Filter};

impl AsanaClient {
    /// List the comments and system activity on a task.
    pub async fn list_task_stories(
        &self,
        task: impl Into<ResourceKey>,
        filter: Option<&Filter>,
    ) -> Result<Vec<Story>, Error> {
        self.paginate(&format!("tasks/{}/stories", task.into()), filter)
            .await
    }
}
