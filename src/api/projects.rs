use crate::types::{Id, Project};
use crate::{AsanaClient, Error, Filter};

impl AsanaClient {
    /// List projects. Scope with [`Filter::workspace`] and [`Filter::archived`].
    pub async fn list_projects(&self, filter: Option<&Filter>) -> Result<Vec<Project>, Error> {
        self.paginate("projects", filter).await
    }

    pub async fn get_project(&self, id: Id, filter: Option<&Filter>) -> Result<Project, Error> {
        self.get(&format!("projects/{}", id), filter).await
    }
}
