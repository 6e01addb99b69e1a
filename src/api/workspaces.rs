use crate::types::{Id, Workspace};
use crate::{AsanaClient, Error, Filter};

impl AsanaClient {
    /// List all workspaces visible to the authenticated user.
    pub async fn list_workspaces(&self, filter: Option<&Filter>) -> Result<Vec<Workspace>, Error> {
        self.paginate("workspaces", filter).await
    }

    pub async fn get_workspace(&self, id: Id, filter: Option<&Filter>) -> Result<Workspace, Error> {
        self.get(&format!("workspaces/{}", id), filter).await
    }
}
