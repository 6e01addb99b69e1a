use crate::types::{CustomField, Id};
use crate::{AsanaClient, Error, Filter};

impl AsanaClient {
    pub async fn get_custom_field(
        &self,
        id: Id,
        filter: Option<&Filter>,
    ) -> Result<CustomField, Error> {
        self.get(&format!("custom_fields/{}", id), filter).await
    }

    /// List the custom fields defined in a workspace.
    pub async fn list_workspace_custom_fields(
        &self,
        workspace: Id,
        filter: Option<&Filter>,
    ) -> Result<Vec<CustomField>, Error> {
        self.paginate(&format!("workspaces/{}/custom_fields", workspace), filter)
            .await
    }
}
