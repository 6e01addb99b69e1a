use serde::Serialize;

use crate::types::{Id, ResourceKey, Section, SectionUpdate};
use crate::{AsanaClient, Error, Filter};

fn section_path(section: impl Into<ResourceKey>) -> String {
    format!("sections/{}", section.into())
}

impl AsanaClient {
    pub async fn list_project_sections(
        &self,
        project: Id,
        filter: Option<&Filter>,
    ) -> Result<Vec<Section>, Error> {
        self.paginate(&format!("projects/{}/sections", project), filter)
            .await
    }

    /// Get a section by ID or by external ID.
    pub async fn get_section(
        &self,
        section: impl Into<ResourceKey>,
        filter: Option<&Filter>,
    ) -> Result<Section, Error> {
        self.get(&section_path(section), filter).await
    }

    pub async fn create_section<B>(
        &self,
        fields: &B,
        filter: Option<&Filter>,
    ) -> Result<Section, Error>
    where
        B: Serialize + ?Sized,
    {
        self.post("sections", fields, filter).await
    }

    pub async fn update_section(
        &self,
        section: impl Into<ResourceKey>,
        update: &SectionUpdate,
        filter: Option<&Filter>,
    ) -> Result<Section, Error> {
        self.put(&section_path(section), update, filter).await
    }

    pub async fn delete_section(
        &self,
        section: impl Into<ResourceKey>,
        filter: Option<&Filter>,
    ) -> Result<(), Error> {
        self.delete(&section_path(section), filter).await
    }
}
