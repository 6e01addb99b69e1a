use crate::types::{Id, Tag};
use crate::{AsanaClient, Error, Filter};

impl AsanaClient {
    pub async fn list_tags(&self, filter: Option<&Filter>) -> Result<Vec<Tag>, Error> {
        self.paginate("tags", filter).await
    }

    pub async fn get_tag(&self, id: Id, filter: Option<&Filter>) -> Result<Tag, Error> {
        self.get(&format!("tags/{}", id), filter).await
    }
}
