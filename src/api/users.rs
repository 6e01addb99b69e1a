use crate::types::{Id, User};
use crate::{AsanaClient, Error, Filter};

impl AsanaClient {
    /// List users. Scope with [`Filter::workspace`].
    pub async fn list_users(&self, filter: Option<&Filter>) -> Result<Vec<User>, Error> {
        self.paginate("users", filter).await
    }

    /// The user the client is authenticated as.
    pub async fn get_authenticated_user(&self, filter: Option<&Filter>) -> Result<User, Error> {
        self.get("users/me", filter).await
    }

    pub async fn get_user(&self, id: Id, filter: Option<&Filter>) -> Result<User, Error> {
        self.get(&format!("users/{}", id), filter).await
    }
}
