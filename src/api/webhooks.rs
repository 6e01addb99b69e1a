use crate::request::ApiRequest;
use crate::types::{Id, Webhook};
use crate::{AsanaClient, Error, Filter};

impl AsanaClient {
    pub async fn list_webhooks(&self, filter: Option<&Filter>) -> Result<Vec<Webhook>, Error> {
        self.paginate("webhooks", filter).await
    }

    pub async fn get_webhook(&self, id: Id) -> Result<Webhook, Error> {
        self.get(&format!("webhooks/{}", id), None).await
    }

    /// Subscribe `target` to changes on `resource`.
    ///
    /// Asana performs a handshake against `target` before answering, so this
    /// call blocks until the receiving server has responded.
    pub async fn create_webhook(&self, resource: Id, target: &str) -> Result<Webhook, Error> {
        let request = ApiRequest::post("webhooks").form([
            ("resource", resource.to_string()),
            ("target", target.to_string()),
        ]);
        self.send(request).await.map(|response| response.data)
    }

    pub async fn delete_webhook(&self, id: Id) -> Result<(), Error> {
        self.delete(&format!("webhooks/{}", id), None).await
    }
}
