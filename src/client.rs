//! Client for the Asana API.
//!
//! Every operation funnels through [`AsanaClient::send`]: build the request,
//! hand it to the transport, decode the envelope. List operations go through
//! [`AsanaClient::paginate`], which repeats the request until the API stops
//! returning a cursor.

use std::fmt;
use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use url::Url;

use crate::filter::Filter;
use crate::request::ApiRequest;
use crate::response::{decode, Response};
use crate::transport::{ReqwestTransport, Transport};
use crate::Error;

const BASE_URL: &str = "https://app.asana.com/api/1.0/";
const ENV_VAR: &str = "ASANA_TOKEN";

/// Identifying `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("asana-client/", env!("CARGO_PKG_VERSION"));

/// Client for interacting with the Asana API.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct AsanaClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    user_agent: String,
}

impl fmt::Debug for AsanaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsanaClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl AsanaClient {
    /// Create a new client from the `ASANA_TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if `ASANA_TOKEN` is not set or is empty.
    pub fn from_env() -> Result<Self, Error> {
        let token = std::env::var(ENV_VAR).map_err(|_| Error::MissingToken)?;

        if token.is_empty() {
            return Err(Error::MissingToken);
        }

        Self::new(&token)
    }

    /// Create a new client with the given personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::builder().token(token).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Returns the base URL for API requests.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Point the client at a different API root (primarily for testing).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Perform one request and decode the response envelope.
    ///
    /// This is the single path every operation takes to the network.
    pub async fn send<T>(&self, request: ApiRequest<'_>) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
    {
        let request = request.build(&self.base_url, &self.user_agent)?;

        tracing::debug!(
            method = request.method.as_str(),
            url = %request.url,
            "sending request"
        );

        let response = self.transport.execute(request).await?;

        tracing::debug!(status = response.status, "received response");

        decode(response)
    }

    /// Make a GET request to the API and deserialize the response.
    ///
    /// The `path` is relative to the base URL (e.g., "users/me").
    pub async fn get<T>(&self, path: &str, filter: Option<&Filter>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.send(ApiRequest::get(path).filter(filter))
            .await
            .map(|response| response.data)
    }

    /// Make a GET request and collect all pages of results.
    ///
    /// Follows `next_page` cursors until the API stops returning one. Each
    /// page is requested with a copy of `filter` carrying the cursor's offset;
    /// `filter` itself is never modified. Any failure aborts the whole call.
    #[tracing::instrument(skip_all, level = "debug", fields(%path))]
    pub async fn paginate<T>(&self, path: &str, filter: Option<&Filter>) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned,
    {
        let mut all_items = Vec::new();
        let mut advanced: Option<Filter> = None;
        let mut page_number = 1usize;

        loop {
            let current = advanced.as_ref().or(filter);
            let page: Response<Vec<T>> =
                self.send(ApiRequest::get(path).filter(current)).await?;

            tracing::debug!(page = page_number, items = page.data.len(), "fetched page");
            all_items.extend(page.data);

            match page.next_page {
                Some(next) => {
                    let next_filter = match current {
                        Some(f) => f.with_offset(next.offset),
                        None => Filter::default().with_offset(next.offset),
                    };
                    advanced = Some(next_filter);
                    page_number += 1;
                }
                None => break,
            }
        }

        Ok(all_items)
    }

    /// Make a POST request with a JSON payload and deserialize the response.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        filter: Option<&Filter>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::post(path).json(body)?.filter(filter);
        self.send(request).await.map(|response| response.data)
    }

    /// Make a PUT request with a JSON payload and deserialize the response.
    pub async fn put<T, B>(
        &self,
        path: &str,
        body: &B,
        filter: Option<&Filter>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::put(path).json(body)?.filter(filter);
        self.send(request).await.map(|response| response.data)
    }

    /// Make a POST request whose response data is not needed
    /// (e.g., relationship operations).
    pub async fn post_empty<B>(
        &self,
        path: &str,
        body: &B,
        filter: Option<&Filter>,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::post(path).json(body)?.filter(filter);
        self.send::<IgnoredAny>(request).await.map(|_| ())
    }

    /// Make a DELETE request to remove a resource.
    pub async fn delete(&self, path: &str, filter: Option<&Filter>) -> Result<(), Error> {
        self.send::<IgnoredAny>(ApiRequest::delete(path).filter(filter))
            .await
            .map(|_| ())
    }
}

/// Configures an [`AsanaClient`].
///
/// Without an explicit transport, the client uses [`ReqwestTransport`],
/// authenticated with `token` when one is given.
#[derive(Default)]
pub struct ClientBuilder {
    token: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Personal access token for the default transport.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use a custom transport. Takes precedence over `token`.
    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Use a transport shared with other clients.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] for an unparseable base URL, or the
    /// transport's construction error.
    pub fn build(self) -> Result<AsanaClient, Error> {
        let transport: Arc<dyn Transport> = match (self.transport, self.token) {
            (Some(transport), token) => {
                if token.is_some() {
                    tracing::warn!("custom transport supplied; token ignored");
                }
                transport
            }
            (None, Some(token)) => Arc::new(ReqwestTransport::with_token(&token)?),
            (None, None) => Arc::new(ReqwestTransport::default()),
        };

        let base_url = parse_base_url(self.base_url.as_deref().unwrap_or(BASE_URL))?;

        Ok(AsanaClient {
            transport,
            base_url,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
        })
    }
}

/// Parse a base URL, ensuring it ends with `/` so relative paths join beneath it.
fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
