//! HTTP transport seam.
//!
//! Requests and responses are plain data so the client pipeline never depends
//! on a particular HTTP stack. [`ReqwestTransport`] is the default; any type
//! implementing [`Transport`] can replace it to inject authentication, proxies,
//! instrumentation or a test double.

use std::future::Future;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use url::Url;

use crate::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully-formed outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of a query parameter, if present.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// A response as returned by a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP exchange.
///
/// Implementations must not retry or reinterpret the response; non-2xx
/// statuses are returned as data. Only network-level failures are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Adapts an async function or closure into a [`Transport`].
///
/// ```rust
/// use asana_client::{AsanaClient, Error, HttpRequest, HttpResponse, TransportFn};
///
/// let transport = TransportFn(|_req: HttpRequest| async {
///     Ok::<_, Error>(HttpResponse::new(200, r#"{"data": []}"#))
/// });
/// let client = AsanaClient::builder().transport(transport).build()?;
/// # Ok::<(), Error>(())
/// ```
pub struct TransportFn<F>(pub F);

#[async_trait]
impl<F, Fut> Transport for TransportFn<F>
where
    F: Fn(HttpRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<HttpResponse, Error>> + Send + 'static,
{
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        (self.0)(request).await
    }
}

/// Default transport backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Wrap an existing `reqwest::Client`.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Create a transport that sends `Authorization: Bearer <token>` on every request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToken`] if the token cannot be used as a header
    /// value, or [`Error::Http`] if the HTTP client cannot be initialized.
    pub fn with_token(token: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).map_err(|_| Error::InvalidToken)?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::Http)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut builder = self.http.request(request.method.into(), request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: Url::parse(url).unwrap(),
            headers: vec![("User-Agent".to_string(), "test".to_string())],
            body: None,
        }
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = request("https://example.com/tasks");
        assert_eq!(req.header("user-agent"), Some("test"));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn test_query_param() {
        let req = request("https://example.com/tasks?opt_fields=name%2Cnotes&limit=5");
        assert_eq!(req.query_param("opt_fields").as_deref(), Some("name,notes"));
        assert_eq!(req.query_param("limit").as_deref(), Some("5"));
        assert_eq!(req.query_param("offset"), None);
    }

    #[test]
    fn test_response_is_success() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(201, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }

    #[test]
    fn test_transport_fn_forwards_request() {
        let transport = TransportFn(|req: HttpRequest| async move {
            Ok::<_, Error>(HttpResponse::new(200, req.url.path().to_string()))
        });

        let response =
            tokio_test::block_on(transport.execute(request("https://example.com/users/me")))
                .unwrap();

        assert_eq!(response.body, "/users/me");
    }

    #[test]
    fn test_with_token_rejects_invalid_header() {
        let result = ReqwestTransport::with_token("bad\ntoken");
        assert!(matches!(result, Err(Error::InvalidToken)));
    }

    #[test]
    fn test_empty_token_creates_transport() {
        // The API will reject it at request time
        assert!(ReqwestTransport::with_token("").is_ok());
    }
}
