//! Outbound request construction.

use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::fields::default_opt_fields;
use crate::filter::Filter;
use crate::transport::{HttpMethod, HttpRequest};
use crate::Error;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Write requests are wrapped as `{"data": ...}`.
#[derive(Serialize)]
struct RequestEnvelope<'a> {
    data: &'a Value,
}

/// One logical API call, before it is bound to a client's base URL.
///
/// A request carries at most one body. If both JSON data and form data are
/// set, the JSON data is sent and the form data is dropped.
#[derive(Debug, Clone)]
pub struct ApiRequest<'a> {
    method: HttpMethod,
    path: &'a str,
    data: Option<Value>,
    form: Option<Vec<(String, String)>>,
    filter: Option<&'a Filter>,
}

impl<'a> ApiRequest<'a> {
    /// Start a request for `path`, relative to the API base URL.
    pub fn new(method: HttpMethod, path: &'a str) -> Self {
        Self {
            method,
            path,
            data: None,
            form: None,
            filter: None,
        }
    }

    pub fn get(path: &'a str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: &'a str) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: &'a str) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn delete(path: &'a str) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the payload cannot be serialized.
    pub fn json<B>(mut self, payload: &B) -> Result<Self, Error>
    where
        B: Serialize + ?Sized,
    {
        self.data = Some(serde_json::to_value(payload).map_err(Error::Encode)?);
        Ok(self)
    }

    /// Attach form-encoded fields.
    pub fn form<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.form = Some(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn filter(mut self, filter: Option<&'a Filter>) -> Self {
        self.filter = filter;
        self
    }

    /// The filter actually sent: the caller's, with the listed collection's
    /// default `opt_fields` filled in when none were given.
    pub fn effective_filter(&self) -> Filter {
        let mut filter = self.filter.cloned().unwrap_or_default();
        if filter.opt_fields.is_empty() {
            filter.opt_fields = default_opt_fields(self.path)
                .iter()
                .map(|f| f.to_string())
                .collect();
        }
        filter
    }

    /// Resolve against `base_url` and serialize into an [`HttpRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the path cannot be joined onto the
    /// base URL, or [`Error::Encode`] if the payload cannot be serialized.
    pub fn build(self, base_url: &Url, user_agent: &str) -> Result<HttpRequest, Error> {
        let mut url = base_url.join(self.path.trim_start_matches('/'))?;

        let query = self.effective_filter().query_pairs();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut headers = Vec::new();
        let body = match (self.data, self.form) {
            (Some(data), form) => {
                if form.is_some() {
                    tracing::warn!(
                        path = self.path,
                        "both JSON data and form data supplied; form data ignored"
                    );
                }
                headers.push(("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()));
                let body = serde_json::to_string(&RequestEnvelope { data: &data })
                    .map_err(Error::Encode)?;
                Some(body)
            }
            (None, Some(form)) => {
                headers.push(("Content-Type".to_string(), CONTENT_TYPE_FORM.to_string()));
                let body = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(form)
                    .finish();
                Some(body)
            }
            (None, None) => None,
        };
        headers.push(("User-Agent".to_string(), user_agent.to_string()));

        Ok(HttpRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const UA: &str = "asana-client/test";

    fn base() -> Url {
        Url::parse("https://app.asana.com/api/1.0/").unwrap()
    }

    #[test]
    fn test_get_applies_default_fields() {
        let req = ApiRequest::get("tasks").build(&base(), UA).unwrap();

        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url.path(), "/api/1.0/tasks");
        assert_eq!(
            req.query_param("opt_fields").as_deref(),
            Some("name,assignee,assignee_status,completed,parent")
        );
        assert_eq!(req.body, None);
        assert_eq!(req.header("Content-Type"), None);
        assert_eq!(req.header("User-Agent"), Some(UA));
    }

    #[test]
    fn test_single_resource_gets_full_record() {
        let req = ApiRequest::get("tasks/1").build(&base(), UA).unwrap();
        assert_eq!(req.query_param("opt_fields"), None);
        assert_eq!(req.url.query(), None);

        let filter = Filter::new().opt_expand(["assignee"]);
        let req = ApiRequest::put("tasks/external:ABC123")
            .filter(Some(&filter))
            .build(&base(), UA)
            .unwrap();
        assert_eq!(req.query_param("opt_fields"), None);
        assert_eq!(req.query_param("opt_expand").as_deref(), Some("assignee"));
    }

    #[test]
    fn test_caller_fields_are_sent_unmodified() {
        let filter = Filter::new().opt_fields(["notes", "due_on"]);
        let req = ApiRequest::get("tasks")
            .filter(Some(&filter))
            .build(&base(), UA)
            .unwrap();

        assert_eq!(
            req.query_param("opt_fields").as_deref(),
            Some("notes,due_on")
        );
    }

    #[test]
    fn test_default_fields_do_not_mutate_caller_filter() {
        let filter = Filter::new().workspace(42);
        let snapshot = filter.clone();

        let req = ApiRequest::get("projects")
            .filter(Some(&filter))
            .build(&base(), UA)
            .unwrap();

        assert_eq!(filter, snapshot);
        assert!(filter.opt_fields.is_empty());
        assert_eq!(req.query_param("workspace").as_deref(), Some("42"));
        assert_eq!(
            req.query_param("opt_fields").as_deref(),
            Some("name,color,archived")
        );
    }

    #[test]
    fn test_no_query_for_unknown_resource_without_filter() {
        let req = ApiRequest::get("webhooks/5").build(&base(), UA).unwrap();
        assert_eq!(req.url.as_str(), "https://app.asana.com/api/1.0/webhooks/5");
    }

    #[test]
    fn test_leading_slash_stays_under_base_path() {
        let req = ApiRequest::get("/webhooks").build(&base(), UA).unwrap();
        assert_eq!(req.url.path(), "/api/1.0/webhooks");
    }

    #[test]
    fn test_json_payload_is_wrapped_in_data_envelope() {
        let req = ApiRequest::post("tasks/1/addTag")
            .json(&json!({"tag": 99}))
            .unwrap()
            .build(&base(), UA)
            .unwrap();

        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header("content-type"), Some(CONTENT_TYPE_JSON));
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"data": {"tag": 99}}));
    }

    #[test]
    fn test_form_payload() {
        let req = ApiRequest::post("webhooks")
            .form([
                ("resource", "12"),
                ("target", "https://example.com/hook?a=b"),
            ])
            .build(&base(), UA)
            .unwrap();

        assert_eq!(req.header("content-type"), Some(CONTENT_TYPE_FORM));
        assert_eq!(
            req.body.as_deref(),
            Some("resource=12&target=https%3A%2F%2Fexample.com%2Fhook%3Fa%3Db")
        );
    }

    #[test]
    fn test_json_wins_over_form() {
        let req = ApiRequest::put("sections/3")
            .form([("name", "ignored")])
            .json(&json!({"name": "kept"}))
            .unwrap()
            .build(&base(), UA)
            .unwrap();

        assert_eq!(req.header("content-type"), Some(CONTENT_TYPE_JSON));
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"data": {"name": "kept"}}));
    }

    #[test]
    fn test_external_key_builds_like_numeric_key() {
        let by_id = ApiRequest::get("tasks/123").build(&base(), UA).unwrap();
        let by_external = ApiRequest::get("tasks/external:ABC123")
            .build(&base(), UA)
            .unwrap();

        assert_eq!(by_external.url.path(), "/api/1.0/tasks/external:ABC123");
        assert_eq!(by_id.url.query(), by_external.url.query());
        assert_eq!(by_id.headers, by_external.headers);
        assert_eq!(by_id.body, by_external.body);
    }

    #[test]
    fn test_filter_offset_and_limit_are_sent() {
        let filter = Filter::new().limit(2).with_offset("off1");
        let req = ApiRequest::get("tags")
            .filter(Some(&filter))
            .build(&base(), UA)
            .unwrap();

        assert_eq!(req.query_param("offset").as_deref(), Some("off1"));
        assert_eq!(req.query_param("limit").as_deref(), Some("2"));
    }
}
