//! Error types for the Asana client.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error returned by custom [`Transport`](crate::Transport) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur when using the Asana client.
#[derive(Debug, Error)]
pub enum Error {
    /// The `ASANA_TOKEN` environment variable is not set or is empty.
    #[error("ASANA_TOKEN environment variable is not set")]
    MissingToken,

    /// The provided token contains invalid characters.
    #[error("invalid token format")]
    InvalidToken,

    /// The API answered with HTTP 401.
    #[error("asana: unauthorized")]
    Unauthorized,

    /// The response envelope carried one or more error records.
    #[error(transparent)]
    Api(#[from] ApiErrors),

    /// An HTTP request failed in the default transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A caller-supplied transport failed.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Failed to parse a response from the API.
    #[error("failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),

    /// Failed to serialize a request payload.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The base URL or a resource path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Wrap an arbitrary transport failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Error::Transport(err.into())
    }

    /// The HTTP status associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized => Some(401),
            Error::Api(errors) => Some(errors.status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the API reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// A single `{phrase, message}` error record from a response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Human-readable description of the failure.
    #[serde(default)]
    pub message: String,

    /// Short phrase Asana attaches to server errors for support lookups.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phrase: String,
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.message, self.phrase)
    }
}

/// Every error record from one response, plus the HTTP status it came with.
///
/// `errors` always holds at least one record when returned by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrors {
    /// The error records, in the order the API listed them.
    pub errors: Vec<ErrorRecord>,
    /// The HTTP status code of the response.
    pub status: u16,
}

impl ApiErrors {
    /// Message of the first record, if present.
    pub fn message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code: {}", self.status)?;
        for record in &self.errors {
            write!(f, ", {record}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str, phrase: &str) -> ErrorRecord {
        ErrorRecord {
            message: message.to_string(),
            phrase: phrase.to_string(),
        }
    }

    #[test]
    fn test_api_errors_display_joins_records() {
        let errors = ApiErrors {
            errors: vec![
                record("task: Missing input", "6 sad squid snuggle softly"),
                record("name: Too long", ""),
            ],
            status: 400,
        };

        assert_eq!(
            errors.to_string(),
            "code: 400, task: Missing input - 6 sad squid snuggle softly, name: Too long - "
        );
    }

    #[test]
    fn test_error_status() {
        assert_eq!(Error::Unauthorized.status(), Some(401));
        assert_eq!(Error::MissingToken.status(), None);

        let not_found = Error::Api(ApiErrors {
            errors: vec![record("Unknown object", "")],
            status: 404,
        });
        assert!(not_found.is_not_found());
        assert!(!Error::Unauthorized.is_not_found());
    }

    #[test]
    fn test_error_record_deserialization_without_phrase() {
        let json = r#"{"message": "Not authorized"}"#;
        let rec: ErrorRecord = serde_json::from_str(json).unwrap();

        assert_eq!(rec.message, "Not authorized");
        assert!(rec.phrase.is_empty());
    }

    #[test]
    fn test_transport_wraps_source() {
        let err = Error::transport("connection reset");
        assert_eq!(err.to_string(), "transport error: connection reset");
    }
}
