//! Response envelope decoding and error mapping.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiErrors, ErrorRecord};
use crate::transport::HttpResponse;
use crate::Error;

const STATUS_UNAUTHORIZED: u16 = 401;

/// Pagination cursor for fetching additional results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NextPage {
    /// The offset token for the next page.
    pub offset: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub uri: Option<String>,
}

/// Decoded `data` plus the cursor for the next page, if any.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    pub next_page: Option<NextPage>,
}

#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    next_page: Option<NextPage>,
    #[serde(default)]
    errors: Vec<ErrorRecord>,
}

/// Classify a raw response and decode its `data` into `T`.
///
/// Precedence: 401 first, then a body that is not an envelope, then error
/// records in the envelope, then any other non-2xx status, then the shape of
/// `data`.
pub fn decode<T>(response: HttpResponse) -> Result<Response<T>, Error>
where
    T: DeserializeOwned,
{
    let status = response.status;

    if status == STATUS_UNAUTHORIZED {
        return Err(Error::Unauthorized);
    }

    let envelope: Envelope = if response.body.trim().is_empty() {
        Envelope::default()
    } else {
        serde_json::from_str(&response.body).map_err(Error::Parse)?
    };

    if !envelope.errors.is_empty() {
        return Err(ApiErrors {
            errors: envelope.errors,
            status,
        }
        .into());
    }

    if !response.is_success() {
        return Err(status_error(status));
    }

    let data = T::deserialize(envelope.data.unwrap_or(Value::Null)).map_err(Error::Parse)?;

    Ok(Response {
        data,
        next_page: envelope.next_page,
    })
}

/// Error for a failed status whose envelope carried no error records.
fn status_error(status: u16) -> Error {
    let reason = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("");

    ApiErrors {
        errors: vec![ErrorRecord {
            message: format!("HTTP {} {}", status, reason).trim_end().to_string(),
            phrase: String::new(),
        }],
        status,
    }
    .into()
}
