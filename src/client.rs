//! Document store protocol client
//!
//! One request per [`DocumentClient::fetch`] call: POST with an `input`
//! body when an input document is configured, GET with no body otherwise.
//! Responses are decoded into the wire envelopes and classified as success,
//! application error, or transport error. Retrying is the polling loop's
//! job, not the client's.

use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Request timeout, kept below the default polling interval so slow
/// requests cannot stack cycles up behind each other
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Request envelope for document evaluation
#[derive(Debug, Serialize)]
struct DataRequest<'a> {
    /// Omitted from the body entirely when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a Value>,
}

/// Success response envelope; the `result` field may be absent
#[derive(Debug, Deserialize)]
struct DataResponse {
    #[serde(default)]
    result: Option<Value>,
}

/// Error envelope returned by the service alongside a non-200 status
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
}

/// HTTP client for the remote document store
pub struct DocumentClient {
    http: reqwest::Client,
}

impl DocumentClient {
    /// Create a new client with a bounded request timeout.
    ///
    /// # Errors
    /// Returns a transport error if the underlying HTTP client cannot be
    /// built.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("docstore-cp/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch the configured document once.
    ///
    /// Sends a single request to `config.url` and returns the decoded
    /// result value, which may be absent. Every entry of `config.headers`
    /// is forwarded, including empty values.
    ///
    /// # Errors
    /// - [`Error::Network`] for connection, timeout, and body-decode
    ///   failures
    /// - [`Error::Application`] for a non-200 response carrying a JSON
    ///   error envelope
    /// - [`Error::UnknownStatus`] for any other non-200 response
    pub async fn fetch(&self, config: &Config) -> Result<Option<Value>> {
        let mut request = match &config.input {
            Some(input) => self
                .http
                .post(&config.url)
                .json(&DataRequest { input: Some(input) }),
            None => self.http.get(&config.url),
        };
        for (name, value) in &config.headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        if response.status() != reqwest::StatusCode::OK {
            return Err(classify_error(response).await);
        }

        let body: DataResponse = response.json().await?;
        Ok(body.result)
    }
}

/// Classify a non-200 response.
///
/// A JSON content type means the service produced a structured error
/// envelope; anything else is an opaque failure carrying only the status
/// code. An envelope that declares JSON but fails to decode surfaces the
/// decode error itself.
async fn classify_error(response: reqwest::Response) -> Error {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"));

    if !is_json {
        return Error::UnknownStatus { status };
    }

    match response.json::<ErrorResponse>().await {
        Ok(body) => Error::Application {
            code: body.code,
            message: body.message,
        },
        Err(err) => Error::Network(err),
    }
}
