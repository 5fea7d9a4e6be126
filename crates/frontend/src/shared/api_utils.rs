//! API utilities for talking to the PDF question-answering server
//!
//! Provides the error type shared by all requests and JSON body decoding.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a single request. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request (or its form body) could not be built
    #[error("failed to build request: {0}")]
    Request(String),
    /// fetch rejected: network down, CORS, server unreachable
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Decode a JSON response body
///
/// # Example
/// ```rust
/// use contracts::shared::pdf_chat_api::AskResponse;
/// use pdf_chat_frontend::shared::api_utils::decode_json;
///
/// let resp: AskResponse = decode_json(r#"{"answer":"42"}"#).unwrap();
/// assert_eq!(resp.answer_text(), Some("42"));
/// ```
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a response body whatever its HTTP status.
///
/// A non-2xx status is only logged. An error body without the expected
/// field still decodes (optional fields default to `None`), so the caller
/// sees a missing answer, not a failed request.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        log::warn!("Server responded with HTTP {}", status);
    }
    decode_json(body)
}
