use crate::models::CommandError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A completed HTTP exchange whose status was not successful.
///
/// `data` holds the parsed body: JSON when the backend sent JSON, the raw
/// text otherwise, and nothing for an empty body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Option<Value>,
}

impl ApiResponse {
    #[must_use]
    pub const fn new(status: u16, data: Option<Value>) -> Self {
        Self { status, data }
    }

    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        let data = if body.trim().is_empty() {
            None
        } else {
            Some(
                serde_json::from_str(body)
                    .unwrap_or_else(|_| Value::String(body.to_string())),
            )
        };
        Self { status, data }
    }

    /// Message the backend put at `data.message`, when it is a non-empty string.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.data
            .as_ref()?
            .get("message")?
            .as_str()
            .filter(|message| !message.is_empty())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed with status {}", .0.status)]
    Response(ApiResponse),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("response did not contain data")]
    EmptyPayload,
    #[error(transparent)]
    Command(#[from] CommandError),
}

impl ApiError {
    /// The HTTP response behind this error, if the backend answered at all.
    #[must_use]
    pub const fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::Response(response) => Some(response),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorDto {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `SimpleResponseDto` / `ListResponseDto` wrapper around every payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ErrorDto>,
}

impl<T> Envelope<T> {
    /// # Errors
    /// Returns [`ApiError::EmptyPayload`] when the envelope carries no data.
    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::EmptyPayload)
    }
}

impl<T> Envelope<Vec<T>> {
    /// List payloads treat a missing `data` as an empty list.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_requires_non_empty_string() {
        let with = ApiResponse::new(400, Some(json!({ "message": "bad input" })));
        assert_eq!(with.message(), Some("bad input"));

        let empty = ApiResponse::new(400, Some(json!({ "message": "" })));
        assert_eq!(empty.message(), None);

        let numeric = ApiResponse::new(400, Some(json!({ "message": 12 })));
        assert_eq!(numeric.message(), None);

        let array = ApiResponse::new(500, Some(json!(["message"])));
        assert_eq!(array.message(), None);

        assert_eq!(ApiResponse::default().message(), None);
    }

    #[test]
    fn from_body_keeps_non_json_text() {
        let html = ApiResponse::from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(html.data, Some(json!("<html>Bad Gateway</html>")));
        assert_eq!(html.message(), None);

        let blank = ApiResponse::from_body(500, "  ");
        assert_eq!(blank.data, None);

        let structured = ApiResponse::from_body(409, r#"{"code":"409","message":"Car exists"}"#);
        assert_eq!(structured.message(), Some("Car exists"));
    }

    #[test]
    fn only_response_errors_carry_a_response() {
        let response = ApiResponse::new(404, None);
        assert_eq!(
            ApiError::Response(response.clone()).response(),
            Some(&response)
        );
        assert_eq!(ApiError::Network("offline".into()).response(), None);
        assert_eq!(ApiError::EmptyPayload.response(), None);
    }

    #[test]
    fn envelope_data_is_optional() {
        let envelope: Envelope<Vec<ErrorDto>> = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.clone().into_items().is_empty());
        assert_eq!(envelope.into_data(), Err(ApiError::EmptyPayload));
    }
}
