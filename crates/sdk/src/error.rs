//! Error types for the Infomaniak SDK.

use serde_json::Value;

/// Result type for SDK operations.
pub type InfomaniakResult<T> = Result<T, InfomaniakError>;

/// Error types that can occur when calling the Infomaniak API.
#[derive(Debug, thiserror::Error)]
pub enum InfomaniakError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-2xx status.
    ///
    /// The rendered message is surfaced verbatim to MCP clients.
    #[error("Infomaniak API Error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl InfomaniakError {
    /// Create an API error from a status code and response body.
    ///
    /// Uses `error.description` from a JSON body when present, the raw body
    /// text otherwise.
    pub fn from_response(status: u16, body: &str) -> Self {
        let description = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                json.pointer("/error/description")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });

        Self::Api {
            status,
            message: description.unwrap_or_else(|| body.to_string()),
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_extracted_from_json() {
        let err = InfomaniakError::from_response(400, r#"{"error":{"description":"bad thing"}}"#);
        assert_eq!(err.to_string(), "Infomaniak API Error (400): bad thing");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_raw_text_fallback() {
        let err = InfomaniakError::from_response(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Infomaniak API Error (502): Bad Gateway");
    }

    #[test]
    fn test_json_without_description_falls_back_to_body() {
        let body = r#"{"result":"error","error":{"code":"not_authorized"}}"#;
        let err = InfomaniakError::from_response(403, body);
        assert_eq!(err.to_string(), format!("Infomaniak API Error (403): {}", body));
    }

    #[test]
    fn test_empty_body() {
        let err = InfomaniakError::from_response(500, "");
        assert_eq!(err.to_string(), "Infomaniak API Error (500): ");
    }
}
