//! Application error type returned by HTTP handlers.
//!
//! Errors are rendered with the OpenAI error envelope so that clients written
//! against the OpenAI SDKs surface the message unchanged:
//!
//! ```json
//! {"error": {"message": "...", "type": "invalid_request_error", "code": "empty_input"}}
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::core::MorseError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Morse(#[from] MorseError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Inner error object of the response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub code: &'static str,
}

/// Response body for failed requests
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Morse(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Morse(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Morse(e) => e.code(),
            Self::BadRequest(_) => "invalid_request",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn body(&self) -> ErrorBody {
        let kind = if self.status().is_client_error() {
            "invalid_request_error"
        } else {
            "server_error"
        };
        ErrorBody {
            error: ErrorDetail {
                message: self.to_string(),
                kind,
                code: self.code(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::rejection::MissingJsonContentType;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::from(MorseError::EmptyInput).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(MorseError::Render("empty".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(MorseError::InvalidSpeed(9.0)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(MorseError::Encoding(hound::Error::Unsupported)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_shape() {
        let body = serde_json::to_value(AppError::from(MorseError::EmptyInput).body()).unwrap();
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert_eq!(body["error"]["code"], "empty_input");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("no characters")
        );

        let body = serde_json::to_value(AppError::Internal("boom".to_string()).body()).unwrap();
        assert_eq!(body["error"]["type"], "server_error");
    }

    #[test]
    fn test_json_rejection_is_bad_request() {
        let rejection = JsonRejection::from(MissingJsonContentType::default());
        let error = AppError::from(rejection);
        assert_eq!(error.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), "invalid_request");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
