//! Relay error taxonomy and its HTTP rendering.
//!
//! Every failure is terminal for its request and becomes a JSON body with an
//! `error` field. Rejections from Notion keep Notion's status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::notion::NotionError;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Relay not configured — set NOTION_TOKEN and NOTION_DB_ID in the relay environment and restart it";

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("POST only")]
    MethodNotAllowed,

    #[error("Invalid JSON body")]
    InvalidJson,

    #[error("{}", NOT_CONFIGURED_MESSAGE)]
    NotConfigured,

    #[error("Failed to reach Notion API: {0}")]
    UpstreamUnreachable(String),

    #[error("Invalid response from Notion API: {0}")]
    UpstreamInvalid(String),

    #[error("Notion API error (status {status})")]
    UpstreamRejected { status: u16, code: Value, message: Value },
}

impl RelayError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson => StatusCode::BAD_REQUEST,
            Self::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnreachable(_) | Self::UpstreamInvalid(_) => StatusCode::BAD_GATEWAY,
            Self::UpstreamRejected { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
        }
    }

    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::MethodNotAllowed => json!({ "error": "POST only" }),
            Self::InvalidJson => json!({ "error": "Invalid JSON body" }),
            Self::NotConfigured => json!({ "error": NOT_CONFIGURED_MESSAGE }),
            Self::UpstreamUnreachable(message) => json!({ "error": "Failed to reach Notion API", "message": message }),
            Self::UpstreamInvalid(message) => {
                json!({ "error": "Invalid response from Notion API", "message": message })
            }
            Self::UpstreamRejected { code, message, .. } => {
                json!({ "error": "Notion API error", "code": code, "message": message })
            }
        }
    }
}

impl From<NotionError> for RelayError {
    fn from(err: NotionError) -> Self {
        match err {
            NotionError::Unreachable(message) => Self::UpstreamUnreachable(message),
            NotionError::Rejected { status, code, message } => Self::UpstreamRejected { status, code, message },
            NotionError::InvalidResponse(message) => Self::UpstreamInvalid(message),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
